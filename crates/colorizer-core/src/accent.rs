//! Accent color resolution
//!
//! Maps the raw string value of the desktop accent color setting to a hex
//! code plus, for named palette entries, the palette name. Invalid input
//! falls back to the default (Adwaita blue) with a warning rather than
//! aborting the update.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// Default accent hex (Adwaita blue), used for empty and invalid input
pub const DEFAULT_HEX: &str = "#3584e4";

/// Pattern for a literal custom hex value: `#` plus exactly six hex digits
static CUSTOM_HEX_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^#[0-9a-fA-F]{6}$").unwrap());

/// One of the nine named accent colors of the desktop palette
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NamedAccent {
    Blue,
    Teal,
    Green,
    Yellow,
    Orange,
    Red,
    Pink,
    Purple,
    Slate,
}

impl NamedAccent {
    /// All palette entries
    pub const ALL: [NamedAccent; 9] = [
        NamedAccent::Blue,
        NamedAccent::Teal,
        NamedAccent::Green,
        NamedAccent::Yellow,
        NamedAccent::Orange,
        NamedAccent::Red,
        NamedAccent::Pink,
        NamedAccent::Purple,
        NamedAccent::Slate,
    ];

    /// The setting-value name of this palette entry
    pub fn as_str(&self) -> &'static str {
        match self {
            NamedAccent::Blue => "blue",
            NamedAccent::Teal => "teal",
            NamedAccent::Green => "green",
            NamedAccent::Yellow => "yellow",
            NamedAccent::Orange => "orange",
            NamedAccent::Red => "red",
            NamedAccent::Pink => "pink",
            NamedAccent::Purple => "purple",
            NamedAccent::Slate => "slate",
        }
    }

    /// The hex code this palette entry maps to
    pub fn hex(&self) -> &'static str {
        match self {
            NamedAccent::Blue => "#3584e4",
            NamedAccent::Teal => "#2190a4",
            NamedAccent::Green => "#3a944a",
            NamedAccent::Yellow => "#c88800",
            NamedAccent::Orange => "#ed5b00",
            NamedAccent::Red => "#e62d42",
            NamedAccent::Pink => "#d56199",
            NamedAccent::Purple => "#9141ac",
            NamedAccent::Slate => "#6f8396",
        }
    }

    /// Look up a palette entry by its setting-value name
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|a| a.as_str() == name)
    }
}

impl fmt::Display for NamedAccent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The outcome of resolving a raw accent setting value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedAccent {
    /// The hex code to render
    pub hex: String,
    /// The palette entry, when the accent is a named color; `None` means
    /// a literal custom hex value was selected
    pub name: Option<NamedAccent>,
    /// True when the input was invalid and replaced by the default
    pub fallback: bool,
}

impl ResolvedAccent {
    /// Resolve a raw setting value.
    ///
    /// Empty input means the default palette entry. A `#rrggbb` value is
    /// used verbatim. Malformed hex values and unknown names fall back to
    /// the default and are reported as a parse warning, never an error.
    pub fn resolve(raw: &str) -> Self {
        if raw.is_empty() {
            return Self::named(NamedAccent::Blue, false);
        }

        if raw.starts_with('#') {
            if CUSTOM_HEX_PATTERN.is_match(raw) {
                return Self {
                    hex: raw.to_string(),
                    name: None,
                    fallback: false,
                };
            }
            tracing::warn!(value = raw, "invalid custom hex color format, using default");
            return Self::named(NamedAccent::Blue, true);
        }

        if let Some(named) = NamedAccent::parse(raw) {
            return Self::named(named, false);
        }

        tracing::warn!(value = raw, "unknown accent color name, using default");
        Self::named(NamedAccent::Blue, true)
    }

    /// Whether the accent is a named palette entry
    pub fn is_named(&self) -> bool {
        self.name.is_some()
    }

    fn named(name: NamedAccent, fallback: bool) -> Self {
        Self {
            hex: name.hex().to_string(),
            name: Some(name),
            fallback,
        }
    }
}
