//! Render targets for the generated stylesheet fragments
//!
//! Two user-owned files are managed, one per GTK toolkit version. Both use
//! the same marker pair; only the generated declarations differ. The GTK3
//! fragment always receives a literal hex declaration, while the GTK4
//! fragment references the named palette variable and therefore cannot
//! express a literal custom hex at all.

use std::path::{Path, PathBuf};

use colorizer_content::BlockMarkers;

use crate::accent::ResolvedAccent;

/// Start marker line owned by this tool
pub const START_MARKER: &str = "/* adw-gtk3 Colorizer Extension Start */";

/// End marker line owned by this tool
pub const END_MARKER: &str = "/* adw-gtk3 Colorizer Extension End */";

/// A managed stylesheet fragment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// `gtk-3.0/gtk.css`, consumed by adw-gtk3
    Gtk3,
    /// `gtk-4.0/gtk.css`, consumed by libadwaita applications
    Gtk4,
}

impl Target {
    /// All managed targets, in sync order
    pub const ALL: [Target; 2] = [Target::Gtk3, Target::Gtk4];

    /// Short name for logging and reports
    pub fn name(&self) -> &'static str {
        match self {
            Target::Gtk3 => "gtk3",
            Target::Gtk4 => "gtk4",
        }
    }

    /// Path of the managed file under the user configuration directory
    pub fn css_path(&self, config_dir: &Path) -> PathBuf {
        let subdir = match self {
            Target::Gtk3 => "gtk-3.0",
            Target::Gtk4 => "gtk-4.0",
        };
        config_dir.join(subdir).join("gtk.css")
    }

    /// The marker pair delimiting the managed block (shared by both targets)
    pub fn markers(&self) -> BlockMarkers {
        BlockMarkers::new(START_MARKER, END_MARKER)
    }

    /// Render the block body for this target.
    ///
    /// Returns `None` when the target cannot express the accent: the GTK4
    /// fragment only supports the named palette, so a literal custom hex
    /// means its managed block must be removed instead.
    pub fn render(&self, accent: &ResolvedAccent) -> Option<String> {
        match self {
            Target::Gtk3 => Some(format!(
                "@define-color accent_bg_color {};\n@define-color accent_color @accent_bg_color;",
                accent.hex
            )),
            Target::Gtk4 => accent.name.map(|name| {
                format!(":root {{\n  --accent-bg-color: var(--accent-{name});\n}}")
            }),
        }
    }
}
