//! Accent color synchronization engine for adw-colorizer
//!
//! Keeps a managed block inside the user's GTK3 and GTK4 `gtk.css`
//! fragments in sync with the desktop accent color setting:
//!
//! - **Accent resolution**: named palette entries, literal hex values,
//!   and fallback handling for invalid input
//! - **Render targets**: the GTK3 and GTK4 stylesheet fragments and
//!   their generated declarations
//! - **Session state**: which backup files this tool created, persisted
//!   across invocations so user-owned backups are never touched
//! - **Colorizer engine**: apply, remove, and status operations with
//!   one-shot backups and restore-on-failure
//!
//! ```ignore
//! use colorizer_core::Colorizer;
//!
//! let colorizer = Colorizer::from_user_config()?;
//! let report = colorizer.apply("red")?;
//! ```

pub mod accent;
pub mod engine;
pub mod error;
pub mod io;
pub mod session;
pub mod settings;
pub mod target;

pub use accent::{DEFAULT_HEX, NamedAccent, ResolvedAccent};
pub use engine::{BlockState, Colorizer, SyncReport, TargetStatus, backup_path_for};
pub use error::{Error, Result};
pub use session::Session;
pub use settings::{ACCENT_KEY, ACCENT_SCHEMA, AccentSource, GsettingsSource};
pub use target::{END_MARKER, START_MARKER, Target};
