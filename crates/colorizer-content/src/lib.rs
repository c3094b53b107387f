//! Marker-delimited managed block editing for adw-colorizer
//!
//! Provides the text-level upsert and removal operations for a single
//! managed block bounded by literal start/end marker lines. No file I/O
//! happens here; callers hand in the current file content and write back
//! the result.

pub mod block;
pub mod edit;
pub mod error;

pub use block::{BlockMarkers, ManagedBlock};
pub use edit::{remove, upsert};
pub use error::{Error, Result};
