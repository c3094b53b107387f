//! Error types for colorizer-content

/// Result type for colorizer-content operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in managed block operations
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Start marker found without a matching end marker.
    ///
    /// This indicates a truncated or hand-edited file. The block is treated
    /// as corruption rather than silently appending a second copy.
    #[error("start marker {start:?} at byte {position} has no matching end marker {end:?}")]
    UnterminatedBlock {
        start: String,
        end: String,
        position: usize,
    },
}
