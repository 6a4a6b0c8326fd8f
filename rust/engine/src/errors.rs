use std::path::PathBuf;

use thiserror::Error;

/// Rejections from session operations. A rejected operation leaves the
/// session exactly as it was.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("Invalid card count: {count}, must be between 1 and {max}")]
    InvalidRange { count: i64, max: usize },
    #[error("Slot {slot} out of range (card count {count})")]
    SlotOutOfRange { slot: usize, count: usize },
    #[error("Position {value} out of range (deck size {deck_size})")]
    PositionOutOfRange { value: usize, deck_size: usize },
    #[error("Expected {expected} positions, got {actual}")]
    CountMismatch { expected: usize, actual: usize },
    #[error("Duplicate positions selected: {positions:?}")]
    DuplicateSelection { positions: Vec<usize> },
}

impl SessionError {
    /// True for the slot/position bounds errors.
    pub fn is_index_out_of_range(&self) -> bool {
        matches!(
            self,
            SessionError::SlotOutOfRange { .. } | SessionError::PositionOutOfRange { .. }
        )
    }
}

/// Per-card artwork failure. Never fatal to a reveal.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArtworkError {
    #[error("Artwork not found: {}", path.display())]
    NotFound { path: PathBuf },
    #[error("Failed to read artwork {}: {message}", path.display())]
    Io { path: PathBuf, message: String },
    #[error("Unsupported or corrupt artwork {}: {reason}", path.display())]
    Decode { path: PathBuf, reason: String },
}
