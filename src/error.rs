//! Error taxonomy
//!
//! Only section creation from an unknown type id surfaces as an error in the
//! editing core. Stale references and unrenderable configs are resolved in
//! place and never reach the caller.

use thiserror::Error;

pub type StudioResult<T> = Result<T, StudioError>;

#[derive(Debug, Error)]
pub enum StudioError {
    #[error("Unknown section type: {0}")]
    UnknownSectionType(String),

    #[error("Invalid layout: {0}")]
    InvalidLayout(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl StudioError {
    /// Domain failures the CLI reports with a distinct exit code.
    pub fn is_domain(&self) -> bool {
        matches!(
            self,
            StudioError::UnknownSectionType(_) | StudioError::InvalidLayout(_)
        )
    }
}
