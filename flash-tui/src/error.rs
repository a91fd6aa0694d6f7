//! Error types for flash-tui
//!
//! Wraps library errors and terminal/IO errors so the binary has one
//! error type to report and map to an exit code.

use libflashcards::{FlashcardError, StoreError};
use thiserror::Error;

/// TUI-specific errors
#[derive(Error, Debug)]
pub enum TuiError {
    /// Configuration or storage error
    #[error("{0}")]
    Service(#[from] FlashcardError),

    /// Terminal/IO error
    #[error("Terminal error: {0}")]
    Terminal(#[from] std::io::Error),

    /// Application state error
    #[error("Application error: {0}")]
    Application(String),
}

impl From<StoreError> for TuiError {
    fn from(err: StoreError) -> Self {
        TuiError::Service(FlashcardError::Store(err))
    }
}

impl TuiError {
    /// Process exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            TuiError::Service(e) => e.exit_code(),
            TuiError::Terminal(_) | TuiError::Application(_) => 1,
        }
    }
}

/// Result type for TUI operations
pub type Result<T> = std::result::Result<T, TuiError>;
