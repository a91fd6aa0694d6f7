//! Error types for Flashcards

use thiserror::Error;

pub type Result<T> = std::result::Result<T, FlashcardError>;

/// Result type for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

#[derive(Error, Debug)]
pub enum FlashcardError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Storage error: {0}")]
    Store(#[from] StoreError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl FlashcardError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            FlashcardError::InvalidInput(_) => 3,
            FlashcardError::Config(_) => 1,
            FlashcardError::Store(_) => 1,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),
}

/// Failures reported by a [`crate::FlashcardStore`]
///
/// Cloneable so it can travel inside UI actions after a background
/// command fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The question is not a key in the store
    #[error("Question not found: {0}")]
    NotFound(String),

    /// Questions are the store keys and must not be empty
    #[error("Question cannot be empty")]
    EmptyQuestion,

    /// I/O or corruption in the underlying engine
    #[error("Storage fault: {0}")]
    StorageFault(String),
}

impl StoreError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        StoreError::StorageFault(err.to_string())
    }
}

impl From<std::io::Error> for StoreError {
    fn from(err: std::io::Error) -> Self {
        StoreError::StorageFault(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_invalid_input() {
        let error = FlashcardError::InvalidInput("Empty question".to_string());
        assert_eq!(error.exit_code(), 3);
    }

    #[test]
    fn test_exit_code_store_and_config_errors() {
        let store = FlashcardError::Store(StoreError::StorageFault("disk full".to_string()));
        assert_eq!(store.exit_code(), 1);

        let config = FlashcardError::Config(ConfigError::MissingField("storage.path".to_string()));
        assert_eq!(config.exit_code(), 1);
    }

    #[test]
    fn test_error_message_formatting_store() {
        let error = FlashcardError::Store(StoreError::NotFound("2+2".to_string()));
        assert_eq!(format!("{}", error), "Storage error: Question not found: 2+2");
    }

    #[test]
    fn test_error_message_formatting_config() {
        let error = FlashcardError::Config(ConfigError::MissingField("config directory".to_string()));
        assert_eq!(
            format!("{}", error),
            "Configuration error: Missing required field: config directory"
        );
    }

    #[test]
    fn test_io_error_becomes_storage_fault() {
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let store_error: StoreError = io_error.into();

        match store_error {
            StoreError::StorageFault(message) => assert!(message.contains("read-only")),
            other => panic!("Expected StorageFault, got {:?}", other),
        }
    }

    #[test]
    fn test_not_found_detection() {
        assert!(StoreError::NotFound("q".to_string()).is_not_found());
        assert!(!StoreError::EmptyQuestion.is_not_found());
        assert!(!StoreError::StorageFault("x".to_string()).is_not_found());
    }

    #[test]
    fn test_store_error_clone_preserves_message() {
        let original = StoreError::StorageFault("database is locked".to_string());
        let cloned = original.clone();

        assert_eq!(original, cloned);
        assert_eq!(format!("{}", original), format!("{}", cloned));
    }
}
