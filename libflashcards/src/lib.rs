//! Flashcards - question/answer review backed by a local store
//!
//! This library provides the pieces shared by every Flashcards front end:
//! the store capability and its SQLite implementation, random question
//! selection, configuration loading and logging setup.

pub mod config;
pub mod demo;
pub mod error;
pub mod logging;
pub mod selector;
pub mod store;

// Re-export commonly used types
pub use config::Config;
pub use error::{ConfigError, FlashcardError, Result, StoreError, StoreResult};
pub use selector::{QuestionSelector, Selection, NO_QUESTIONS};
pub use store::{Answer, FlashcardStore, MemoryStore, Question, SqliteStore};
