//! Flashcard storage
//!
//! A flashcard store maps a question (non-empty text) to its answer (text,
//! empty meaning "unanswered"). All mutation goes through [`FlashcardStore`].
//!
//! # Implementations
//!
//! - [`SqliteStore`]: durable store on a local SQLite file
//! - [`MemoryStore`]: in-process store with fault injection, for tests
//!
//! # Example
//!
//! ```no_run
//! use libflashcards::store::{FlashcardStore, SqliteStore};
//!
//! # async fn example() -> libflashcards::StoreResult<()> {
//! let store = SqliteStore::open("~/.local/share/flashcards/cards.db").await?;
//!
//! store.set("2+2", "4").await?;
//! store.sync().await?;
//!
//! for question in store.list_keys().await? {
//!     println!("{} -> {}", question, store.get(&question).await?);
//! }
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;

use crate::error::{StoreError, StoreResult};

pub mod memory;
pub mod sqlite;

pub use memory::{CallCounts, MemoryStore};
pub use sqlite::SqliteStore;

/// Question text; the store key
pub type Question = String;

/// Answer text; empty means the card has not been answered yet
pub type Answer = String;

/// Ordered key-value capability holding flashcards
///
/// Implementations serialize their own access to the underlying engine, so
/// a single instance may be shared between concurrent workers.
#[async_trait]
pub trait FlashcardStore: Send + Sync {
    /// Look up the answer for `question`
    ///
    /// Fails with [`StoreError::NotFound`] if the key is absent.
    async fn get(&self, question: &str) -> StoreResult<Answer>;

    /// Insert or replace the answer for `question`
    ///
    /// The write is committed before this returns.
    async fn set(&self, question: &str, answer: &str) -> StoreResult<()>;

    /// Snapshot of every question currently stored
    ///
    /// No ordering guarantee. Call [`FlashcardStore::sync`] first when the
    /// snapshot must reflect writes made by other workers.
    async fn list_keys(&self) -> StoreResult<Vec<Question>>;

    /// Flush pending writes so subsequent listings observe them
    async fn sync(&self) -> StoreResult<()>;

    /// Release the underlying engine
    async fn close(&self) {}

    /// Like [`FlashcardStore::get`], but a missing key reads as an empty answer
    async fn answer_or_empty(&self, question: &str) -> StoreResult<Answer> {
        match self.get(question).await {
            Ok(answer) => Ok(answer),
            Err(StoreError::NotFound(_)) => Ok(Answer::new()),
            Err(e) => Err(e),
        }
    }
}

/// Reject empty keys before they reach an engine
pub(crate) fn validate_question(question: &str) -> StoreResult<()> {
    if question.is_empty() {
        return Err(StoreError::EmptyQuestion);
    }
    Ok(())
}
