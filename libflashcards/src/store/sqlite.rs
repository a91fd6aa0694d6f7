//! SQLite-backed flashcard store

use std::path::Path;
use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::{
    SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions, SqliteSynchronous,
};
use sqlx::Row;

use super::{validate_question, Answer, FlashcardStore, Question};
use crate::error::{StoreError, StoreResult};

const CREATE_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS flashcards (
        question TEXT PRIMARY KEY NOT NULL,
        answer   TEXT NOT NULL DEFAULT ''
    )
"#;

/// Flashcard store on a local SQLite database
///
/// The pool holds exactly one connection, which serializes every
/// operation against the engine.
#[derive(Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
    location: String,
}

impl SqliteStore {
    /// Open (creating if needed) the database at `db_path`
    ///
    /// `~` is expanded and missing parent directories are created.
    pub async fn open(db_path: &str) -> StoreResult<Self> {
        let expanded_path = shellexpand::tilde(db_path).to_string();
        let path = Path::new(&expanded_path);

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Full);

        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(options)
            .await?;

        tracing::debug!("Opened flashcard store at {}", expanded_path);
        Self::with_schema(pool, expanded_path).await
    }

    /// Open a private in-memory database
    pub async fn in_memory() -> StoreResult<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;

        // The database lives only as long as its single connection
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;

        Self::with_schema(pool, ":memory:".to_string()).await
    }

    async fn with_schema(pool: SqlitePool, location: String) -> StoreResult<Self> {
        sqlx::query(CREATE_TABLE).execute(&pool).await?;
        Ok(Self { pool, location })
    }

    /// Where this store lives (a file path or `:memory:`)
    pub fn location(&self) -> &str {
        &self.location
    }
}

#[async_trait]
impl FlashcardStore for SqliteStore {
    async fn get(&self, question: &str) -> StoreResult<Answer> {
        let row = sqlx::query("SELECT answer FROM flashcards WHERE question = ?")
            .bind(question)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| r.get::<String, _>("answer"))
            .ok_or_else(|| StoreError::NotFound(question.to_string()))
    }

    async fn set(&self, question: &str, answer: &str) -> StoreResult<()> {
        validate_question(question)?;

        sqlx::query(
            r#"
            INSERT INTO flashcards (question, answer)
            VALUES (?, ?)
            ON CONFLICT(question) DO UPDATE SET answer = excluded.answer
            "#,
        )
        .bind(question)
        .bind(answer)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_keys(&self) -> StoreResult<Vec<Question>> {
        let rows = sqlx::query("SELECT question FROM flashcards ORDER BY question")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows.iter().map(|r| r.get::<String, _>("question")).collect())
    }

    async fn sync(&self) -> StoreResult<()> {
        // No-op outside WAL mode (e.g. in-memory databases)
        sqlx::query("PRAGMA wal_checkpoint(FULL)")
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn close(&self) {
        self.pool.close().await;
    }
}
