//! In-memory flashcard store for testing
//!
//! Behaves like [`super::SqliteStore`] but keeps cards in a `BTreeMap`.
//! A fault can be injected so every subsequent operation fails with
//! [`StoreError::StorageFault`], which lets tests drive the error paths of
//! code built on top of the store.

use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard};

use async_trait::async_trait;

use super::{validate_question, Answer, FlashcardStore, Question};
use crate::error::{StoreError, StoreResult};

/// Number of times each operation has been called
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallCounts {
    pub get: usize,
    pub set: usize,
    pub list_keys: usize,
    pub sync: usize,
}

#[derive(Debug, Default)]
struct Inner {
    cards: BTreeMap<Question, Answer>,
    fault: Option<String>,
    calls: CallCounts,
}

/// Shared in-memory store; clones see the same cards
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Inner>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `cards`
    pub fn with_cards<I, Q, A>(cards: I) -> Self
    where
        I: IntoIterator<Item = (Q, A)>,
        Q: Into<Question>,
        A: Into<Answer>,
    {
        let store = Self::new();
        store.lock().cards = cards
            .into_iter()
            .map(|(q, a)| (q.into(), a.into()))
            .collect();
        store
    }

    /// Make every following operation fail with `StorageFault(message)`
    pub fn fail_with(&self, message: impl Into<String>) {
        self.lock().fault = Some(message.into());
    }

    /// Stop injecting faults
    pub fn clear_fault(&self) {
        self.lock().fault = None;
    }

    pub fn call_counts(&self) -> CallCounts {
        self.lock().calls
    }

    /// Copy of the current contents
    pub fn snapshot(&self) -> BTreeMap<Question, Answer> {
        self.lock().cards.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        // A panicking test thread must not poison the store for others
        self.inner.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn check_fault(inner: &Inner) -> StoreResult<()> {
        match inner.fault {
            Some(ref message) => Err(StoreError::StorageFault(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl FlashcardStore for MemoryStore {
    async fn get(&self, question: &str) -> StoreResult<Answer> {
        let mut inner = self.lock();
        inner.calls.get += 1;
        Self::check_fault(&inner)?;

        inner
            .cards
            .get(question)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(question.to_string()))
    }

    async fn set(&self, question: &str, answer: &str) -> StoreResult<()> {
        let mut inner = self.lock();
        inner.calls.set += 1;
        Self::check_fault(&inner)?;
        validate_question(question)?;

        inner.cards.insert(question.to_string(), answer.to_string());
        Ok(())
    }

    async fn list_keys(&self) -> StoreResult<Vec<Question>> {
        let mut inner = self.lock();
        inner.calls.list_keys += 1;
        Self::check_fault(&inner)?;

        Ok(inner.cards.keys().cloned().collect())
    }

    async fn sync(&self) -> StoreResult<()> {
        let mut inner = self.lock();
        inner.calls.sync += 1;
        Self::check_fault(&inner)
    }
}
