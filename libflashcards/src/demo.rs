//! Starter deck for trying the app on an empty store

use crate::error::StoreResult;
use crate::store::FlashcardStore;

/// Cards inserted by `--demo`
pub const DEMO_DECK: &[(&str, &str)] = &[
    ("what's 1 + 1", "2"),
    ("is red a warm colour?", "yes"),
    ("what is the best snack", "popcorn"),
];

/// Insert [`DEMO_DECK`] if the store has no cards yet
///
/// Returns the number of cards inserted; a non-empty store is left alone.
pub async fn seed_demo_deck(store: &dyn FlashcardStore) -> StoreResult<usize> {
    if !store.list_keys().await?.is_empty() {
        return Ok(0);
    }

    for (question, answer) in DEMO_DECK {
        store.set(question, answer).await?;
    }
    store.sync().await?;

    tracing::info!("Seeded {} demo cards", DEMO_DECK.len());
    Ok(DEMO_DECK.len())
}
