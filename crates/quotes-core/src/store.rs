//! Quote store trait and in-memory implementation.

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::seed::seed_quotes;
use crate::types::Quote;

/// The store seam for quote persistence.
///
/// The web handlers only talk to this trait, so a persistent backend can be
/// swapped in later without touching the route contract.
#[async_trait]
pub trait QuoteStore: Send + Sync {
    /// Return the full collection in insertion order.
    async fn list_all(&self) -> Vec<Quote>;

    /// Add a quote at the end of the sequence.
    ///
    /// The store does not validate fields; empty strings are stored as-is.
    async fn append(&self, quote: Quote);

    /// Return the quote at `index` in insertion order.
    async fn get(&self, index: usize) -> StoreResult<Quote>;
}

/// Process-lifetime in-memory store.
///
/// State lives behind a `RwLock`, so appends are whole-record atomic but
/// there is no cross-request isolation: an index observed from one render may
/// point at a different record after a racing append.
pub struct InMemoryQuoteStore {
    quotes: RwLock<Vec<Quote>>,
}

impl InMemoryQuoteStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            quotes: RwLock::new(Vec::new()),
        }
    }

    /// Create a store pre-populated with the literal seed records.
    pub fn with_seed() -> Self {
        Self {
            quotes: RwLock::new(seed_quotes()),
        }
    }

    /// Current number of quotes.
    pub async fn len(&self) -> usize {
        self.quotes.read().await.len()
    }

    /// Whether the store holds no quotes.
    pub async fn is_empty(&self) -> bool {
        self.quotes.read().await.is_empty()
    }
}

impl Default for InMemoryQuoteStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuoteStore for InMemoryQuoteStore {
    async fn list_all(&self) -> Vec<Quote> {
        self.quotes.read().await.clone()
    }

    async fn append(&self, quote: Quote) {
        let mut quotes = self.quotes.write().await;
        quotes.push(quote);
        debug!(total = quotes.len(), "quote appended");
    }

    async fn get(&self, index: usize) -> StoreResult<Quote> {
        self.quotes
            .read()
            .await
            .get(index)
            .cloned()
            .ok_or(StoreError::NotFound { index })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seeded_store_returns_seed_records_in_order() {
        let store = InMemoryQuoteStore::with_seed();
        let all = store.list_all().await;
        assert_eq!(all, seed_quotes());
    }

    #[tokio::test]
    async fn test_append_grows_by_one_and_preserves_prefix() {
        let store = InMemoryQuoteStore::with_seed();
        let before = store.list_all().await;

        let q = Quote::new("X", "Y").with_genre("Z");
        store.append(q.clone()).await;

        let after = store.list_all().await;
        assert_eq!(after.len(), before.len() + 1);
        assert_eq!(&after[..before.len()], &before[..]);
        assert_eq!(after.last(), Some(&q));
    }

    #[tokio::test]
    async fn test_get_returns_ith_appended_quote() {
        let store = InMemoryQuoteStore::new();
        for i in 0..5 {
            store.append(Quote::new(format!("quote {i}"), "author")).await;
        }
        for i in 0..5 {
            let q = store.get(i).await.unwrap();
            assert_eq!(q.quote, format!("quote {i}"));
        }
    }

    #[tokio::test]
    async fn test_get_out_of_range_is_not_found() {
        let store = InMemoryQuoteStore::with_seed();
        assert_eq!(
            store.get(999).await,
            Err(StoreError::NotFound { index: 999 })
        );
        assert_eq!(store.get(12).await, Err(StoreError::NotFound { index: 12 }));
    }

    #[tokio::test]
    async fn test_list_all_is_idempotent() {
        let store = InMemoryQuoteStore::with_seed();
        assert_eq!(store.list_all().await, store.list_all().await);
    }

    #[tokio::test]
    async fn test_duplicates_are_allowed() {
        let store = InMemoryQuoteStore::new();
        let q = Quote::new("same", "same");
        store.append(q.clone()).await;
        store.append(q.clone()).await;
        assert_eq!(store.len().await, 2);
        assert_eq!(store.get(0).await.unwrap(), store.get(1).await.unwrap());
    }

    #[tokio::test]
    async fn test_empty_fields_are_stored_as_is() {
        let store = InMemoryQuoteStore::new();
        store.append(Quote::new("", "")).await;
        let q = store.get(0).await.unwrap();
        assert_eq!(q.quote, "");
        assert_eq!(q.author, "");
        assert_eq!(q.genre, None);
    }
}
