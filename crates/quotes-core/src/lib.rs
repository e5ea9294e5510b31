//! quotes-core - Core library for the quotes app.
//!
//! This crate provides the `Quote` type, the `QuoteStore` trait, and the
//! in-memory store implementation backing the web server.
//!
//! # Example
//!
//! ```
//! use quotes_core::{InMemoryQuoteStore, Quote, QuoteStore};
//!
//! # tokio_test::block_on(async {
//! let store = InMemoryQuoteStore::with_seed();
//! assert_eq!(store.list_all().await.len(), 12);
//!
//! store.append(Quote::new("Brevity is the soul of wit.", "Shakespeare")).await;
//! let added = store.get(12).await.unwrap();
//! assert_eq!(added.author, "Shakespeare");
//! # });
//! ```

pub mod error;
pub mod seed;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use error::{StoreError, StoreResult};
pub use seed::seed_quotes;
pub use store::{InMemoryQuoteStore, QuoteStore};
pub use types::Quote;
