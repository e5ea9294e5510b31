//! Quote record types.

use serde::{Deserialize, Serialize};

/// A quote record.
///
/// Quotes have no identity beyond their position in the store: the insertion
/// order defines the index used to retrieve them. Duplicates are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// The quote text.
    pub quote: String,
    /// Who said or wrote it.
    pub author: String,
    /// Free-form genre label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
}

impl Quote {
    /// Create a new quote without a genre.
    pub fn new(quote: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            quote: quote.into(),
            author: author.into(),
            genre: None,
        }
    }

    /// Set the genre.
    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_builder() {
        let q = Quote::new("Do or do not, there is no try.", "Yoda").with_genre("motivational");
        assert_eq!(q.quote, "Do or do not, there is no try.");
        assert_eq!(q.author, "Yoda");
        assert_eq!(q.genre.as_deref(), Some("motivational"));
    }

    #[test]
    fn test_genre_skipped_when_absent() {
        let q = Quote::new("text", "author");
        let json = serde_json::to_value(&q).unwrap();
        assert!(json.get("genre").is_none());
    }
}
