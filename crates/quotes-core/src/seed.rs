//! Literal seed data loaded into the store at startup.

use crate::types::Quote;

/// The twelve quotes every fresh store starts with, in insertion order.
pub fn seed_quotes() -> Vec<Quote> {
    vec![
        Quote::new("Sometimes you win, sometimes you learn.", "Unknown")
            .with_genre("motivational"),
        Quote::new("Do or do not, there is no try.", "Yoda").with_genre("motivational"),
        Quote::new(
            "A simple 'Hello' could lead to a million things.",
            "Unknown",
        )
        .with_genre("motivational"),
        Quote::new(
            "The expert at anything was once a beginner.",
            "Helen Hayes",
        )
        .with_genre("education"),
        Quote::new(
            "You are never too old to get a new goal or dream a new dream!",
            "CS Lewis",
        )
        .with_genre("motivational"),
        Quote::new(
            "If you want something you never had, you have to do something you've never done!",
            "Unknown",
        )
        .with_genre("motivational"),
        Quote::new(
            "Getting to know a problem is a bit like getting to know a person: it's a gradual \
             process that requires patience, and there is no state of completion. You can never \
             know the full of a problem, because there is never comprehensive information \
             available. You have to simply draw the line somewhere and make up the rest as you \
             go along.",
            "Frank Chimero",
        )
        .with_genre("design"),
        Quote::new(
            "Others have seen what is and asked why. I have seen what could be and asked why not?",
            "Pablo Picasso",
        )
        .with_genre("design"),
        Quote::new(
            "Who are we, who is each one of us, if not a combinatoria of experiences, \
             information, books we have read, things imagined?",
            "Italo Calvino",
        )
        .with_genre("literary"),
        Quote::new(
            "Who are only undefeated / Because we have gone on trying",
            "T.S. Eliot",
        )
        .with_genre("poetry"),
        Quote::new(
            "In search of the difficulty rather than in its clutch. The disquiet of him who \
             lacks an adversary.",
            "Samuel Beckett",
        )
        .with_genre("literary"),
        Quote::new(
            "When the going gets weird, the weird turn pro.",
            "Hunter S. Thompson",
        )
        .with_genre("gonzo"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_has_twelve_quotes() {
        assert_eq!(seed_quotes().len(), 12);
    }

    #[test]
    fn test_seed_order_is_stable() {
        let seeds = seed_quotes();
        assert_eq!(seeds[0].author, "Unknown");
        assert_eq!(seeds[1].author, "Yoda");
        assert_eq!(seeds[11].author, "Hunter S. Thompson");
        assert_eq!(seeds[11].genre.as_deref(), Some("gonzo"));
    }

    #[test]
    fn test_seed_fields_are_present() {
        for q in seed_quotes() {
            assert!(!q.quote.is_empty());
            assert!(!q.author.is_empty());
            assert!(q.genre.is_some());
        }
    }
}
