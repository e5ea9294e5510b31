//! Home page.

use askama_axum::Template;

/// Decorative author list shown on the landing page; not derived from the
/// store on purpose.
const QUOTE_AUTHORS: &[&str] = &[
    "Unknown",
    "Yoda",
    "CS Lewis",
    "Frank Chimero",
    "Pablo Picasso",
    "Italo Calvino",
    "T. S. Eliot",
    "Samuel Beckett",
    "Hunter S. Thompson",
    "another author",
    "etc etc",
];

#[derive(Template)]
#[template(path = "index.html")]
pub struct HomeTemplate {
    pub message: &'static str,
    pub sub_title: &'static str,
    pub quote_authors: &'static [&'static str],
}

/// Render the home page.
/// GET /
pub async fn home() -> HomeTemplate {
    HomeTemplate {
        message: "Hello world!",
        sub_title: "Read some of the coolest quotes around.",
        quote_authors: QUOTE_AUTHORS,
    }
}
