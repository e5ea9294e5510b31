//! Quote listing, creation, and lookup endpoints.

use askama_axum::Template;
use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Deserialize;
use tracing::debug;

use crate::error::{ApiError, ApiResult};
use crate::extract::JsonOrForm;
use crate::state::AppState;
use quotes_core::{Quote, StoreError};

#[derive(Template)]
#[template(path = "quotes/index.html")]
pub struct QuotesIndexTemplate {
    pub quotes: Vec<Quote>,
}

#[derive(Template)]
#[template(path = "quotes/add.html")]
pub struct AddQuoteTemplate;

#[derive(Template)]
#[template(path = "quotes/single.html")]
pub struct SingleQuoteTemplate {
    pub quote: Quote,
}

/// Request body for adding a quote.
///
/// Absent fields default to empty rather than being rejected; the store takes
/// whatever it is given.
#[derive(Debug, Deserialize)]
pub struct NewQuote {
    #[serde(default)]
    pub quote: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub genre: Option<String>,
}

impl From<NewQuote> for Quote {
    fn from(body: NewQuote) -> Self {
        Self {
            quote: body.quote,
            author: body.author,
            genre: body.genre,
        }
    }
}

/// List all quotes in insertion order.
/// GET /quotes
pub async fn list_quotes(State(state): State<AppState>) -> QuotesIndexTemplate {
    QuotesIndexTemplate {
        quotes: state.store.list_all().await,
    }
}

/// Append a quote and bounce back to the listing.
/// POST /quotes
pub async fn add_quote(
    State(state): State<AppState>,
    JsonOrForm(body): JsonOrForm<NewQuote>,
) -> Response {
    debug!(author = %body.author, "adding quote");
    state.store.append(body.into()).await;

    // The original contract is a 302 Found; axum's Redirect helpers only
    // emit 303/307/308, so build the response by hand.
    (StatusCode::FOUND, [(header::LOCATION, "/quotes")]).into_response()
}

/// Render the add-quote form.
/// GET /quotes/add
pub async fn add_form() -> AddQuoteTemplate {
    AddQuoteTemplate
}

/// Look up a single quote by its position.
/// GET /quotes/:id
///
/// Both a non-numeric id and an out-of-range index answer 404.
pub async fn single_quote(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<SingleQuoteTemplate> {
    let index: usize = id.parse().map_err(|_| {
        ApiError::from(StoreError::InvalidIndex { raw: id })
    })?;

    let quote = state.store.get(index).await?;
    Ok(SingleQuoteTemplate { quote })
}
