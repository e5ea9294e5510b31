//! Route definitions.

mod home;
mod quotes;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tower_http::services::ServeDir;

use crate::error::ErrorResponse;
use crate::error::NOT_FOUND_MESSAGE;
use crate::state::AppState;

/// Create the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Home
        .route("/", get(home::home).fallback(not_found))
        // Quote operations
        .route(
            "/quotes",
            get(quotes::list_quotes)
                .post(quotes::add_quote)
                .fallback(not_found),
        )
        .route("/quotes/add", get(quotes::add_form).fallback(not_found))
        .route("/quotes/:id", get(quotes::single_quote).fallback(not_found))
        // Static assets
        .nest_service("/static", ServeDir::new("static"))
        // Everything else
        .fallback(not_found)
        // Attach state
        .with_state(state)
}

/// Catch-all for unmatched method/path combinations.
pub async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            message: NOT_FOUND_MESSAGE.to_string(),
        }),
    )
        .into_response()
}

pub use home::*;
pub use quotes::*;
