//! Catalog search and detail handlers

use super::ErrorResponse;
use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use bookscout_core::{
    BookDetailRecord, SearchMode, SearchOutcome, SearchQuery, INVALID_QUERY_MESSAGE,
};
use serde::Deserialize;

/// Query parameters for a search
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Search text
    #[serde(default)]
    pub q: String,

    /// Field to match (title or author)
    #[serde(default)]
    pub mode: SearchMode,
}

/// Search the catalog
///
/// Always answers with a `SearchOutcome`; the status code tells blank input (400) and
/// upstream failures (502) apart from results and empty searches (200).
pub async fn search_books(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> (StatusCode, Json<SearchOutcome>) {
    let query = match SearchQuery::new(&params.q, params.mode) {
        Ok(query) => query,
        Err(_) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(SearchOutcome::error(INVALID_QUERY_MESSAGE)),
            )
        }
    };

    let outcome = state.catalog.execute(&query).await;
    let status = if outcome.is_error() {
        StatusCode::BAD_GATEWAY
    } else {
        StatusCode::OK
    };

    (status, Json(outcome))
}

/// Get a single book's details by ISBN
pub async fn get_book_details(
    State(state): State<AppState>,
    Path(isbn): Path<String>,
) -> Result<Json<BookDetailRecord>, (StatusCode, Json<ErrorResponse>)> {
    match state.catalog.resolve(&isbn).await {
        Ok(Some(record)) => Ok(Json(record)),
        Ok(None) => Err((
            StatusCode::NOT_FOUND,
            ErrorResponse::new(format!("No details found for ISBN {}", isbn.trim())),
        )),
        Err(e) if e.is_validation() => {
            Err((StatusCode::BAD_REQUEST, ErrorResponse::new(e.to_string())))
        }
        Err(e) => {
            tracing::error!("Error fetching book details for {:?}: {}", isbn, e);
            Err((
                StatusCode::BAD_GATEWAY,
                ErrorResponse::new("Failed to fetch book details."),
            ))
        }
    }
}
