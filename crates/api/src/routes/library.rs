//! Route definitions for the library JSON API.

use axum::routing::get;
use axum::Router;

use crate::handlers::library;
use crate::state::AppState;

/// Routes merged into `/api/v1`.
///
/// ```text
/// GET, POST /authors         -> list_authors, create_author
/// GET       /authors/{id}    -> get_author
/// GET, POST /series          -> list_series, create_series
/// GET       /series/{id}     -> get_series
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/authors",
            get(library::list_authors).post(library::create_author),
        )
        .route("/authors/{id}", get(library::get_author))
        .route(
            "/series",
            get(library::list_series).post(library::create_series),
        )
        .route("/series/{id}", get(library::get_series))
}
