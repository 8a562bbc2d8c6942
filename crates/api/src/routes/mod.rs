pub mod auth;
pub mod game_collection;
pub mod health;
pub mod library;
pub mod movie_collection;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /auth/login                  login (public)
///
/// /authors                     list, create
/// /authors/{id}                get
/// /series                      list, create
/// /series/{id}                 get
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .merge(library::router())
}

/// Build the catalog page trees, mounted at the root.
///
/// ```text
/// /gamecollection/...          game catalog pages
/// /moviecollection/...         movie catalog pages
/// ```
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .nest("/gamecollection", game_collection::router())
        .nest("/moviecollection", movie_collection::router())
}
