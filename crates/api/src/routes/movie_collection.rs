//! Route definitions for the movie catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::movie_collection as movies;
use crate::state::AppState;

/// Routes mounted at `/moviecollection`.
///
/// ```text
/// GET       /                      -> index (dashboard)
/// GET       /covers                -> covers
/// GET, POST /movies                -> list_movies, search_movies
/// GET       /movies/{id}           -> movie_detail
/// GET       /genres                -> list_genres
/// GET       /genres/{id}           -> genre_detail
/// GET       /genres/{id}/movies    -> genre_movies
/// GET       /genres/{id}/series    -> genre_series
/// GET, POST /series                -> list_series, search_series
/// GET       /series/{id}           -> series_detail
/// GET       /tags                  -> list_tags
/// GET       /tags/{id}             -> tag_detail
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(movies::index))
        .route("/covers", get(movies::covers))
        .route(
            "/movies",
            get(movies::list_movies).post(movies::search_movies),
        )
        .route("/movies/{id}", get(movies::movie_detail))
        .route("/genres", get(movies::list_genres))
        .route("/genres/{id}", get(movies::genre_detail))
        .route("/genres/{id}/movies", get(movies::genre_movies))
        .route("/genres/{id}/series", get(movies::genre_series))
        .route(
            "/series",
            get(movies::list_series).post(movies::search_series),
        )
        .route("/series/{id}", get(movies::series_detail))
        .route("/tags", get(movies::list_tags))
        .route("/tags/{id}", get(movies::tag_detail))
}
