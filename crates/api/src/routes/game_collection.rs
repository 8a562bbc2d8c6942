//! Route definitions for the game catalog.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::game_collection as games;
use crate::state::AppState;

/// Routes mounted at `/gamecollection`.
///
/// ```text
/// GET       /                    -> index (dashboard)
/// GET, POST /games               -> list_games, search_games
/// GET, POST /games/new           -> new_game_form, create_game
/// GET       /games/{id}          -> game_detail
/// GET       /genres              -> list_genres
/// POST      /genres/new          -> create_genre
/// GET       /genres/{id}         -> genre_detail
/// GET, POST /series              -> list_series, search_series
/// POST      /series/new          -> create_series
/// GET       /series/{id}         -> series_detail
/// GET, POST /developers          -> list_developers, search_developers
/// POST      /developers/new      -> create_developer
/// GET       /developers/{id}     -> developer_detail
/// GET, POST /systems             -> list_systems, search_systems
/// POST      /systems/new         -> create_system
/// GET       /systems/{id}        -> system_detail
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(games::index))
        .route("/games", get(games::list_games).post(games::search_games))
        .route(
            "/games/new",
            get(games::new_game_form).post(games::create_game),
        )
        .route("/games/{id}", get(games::game_detail))
        .route("/genres", get(games::list_genres))
        .route("/genres/new", post(games::create_genre))
        .route("/genres/{id}", get(games::genre_detail))
        .route("/series", get(games::list_series).post(games::search_series))
        .route("/series/new", post(games::create_series))
        .route("/series/{id}", get(games::series_detail))
        .route(
            "/developers",
            get(games::list_developers).post(games::search_developers),
        )
        .route("/developers/new", post(games::create_developer))
        .route("/developers/{id}", get(games::developer_detail))
        .route(
            "/systems",
            get(games::list_systems).post(games::search_systems),
        )
        .route("/systems/new", post(games::create_system))
        .route("/systems/{id}", get(games::system_detail))
}
