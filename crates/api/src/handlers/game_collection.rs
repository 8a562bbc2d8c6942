//! Handlers for the game catalog under `/gamecollection`.
//!
//! List views accept `GET` for the plain listing and `POST` with a
//! `search_text` form field for a search. Both honor `?page=`.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::{Form, Json};
use mediashelf_core::aggregation::CategoryCounts;
use mediashelf_core::detail::series_sharing_genre;
use mediashelf_core::error::CoreError;
use mediashelf_core::pagination::Page;
use mediashelf_core::search::SearchTerm;
use mediashelf_core::types::DbId;
use mediashelf_core::validation::{FieldErrors, MSG_INVALID_CHOICE};
use mediashelf_db::models::game::{
    Developer, GameGenre, GameSeries, GameSeriesGenre, GameSummary, GameSystem,
};
use mediashelf_db::reporting::{GAMES_BY_DEVELOPER, GAMES_BY_GENRE, GAMES_BY_SYSTEM};
use mediashelf_db::repositories::{
    DeveloperRepo, GameGenreRepo, GameRepo, GameSeriesRepo, GameSystemRepo,
};
use serde::Serialize;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::forms::{GameForm, NameForm, SystemForm};
use crate::middleware::auth::AuthUser;
use crate::query::{PageParams, SearchForm};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Page payloads
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct GameDashboard {
    pub game_count: i64,
    pub developer_count: i64,
    pub series_count: i64,
    pub system_count: i64,
    /// Sum of owned copies across all games.
    pub total_copies: i64,
    pub system_data: CategoryCounts,
    pub genre_data: CategoryCounts,
}

#[derive(Debug, Serialize)]
pub struct GenreDetail {
    pub genre: GameGenre,
    pub game_count: i64,
    /// Series whose first game belongs to this genre.
    pub series: Vec<GameSeriesGenre>,
    pub series_count: usize,
}

#[derive(Debug, Serialize)]
pub struct SeriesDetail {
    pub series: GameSeries,
    pub system_data: CategoryCounts,
    pub genre_data: CategoryCounts,
}

#[derive(Debug, Serialize)]
pub struct DeveloperDetail {
    pub developer: Developer,
    pub system_data: CategoryCounts,
    pub genre_data: CategoryCounts,
}

#[derive(Debug, Serialize)]
pub struct SystemDetail {
    pub system: GameSystem,
    pub developer_data: CategoryCounts,
    pub genre_data: CategoryCounts,
}

/// Choice lists for the blank game form.
#[derive(Debug, Serialize)]
pub struct GameFormChoices {
    pub genres: Vec<GameGenre>,
    pub systems: Vec<GameSystem>,
    pub developers: Vec<Developer>,
    pub series: Vec<GameSeries>,
}

fn not_found(entity: &'static str, id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity, id })
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

/// GET /gamecollection
pub async fn index(_auth: AuthUser, State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let pool = &state.pool;
    let dashboard = GameDashboard {
        game_count: GameRepo::count(pool).await?,
        developer_count: DeveloperRepo::count(pool).await?,
        series_count: GameSeriesRepo::count(pool).await?,
        system_count: GameSystemRepo::count(pool).await?,
        total_copies: GameRepo::total_copies(pool).await?,
        system_data: GAMES_BY_SYSTEM.all(pool).await?,
        genre_data: GAMES_BY_GENRE.all(pool).await?,
    };

    Ok(Json(DataResponse { data: dashboard }))
}

// ---------------------------------------------------------------------------
// Lists
// ---------------------------------------------------------------------------

async fn games_page(
    pool: &PgPool,
    search: Option<SearchTerm>,
    params: &PageParams,
) -> AppResult<Json<DataResponse<Page<GameSummary>>>> {
    let page = GameRepo::list_page(pool, search.as_ref(), params.raw()).await?;
    Ok(Json(DataResponse { data: page }))
}

/// GET /gamecollection/games
pub async fn list_games(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<impl IntoResponse> {
    games_page(&state.pool, None, &params).await
}

/// POST /gamecollection/games
pub async fn search_games(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
    Form(form): Form<SearchForm>,
) -> AppResult<impl IntoResponse> {
    games_page(&state.pool, form.term(), &params).await
}

/// GET /gamecollection/genres
///
/// Every genre ordered by name, unpaginated.
pub async fn list_genres(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let genres = GameGenreRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: genres }))
}

/// GET /gamecollection/series
pub async fn list_series(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<impl IntoResponse> {
    let page = GameSeriesRepo::list_page(&state.pool, None, params.raw()).await?;
    Ok(Json(DataResponse { data: page }))
}

/// POST /gamecollection/series
pub async fn search_series(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
    Form(form): Form<SearchForm>,
) -> AppResult<impl IntoResponse> {
    let term = form.term();
    let page = GameSeriesRepo::list_page(&state.pool, term.as_ref(), params.raw()).await?;
    Ok(Json(DataResponse { data: page }))
}

/// GET /gamecollection/developers
pub async fn list_developers(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<impl IntoResponse> {
    let page = DeveloperRepo::list_page(&state.pool, None, params.raw()).await?;
    Ok(Json(DataResponse { data: page }))
}

/// POST /gamecollection/developers
pub async fn search_developers(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
    Form(form): Form<SearchForm>,
) -> AppResult<impl IntoResponse> {
    let term = form.term();
    let page = DeveloperRepo::list_page(&state.pool, term.as_ref(), params.raw()).await?;
    Ok(Json(DataResponse { data: page }))
}

/// GET /gamecollection/systems
pub async fn list_systems(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<impl IntoResponse> {
    let page = GameSystemRepo::list_page(&state.pool, None, params.raw()).await?;
    Ok(Json(DataResponse { data: page }))
}

/// POST /gamecollection/systems
pub async fn search_systems(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
    Form(form): Form<SearchForm>,
) -> AppResult<impl IntoResponse> {
    let term = form.term();
    let page = GameSystemRepo::list_page(&state.pool, term.as_ref(), params.raw()).await?;
    Ok(Json(DataResponse { data: page }))
}

// ---------------------------------------------------------------------------
// Details
// ---------------------------------------------------------------------------

/// GET /gamecollection/games/{id}
pub async fn game_detail(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(game_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let game = GameRepo::find_summary(&state.pool, game_id)
        .await?
        .ok_or_else(|| not_found("Game", game_id))?;
    Ok(Json(DataResponse { data: game }))
}

/// GET /gamecollection/genres/{id}
pub async fn genre_detail(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(genre_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let pool = &state.pool;
    let genre = GameGenreRepo::find_by_id(pool, genre_id)
        .await?
        .ok_or_else(|| not_found("Genre", genre_id))?;

    let all_series = GameSeriesRepo::list_with_representative_genre(pool).await?;
    let series = series_sharing_genre(all_series, genre.id);

    let detail = GenreDetail {
        game_count: GameRepo::count_by_genre(pool, genre.id).await?,
        series_count: series.len(),
        series,
        genre,
    };
    Ok(Json(DataResponse { data: detail }))
}

/// GET /gamecollection/series/{id}
pub async fn series_detail(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(series_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let pool = &state.pool;
    let series = GameSeriesRepo::find_by_id(pool, series_id)
        .await?
        .ok_or_else(|| not_found("Series", series_id))?;

    let detail = SeriesDetail {
        system_data: GAMES_BY_SYSTEM.scoped(pool, "series_id", series.id).await?,
        genre_data: GAMES_BY_GENRE.scoped(pool, "series_id", series.id).await?,
        series,
    };
    Ok(Json(DataResponse { data: detail }))
}

/// GET /gamecollection/developers/{id}
pub async fn developer_detail(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(developer_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let pool = &state.pool;
    let developer = DeveloperRepo::find_by_id(pool, developer_id)
        .await?
        .ok_or_else(|| not_found("Developer", developer_id))?;

    let detail = DeveloperDetail {
        system_data: GAMES_BY_SYSTEM
            .scoped(pool, "developer_id", developer.id)
            .await?,
        genre_data: GAMES_BY_GENRE
            .scoped(pool, "developer_id", developer.id)
            .await?,
        developer,
    };
    Ok(Json(DataResponse { data: detail }))
}

/// GET /gamecollection/systems/{id}
pub async fn system_detail(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(system_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let pool = &state.pool;
    let system = GameSystemRepo::find_by_id(pool, system_id)
        .await?
        .ok_or_else(|| not_found("System", system_id))?;

    let detail = SystemDetail {
        developer_data: GAMES_BY_DEVELOPER
            .scoped(pool, "system_id", system.id)
            .await?,
        genre_data: GAMES_BY_GENRE.scoped(pool, "system_id", system.id).await?,
        system,
    };
    Ok(Json(DataResponse { data: detail }))
}

// ---------------------------------------------------------------------------
// Create-forms
// ---------------------------------------------------------------------------

/// Respond to a saved form: redirect to `list_path` when the `return` flag
/// was posted, otherwise 201 with the created row.
fn saved<T: Serialize>(record: T, wants_return: bool, list_path: &'static str) -> Response {
    if wants_return {
        Redirect::to(list_path).into_response()
    } else {
        (StatusCode::CREATED, Json(DataResponse { data: record })).into_response()
    }
}

/// GET /gamecollection/games/new
///
/// The blank game form: every choice list the form offers.
pub async fn new_game_form(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let pool = &state.pool;
    let choices = GameFormChoices {
        genres: GameGenreRepo::list(pool).await?,
        systems: GameSystemRepo::list(pool).await?,
        developers: DeveloperRepo::list(pool).await?,
        series: GameSeriesRepo::list(pool).await?,
    };
    Ok(Json(DataResponse { data: choices }))
}

/// POST /gamecollection/games/new
pub async fn create_game(
    auth: AuthUser,
    State(state): State<AppState>,
    Form(form): Form<GameForm>,
) -> AppResult<Response> {
    let pool = &state.pool;
    let input = form.parse().map_err(CoreError::InvalidFields)?;

    let mut errors = FieldErrors::new();
    if GameGenreRepo::find_by_id(pool, input.genre_id).await?.is_none() {
        errors.add("genre", MSG_INVALID_CHOICE);
    }
    if GameSystemRepo::find_by_id(pool, input.system_id).await?.is_none() {
        errors.add("system", MSG_INVALID_CHOICE);
    }
    if let Some(id) = input.developer_id {
        if DeveloperRepo::find_by_id(pool, id).await?.is_none() {
            errors.add("developer", MSG_INVALID_CHOICE);
        }
    }
    if let Some(id) = input.series_id {
        if GameSeriesRepo::find_by_id(pool, id).await?.is_none() {
            errors.add("series", MSG_INVALID_CHOICE);
        }
    }
    errors.into_result()?;

    let game = GameRepo::create(pool, &input).await?;
    tracing::info!(game_id = game.id, user_id = auth.user_id, "Game created");

    Ok(saved(game, form.wants_return(), "/gamecollection/games"))
}

/// POST /gamecollection/series/new
pub async fn create_series(
    auth: AuthUser,
    State(state): State<AppState>,
    Form(form): Form<NameForm>,
) -> AppResult<Response> {
    let name = form.parse().map_err(CoreError::InvalidFields)?;
    let series = GameSeriesRepo::create(&state.pool, &name).await?;
    tracing::info!(series_id = series.id, user_id = auth.user_id, "Game series created");

    Ok(saved(series, form.wants_return(), "/gamecollection/series"))
}

/// POST /gamecollection/developers/new
pub async fn create_developer(
    auth: AuthUser,
    State(state): State<AppState>,
    Form(form): Form<NameForm>,
) -> AppResult<Response> {
    let name = form.parse().map_err(CoreError::InvalidFields)?;
    let developer = DeveloperRepo::create(&state.pool, &name).await?;
    tracing::info!(developer_id = developer.id, user_id = auth.user_id, "Developer created");

    Ok(saved(developer, form.wants_return(), "/gamecollection/developers"))
}

/// POST /gamecollection/systems/new
pub async fn create_system(
    auth: AuthUser,
    State(state): State<AppState>,
    Form(form): Form<SystemForm>,
) -> AppResult<Response> {
    let input = form.parse().map_err(CoreError::InvalidFields)?;
    let system = GameSystemRepo::create(&state.pool, &input).await?;
    tracing::info!(system_id = system.id, user_id = auth.user_id, "System created");

    Ok(saved(system, form.wants_return(), "/gamecollection/systems"))
}

/// POST /gamecollection/genres/new
pub async fn create_genre(
    auth: AuthUser,
    State(state): State<AppState>,
    Form(form): Form<NameForm>,
) -> AppResult<Response> {
    let name = form.parse().map_err(CoreError::InvalidFields)?;
    let genre = GameGenreRepo::create(&state.pool, &name).await?;
    tracing::info!(genre_id = genre.id, user_id = auth.user_id, "Game genre created");

    Ok(saved(genre, form.wants_return(), "/gamecollection/genres"))
}
