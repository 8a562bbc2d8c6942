//! Handlers for the library JSON API (`/api/v1/authors`, `/api/v1/series`).
//!
//! List and create share a path; retrieve is by id. Names are trimmed, then
//! bodies are validated with the `validator` derives on the create DTOs.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use mediashelf_core::error::CoreError;
use mediashelf_core::types::DbId;
use mediashelf_core::validation::{validate_payload, FieldErrors, MSG_INVALID_CHOICE};
use mediashelf_db::models::library::{CreateAuthor, CreateLibrarySeries};
use mediashelf_db::repositories::{AuthorRepo, LibrarySeriesRepo};

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Authors
// ---------------------------------------------------------------------------

/// GET /api/v1/authors
pub async fn list_authors(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let authors = AuthorRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: authors }))
}

/// POST /api/v1/authors
pub async fn create_author(
    auth: AuthUser,
    State(state): State<AppState>,
    AppJson(mut input): AppJson<CreateAuthor>,
) -> AppResult<impl IntoResponse> {
    input.name = input.name.trim().to_string();
    validate_payload(&input)?;

    let author = AuthorRepo::create(&state.pool, &input).await?;
    tracing::info!(author_id = author.id, user_id = auth.user_id, "Author created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: author })))
}

/// GET /api/v1/authors/{id}
pub async fn get_author(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let author = AuthorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Author",
            id,
        }))?;
    Ok(Json(DataResponse { data: author }))
}

// ---------------------------------------------------------------------------
// Series
// ---------------------------------------------------------------------------

/// GET /api/v1/series
pub async fn list_series(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let series = LibrarySeriesRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: series }))
}

/// POST /api/v1/series
///
/// `author_id` is optional; when given it must reference an existing author.
pub async fn create_series(
    auth: AuthUser,
    State(state): State<AppState>,
    AppJson(mut input): AppJson<CreateLibrarySeries>,
) -> AppResult<impl IntoResponse> {
    input.name = input.name.trim().to_string();
    validate_payload(&input)?;

    let mut errors = FieldErrors::new();
    if let Some(author_id) = input.author_id {
        if AuthorRepo::find_by_id(&state.pool, author_id).await?.is_none() {
            errors.add("author_id", MSG_INVALID_CHOICE);
        }
    }
    errors.into_result()?;

    let series = LibrarySeriesRepo::create(&state.pool, &input).await?;
    tracing::info!(series_id = series.id, user_id = auth.user_id, "Library series created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: series })))
}

/// GET /api/v1/series/{id}
pub async fn get_series(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let series = LibrarySeriesRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Series",
            id,
        }))?;
    Ok(Json(DataResponse { data: series }))
}
