//! Handlers for the movie catalog under `/moviecollection`.
//!
//! Movies are always presented in alphabetical-title order, so the movie
//! list, covers page and tag pages sort in memory. Genre movie listings page
//! store-side by plain title.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::{Form, Json};
use mediashelf_core::aggregation::CategoryCounts;
use mediashelf_core::detail::series_sharing_genre;
use mediashelf_core::error::CoreError;
use mediashelf_core::pagination::{paginate, MOVIE_PAGE_SIZE};
use mediashelf_core::types::DbId;
use mediashelf_db::models::movie::{
    MovieGenre, MovieSeries, MovieSeriesGenre, MovieSummary, Tag,
};
use mediashelf_db::reporting::{movies_by_disc_format, MOVIES_BY_GENRE, MOVIES_BY_SUBGENRE};
use mediashelf_db::repositories::{MovieGenreRepo, MovieRepo, MovieSeriesRepo, TagRepo};
use serde::Serialize;
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::{PageParams, SearchForm};
use crate::response::DataResponse;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Page payloads
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct MovieDashboard {
    pub movies: Vec<MovieSummary>,
    pub movie_count: i64,
    pub genre_data: CategoryCounts,
    /// Keyed by disc format label; every format is present.
    pub format_data: CategoryCounts,
}

#[derive(Debug, Serialize)]
pub struct MovieDetail {
    #[serde(flatten)]
    pub movie: MovieSummary,
    pub disc_format_label: Option<&'static str>,
    pub tags: Vec<Tag>,
}

#[derive(Debug, Serialize)]
pub struct GenreDetail {
    pub genre: MovieGenre,
    pub movie_count: usize,
    pub movies: Vec<MovieSummary>,
    pub series: Vec<MovieSeriesGenre>,
    pub series_count: usize,
    /// Movie count per subgenre of this genre.
    pub subgenre_data: CategoryCounts,
}

#[derive(Debug, Serialize)]
pub struct SeriesDetail {
    pub series: MovieSeries,
    pub movies: Vec<MovieSummary>,
}

#[derive(Debug, Serialize)]
pub struct TagDetail {
    pub tag: Tag,
    pub movies: Vec<MovieSummary>,
}

async fn find_genre(pool: &PgPool, genre_id: DbId) -> AppResult<MovieGenre> {
    MovieGenreRepo::find_by_id(pool, genre_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Genre",
            id: genre_id,
        }))
}

/// Series whose first movie belongs to `genre_id`, in id order.
async fn series_in_genre(pool: &PgPool, genre_id: DbId) -> AppResult<Vec<MovieSeriesGenre>> {
    let all_series = MovieSeriesRepo::list_with_representative_genre(pool).await?;
    Ok(series_sharing_genre(all_series, genre_id))
}

// ---------------------------------------------------------------------------
// Dashboard
// ---------------------------------------------------------------------------

/// GET /moviecollection
pub async fn index(_auth: AuthUser, State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let pool = &state.pool;
    let dashboard = MovieDashboard {
        movies: MovieRepo::list_alphabetical(pool).await?,
        movie_count: MovieRepo::count(pool).await?,
        genre_data: MOVIES_BY_GENRE.all(pool).await?,
        format_data: movies_by_disc_format(pool).await?,
    };
    Ok(Json(DataResponse { data: dashboard }))
}

/// GET /moviecollection/covers
pub async fn covers(_auth: AuthUser, State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let movies = MovieRepo::list_alphabetical(&state.pool).await?;
    Ok(Json(DataResponse { data: movies }))
}

// ---------------------------------------------------------------------------
// Lists
// ---------------------------------------------------------------------------

/// GET /moviecollection/movies
pub async fn list_movies(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<impl IntoResponse> {
    let page = MovieRepo::list_page(&state.pool, None, params.raw()).await?;
    Ok(Json(DataResponse { data: page }))
}

/// POST /moviecollection/movies
pub async fn search_movies(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
    Form(form): Form<SearchForm>,
) -> AppResult<impl IntoResponse> {
    let term = form.term();
    let page = MovieRepo::list_page(&state.pool, term.as_ref(), params.raw()).await?;
    Ok(Json(DataResponse { data: page }))
}

/// GET /moviecollection/genres
pub async fn list_genres(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let genres = MovieGenreRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: genres }))
}

/// GET /moviecollection/series
pub async fn list_series(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
) -> AppResult<impl IntoResponse> {
    let page = MovieSeriesRepo::list_page(&state.pool, None, params.raw()).await?;
    Ok(Json(DataResponse { data: page }))
}

/// POST /moviecollection/series
pub async fn search_series(
    _auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<PageParams>,
    Form(form): Form<SearchForm>,
) -> AppResult<impl IntoResponse> {
    let term = form.term();
    let page = MovieSeriesRepo::list_page(&state.pool, term.as_ref(), params.raw()).await?;
    Ok(Json(DataResponse { data: page }))
}

/// GET /moviecollection/tags
pub async fn list_tags(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let tags = TagRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: tags }))
}

/// GET /moviecollection/genres/{id}/movies
pub async fn genre_movies(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(genre_id): Path<DbId>,
    Query(params): Query<PageParams>,
) -> AppResult<impl IntoResponse> {
    let genre = find_genre(&state.pool, genre_id).await?;
    let page = MovieRepo::list_page_by_genre(&state.pool, genre.id, params.raw()).await?;
    Ok(Json(DataResponse { data: page }))
}

/// GET /moviecollection/genres/{id}/series
pub async fn genre_series(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(genre_id): Path<DbId>,
    Query(params): Query<PageParams>,
) -> AppResult<impl IntoResponse> {
    let genre = find_genre(&state.pool, genre_id).await?;
    let series = series_in_genre(&state.pool, genre.id).await?;
    Ok(Json(DataResponse {
        data: paginate(series, MOVIE_PAGE_SIZE, params.raw()),
    }))
}

// ---------------------------------------------------------------------------
// Details
// ---------------------------------------------------------------------------

/// GET /moviecollection/movies/{id}
pub async fn movie_detail(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(movie_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let movie = MovieRepo::find_summary(&state.pool, movie_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id: movie_id,
        }))?;
    let tags = TagRepo::list_for_movie(&state.pool, movie.id).await?;

    let detail = MovieDetail {
        disc_format_label: movie.disc_format_label(),
        movie,
        tags,
    };
    Ok(Json(DataResponse { data: detail }))
}

/// GET /moviecollection/genres/{id}
pub async fn genre_detail(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(genre_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let pool = &state.pool;
    let genre = find_genre(pool, genre_id).await?;
    let movies = MovieRepo::list_by_genre(pool, genre.id).await?;
    let series = series_in_genre(pool, genre.id).await?;
    let subgenre_data = MOVIES_BY_SUBGENRE.within(pool, "genre_id", genre.id).await?;

    let detail = GenreDetail {
        genre,
        movie_count: movies.len(),
        movies,
        series_count: series.len(),
        series,
        subgenre_data,
    };
    Ok(Json(DataResponse { data: detail }))
}

/// GET /moviecollection/series/{id}
pub async fn series_detail(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(series_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let series = MovieSeriesRepo::find_by_id(&state.pool, series_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Series",
            id: series_id,
        }))?;
    let movies = MovieRepo::list_by_series(&state.pool, series.id).await?;

    Ok(Json(DataResponse {
        data: SeriesDetail { series, movies },
    }))
}

/// GET /moviecollection/tags/{id}
pub async fn tag_detail(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(tag_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let tag = TagRepo::find_by_id(&state.pool, tag_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Tag",
            id: tag_id,
        }))?;
    let movies = MovieRepo::list_by_tag(&state.pool, tag.id).await?;

    Ok(Json(DataResponse {
        data: TagDetail { tag, movies },
    }))
}
