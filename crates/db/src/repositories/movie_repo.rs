//! Repository for the `movies` table and its tag associations.

use mediashelf_core::catalog::{sort_by_alphabetical_title, EntityKind};
use mediashelf_core::pagination::{paginate, Page};
use mediashelf_core::search::SearchTerm;
use mediashelf_core::types::DbId;
use sqlx::PgPool;

use crate::listing::{Criteria, Listing};
use crate::models::movie::{CreateMovie, Movie, MovieSummary};

/// Column list for plain `movies` rows.
const COLUMNS: &str = "id, title, genre_id, subgenre_id, series_id, series_number, \
                       disc_format, cover_url, created_at, updated_at";

/// Movies with genre, subgenre and series names resolved, ordered by title.
pub const MOVIE_LISTING: Listing = Listing {
    kind: EntityKind::Movie,
    source: "movies m \
             JOIN movie_genres mg ON mg.id = m.genre_id \
             LEFT JOIN movie_subgenres sg ON sg.id = m.subgenre_id \
             LEFT JOIN movie_series ms ON ms.id = m.series_id",
    columns: "m.id, m.title, m.genre_id, mg.name AS genre_name, \
              m.subgenre_id, sg.name AS subgenre_name, \
              m.series_id, ms.name AS series_name, m.series_number, \
              m.disc_format, m.cover_url",
    search_column: "m.title",
    order_by: "m.title, m.id",
    natural_order: "m.id",
};

/// Every movie in id order, the pre-order for in-memory alphabetical sorts so
/// equal sort keys always fall back to id order.
const BY_ID: Listing = Listing {
    order_by: "m.id",
    ..MOVIE_LISTING
};

/// Members of a series, in series order.
const SERIES_MEMBERS: Listing = Listing {
    order_by: "m.series_number NULLS LAST, m.id",
    ..MOVIE_LISTING
};

/// Movies reached through `movie_tags`.
const TAGGED: Listing = Listing {
    source: "movies m \
             JOIN movie_tags mt ON mt.movie_id = m.id \
             JOIN movie_genres mg ON mg.id = m.genre_id \
             LEFT JOIN movie_subgenres sg ON sg.id = m.subgenre_id \
             LEFT JOIN movie_series ms ON ms.id = m.series_id",
    ..BY_ID
};

fn sorted_alphabetically(mut movies: Vec<MovieSummary>) -> Vec<MovieSummary> {
    sort_by_alphabetical_title(&mut movies, |m| m.title.as_str());
    movies
}

/// Provides queries over movies.
pub struct MovieRepo;

impl MovieRepo {
    /// Insert a new movie, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateMovie) -> Result<Movie, sqlx::Error> {
        let query = format!(
            "INSERT INTO movies (title, genre_id, subgenre_id, series_id, series_number, disc_format, cover_url)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(&input.title)
            .bind(input.genre_id)
            .bind(input.subgenre_id)
            .bind(input.series_id)
            .bind(input.series_number)
            .bind(input.disc_format.code())
            .bind(&input.cover_url)
            .fetch_one(pool)
            .await
    }

    /// Attach a tag to a movie. Returns `false` if the pair already existed.
    pub async fn add_tag(pool: &PgPool, movie_id: DbId, tag_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO movie_tags (movie_id, tag_id) VALUES ($1, $2)
             ON CONFLICT ON CONSTRAINT uq_movie_tags_movie_tag DO NOTHING",
        )
        .bind(movie_id)
        .bind(tag_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Find a movie with its related names resolved.
    pub async fn find_summary(pool: &PgPool, id: DbId) -> Result<Option<MovieSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM {} WHERE m.id = $1",
            MOVIE_LISTING.columns, MOVIE_LISTING.source
        );
        sqlx::query_as::<_, MovieSummary>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Every movie ordered by alphabetical title (leading article ignored).
    pub async fn list_alphabetical(pool: &PgPool) -> Result<Vec<MovieSummary>, sqlx::Error> {
        let movies = BY_ID.all(pool, Criteria::All).await?;
        Ok(sorted_alphabetically(movies))
    }

    /// One page of movies ordered by alphabetical title, optionally narrowed
    /// by a title search. Ordering happens in memory, so the whole matching
    /// set is loaded before slicing.
    pub async fn list_page(
        pool: &PgPool,
        search: Option<&SearchTerm>,
        raw_page: Option<&str>,
    ) -> Result<Page<MovieSummary>, sqlx::Error> {
        let movies = BY_ID.all(pool, Criteria::from_search(search)).await?;
        Ok(paginate(
            sorted_alphabetically(movies),
            MOVIE_LISTING.page_size(),
            raw_page,
        ))
    }

    /// Movies of one genre ordered by title.
    pub async fn list_by_genre(pool: &PgPool, genre_id: DbId) -> Result<Vec<MovieSummary>, sqlx::Error> {
        MOVIE_LISTING
            .all(pool, Criteria::Scoped { column: "m.genre_id", id: genre_id })
            .await
    }

    /// One page of a genre's movies ordered by title.
    pub async fn list_page_by_genre(
        pool: &PgPool,
        genre_id: DbId,
        raw_page: Option<&str>,
    ) -> Result<Page<MovieSummary>, sqlx::Error> {
        MOVIE_LISTING
            .page(pool, Criteria::Scoped { column: "m.genre_id", id: genre_id }, raw_page)
            .await
    }

    /// Members of a series ordered by series number; unnumbered entries last.
    pub async fn list_by_series(pool: &PgPool, series_id: DbId) -> Result<Vec<MovieSummary>, sqlx::Error> {
        SERIES_MEMBERS
            .all(pool, Criteria::Scoped { column: "m.series_id", id: series_id })
            .await
    }

    /// Movies carrying a tag, ordered by alphabetical title.
    pub async fn list_by_tag(pool: &PgPool, tag_id: DbId) -> Result<Vec<MovieSummary>, sqlx::Error> {
        let movies = TAGGED
            .all(pool, Criteria::Scoped { column: "mt.tag_id", id: tag_id })
            .await?;
        Ok(sorted_alphabetically(movies))
    }

    /// Total number of movies.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM movies")
            .fetch_one(pool)
            .await
    }

    /// Number of movies in one genre.
    pub async fn count_by_genre(pool: &PgPool, genre_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM movies WHERE genre_id = $1")
            .bind(genre_id)
            .fetch_one(pool)
            .await
    }
}
