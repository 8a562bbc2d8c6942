//! Repository for the `movie_series` table.

use mediashelf_core::catalog::EntityKind;
use mediashelf_core::pagination::Page;
use mediashelf_core::search::SearchTerm;
use mediashelf_core::types::DbId;
use sqlx::PgPool;

use crate::listing::{Criteria, Listing};
use crate::models::movie::{MovieSeries, MovieSeriesGenre};

const COLUMNS: &str = "id, name, created_at, updated_at";

pub const MOVIE_SERIES_LISTING: Listing = Listing {
    kind: EntityKind::MovieSeries,
    source: "movie_series",
    columns: COLUMNS,
    search_column: "name",
    order_by: "name, id",
    natural_order: "id",
};

/// Provides queries over movie series.
pub struct MovieSeriesRepo;

impl MovieSeriesRepo {
    /// Insert a new series, returning the created row.
    pub async fn create(pool: &PgPool, name: &str) -> Result<MovieSeries, sqlx::Error> {
        let query = format!("INSERT INTO movie_series (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, MovieSeries>(&query)
            .bind(name)
            .fetch_one(pool)
            .await
    }

    /// Find a series by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<MovieSeries>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movie_series WHERE id = $1");
        sqlx::query_as::<_, MovieSeries>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// One page of series: name search, or all series by name.
    pub async fn list_page(
        pool: &PgPool,
        search: Option<&SearchTerm>,
        raw_page: Option<&str>,
    ) -> Result<Page<MovieSeries>, sqlx::Error> {
        MOVIE_SERIES_LISTING
            .page(pool, Criteria::from_search(search), raw_page)
            .await
    }

    /// Every series with the genre of its first movie (lowest id), in id order.
    pub async fn list_with_representative_genre(
        pool: &PgPool,
    ) -> Result<Vec<MovieSeriesGenre>, sqlx::Error> {
        sqlx::query_as::<_, MovieSeriesGenre>(
            "SELECT s.id, s.name, \
                    (SELECT m.genre_id FROM movies m \
                     WHERE m.series_id = s.id \
                     ORDER BY m.id LIMIT 1) AS genre_id \
             FROM movie_series s \
             ORDER BY s.id",
        )
        .fetch_all(pool)
        .await
    }
}
