//! Repository for the `game_series` table.

use mediashelf_core::catalog::EntityKind;
use mediashelf_core::pagination::Page;
use mediashelf_core::search::SearchTerm;
use mediashelf_core::types::DbId;
use sqlx::PgPool;

use crate::listing::{Criteria, Listing};
use crate::models::game::{GameSeries, GameSeriesGenre};

const COLUMNS: &str = "id, name, created_at, updated_at";

pub const GAME_SERIES_LISTING: Listing = Listing {
    kind: EntityKind::GameSeries,
    source: "game_series",
    columns: COLUMNS,
    search_column: "name",
    order_by: "name, id",
    natural_order: "id",
};

/// Provides queries over game series.
pub struct GameSeriesRepo;

impl GameSeriesRepo {
    /// Insert a new series, returning the created row.
    pub async fn create(pool: &PgPool, name: &str) -> Result<GameSeries, sqlx::Error> {
        let query = format!("INSERT INTO game_series (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, GameSeries>(&query)
            .bind(name)
            .fetch_one(pool)
            .await
    }

    /// Find a series by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<GameSeries>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM game_series WHERE id = $1");
        sqlx::query_as::<_, GameSeries>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all series ordered by name (form choices).
    pub async fn list(pool: &PgPool) -> Result<Vec<GameSeries>, sqlx::Error> {
        GAME_SERIES_LISTING.all(pool, Criteria::All).await
    }

    /// One page of series: name search, or all series by name.
    pub async fn list_page(
        pool: &PgPool,
        search: Option<&SearchTerm>,
        raw_page: Option<&str>,
    ) -> Result<Page<GameSeries>, sqlx::Error> {
        GAME_SERIES_LISTING
            .page(pool, Criteria::from_search(search), raw_page)
            .await
    }

    /// Every series with the genre of its first game (lowest id), in id order.
    /// Series without games carry no genre.
    pub async fn list_with_representative_genre(
        pool: &PgPool,
    ) -> Result<Vec<GameSeriesGenre>, sqlx::Error> {
        sqlx::query_as::<_, GameSeriesGenre>(
            "SELECT s.id, s.name, \
                    (SELECT g.genre_id FROM games g \
                     WHERE g.series_id = s.id \
                     ORDER BY g.id LIMIT 1) AS genre_id \
             FROM game_series s \
             ORDER BY s.id",
        )
        .fetch_all(pool)
        .await
    }

    /// Total number of series.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM game_series")
            .fetch_one(pool)
            .await
    }
}
