//! Repository for the `games` table.

use mediashelf_core::catalog::EntityKind;
use mediashelf_core::pagination::Page;
use mediashelf_core::search::SearchTerm;
use mediashelf_core::types::DbId;
use sqlx::PgPool;

use crate::listing::{Criteria, Listing};
use crate::models::game::{CreateGame, Game, GameSummary};

/// Column list for plain `games` rows.
const COLUMNS: &str = "id, title, genre_id, system_id, developer_id, series_id, \
                       copies, release_year, created_at, updated_at";

/// Games with every referenced name resolved.
pub const GAME_LISTING: Listing = Listing {
    kind: EntityKind::Game,
    source: "games g \
             JOIN game_genres gg ON gg.id = g.genre_id \
             JOIN game_systems gs ON gs.id = g.system_id \
             LEFT JOIN developers d ON d.id = g.developer_id \
             LEFT JOIN game_series s ON s.id = g.series_id",
    columns: "g.id, g.title, g.copies, g.release_year, \
              g.genre_id, gg.name AS genre_name, \
              g.system_id, gs.name AS system_name, \
              g.developer_id, d.name AS developer_name, \
              g.series_id, s.name AS series_name",
    search_column: "g.title",
    order_by: "g.title, g.id",
    natural_order: "g.id",
};

/// Provides queries over games.
pub struct GameRepo;

impl GameRepo {
    /// Insert a new game, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateGame) -> Result<Game, sqlx::Error> {
        let query = format!(
            "INSERT INTO games (title, genre_id, system_id, developer_id, series_id, copies, release_year)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Game>(&query)
            .bind(&input.title)
            .bind(input.genre_id)
            .bind(input.system_id)
            .bind(input.developer_id)
            .bind(input.series_id)
            .bind(input.copies)
            .bind(input.release_year)
            .fetch_one(pool)
            .await
    }

    /// Find a game with its related names resolved.
    pub async fn find_summary(pool: &PgPool, id: DbId) -> Result<Option<GameSummary>, sqlx::Error> {
        let query = format!(
            "SELECT {} FROM {} WHERE g.id = $1",
            GAME_LISTING.columns, GAME_LISTING.source
        );
        sqlx::query_as::<_, GameSummary>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// One page of games: title search in natural order, or all games by title.
    pub async fn list_page(
        pool: &PgPool,
        search: Option<&SearchTerm>,
        raw_page: Option<&str>,
    ) -> Result<Page<GameSummary>, sqlx::Error> {
        GAME_LISTING
            .page(pool, Criteria::from_search(search), raw_page)
            .await
    }

    /// Total number of games.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM games")
            .fetch_one(pool)
            .await
    }

    /// Number of games in one genre.
    pub async fn count_by_genre(pool: &PgPool, genre_id: DbId) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM games WHERE genre_id = $1")
            .bind(genre_id)
            .fetch_one(pool)
            .await
    }

    /// Sum of owned copies across all games (0 when there are none).
    pub async fn total_copies(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COALESCE(SUM(copies), 0)::BIGINT FROM games")
            .fetch_one(pool)
            .await
    }
}
