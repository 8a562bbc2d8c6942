//! Repository for the `game_systems` table.

use mediashelf_core::catalog::EntityKind;
use mediashelf_core::pagination::Page;
use mediashelf_core::search::SearchTerm;
use mediashelf_core::types::DbId;
use sqlx::PgPool;

use crate::listing::{Criteria, Listing};
use crate::models::game::{CreateGameSystem, GameSystem};

const COLUMNS: &str = "id, name, manufacturer, created_at, updated_at";

pub const SYSTEM_LISTING: Listing = Listing {
    kind: EntityKind::System,
    source: "game_systems",
    columns: COLUMNS,
    search_column: "name",
    order_by: "name, id",
    natural_order: "id",
};

/// Provides queries over game systems.
pub struct GameSystemRepo;

impl GameSystemRepo {
    /// Insert a new system, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateGameSystem) -> Result<GameSystem, sqlx::Error> {
        let query = format!(
            "INSERT INTO game_systems (name, manufacturer) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, GameSystem>(&query)
            .bind(&input.name)
            .bind(&input.manufacturer)
            .fetch_one(pool)
            .await
    }

    /// Find a system by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<GameSystem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM game_systems WHERE id = $1");
        sqlx::query_as::<_, GameSystem>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all systems ordered by name (form choices).
    pub async fn list(pool: &PgPool) -> Result<Vec<GameSystem>, sqlx::Error> {
        SYSTEM_LISTING.all(pool, Criteria::All).await
    }

    /// One page of systems: name search, or all systems by name.
    pub async fn list_page(
        pool: &PgPool,
        search: Option<&SearchTerm>,
        raw_page: Option<&str>,
    ) -> Result<Page<GameSystem>, sqlx::Error> {
        SYSTEM_LISTING
            .page(pool, Criteria::from_search(search), raw_page)
            .await
    }

    /// Total number of systems.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM game_systems")
            .fetch_one(pool)
            .await
    }
}
