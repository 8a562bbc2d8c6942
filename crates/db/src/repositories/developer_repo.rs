//! Repository for the `developers` table.

use mediashelf_core::catalog::EntityKind;
use mediashelf_core::pagination::Page;
use mediashelf_core::search::SearchTerm;
use mediashelf_core::types::DbId;
use sqlx::PgPool;

use crate::listing::{Criteria, Listing};
use crate::models::game::Developer;

const COLUMNS: &str = "id, name, created_at, updated_at";

pub const DEVELOPER_LISTING: Listing = Listing {
    kind: EntityKind::Developer,
    source: "developers",
    columns: COLUMNS,
    search_column: "name",
    order_by: "name, id",
    natural_order: "id",
};

/// Provides queries over developers.
pub struct DeveloperRepo;

impl DeveloperRepo {
    /// Insert a new developer, returning the created row.
    pub async fn create(pool: &PgPool, name: &str) -> Result<Developer, sqlx::Error> {
        let query = format!("INSERT INTO developers (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Developer>(&query)
            .bind(name)
            .fetch_one(pool)
            .await
    }

    /// Find a developer by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Developer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM developers WHERE id = $1");
        sqlx::query_as::<_, Developer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all developers ordered by name (form choices).
    pub async fn list(pool: &PgPool) -> Result<Vec<Developer>, sqlx::Error> {
        DEVELOPER_LISTING.all(pool, Criteria::All).await
    }

    /// One page of developers: name search, or all developers by name.
    pub async fn list_page(
        pool: &PgPool,
        search: Option<&SearchTerm>,
        raw_page: Option<&str>,
    ) -> Result<Page<Developer>, sqlx::Error> {
        DEVELOPER_LISTING
            .page(pool, Criteria::from_search(search), raw_page)
            .await
    }

    /// Total number of developers.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar("SELECT COUNT(*) FROM developers")
            .fetch_one(pool)
            .await
    }
}
