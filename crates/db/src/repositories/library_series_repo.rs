//! Repository for the `library_series` table.

use mediashelf_core::types::DbId;
use sqlx::PgPool;

use crate::models::library::{CreateLibrarySeries, LibrarySeries};

const COLUMNS: &str = "id, name, author_id, created_at, updated_at";

/// Provides CRUD operations for library series.
pub struct LibrarySeriesRepo;

impl LibrarySeriesRepo {
    /// Insert a new series, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateLibrarySeries,
    ) -> Result<LibrarySeries, sqlx::Error> {
        let query = format!(
            "INSERT INTO library_series (name, author_id) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, LibrarySeries>(&query)
            .bind(&input.name)
            .bind(input.author_id)
            .fetch_one(pool)
            .await
    }

    /// Find a series by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<LibrarySeries>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM library_series WHERE id = $1");
        sqlx::query_as::<_, LibrarySeries>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all series in id order.
    pub async fn list(pool: &PgPool) -> Result<Vec<LibrarySeries>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM library_series ORDER BY id");
        sqlx::query_as::<_, LibrarySeries>(&query).fetch_all(pool).await
    }
}
