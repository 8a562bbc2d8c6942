//! Repository for the `tags` table.

use mediashelf_core::types::DbId;
use sqlx::PgPool;

use crate::models::movie::Tag;

const COLUMNS: &str = "id, name, created_at, updated_at";

/// Provides queries over movie tags.
pub struct TagRepo;

impl TagRepo {
    pub async fn create(pool: &PgPool, name: &str) -> Result<Tag, sqlx::Error> {
        let query = format!("INSERT INTO tags (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, Tag>(&query)
            .bind(name)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Tag>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tags WHERE id = $1");
        sqlx::query_as::<_, Tag>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all tags in id order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Tag>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tags ORDER BY id");
        sqlx::query_as::<_, Tag>(&query).fetch_all(pool).await
    }

    /// Tags attached to one movie, ordered by name.
    pub async fn list_for_movie(pool: &PgPool, movie_id: DbId) -> Result<Vec<Tag>, sqlx::Error> {
        sqlx::query_as::<_, Tag>(
            "SELECT t.id, t.name, t.created_at, t.updated_at
             FROM tags t
             JOIN movie_tags mt ON mt.tag_id = t.id
             WHERE mt.movie_id = $1
             ORDER BY t.name, t.id",
        )
        .bind(movie_id)
        .fetch_all(pool)
        .await
    }
}
