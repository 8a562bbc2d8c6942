//! Repository for the `game_genres` table.

use mediashelf_core::types::DbId;
use sqlx::PgPool;

use crate::models::game::GameGenre;

const COLUMNS: &str = "id, name, created_at, updated_at";

/// Provides queries over game genres.
pub struct GameGenreRepo;

impl GameGenreRepo {
    /// Insert a new genre, returning the created row.
    pub async fn create(pool: &PgPool, name: &str) -> Result<GameGenre, sqlx::Error> {
        let query = format!("INSERT INTO game_genres (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, GameGenre>(&query)
            .bind(name)
            .fetch_one(pool)
            .await
    }

    /// Find a genre by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<GameGenre>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM game_genres WHERE id = $1");
        sqlx::query_as::<_, GameGenre>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all genres ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<GameGenre>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM game_genres ORDER BY name, id");
        sqlx::query_as::<_, GameGenre>(&query).fetch_all(pool).await
    }
}
