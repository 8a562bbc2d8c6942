//! Repository for the `movie_genres` and `movie_subgenres` tables.

use mediashelf_core::types::DbId;
use sqlx::PgPool;

use crate::models::movie::{MovieGenre, MovieSubgenre};

const COLUMNS: &str = "id, name, created_at, updated_at";
const SUBGENRE_COLUMNS: &str = "id, name, genre_id, created_at, updated_at";

/// Provides queries over movie genres and their subgenres.
pub struct MovieGenreRepo;

impl MovieGenreRepo {
    /// Insert a new genre, returning the created row.
    pub async fn create(pool: &PgPool, name: &str) -> Result<MovieGenre, sqlx::Error> {
        let query = format!("INSERT INTO movie_genres (name) VALUES ($1) RETURNING {COLUMNS}");
        sqlx::query_as::<_, MovieGenre>(&query)
            .bind(name)
            .fetch_one(pool)
            .await
    }

    /// Insert a subgenre under `genre_id`.
    pub async fn create_subgenre(
        pool: &PgPool,
        genre_id: DbId,
        name: &str,
    ) -> Result<MovieSubgenre, sqlx::Error> {
        let query = format!(
            "INSERT INTO movie_subgenres (name, genre_id) VALUES ($1, $2) RETURNING {SUBGENRE_COLUMNS}"
        );
        sqlx::query_as::<_, MovieSubgenre>(&query)
            .bind(name)
            .bind(genre_id)
            .fetch_one(pool)
            .await
    }

    /// Find a genre by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<MovieGenre>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movie_genres WHERE id = $1");
        sqlx::query_as::<_, MovieGenre>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all genres in id order.
    pub async fn list(pool: &PgPool) -> Result<Vec<MovieGenre>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movie_genres ORDER BY id");
        sqlx::query_as::<_, MovieGenre>(&query).fetch_all(pool).await
    }

    /// Subgenres of one genre in id order.
    pub async fn list_subgenres(pool: &PgPool, genre_id: DbId) -> Result<Vec<MovieSubgenre>, sqlx::Error> {
        let query = format!(
            "SELECT {SUBGENRE_COLUMNS} FROM movie_subgenres WHERE genre_id = $1 ORDER BY id"
        );
        sqlx::query_as::<_, MovieSubgenre>(&query)
            .bind(genre_id)
            .fetch_all(pool)
            .await
    }
}
