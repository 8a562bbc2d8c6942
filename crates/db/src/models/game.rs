//! Game collection models and DTOs.

use mediashelf_core::detail::RepresentativeGenre;
use mediashelf_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `games` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Game {
    pub id: DbId,
    pub title: String,
    pub genre_id: DbId,
    pub system_id: DbId,
    pub developer_id: Option<DbId>,
    pub series_id: Option<DbId>,
    pub copies: i32,
    pub release_year: Option<i32>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A game with the names of everything it references resolved.
/// Used for list rows and the detail page.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GameSummary {
    pub id: DbId,
    pub title: String,
    pub copies: i32,
    pub release_year: Option<i32>,
    pub genre_id: DbId,
    pub genre_name: String,
    pub system_id: DbId,
    pub system_name: String,
    pub developer_id: Option<DbId>,
    pub developer_name: Option<String>,
    pub series_id: Option<DbId>,
    pub series_name: Option<String>,
}

/// A row from the `game_genres` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GameGenre {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `game_systems` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GameSystem {
    pub id: DbId,
    pub name: String,
    pub manufacturer: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `developers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Developer {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `game_series` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GameSeries {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A series paired with the genre of its first game.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct GameSeriesGenre {
    pub id: DbId,
    pub name: String,
    pub genre_id: Option<DbId>,
}

impl RepresentativeGenre for GameSeriesGenre {
    fn representative_genre_id(&self) -> Option<DbId> {
        self.genre_id
    }
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// DTO for inserting a game. Built from a validated create-form.
#[derive(Debug, Clone)]
pub struct CreateGame {
    pub title: String,
    pub genre_id: DbId,
    pub system_id: DbId,
    pub developer_id: Option<DbId>,
    pub series_id: Option<DbId>,
    pub copies: i32,
    pub release_year: Option<i32>,
}

/// DTO for inserting a system.
#[derive(Debug, Clone)]
pub struct CreateGameSystem {
    pub name: String,
    pub manufacturer: Option<String>,
}
