//! Movie collection models and DTOs.

use mediashelf_core::catalog::DiscFormat;
use mediashelf_core::detail::RepresentativeGenre;
use mediashelf_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `movies` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub genre_id: DbId,
    pub subgenre_id: Option<DbId>,
    pub series_id: Option<DbId>,
    pub series_number: Option<i32>,
    /// One of the [`DiscFormat`] codes.
    pub disc_format: String,
    pub cover_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A movie with genre, subgenre and series names resolved.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MovieSummary {
    pub id: DbId,
    pub title: String,
    pub genre_id: DbId,
    pub genre_name: String,
    pub subgenre_id: Option<DbId>,
    pub subgenre_name: Option<String>,
    pub series_id: Option<DbId>,
    pub series_name: Option<String>,
    pub series_number: Option<i32>,
    pub disc_format: String,
    pub cover_url: Option<String>,
}

impl MovieSummary {
    /// Display label of the disc format, if the stored code is known.
    pub fn disc_format_label(&self) -> Option<&'static str> {
        DiscFormat::from_code(&self.disc_format).map(DiscFormat::label)
    }
}

/// A row from the `movie_genres` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MovieGenre {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `movie_subgenres` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MovieSubgenre {
    pub id: DbId,
    pub name: String,
    pub genre_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `movie_series` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MovieSeries {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A series paired with the genre of its first movie.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MovieSeriesGenre {
    pub id: DbId,
    pub name: String,
    pub genre_id: Option<DbId>,
}

impl RepresentativeGenre for MovieSeriesGenre {
    fn representative_genre_id(&self) -> Option<DbId> {
        self.genre_id
    }
}

/// A row from the `tags` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Tag {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for inserting a movie.
#[derive(Debug, Clone)]
pub struct CreateMovie {
    pub title: String,
    pub genre_id: DbId,
    pub subgenre_id: Option<DbId>,
    pub series_id: Option<DbId>,
    pub series_number: Option<i32>,
    pub disc_format: DiscFormat,
    pub cover_url: Option<String>,
}
