//! Library models and DTOs served by the JSON API.

use mediashelf_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `authors` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Author {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `library_series` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct LibrarySeries {
    pub id: DbId,
    pub name: String,
    pub author_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an author.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateAuthor {
    #[validate(length(min = 1, max = 200, message = "Name must be between 1 and 200 characters."))]
    pub name: String,
}

/// DTO for creating a series.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateLibrarySeries {
    #[validate(length(min = 1, max = 200, message = "Name must be between 1 and 200 characters."))]
    pub name: String,
    pub author_id: Option<DbId>,
}
