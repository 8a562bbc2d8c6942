//! Aggregation queries behind dashboard and detail charts.
//!
//! A [`CategoryCounter`] counts items of one table per category of another,
//! joined through a foreign key. Three scopes are supported:
//!
//! - [`CategoryCounter::all`]: every category in the store, zero counts included.
//! - [`CategoryCounter::scoped`]: items restricted to one parent entity; only
//!   categories those items reference appear.
//! - [`CategoryCounter::within`]: a restricted category universe, zero counts
//!   included.

use mediashelf_core::aggregation::{count_by_category, CategoryCounts};
use mediashelf_core::catalog::DiscFormat;
use mediashelf_core::types::DbId;
use sqlx::PgPool;

use crate::models::report::CategoryCountRow;

/// Counts rows of `item_table` per row of `category_table` via `item_fk`.
#[derive(Debug, Clone, Copy)]
pub struct CategoryCounter {
    pub category_table: &'static str,
    pub item_table: &'static str,
    pub item_fk: &'static str,
}

pub const GAMES_BY_GENRE: CategoryCounter = CategoryCounter {
    category_table: "game_genres",
    item_table: "games",
    item_fk: "genre_id",
};

pub const GAMES_BY_SYSTEM: CategoryCounter = CategoryCounter {
    category_table: "game_systems",
    item_table: "games",
    item_fk: "system_id",
};

pub const GAMES_BY_DEVELOPER: CategoryCounter = CategoryCounter {
    category_table: "developers",
    item_table: "games",
    item_fk: "developer_id",
};

pub const MOVIES_BY_GENRE: CategoryCounter = CategoryCounter {
    category_table: "movie_genres",
    item_table: "movies",
    item_fk: "genre_id",
};

pub const MOVIES_BY_SUBGENRE: CategoryCounter = CategoryCounter {
    category_table: "movie_subgenres",
    item_table: "movies",
    item_fk: "subgenre_id",
};

fn into_counts(rows: Vec<CategoryCountRow>) -> CategoryCounts {
    CategoryCounts::from_pairs(rows.into_iter().map(|r| (r.name, r.item_count)))
}

impl CategoryCounter {
    /// Count items for every category, including categories with no items.
    pub async fn all(&self, pool: &PgPool) -> Result<CategoryCounts, sqlx::Error> {
        let sql = format!(
            "SELECT c.name, COUNT(i.id) AS item_count \
             FROM {cat} c \
             LEFT JOIN {item} i ON i.{fk} = c.id \
             GROUP BY c.id, c.name \
             ORDER BY c.id",
            cat = self.category_table,
            item = self.item_table,
            fk = self.item_fk,
        );
        let rows = sqlx::query_as::<_, CategoryCountRow>(&sql)
            .fetch_all(pool)
            .await?;
        Ok(into_counts(rows))
    }

    /// Count the items whose `scope_column` equals `scope_id`, per category.
    ///
    /// Only categories referenced by at least one of those items appear.
    pub async fn scoped(
        &self,
        pool: &PgPool,
        scope_column: &'static str,
        scope_id: DbId,
    ) -> Result<CategoryCounts, sqlx::Error> {
        let sql = format!(
            "SELECT c.name, COUNT(*) AS item_count \
             FROM {item} i \
             JOIN {cat} c ON c.id = i.{fk} \
             WHERE i.{scope_column} = $1 \
             GROUP BY c.id, c.name \
             ORDER BY c.id",
            cat = self.category_table,
            item = self.item_table,
            fk = self.item_fk,
        );
        let rows = sqlx::query_as::<_, CategoryCountRow>(&sql)
            .bind(scope_id)
            .fetch_all(pool)
            .await?;
        Ok(into_counts(rows))
    }

    /// Count items for every category whose own `category_column` equals
    /// `value`, including categories with no items.
    pub async fn within(
        &self,
        pool: &PgPool,
        category_column: &'static str,
        value: DbId,
    ) -> Result<CategoryCounts, sqlx::Error> {
        let sql = format!(
            "SELECT c.name, COUNT(i.id) AS item_count \
             FROM {cat} c \
             LEFT JOIN {item} i ON i.{fk} = c.id \
             WHERE c.{category_column} = $1 \
             GROUP BY c.id, c.name \
             ORDER BY c.id",
            cat = self.category_table,
            item = self.item_table,
            fk = self.item_fk,
        );
        let rows = sqlx::query_as::<_, CategoryCountRow>(&sql)
            .bind(value)
            .fetch_all(pool)
            .await?;
        Ok(into_counts(rows))
    }
}

/// Count movies per disc format. Every format appears, keyed by its label.
pub async fn movies_by_disc_format(pool: &PgPool) -> Result<CategoryCounts, sqlx::Error> {
    let codes: Vec<String> = sqlx::query_scalar("SELECT disc_format FROM movies")
        .fetch_all(pool)
        .await?;

    let universe = DiscFormat::ALL.map(|f| (f.code(), f.label()));
    Ok(count_by_category(universe, codes.iter().map(String::as_str)))
}
