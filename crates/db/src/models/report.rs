//! Row shapes returned by aggregation queries.

use sqlx::FromRow;

/// One category with the number of items referencing it.
#[derive(Debug, Clone, FromRow)]
pub struct CategoryCountRow {
    pub name: String,
    pub item_count: i64,
}
