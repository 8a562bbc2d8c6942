//! Generic listing pipeline: filter, order, paginate.
//!
//! Every paginated list view is described by a [`Listing`] constant naming
//! its source relation, searchable column and ordering. A request supplies
//! [`Criteria`] and a raw page parameter; the pipeline counts matching rows,
//! resolves the page window (clamping bad page numbers) and fetches exactly
//! that window with `LIMIT`/`OFFSET`.
//!
//! All SQL fragments in a `Listing` are compile-time constants. User input only
//! ever reaches the database as bound parameters.

use mediashelf_core::catalog::EntityKind;
use mediashelf_core::pagination::{Page, PageWindow};
use mediashelf_core::search::SearchTerm;
use mediashelf_core::types::DbId;
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgPool};

/// Static description of one paginated list view.
#[derive(Debug, Clone, Copy)]
pub struct Listing {
    /// Entity kind; determines the page size.
    pub kind: EntityKind,
    /// `FROM` clause, may contain joins.
    pub source: &'static str,
    /// Selected columns, matching the row struct the caller decodes into.
    pub columns: &'static str,
    /// Column matched case-insensitively by search.
    pub search_column: &'static str,
    /// Ordering of the unfiltered (and scoped) listing.
    pub order_by: &'static str,
    /// Ordering of search results: natural collection order.
    pub natural_order: &'static str,
}

/// Which rows of a [`Listing`] to include.
#[derive(Debug, Clone, Copy)]
pub enum Criteria<'a> {
    /// Every row, ordered by the listing's order key.
    All,
    /// Rows whose search column contains the term, in natural order.
    Search(&'a SearchTerm),
    /// Rows whose `column` equals `id`, ordered by the listing's order key.
    Scoped { column: &'static str, id: DbId },
}

impl<'a> Criteria<'a> {
    /// `Search` when a term is present, `All` otherwise.
    pub fn from_search(search: Option<&'a SearchTerm>) -> Self {
        match search {
            Some(term) => Criteria::Search(term),
            None => Criteria::All,
        }
    }

    fn where_clause(&self, listing: &Listing) -> String {
        match self {
            Criteria::All => String::new(),
            Criteria::Search(_) => format!("WHERE {} ILIKE $1", listing.search_column),
            Criteria::Scoped { column, .. } => format!("WHERE {column} = $1"),
        }
    }

    fn order_by(&self, listing: &Listing) -> &'static str {
        match self {
            Criteria::Search(_) => listing.natural_order,
            Criteria::All | Criteria::Scoped { .. } => listing.order_by,
        }
    }

    /// Number of bound parameters the `WHERE` clause uses.
    fn param_count(&self) -> usize {
        match self {
            Criteria::All => 0,
            Criteria::Search(_) | Criteria::Scoped { .. } => 1,
        }
    }
}

impl Listing {
    pub fn page_size(&self) -> i64 {
        self.kind.page_size()
    }

    /// Count the rows matching `criteria`.
    pub async fn count(&self, pool: &PgPool, criteria: &Criteria<'_>) -> Result<i64, sqlx::Error> {
        let sql = format!(
            "SELECT COUNT(*) FROM {} {}",
            self.source,
            criteria.where_clause(self)
        );
        let query = sqlx::query_scalar::<_, i64>(&sql);
        match criteria {
            Criteria::All => query.fetch_one(pool).await,
            Criteria::Search(term) => query.bind(term.like_pattern()).fetch_one(pool).await,
            Criteria::Scoped { id, .. } => query.bind(*id).fetch_one(pool).await,
        }
    }

    /// Fetch one page of rows matching `criteria`.
    ///
    /// `raw_page` is the unparsed `page` query value; see
    /// [`PageWindow::resolve`] for how it is clamped.
    pub async fn page<T>(
        &self,
        pool: &PgPool,
        criteria: Criteria<'_>,
        raw_page: Option<&str>,
    ) -> Result<Page<T>, sqlx::Error>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        let count = self.count(pool, &criteria).await?;
        let window = PageWindow::resolve(count, self.page_size(), raw_page);

        let limit_param = criteria.param_count() + 1;
        let offset_param = criteria.param_count() + 2;
        let sql = format!(
            "SELECT {} FROM {} {} ORDER BY {} LIMIT ${limit_param} OFFSET ${offset_param}",
            self.columns,
            self.source,
            criteria.where_clause(self),
            criteria.order_by(self),
        );

        let query = sqlx::query_as::<_, T>(&sql);
        let query = match criteria {
            Criteria::All => query,
            Criteria::Search(term) => query.bind(term.like_pattern()),
            Criteria::Scoped { id, .. } => query.bind(id),
        };
        let items = query
            .bind(window.limit())
            .bind(window.offset())
            .fetch_all(pool)
            .await?;

        tracing::debug!(
            kind = self.kind.name(),
            page = window.number,
            num_pages = window.num_pages,
            count,
            "Listed page"
        );

        Ok(window.into_page(items))
    }

    /// Fetch every row matching `criteria`, for callers that order or slice
    /// in memory.
    pub async fn all<T>(&self, pool: &PgPool, criteria: Criteria<'_>) -> Result<Vec<T>, sqlx::Error>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        let sql = format!(
            "SELECT {} FROM {} {} ORDER BY {}",
            self.columns,
            self.source,
            criteria.where_clause(self),
            criteria.order_by(self),
        );

        let query = sqlx::query_as::<_, T>(&sql);
        match criteria {
            Criteria::All => query.fetch_all(pool).await,
            Criteria::Search(term) => query.bind(term.like_pattern()).fetch_all(pool).await,
            Criteria::Scoped { id, .. } => query.bind(id).fetch_all(pool).await,
        }
    }
}
