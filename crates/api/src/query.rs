//! Shared query and form types for list handlers.

use mediashelf_core::search::SearchTerm;
use serde::Deserialize;

/// `?page=` on every paginated view.
///
/// Kept as a raw string: non-numeric values are not a client error, they
/// resolve to the first page.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}

impl PageParams {
    pub fn raw(&self) -> Option<&str> {
        self.page.as_deref()
    }
}

/// Form body posted by the search box on list views.
#[derive(Debug, Default, Deserialize)]
pub struct SearchForm {
    pub search_text: Option<String>,
}

impl SearchForm {
    /// The normalized search term, or `None` when the box was left blank.
    pub fn term(&self) -> Option<SearchTerm> {
        SearchTerm::parse(self.search_text.as_deref())
    }
}
