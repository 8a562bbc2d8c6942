//! Free-text search term handling.
//!
//! Search is a case-insensitive substring match on one designated text column.
//! There is no tokenization and no ranking.

/// A trimmed, non-empty search term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm(String);

impl SearchTerm {
    /// Normalize raw form input. Blank or missing input means "no search".
    ///
    /// ```
    /// use mediashelf_core::search::SearchTerm;
    /// assert!(SearchTerm::parse(None).is_none());
    /// assert!(SearchTerm::parse(Some("   ")).is_none());
    /// assert_eq!(SearchTerm::parse(Some(" mario ")).unwrap().as_str(), "mario");
    /// ```
    pub fn parse(raw: Option<&str>) -> Option<Self> {
        let trimmed = raw?.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Build an `ILIKE` pattern matching the term anywhere in the column.
    ///
    /// `\`, `%` and `_` in the term are escaped so they match literally
    /// (PostgreSQL's default `LIKE` escape character is `\`).
    ///
    /// ```
    /// use mediashelf_core::search::SearchTerm;
    /// let term = SearchTerm::parse(Some("100%_done")).unwrap();
    /// assert_eq!(term.like_pattern(), "%100\\%\\_done%");
    /// ```
    pub fn like_pattern(&self) -> String {
        let mut pattern = String::with_capacity(self.0.len() + 2);
        pattern.push('%');
        for c in self.0.chars() {
            if matches!(c, '\\' | '%' | '_') {
                pattern.push('\\');
            }
            pattern.push(c);
        }
        pattern.push('%');
        pattern
    }
}
