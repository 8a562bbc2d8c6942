//! Fixed-size page resolution shared by every list view.
//!
//! A requested page number is never an error: anything missing, non-numeric or
//! below 1 resolves to the first page, and anything past the end resolves to
//! the last page. An empty collection still has exactly one (empty) page.
//!
//! The same [`PageWindow`] drives both execution paths: the store-side path
//! counts rows and then fetches `LIMIT`/`OFFSET`, while [`paginate`] slices an
//! already-materialized `Vec`.

use std::num::IntErrorKind;

use serde::Serialize;

/// Page size used by the game catalog list views.
pub const GAME_PAGE_SIZE: i64 = 25;

/// Page size used by the movie catalog list views.
pub const MOVIE_PAGE_SIZE: i64 = 50;

/// Total number of pages for `count` items. Never less than 1.
///
/// ```
/// use mediashelf_core::pagination::num_pages;
/// assert_eq!(num_pages(0, 25), 1);
/// assert_eq!(num_pages(25, 25), 1);
/// assert_eq!(num_pages(26, 25), 2);
/// ```
pub fn num_pages(count: i64, page_size: i64) -> i64 {
    let page_size = page_size.max(1);
    if count <= 0 {
        return 1;
    }
    (count + page_size - 1) / page_size
}

/// Parse the raw `page` query value. Surrounding whitespace and a leading `+`
/// are accepted; fractions and junk are not. A number too large for `i64`
/// saturates, so it still lands on the last (or first) page.
fn parse_page_number(raw: Option<&str>) -> Option<i64> {
    let value = raw?.trim();
    match value.parse::<i64>() {
        Ok(n) => Some(n),
        Err(e) => match e.kind() {
            IntErrorKind::PosOverflow => Some(i64::MAX),
            IntErrorKind::NegOverflow => Some(i64::MIN),
            _ => None,
        },
    }
}

/// The resolved position of one page inside a collection of `count` items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageWindow {
    /// 1-based page number, always within `1..=num_pages`.
    pub number: i64,
    pub num_pages: i64,
    /// Total number of items across all pages.
    pub count: i64,
    pub page_size: i64,
}

impl PageWindow {
    /// Resolve a raw page parameter against a collection size.
    pub fn resolve(count: i64, page_size: i64, raw_page: Option<&str>) -> Self {
        let page_size = page_size.max(1);
        let count = count.max(0);
        let num_pages = num_pages(count, page_size);

        let number = match parse_page_number(raw_page) {
            None => 1,
            Some(n) if n < 1 => 1,
            Some(n) if n > num_pages => num_pages,
            Some(n) => n,
        };

        Self {
            number,
            num_pages,
            count,
            page_size,
        }
    }

    /// Row offset of the first item on this page.
    pub fn offset(&self) -> i64 {
        (self.number - 1) * self.page_size
    }

    /// Maximum number of rows on this page.
    pub fn limit(&self) -> i64 {
        self.page_size
    }

    pub fn has_next(&self) -> bool {
        self.number < self.num_pages
    }

    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    /// Attach the fetched items for this window.
    pub fn into_page<T>(self, items: Vec<T>) -> Page<T> {
        let (start_index, end_index) = if self.count == 0 {
            (0, 0)
        } else if self.number == self.num_pages {
            (self.offset() + 1, self.count)
        } else {
            (self.offset() + 1, self.number * self.page_size)
        };

        Page {
            number: self.number,
            num_pages: self.num_pages,
            count: self.count,
            page_size: self.page_size,
            has_next: self.has_next(),
            has_previous: self.has_previous(),
            next_page_number: self.has_next().then_some(self.number + 1),
            previous_page_number: self.has_previous().then_some(self.number - 1),
            start_index,
            end_index,
            items,
        }
    }
}

/// One page of a collection plus the metadata list views need to render
/// their pager.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub number: i64,
    pub num_pages: i64,
    pub count: i64,
    pub page_size: i64,
    pub has_next: bool,
    pub has_previous: bool,
    pub next_page_number: Option<i64>,
    pub previous_page_number: Option<i64>,
    /// 1-based position of the first item on this page (0 when empty).
    pub start_index: i64,
    /// 1-based position of the last item on this page (0 when empty).
    pub end_index: i64,
}

/// Slice an already-ordered collection into the requested page.
pub fn paginate<T>(items: Vec<T>, page_size: i64, raw_page: Option<&str>) -> Page<T> {
    let window = PageWindow::resolve(items.len() as i64, page_size, raw_page);
    let start = window.offset() as usize;
    let page_items: Vec<T> = items
        .into_iter()
        .skip(start)
        .take(window.limit() as usize)
        .collect();
    window.into_page(page_items)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters() -> Vec<char> {
        ('A'..='Z').collect()
    }

    #[test]
    fn missing_page_resolves_to_first() {
        let window = PageWindow::resolve(100, 25, None);
        assert_eq!(window.number, 1);
        assert_eq!(window.offset(), 0);
    }

    #[test]
    fn non_numeric_page_resolves_to_first() {
        for raw in ["abc", "", "2.5", "1e3", "two"] {
            let window = PageWindow::resolve(100, 25, Some(raw));
            assert_eq!(window.number, 1, "raw page {raw:?}");
        }
    }

    #[test]
    fn zero_and_negative_pages_resolve_to_first() {
        for raw in ["0", "-1", "-999"] {
            let window = PageWindow::resolve(100, 25, Some(raw));
            assert_eq!(window.number, 1, "raw page {raw:?}");
        }
    }

    #[test]
    fn out_of_range_page_resolves_to_last() {
        let window = PageWindow::resolve(100, 25, Some("9"));
        assert_eq!(window.number, 4);
        assert!(!window.has_next());
        assert!(window.has_previous());
    }

    #[test]
    fn overflowing_page_numbers_saturate() {
        assert_eq!(PageWindow::resolve(100, 25, Some("99999999999999999999")).number, 4);
        assert_eq!(PageWindow::resolve(100, 25, Some("+99999999999999999999")).number, 4);
        assert_eq!(PageWindow::resolve(100, 25, Some("-99999999999999999999")).number, 1);
        assert_eq!(PageWindow::resolve(100, 25, Some("9999999999999999999x")).number, 1);
    }

    #[test]
    fn whitespace_and_plus_sign_are_accepted() {
        assert_eq!(PageWindow::resolve(100, 25, Some(" 3 ")).number, 3);
        assert_eq!(PageWindow::resolve(100, 25, Some("+2")).number, 2);
    }

    #[test]
    fn empty_collection_has_one_empty_page() {
        let page = paginate(Vec::<char>::new(), 25, Some("3"));
        assert_eq!(page.number, 1);
        assert_eq!(page.num_pages, 1);
        assert!(page.items.is_empty());
        assert!(!page.has_next);
        assert!(!page.has_previous);
        assert_eq!(page.start_index, 0);
        assert_eq!(page.end_index, 0);
    }

    #[test]
    fn twenty_six_items_split_into_twenty_five_and_one() {
        let first = paginate(letters(), 25, Some("1"));
        assert_eq!(first.items.len(), 25);
        assert_eq!(first.items.first(), Some(&'A'));
        assert_eq!(first.items.last(), Some(&'Y'));
        assert!(first.has_next);
        assert_eq!(first.next_page_number, Some(2));
        assert_eq!(first.previous_page_number, None);

        let second = paginate(letters(), 25, Some("2"));
        assert_eq!(second.items, vec!['Z']);
        assert!(!second.has_next);
        assert!(second.has_previous);
        assert_eq!(second.start_index, 26);
        assert_eq!(second.end_index, 26);
    }

    #[test]
    fn final_page_holds_the_remainder() {
        for (count, size) in [(26_i64, 25_i64), (50, 25), (51, 50), (7, 3), (3, 3)] {
            let items: Vec<i64> = (0..count).collect();
            let last = paginate(items, size, Some("9999"));
            let expected = if count % size == 0 { size } else { count % size };
            assert_eq!(last.items.len() as i64, expected, "count={count} size={size}");
            assert_eq!(last.number, last.num_pages);
        }
    }

    #[test]
    fn pages_never_exceed_page_size() {
        let items: Vec<i64> = (0..123).collect();
        for n in 1..=5 {
            let page = paginate(items.clone(), 50, Some(&n.to_string()));
            assert!(page.items.len() <= 50);
        }
    }

    #[test]
    fn middle_page_indices() {
        let items: Vec<i64> = (1..=60).collect();
        let page = paginate(items, 25, Some("2"));
        assert_eq!(page.start_index, 26);
        assert_eq!(page.end_index, 50);
        assert_eq!(page.items.first(), Some(&26));
    }
}
