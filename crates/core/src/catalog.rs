//! Entity kinds, disc formats and title ordering for the two catalogs.

use serde::Serialize;

use crate::pagination::{GAME_PAGE_SIZE, MOVIE_PAGE_SIZE};

/// Every kind of entity stored by the catalogs and the library API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Game,
    GameGenre,
    GameSeries,
    Developer,
    System,
    Movie,
    MovieGenre,
    MovieSeries,
    Subgenre,
    Tag,
    Author,
    LibrarySeries,
}

impl EntityKind {
    /// Human-readable name used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            EntityKind::Game => "Game",
            EntityKind::GameGenre | EntityKind::MovieGenre => "Genre",
            EntityKind::GameSeries | EntityKind::MovieSeries | EntityKind::LibrarySeries => {
                "Series"
            }
            EntityKind::Developer => "Developer",
            EntityKind::System => "System",
            EntityKind::Movie => "Movie",
            EntityKind::Subgenre => "Subgenre",
            EntityKind::Tag => "Tag",
            EntityKind::Author => "Author",
        }
    }

    /// Items per page when this kind is listed.
    pub fn page_size(self) -> i64 {
        match self {
            EntityKind::Movie
            | EntityKind::MovieGenre
            | EntityKind::MovieSeries
            | EntityKind::Subgenre
            | EntityKind::Tag => MOVIE_PAGE_SIZE,
            _ => GAME_PAGE_SIZE,
        }
    }
}

// ---------------------------------------------------------------------------
// Disc formats
// ---------------------------------------------------------------------------

/// Physical or digital format a movie is owned in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscFormat {
    Dvd,
    Bluray,
    Uhd,
    Digital,
}

impl DiscFormat {
    /// All formats in display order.
    pub const ALL: [DiscFormat; 4] = [
        DiscFormat::Dvd,
        DiscFormat::Bluray,
        DiscFormat::Uhd,
        DiscFormat::Digital,
    ];

    /// Stored code (the `movies.disc_format` column value).
    pub fn code(self) -> &'static str {
        match self {
            DiscFormat::Dvd => "dvd",
            DiscFormat::Bluray => "bluray",
            DiscFormat::Uhd => "uhd",
            DiscFormat::Digital => "digital",
        }
    }

    /// Display label used as the chart key.
    pub fn label(self) -> &'static str {
        match self {
            DiscFormat::Dvd => "DVD",
            DiscFormat::Bluray => "Blu-ray",
            DiscFormat::Uhd => "4K Ultra HD",
            DiscFormat::Digital => "Digital",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.code() == code)
    }
}

// ---------------------------------------------------------------------------
// Title ordering
// ---------------------------------------------------------------------------

/// Leading articles ignored when ordering titles.
const LEADING_ARTICLES: &[&str] = &["the ", "an ", "a "];

/// Sort key for a title: lowercased, with one leading English article removed.
///
/// ```
/// use mediashelf_core::catalog::alphabetical_title;
/// assert_eq!(alphabetical_title("The Matrix"), "matrix");
/// assert_eq!(alphabetical_title("A Bug's Life"), "bug's life");
/// assert_eq!(alphabetical_title("Alien"), "alien");
/// ```
pub fn alphabetical_title(title: &str) -> String {
    let lowered = title.trim().to_lowercase();
    for article in LEADING_ARTICLES {
        if let Some(rest) = lowered.strip_prefix(article) {
            let rest = rest.trim_start();
            if !rest.is_empty() {
                return rest.to_string();
            }
        }
    }
    lowered
}

/// Stable sort by [`alphabetical_title`]. Items with equal keys keep their
/// incoming order.
pub fn sort_by_alphabetical_title<T>(items: &mut [T], title: impl Fn(&T) -> &str) {
    items.sort_by_cached_key(|item| alphabetical_title(title(item)));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn article_only_title_is_kept() {
        assert_eq!(alphabetical_title("The"), "the");
        assert_eq!(alphabetical_title("A "), "a");
    }

    #[test]
    fn article_must_be_a_whole_word() {
        assert_eq!(alphabetical_title("Theodore Rex"), "theodore rex");
        assert_eq!(alphabetical_title("Annie Hall"), "annie hall");
    }

    #[test]
    fn sorting_ignores_articles_and_case() {
        let mut titles = vec!["the Matrix", "Alien", "A Bug's Life", "blade Runner"];
        sort_by_alphabetical_title(&mut titles, |t| *t);
        assert_eq!(titles, vec!["Alien", "blade Runner", "A Bug's Life", "the Matrix"]);
    }

    #[test]
    fn equal_keys_keep_incoming_order() {
        let mut items = vec![(1, "The Thing"), (2, "Thing"), (3, "A Thing")];
        sort_by_alphabetical_title(&mut items, |(_, t)| *t);
        assert_eq!(items.iter().map(|(id, _)| *id).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn disc_format_codes_round_trip() {
        for format in DiscFormat::ALL {
            assert_eq!(DiscFormat::from_code(format.code()), Some(format));
        }
        assert_eq!(DiscFormat::from_code("vhs"), None);
    }

    #[test]
    fn page_sizes_follow_catalog() {
        assert_eq!(EntityKind::Game.page_size(), 25);
        assert_eq!(EntityKind::Developer.page_size(), 25);
        assert_eq!(EntityKind::Movie.page_size(), 50);
        assert_eq!(EntityKind::MovieSeries.page_size(), 50);
    }
}
