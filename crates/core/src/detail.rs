//! Cross-reference helpers for detail pages.
//!
//! A series has no stored genre. Its *representative genre* is the genre of
//! its first member item (lowest id). When members disagree the first one
//! wins; a series without members has no representative genre and never
//! matches any genre.

use crate::types::DbId;

/// Anything that carries a derived representative genre.
pub trait RepresentativeGenre {
    fn representative_genre_id(&self) -> Option<DbId>;
}

/// Keep the series whose representative genre is `genre_id`.
///
/// This is a linear scan over every series, preserving input order.
pub fn series_sharing_genre<S>(series: Vec<S>, genre_id: DbId) -> Vec<S>
where
    S: RepresentativeGenre,
{
    series
        .into_iter()
        .filter(|s| s.representative_genre_id() == Some(genre_id))
        .collect()
}
