//! Category → count mappings for dashboard and detail charts.
//!
//! Charts consume a JSON object mapping category name to item count. The
//! mapping keeps the order categories were supplied in. Category names are
//! not guaranteed unique by the store, so a repeated name overwrites the
//! earlier count while keeping the earlier position (last write wins).

use std::hash::Hash;

use indexmap::IndexMap;
use serde::Serialize;

/// Ordered `category name -> item count` mapping, serialized as a JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CategoryCounts(IndexMap<String, i64>);

impl CategoryCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(name, count)` pairs, e.g. rows of a `GROUP BY` query.
    ///
    /// ```
    /// use mediashelf_core::aggregation::CategoryCounts;
    /// let counts = CategoryCounts::from_pairs([("RPG".to_string(), 3), ("Puzzle".to_string(), 0)]);
    /// assert_eq!(counts.get("RPG"), Some(3));
    /// assert_eq!(counts.total(), 3);
    /// ```
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, i64)>,
    {
        let mut counts = Self::new();
        for (name, count) in pairs {
            counts.insert(name, count);
        }
        counts
    }

    /// Set the count for `name`. An existing entry is overwritten in place.
    pub fn insert(&mut self, name: impl Into<String>, count: i64) {
        self.0.insert(name.into(), count);
    }

    pub fn get(&self, name: &str) -> Option<i64> {
        self.0.get(name).copied()
    }

    /// Sum of all counts.
    pub fn total(&self) -> i64 {
        self.0.values().sum()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, i64)> {
        self.0.iter().map(|(name, count)| (name.as_str(), *count))
    }
}

/// Count items per category over a fixed category universe.
///
/// Every category in `universe` appears in the result, including those no
/// item references. Item keys that are not in the universe are ignored.
///
/// ```
/// use mediashelf_core::aggregation::count_by_category;
/// let universe = [("dvd", "DVD"), ("bluray", "Blu-ray")];
/// let counts = count_by_category(universe, ["dvd", "dvd", "vhs"]);
/// assert_eq!(counts.get("DVD"), Some(2));
/// assert_eq!(counts.get("Blu-ray"), Some(0));
/// ```
pub fn count_by_category<K, N, U, I>(universe: U, item_keys: I) -> CategoryCounts
where
    K: Eq + Hash,
    N: Into<String>,
    U: IntoIterator<Item = (K, N)>,
    I: IntoIterator<Item = K>,
{
    let mut tallies: IndexMap<K, (String, i64)> = IndexMap::new();
    for (key, name) in universe {
        tallies.insert(key, (name.into(), 0));
    }
    for key in item_keys {
        if let Some((_, count)) = tallies.get_mut(&key) {
            *count += 1;
        }
    }
    CategoryCounts::from_pairs(tallies.into_values())
}
