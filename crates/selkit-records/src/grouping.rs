//! City sorting and first-seen-order grouping.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

/// A city and the country it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CityEntry {
    /// Country name.
    pub country: String,
    /// City name.
    pub city: String,
}

impl CityEntry {
    /// Create an entry.
    #[must_use]
    pub fn new(country: impl Into<String>, city: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            city: city.into(),
        }
    }

    fn cmp_by_location(&self, other: &Self) -> Ordering {
        self.country
            .cmp(&other.country)
            .then_with(|| self.city.cmp(&other.city))
    }
}

/// Sort in place by country, then by city.
pub fn sort_cities(entries: &mut [CityEntry]) {
    entries.sort_by(CityEntry::cmp_by_location);
}

/// Group `items` by `key_fn`, collecting `value_fn` of each item.
///
/// Groups appear in the order their key was first seen; values keep input
/// order within a group.
#[must_use]
pub fn group<T, K, V>(
    items: impl IntoIterator<Item = T>,
    key_fn: impl Fn(&T) -> K,
    value_fn: impl Fn(&T) -> V,
) -> Vec<(K, Vec<V>)>
where
    K: Eq + Hash + Clone,
{
    let mut index: HashMap<K, usize> = HashMap::new();
    let mut groups: Vec<(K, Vec<V>)> = Vec::new();

    for item in items {
        let key = key_fn(&item);
        let value = value_fn(&item);
        let slot = *index.entry(key.clone()).or_insert_with(|| {
            groups.push((key, Vec::new()));
            groups.len() - 1
        });
        groups[slot].1.push(value);
    }

    groups
}
