use std::hash::Hash;

use indexmap::IndexMap;

/// Remove duplicates while keeping the first occurrence of each key
///
/// Items are compared only through `key`. Entity queries key by ID, so two
/// entities with equal field values are both kept; value queries such as
/// categories key by the value itself.
pub fn unique_by_key<T, K, I, F>(items: I, key: F) -> Vec<T>
where
    I: IntoIterator<Item = T>,
    K: Hash + Eq,
    F: Fn(&T) -> K,
{
    let mut first_seen: IndexMap<K, T> = IndexMap::new();
    for item in items {
        first_seen.entry(key(&item)).or_insert(item);
    }
    first_seen.into_values().collect()
}

/// Count occurrences per key, ordered by first appearance
pub fn count_by_key<T, K, I, F>(items: I, key: F) -> IndexMap<K, usize>
where
    I: IntoIterator<Item = T>,
    K: Hash + Eq,
    F: Fn(&T) -> K,
{
    let mut counts: IndexMap<K, usize> = IndexMap::new();
    for item in items {
        *counts.entry(key(&item)).or_insert(0) += 1;
    }
    counts
}
