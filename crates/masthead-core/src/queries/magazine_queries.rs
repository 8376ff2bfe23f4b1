//! Relationship queries anchored on a Magazine

use masthead_core_types::MagazineId;

use super::dedup::{count_by_key, unique_by_key};
use crate::model::{Article, Author};
use crate::ops::Registry;

/// Minimum number of Articles (exclusive) for a contributing author
pub const CONTRIBUTING_AUTHOR_THRESHOLD: usize = 2;

/// Articles published in this Magazine, in log order
pub fn articles(store: &Registry, magazine_id: MagazineId) -> Vec<&Article> {
    store
        .articles()
        .iter()
        .filter(|a| a.magazine_id() == magazine_id)
        .collect()
}

/// Distinct Authors who wrote for this Magazine, by first appearance
pub fn contributors(store: &Registry, magazine_id: MagazineId) -> Vec<&Author> {
    let author_ids = unique_by_key(
        articles(store, magazine_id)
            .into_iter()
            .map(|a| a.author_id()),
        |id| *id,
    );

    author_ids
        .into_iter()
        .filter_map(|id| store.authors.get(&id))
        .collect()
}

/// Titles of this Magazine's Articles, in log order
///
/// Returns `None` when the Magazine has no Articles.
pub fn article_titles(store: &Registry, magazine_id: MagazineId) -> Option<Vec<&str>> {
    let titles: Vec<&str> = articles(store, magazine_id)
        .into_iter()
        .map(Article::title)
        .collect();

    if titles.is_empty() {
        None
    } else {
        Some(titles)
    }
}

/// Authors with more than two Articles in this Magazine, by first appearance
///
/// Returns `None` when no Author qualifies.
pub fn contributing_authors(store: &Registry, magazine_id: MagazineId) -> Option<Vec<&Author>> {
    let counts = count_by_key(
        articles(store, magazine_id)
            .into_iter()
            .map(|a| a.author_id()),
        |id| *id,
    );

    let qualifying: Vec<&Author> = counts
        .into_iter()
        .filter(|(_, count)| *count > CONTRIBUTING_AUTHOR_THRESHOLD)
        .filter_map(|(id, _)| store.authors.get(&id))
        .collect();

    if qualifying.is_empty() {
        None
    } else {
        Some(qualifying)
    }
}
