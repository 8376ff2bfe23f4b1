//! Relationship queries anchored on an Author
//!
//! Each query filters the article log at call time, so results always match
//! the current log.

use masthead_core_types::AuthorId;

use super::dedup::unique_by_key;
use crate::model::{Article, Magazine};
use crate::ops::Registry;

/// Articles written by this Author, in log order
///
/// An ID that names no Author simply matches nothing.
pub fn articles(store: &Registry, author_id: AuthorId) -> Vec<&Article> {
    store
        .articles()
        .iter()
        .filter(|a| a.author_id() == author_id)
        .collect()
}

/// Distinct Magazines this Author has written for, by first appearance
pub fn magazines(store: &Registry, author_id: AuthorId) -> Vec<&Magazine> {
    let magazine_ids = unique_by_key(
        articles(store, author_id)
            .into_iter()
            .map(|a| a.magazine_id()),
        |id| *id,
    );

    // every logged reference resolves; see Registry::append_article
    magazine_ids
        .into_iter()
        .filter_map(|id| store.magazines.get(&id))
        .collect()
}

/// Distinct categories of this Author's Magazines, by first appearance
///
/// Returns `None` when the Author has no Articles.
pub fn topic_areas(store: &Registry, author_id: AuthorId) -> Option<Vec<&str>> {
    let magazines = magazines(store, author_id);
    if magazines.is_empty() {
        return None;
    }

    // categories compare by value, not by Magazine
    Some(unique_by_key(
        magazines.into_iter().map(Magazine::category),
        |category| *category,
    ))
}
