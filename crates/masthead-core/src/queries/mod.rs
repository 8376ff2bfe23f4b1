//! Query module for read-only relationship lookups
//!
//! Relationships are never stored. Every query scans the registry's article
//! log at call time and returns borrowed views into the registry.
//!
//! Key principles:
//! - All queries are read-only (no mutations)
//! - Results follow article log order; duplicates keep their first appearance
//! - Identity is the entity ID, never field values
//! - `topic_areas`, `article_titles` and `contributing_authors` return `None`
//!   for "no data"; the other queries return a possibly empty `Vec`

pub mod author_queries;
pub mod dedup;
pub mod magazine_queries;

pub use dedup::{count_by_key, unique_by_key};
