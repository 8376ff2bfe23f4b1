//! Core types shared across Masthead facilities
//!
//! This crate provides foundational types used by the entity model,
//! the error facility and the logging facility:
//!
//! - **Identifiers**: AuthorId, MagazineId, ArticleId
//! - **Schema constants**: Canonical field keys and event names

pub mod ids;
pub mod schema;

pub use ids::{ArticleId, AuthorId, MagazineId};
