//! Masthead Core - in-memory author/magazine/article model
//!
//! This crate provides the entity model and its relationship queries:
//! - Author, Magazine and Article entities with validated construction
//! - A caller-owned Registry holding the append-only article log
//! - Relationship queries derived from the log at call time
//! - A command boundary for loosely typed input
//! - Structured error and logging facilities
//!
//! # Example
//!
//! ```
//! use masthead_core::ops::{author_ops, magazine_ops};
//! use masthead_core::queries::{author_queries, magazine_queries};
//! use masthead_core::Registry;
//!
//! let mut registry = Registry::new();
//! let jo = author_ops::create_author(&mut registry, "Jo").unwrap();
//! let sci = magazine_ops::create_magazine(&mut registry, "SciMag", "science").unwrap();
//! author_ops::add_article(&mut registry, jo, sci, "Space Facts").unwrap();
//!
//! let magazines = author_queries::magazines(&registry, jo);
//! assert_eq!(magazines[0].name(), "SciMag");
//! assert_eq!(magazine_queries::contributors(&registry, sci)[0].name(), "Jo");
//! ```

pub mod apply;
pub mod commands;
pub mod errors;
pub mod logging_facility;
pub mod model;
pub mod ops;
pub mod queries;
pub mod rules;

pub use masthead_core_types::schema;
pub use masthead_core_types::{ArticleId, AuthorId, MagazineId};

// Re-export commonly used types
pub use apply::{apply, Applied};
pub use commands::Command;
pub use errors::{ExError, ExErrorKind, ModelError, Result};
pub use model::{Article, Author, Magazine};
pub use ops::Registry;
