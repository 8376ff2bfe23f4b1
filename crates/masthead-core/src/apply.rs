//! Command boundary apply function
//!
//! `apply()` is the entry point for callers that hold loosely typed input.
//! It reproduces the argument kind checks that typed callers get from the
//! compiler, then delegates to the operations in [`crate::ops`].
//!
//! ## Atomicity Contract
//!
//! - **All-or-nothing**: every check runs before the single mutation a
//!   command performs, so a failed command leaves the Registry unchanged
//! - **No panics**: invalid input returns typed errors
//! - **Silent setters stay silent**: an assignment command whose value is
//!   not text is ignored exactly like one whose text fails validation
//!
//! ## Example
//!
//! ```
//! use masthead_core::{apply::apply, Applied, Command, Registry};
//! use serde_json::json;
//!
//! let mut registry = Registry::new();
//! let cmd = Command::AuthorCreate { name: json!("Jo") };
//!
//! let applied = apply(&mut registry, cmd).unwrap();
//! assert!(matches!(applied, Applied::Author(_)));
//! ```

use std::str::FromStr;

use masthead_core_types::{ArticleId, AuthorId, MagazineId};
use serde_json::Value;

use crate::commands::Command;
use crate::errors::{ModelError, Result};
use crate::log_ignored;
use crate::ops::{article_ops, author_ops, magazine_ops, Registry};

/// Outcome of a successfully applied command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    /// A new Author was created
    Author(AuthorId),
    /// A new Magazine was created
    Magazine(MagazineId),
    /// A new Article was created and appended to the log
    Article(ArticleId),
    /// An assignment command ran (whether or not the value was kept)
    Updated,
}

/// Apply a command to a registry
///
/// # Errors
///
/// * `NotText` - A creation argument is not a JSON string
/// * `MalformedId` - An ID argument is a string but not a UUID
/// * `AuthorNotFound` / `MagazineNotFound` / `ArticleNotFound` - An ID does
///   not name an entity of the required kind in this Registry
/// * Value errors from the underlying operation (empty name, bad lengths)
pub fn apply(store: &mut Registry, cmd: Command) -> Result<Applied> {
    match cmd {
        Command::AuthorCreate { name } => {
            let name = text_arg(&name, "name")?;
            author_ops::create_author(store, name).map(Applied::Author)
        }

        Command::MagazineCreate { name, category } => {
            let name = text_arg(&name, "name")?;
            let category = text_arg(&category, "category")?;
            magazine_ops::create_magazine(store, name, category).map(Applied::Magazine)
        }

        Command::ArticleCreate {
            author_id,
            magazine_id,
            title,
        } => {
            let author_id = resolve_author(store, &author_id)?;
            let magazine_id = resolve_magazine(store, &magazine_id)?;
            let title = text_arg(&title, "title")?;
            article_ops::create_article(store, author_id, magazine_id, title).map(Applied::Article)
        }

        Command::MagazineRename { magazine_id, name } => {
            let magazine_id = resolve_magazine(store, &magazine_id)?;
            match name.as_str() {
                Some(name) => magazine_ops::rename_magazine(store, magazine_id, name)?,
                None => {
                    log_ignored!("name", magazine_id = %magazine_id);
                }
            }
            Ok(Applied::Updated)
        }

        Command::MagazineRecategorize {
            magazine_id,
            category,
        } => {
            let magazine_id = resolve_magazine(store, &magazine_id)?;
            match category.as_str() {
                Some(category) => {
                    magazine_ops::recategorize_magazine(store, magazine_id, category)?
                }
                None => {
                    log_ignored!("category", magazine_id = %magazine_id);
                }
            }
            Ok(Applied::Updated)
        }

        Command::ArticleRetitle { article_id, title } => {
            let article_id: ArticleId = id_arg(&article_id, "article_id")?;
            store.get_article(article_id)?;
            match title.as_str() {
                Some(title) => article_ops::retitle_article(store, article_id, title)?,
                None => {
                    log_ignored!("title", article_id = %article_id);
                }
            }
            Ok(Applied::Updated)
        }
    }
}

fn text_arg<'a>(value: &'a Value, field: &str) -> Result<&'a str> {
    value.as_str().ok_or_else(|| ModelError::NotText {
        field: field.to_string(),
    })
}

fn id_arg<T: FromStr>(value: &Value, field: &str) -> Result<T> {
    let raw = text_arg(value, field)?;
    raw.parse().map_err(|_| ModelError::MalformedId {
        field: field.to_string(),
        value: raw.to_string(),
    })
}

fn resolve_author(store: &Registry, value: &Value) -> Result<AuthorId> {
    let id: AuthorId = id_arg(value, "author_id")?;
    store.get_author(id)?;
    Ok(id)
}

fn resolve_magazine(store: &Registry, value: &Value) -> Result<MagazineId> {
    let id: MagazineId = id_arg(value, "magazine_id")?;
    store.get_magazine(id)?;
    Ok(id)
}
