//! Command types for loosely typed callers
//!
//! Arguments arrive as `serde_json::Value` so that callers working from
//! deserialized input get the same type checks as the typed operations
//! would enforce at compile time. A missing argument deserializes as
//! `null` and is reported as a type error by `apply()`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Command enum representing every mutation of the registry
///
/// Commands are processed by the `apply()` function.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Command {
    /// Create a new Author
    AuthorCreate {
        #[serde(default)]
        name: Value,
    },

    /// Create a new Magazine
    MagazineCreate {
        #[serde(default)]
        name: Value,
        #[serde(default)]
        category: Value,
    },

    /// Create a new Article and append it to the log
    ArticleCreate {
        #[serde(default)]
        author_id: Value,
        #[serde(default)]
        magazine_id: Value,
        #[serde(default)]
        title: Value,
    },

    /// Assign a Magazine name (validated, silently dropped when invalid)
    MagazineRename {
        #[serde(default)]
        magazine_id: Value,
        #[serde(default)]
        name: Value,
    },

    /// Assign a Magazine category (validated, silently dropped when invalid)
    MagazineRecategorize {
        #[serde(default)]
        magazine_id: Value,
        #[serde(default)]
        category: Value,
    },

    /// Assign an Article title (always ignored)
    ArticleRetitle {
        #[serde(default)]
        article_id: Value,
        #[serde(default)]
        title: Value,
    },
}

impl Command {
    /// Stable operation name, matching the serialized `op` tag
    pub fn name(&self) -> &'static str {
        match self {
            Command::AuthorCreate { .. } => "author_create",
            Command::MagazineCreate { .. } => "magazine_create",
            Command::ArticleCreate { .. } => "article_create",
            Command::MagazineRename { .. } => "magazine_rename",
            Command::MagazineRecategorize { .. } => "magazine_recategorize",
            Command::ArticleRetitle { .. } => "article_retitle",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_tagged_command() {
        let cmd: Command =
            serde_json::from_value(json!({"op": "magazine_create", "name": "SciMag", "category": "science"}))
                .unwrap();

        assert_eq!(
            cmd,
            Command::MagazineCreate {
                name: json!("SciMag"),
                category: json!("science"),
            }
        );
        assert_eq!(cmd.name(), "magazine_create");
    }

    #[test]
    fn test_missing_argument_is_null() {
        let cmd: Command = serde_json::from_value(json!({"op": "author_create"})).unwrap();
        assert_eq!(cmd, Command::AuthorCreate { name: Value::Null });
    }

    #[test]
    fn test_name_matches_serialized_tag() {
        let cmd = Command::ArticleRetitle {
            article_id: json!("x"),
            title: json!("y"),
        };
        let value = serde_json::to_value(&cmd).unwrap();
        assert_eq!(value["op"], json!(cmd.name()));
    }
}
