use masthead_core_types::AuthorId;
use serde::{Deserialize, Serialize};

use crate::log_ignored;

/// Author - a named person who writes articles
///
/// An Author holds no references to its articles. Every relationship is
/// recomputed from the registry's article log when queried.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    id: AuthorId,
    name: String,
}

impl Author {
    /// Build an Author from an already validated name
    pub(crate) fn new(id: AuthorId, name: String) -> Self {
        Self { id, name }
    }

    /// Identity of this Author
    pub fn id(&self) -> AuthorId {
        self.id
    }

    /// The name given at construction
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Names are fixed at construction; every assignment is ignored.
    pub fn set_name(&mut self, _name: impl Into<String>) {
        log_ignored!("name", author_id = %self.id);
    }
}
