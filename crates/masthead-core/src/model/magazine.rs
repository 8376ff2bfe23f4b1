use masthead_core_types::MagazineId;
use serde::{Deserialize, Serialize};

use crate::log_ignored;
use crate::rules::validation::{validate_category, validate_magazine_name};

/// Magazine - a named, categorized publication that receives articles
///
/// Unlike the other entities, both fields stay mutable for the lifetime of
/// the Magazine. A new value is applied only when it passes the same check
/// as construction; anything else is dropped without an error and the
/// previous value is kept.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Magazine {
    id: MagazineId,
    name: String,
    category: String,
}

impl Magazine {
    /// Build a Magazine from an already validated name and category
    pub(crate) fn new(id: MagazineId, name: String, category: String) -> Self {
        Self { id, name, category }
    }

    /// Identity of this Magazine
    pub fn id(&self) -> MagazineId {
        self.id
    }

    /// Current name (2 to 16 characters)
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current category (never empty)
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Replace the name if the new value is 2 to 16 characters long
    pub fn set_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        if validate_magazine_name(&name).is_ok() {
            self.name = name;
        } else {
            log_ignored!("name", magazine_id = %self.id);
        }
    }

    /// Replace the category if the new value is non-empty
    pub fn set_category(&mut self, category: impl Into<String>) {
        let category = category.into();
        if validate_category(&category).is_ok() {
            self.category = category;
        } else {
            log_ignored!("category", magazine_id = %self.id);
        }
    }
}
