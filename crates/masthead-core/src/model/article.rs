use masthead_core_types::{ArticleId, AuthorId, MagazineId};
use serde::{Deserialize, Serialize};

use crate::log_ignored;

/// Article - the join between one Author and one Magazine
///
/// Each Article:
/// - References exactly one Author and one Magazine, fixed at construction
/// - Carries a title of 5 to 50 characters, fixed at construction
/// - Lives in the registry's article log from construction onwards
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    id: ArticleId,
    author_id: AuthorId,
    magazine_id: MagazineId,
    title: String,
}

impl Article {
    /// Build an Article from validated references and title
    pub(crate) fn new(
        id: ArticleId,
        author_id: AuthorId,
        magazine_id: MagazineId,
        title: String,
    ) -> Self {
        Self {
            id,
            author_id,
            magazine_id,
            title,
        }
    }

    /// Identity of this Article
    pub fn id(&self) -> ArticleId {
        self.id
    }

    /// The Author who wrote this Article
    pub fn author_id(&self) -> AuthorId {
        self.author_id
    }

    /// The Magazine this Article appeared in
    pub fn magazine_id(&self) -> MagazineId {
        self.magazine_id
    }

    /// The title given at construction
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Titles are fixed at construction; every assignment is ignored,
    /// including ones that would pass validation.
    pub fn set_title(&mut self, _title: impl Into<String>) {
        log_ignored!("title", article_id = %self.id);
    }
}
