use indexmap::IndexMap;
use masthead_core_types::{ArticleId, AuthorId, MagazineId};

use crate::errors::{ModelError, Result};
use crate::model::{Article, Author, Magazine};

/// In-memory registry of every constructed entity
///
/// The article log is append-only: its order is construction order and no
/// entry is ever removed or reordered. It is the only data source for
/// relationship queries. Authors and magazines are kept in insertion order
/// so that references in the log can be resolved.
///
/// Not thread-safe (no Arc/RwLock) - designed for single-threaded use.
/// Each caller owns its own Registry, so tests never share state.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    pub(crate) authors: IndexMap<AuthorId, Author>,
    pub(crate) magazines: IndexMap<MagazineId, Magazine>,
    pub(crate) articles: Vec<Article>,
}

impl Registry {
    /// Create a new empty Registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Get an Author by ID
    ///
    /// # Errors
    ///
    /// Returns `AuthorNotFound` if no Author with this ID was constructed here.
    pub fn get_author(&self, id: AuthorId) -> Result<&Author> {
        self.authors
            .get(&id)
            .ok_or_else(|| ModelError::AuthorNotFound {
                author_id: id.to_string(),
            })
    }

    /// Get a mutable reference to an Author by ID
    ///
    /// # Errors
    ///
    /// Returns `AuthorNotFound` if no Author with this ID was constructed here.
    pub fn get_author_mut(&mut self, id: AuthorId) -> Result<&mut Author> {
        self.authors
            .get_mut(&id)
            .ok_or_else(|| ModelError::AuthorNotFound {
                author_id: id.to_string(),
            })
    }

    /// Get a Magazine by ID
    ///
    /// # Errors
    ///
    /// Returns `MagazineNotFound` if no Magazine with this ID was constructed here.
    pub fn get_magazine(&self, id: MagazineId) -> Result<&Magazine> {
        self.magazines
            .get(&id)
            .ok_or_else(|| ModelError::MagazineNotFound {
                magazine_id: id.to_string(),
            })
    }

    /// Get a mutable reference to a Magazine by ID
    ///
    /// # Errors
    ///
    /// Returns `MagazineNotFound` if no Magazine with this ID was constructed here.
    pub fn get_magazine_mut(&mut self, id: MagazineId) -> Result<&mut Magazine> {
        self.magazines
            .get_mut(&id)
            .ok_or_else(|| ModelError::MagazineNotFound {
                magazine_id: id.to_string(),
            })
    }

    /// Get an Article by ID
    ///
    /// # Errors
    ///
    /// Returns `ArticleNotFound` if the log holds no Article with this ID.
    pub fn get_article(&self, id: ArticleId) -> Result<&Article> {
        self.articles
            .iter()
            .find(|a| a.id() == id)
            .ok_or_else(|| ModelError::ArticleNotFound {
                article_id: id.to_string(),
            })
    }

    /// Get a mutable reference to an Article by ID
    ///
    /// Only the Article's no-op setter is reachable through this reference;
    /// the log itself cannot be reordered or shrunk.
    ///
    /// # Errors
    ///
    /// Returns `ArticleNotFound` if the log holds no Article with this ID.
    pub fn get_article_mut(&mut self, id: ArticleId) -> Result<&mut Article> {
        self.articles
            .iter_mut()
            .find(|a| a.id() == id)
            .ok_or_else(|| ModelError::ArticleNotFound {
                article_id: id.to_string(),
            })
    }

    /// All Authors in construction order
    pub fn list_authors(&self) -> Vec<&Author> {
        self.authors.values().collect()
    }

    /// All Magazines in construction order
    pub fn list_magazines(&self) -> Vec<&Magazine> {
        self.magazines.values().collect()
    }

    /// The article log, in construction order
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// Number of Articles in the log
    pub fn len(&self) -> usize {
        self.articles.len()
    }

    /// Whether the log is empty
    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    pub(crate) fn insert_author(&mut self, author: Author) {
        self.authors.insert(author.id(), author);
    }

    pub(crate) fn insert_magazine(&mut self, magazine: Magazine) {
        self.magazines.insert(magazine.id(), magazine);
    }

    /// Append to the article log
    ///
    /// Callers must have resolved both references against this Registry.
    pub(crate) fn append_article(&mut self, article: Article) {
        debug_assert!(self.authors.contains_key(&article.author_id()));
        debug_assert!(self.magazines.contains_key(&article.magazine_id()));
        self.articles.push(article);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_registry() {
        let registry = Registry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.len(), 0);
        assert!(registry.list_authors().is_empty());
        assert!(registry.list_magazines().is_empty());
    }

    #[test]
    fn test_insert_and_get_author() {
        let mut registry = Registry::new();
        let id = AuthorId::new();
        registry.insert_author(Author::new(id, "Jo".to_string()));

        let author = registry.get_author(id).unwrap();
        assert_eq!(author.name(), "Jo");
    }

    #[test]
    fn test_get_unknown_magazine() {
        let registry = Registry::new();
        let result = registry.get_magazine(MagazineId::new());
        assert!(matches!(result, Err(ModelError::MagazineNotFound { .. })));
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let mut registry = Registry::new();
        let ids: Vec<MagazineId> = (0..5).map(|_| MagazineId::new()).collect();
        for (i, id) in ids.iter().enumerate() {
            registry.insert_magazine(Magazine::new(
                *id,
                format!("Mag{}", i),
                "general".to_string(),
            ));
        }

        let listed: Vec<MagazineId> = registry.list_magazines().iter().map(|m| m.id()).collect();
        assert_eq!(listed, ids);
    }
}
