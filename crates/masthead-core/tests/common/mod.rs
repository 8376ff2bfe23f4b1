use masthead_core::ops::{author_ops, magazine_ops};
use masthead_core::{ArticleId, AuthorId, MagazineId, Registry};

/// Create a new empty Registry for testing
#[allow(dead_code)]
pub fn new_registry() -> Registry {
    Registry::new()
}

/// Create an Author, panicking on invalid input
#[allow(dead_code)]
pub fn author(registry: &mut Registry, name: &str) -> AuthorId {
    author_ops::create_author(registry, name).unwrap()
}

/// Create a Magazine, panicking on invalid input
#[allow(dead_code)]
pub fn magazine(registry: &mut Registry, name: &str, category: &str) -> MagazineId {
    magazine_ops::create_magazine(registry, name, category).unwrap()
}

/// Write `count` Articles by `author` in `magazine` with distinct titles
#[allow(dead_code)]
pub fn publish_many(
    registry: &mut Registry,
    author: AuthorId,
    magazine: MagazineId,
    count: usize,
) -> Vec<ArticleId> {
    (0..count)
        .map(|i| {
            author_ops::add_article(registry, author, magazine, format!("Article #{}", i)).unwrap()
        })
        .collect()
}
