use masthead_core_types::{ArticleId, AuthorId, MagazineId};

use super::{article_ops, registry::Registry};
use crate::errors::Result;
use crate::model::Author;
use crate::rules::validation::validate_author_name;
use crate::{log_op_end, log_op_error, log_op_start};

/// Create a new Author
///
/// # Arguments
/// * `store` - Mutable reference to the Registry
/// * `name` - Non-empty name, fixed for the Author's lifetime
///
/// # Returns
/// The ID of the newly created Author
///
/// # Errors
/// * `EmptyAuthorName` - If the name is empty
pub fn create_author(store: &mut Registry, name: impl Into<String>) -> Result<AuthorId> {
    log_op_start!("author_create");
    let start = std::time::Instant::now();

    let name = name.into();
    if let Err(e) = validate_author_name(&name) {
        log_op_error!(
            "author_create",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        return Err(e);
    }

    let author_id = AuthorId::new();
    store.insert_author(Author::new(author_id, name));

    log_op_end!(
        "author_create",
        duration_ms = start.elapsed().as_millis() as u64,
        author_id = %author_id
    );

    Ok(author_id)
}

/// Write a new Article by this Author
///
/// Equivalent to `article_ops::create_article` with the author fixed;
/// construction errors are returned unchanged.
///
/// # Errors
/// * `AuthorNotFound` - If `author_id` names no Author in this Registry
/// * `MagazineNotFound` - If `magazine_id` names no Magazine in this Registry
/// * `InvalidTitle` - If the title length is outside `[5, 50]`
pub fn add_article(
    store: &mut Registry,
    author_id: AuthorId,
    magazine_id: MagazineId,
    title: impl Into<String>,
) -> Result<ArticleId> {
    article_ops::create_article(store, author_id, magazine_id, title)
}

/// Attempt to rename an Author
///
/// Author names never change; the lookup is the only thing that can fail.
///
/// # Errors
/// * `AuthorNotFound` - If `author_id` names no Author in this Registry
pub fn rename_author(
    store: &mut Registry,
    author_id: AuthorId,
    name: impl Into<String>,
) -> Result<()> {
    log_op_start!("author_rename", author_id = %author_id);
    let start = std::time::Instant::now();

    store
        .get_author_mut(author_id)
        .map_err(|e| {
            log_op_error!(
                "author_rename",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?
        .set_name(name);

    log_op_end!(
        "author_rename",
        duration_ms = start.elapsed().as_millis() as u64,
        author_id = %author_id
    );
    Ok(())
}
