use masthead_core_types::{ArticleId, AuthorId, MagazineId};

use super::registry::Registry;
use crate::errors::Result;
use crate::model::Article;
use crate::rules::validation::validate_title;
use crate::{log_op_end, log_op_error, log_op_start};

/// Create a new Article and append it to the article log
///
/// Checks run in order: author reference, magazine reference, title. The
/// log is only touched once every check has passed, so a failure leaves the
/// Registry exactly as it was.
///
/// # Arguments
/// * `store` - Mutable reference to the Registry
/// * `author_id` - Author who wrote the Article
/// * `magazine_id` - Magazine the Article appears in
/// * `title` - Title of 5 to 50 characters
///
/// # Returns
/// The ID of the newly created Article
///
/// # Errors
/// * `AuthorNotFound` - If `author_id` names no Author in this Registry
/// * `MagazineNotFound` - If `magazine_id` names no Magazine in this Registry
/// * `InvalidTitle` - If the title length is outside `[5, 50]`
pub fn create_article(
    store: &mut Registry,
    author_id: AuthorId,
    magazine_id: MagazineId,
    title: impl Into<String>,
) -> Result<ArticleId> {
    log_op_start!(
        "article_create",
        author_id = %author_id,
        magazine_id = %magazine_id
    );
    let start = std::time::Instant::now();

    let article_id = create_article_impl(store, author_id, magazine_id, title.into())
        .map_err(|e| {
            log_op_error!(
                "article_create",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

    log_op_end!(
        "article_create",
        duration_ms = start.elapsed().as_millis() as u64,
        article_id = %article_id,
        registry_len = store.len() as u64
    );

    Ok(article_id)
}

fn create_article_impl(
    store: &mut Registry,
    author_id: AuthorId,
    magazine_id: MagazineId,
    title: String,
) -> Result<ArticleId> {
    store.get_author(author_id)?;
    store.get_magazine(magazine_id)?;
    validate_title(&title)?;

    let article_id = ArticleId::new();
    store.append_article(Article::new(article_id, author_id, magazine_id, title));

    Ok(article_id)
}

/// Attempt to change an Article's title
///
/// Titles never change after construction, so this only confirms the
/// Article exists. The new value is ignored whether or not it would pass
/// validation.
///
/// # Errors
/// * `ArticleNotFound` - If `article_id` names no Article in this Registry
pub fn retitle_article(
    store: &mut Registry,
    article_id: ArticleId,
    title: impl Into<String>,
) -> Result<()> {
    log_op_start!("article_retitle", article_id = %article_id);
    let start = std::time::Instant::now();

    store
        .get_article_mut(article_id)
        .map_err(|e| {
            log_op_error!(
                "article_retitle",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?
        .set_title(title);

    log_op_end!(
        "article_retitle",
        duration_ms = start.elapsed().as_millis() as u64,
        article_id = %article_id
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ModelError;
    use crate::ops::{author_ops, magazine_ops};

    fn seeded() -> (Registry, AuthorId, MagazineId) {
        let mut store = Registry::new();
        let author = author_ops::create_author(&mut store, "Jo").unwrap();
        let magazine = magazine_ops::create_magazine(&mut store, "SciMag", "science").unwrap();
        (store, author, magazine)
    }

    #[test]
    fn test_create_article_success() {
        let (mut store, author, magazine) = seeded();
        let id = create_article(&mut store, author, magazine, "Space Facts").unwrap();

        let article = store.get_article(id).unwrap();
        assert_eq!(article.title(), "Space Facts");
        assert_eq!(article.author_id(), author);
        assert_eq!(article.magazine_id(), magazine);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_create_article_rejects_short_title() {
        let (mut store, author, magazine) = seeded();
        let result = create_article(&mut store, author, magazine, "Tiny");

        assert_eq!(result, Err(ModelError::InvalidTitle { length: 4 }));
        assert!(store.is_empty());
    }

    #[test]
    fn test_author_checked_before_title() {
        let (mut store, _, magazine) = seeded();
        let result = create_article(&mut store, AuthorId::new(), magazine, "");

        assert!(matches!(result, Err(ModelError::AuthorNotFound { .. })));
        assert!(store.is_empty());
    }

    #[test]
    fn test_retitle_keeps_original() {
        let (mut store, author, magazine) = seeded();
        let id = create_article(&mut store, author, magazine, "Space Facts").unwrap();

        retitle_article(&mut store, id, "Ocean Facts").unwrap();
        assert_eq!(store.get_article(id).unwrap().title(), "Space Facts");
    }
}
