mod common;

use common::{author, magazine, new_registry};
use masthead_core::ops::author_ops;
use masthead_core::queries::author_queries;
use masthead_core::ModelError;

// ===== CONSTRUCTION =====

#[test]
fn test_create_author_stores_name() {
    let mut registry = new_registry();
    let id = author_ops::create_author(&mut registry, "Jo").unwrap();

    let jo = registry.get_author(id).unwrap();
    assert_eq!(jo.id(), id);
    assert_eq!(jo.name(), "Jo");
}

#[test]
fn test_create_author_rejects_empty_name() {
    let mut registry = new_registry();
    let err = author_ops::create_author(&mut registry, "").unwrap_err();

    assert_eq!(err, ModelError::EmptyAuthorName);
    assert!(err.is_value_error());
    assert!(registry.list_authors().is_empty());
}

#[test]
fn test_single_space_name_is_accepted() {
    let mut registry = new_registry();
    assert!(author_ops::create_author(&mut registry, " ").is_ok());
}

// ===== IMMUTABLE NAME =====

#[test]
fn test_name_never_changes() {
    let mut registry = new_registry();
    let jo = author(&mut registry, "Jo");

    author_ops::rename_author(&mut registry, jo, "Ann").unwrap();
    author_ops::rename_author(&mut registry, jo, "").unwrap();
    registry.get_author_mut(jo).unwrap().set_name("Direct");

    assert_eq!(registry.get_author(jo).unwrap().name(), "Jo");
}

// ===== QUERIES =====

#[test]
fn test_articles_are_identity_filtered() {
    let mut registry = new_registry();
    let jo = author(&mut registry, "Jo");
    let other_jo = author(&mut registry, "Jo");
    let sci = magazine(&mut registry, "SciMag", "science");

    let mine = author_ops::add_article(&mut registry, jo, sci, "Space Facts").unwrap();
    author_ops::add_article(&mut registry, other_jo, sci, "Other Facts").unwrap();

    let articles = author_queries::articles(&registry, jo);
    assert_eq!(articles.len(), 1);
    assert_eq!(articles[0].id(), mine);
}

#[test]
fn test_magazines_first_appearance_order() {
    let mut registry = new_registry();
    let jo = author(&mut registry, "Jo");
    let sci = magazine(&mut registry, "SciMag", "science");
    let art = magazine(&mut registry, "ArtNow", "art");

    author_ops::add_article(&mut registry, jo, art, "Colour Theory").unwrap();
    author_ops::add_article(&mut registry, jo, sci, "Space Facts").unwrap();
    author_ops::add_article(&mut registry, jo, art, "Brush Strokes").unwrap();

    let names: Vec<&str> = author_queries::magazines(&registry, jo)
        .iter()
        .map(|m| m.name())
        .collect();
    assert_eq!(names, vec!["ArtNow", "SciMag"]);
}

#[test]
fn test_magazines_with_equal_fields_stay_distinct() {
    let mut registry = new_registry();
    let jo = author(&mut registry, "Jo");
    let first = magazine(&mut registry, "Twin", "general");
    let second = magazine(&mut registry, "Twin", "general");

    author_ops::add_article(&mut registry, jo, first, "First Piece").unwrap();
    author_ops::add_article(&mut registry, jo, second, "Second Piece").unwrap();

    let ids: Vec<_> = author_queries::magazines(&registry, jo)
        .iter()
        .map(|m| m.id())
        .collect();
    assert_eq!(ids, vec![first, second]);
    // categories collapse by value even though magazines do not
    assert_eq!(
        author_queries::topic_areas(&registry, jo),
        Some(vec!["general"])
    );
}

#[test]
fn test_topic_areas_sentinel_without_articles() {
    let mut registry = new_registry();
    let jo = author(&mut registry, "Jo");
    magazine(&mut registry, "SciMag", "science");

    assert_eq!(author_queries::topic_areas(&registry, jo), None);
    assert!(author_queries::magazines(&registry, jo).is_empty());
}

#[test]
fn test_queries_see_articles_added_later() {
    let mut registry = new_registry();
    let jo = author(&mut registry, "Jo");
    let sci = magazine(&mut registry, "SciMag", "science");

    assert!(author_queries::articles(&registry, jo).is_empty());
    author_ops::add_article(&mut registry, jo, sci, "Space Facts").unwrap();
    assert_eq!(author_queries::articles(&registry, jo).len(), 1);
}
