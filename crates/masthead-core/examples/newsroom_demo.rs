//! Newsroom Demonstration
//!
//! Builds a small set of authors, magazines and articles, then walks the
//! relationship queries and the silent assignment rules.
//!
//! Run with `MASTHEAD_LOG_PROFILE=dev` to see operation boundaries.

use masthead_core::logging_facility::{init, Profile};
use masthead_core::ops::{author_ops, magazine_ops};
use masthead_core::queries::{author_queries, magazine_queries};
use masthead_core::{apply, Command, Registry};
use serde_json::json;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init(Profile::from_env());
    println!("=== Masthead Newsroom Demo ===\n");

    let mut registry = Registry::new();

    let jo = author_ops::create_author(&mut registry, "Jo")?;
    let ann = author_ops::create_author(&mut registry, "Ann")?;
    let sci = magazine_ops::create_magazine(&mut registry, "SciMag", "science")?;
    let art = magazine_ops::create_magazine(&mut registry, "ArtNow", "art")?;

    for title in ["Space Facts", "Moon Facts", "Star Facts"] {
        author_ops::add_article(&mut registry, jo, sci, title)?;
    }
    author_ops::add_article(&mut registry, ann, sci, "Comet Tails")?;
    author_ops::add_article(&mut registry, ann, art, "Colour Theory")?;

    println!("## Articles in the log: {}\n", registry.len());

    for magazine in registry.list_magazines() {
        let contributors: Vec<&str> = magazine_queries::contributors(&registry, magazine.id())
            .iter()
            .map(|a| a.name())
            .collect();
        println!("{} ({})", magazine.name(), magazine.category());
        println!("  contributors: {:?}", contributors);
        println!(
            "  titles: {:?}",
            magazine_queries::article_titles(&registry, magazine.id())
        );
        match magazine_queries::contributing_authors(&registry, magazine.id()) {
            Some(authors) => println!(
                "  regulars: {:?}",
                authors.iter().map(|a| a.name()).collect::<Vec<_>>()
            ),
            None => println!("  regulars: none"),
        }
    }

    println!();
    for author in registry.list_authors() {
        println!(
            "{} writes about {:?}",
            author.name(),
            author_queries::topic_areas(&registry, author.id())
        );
    }

    // ===== Silent assignment rules =====
    println!("\n## Assignments\n");

    magazine_ops::rename_magazine(&mut registry, sci, "x")?;
    println!("rename to 'x'      -> {}", registry.get_magazine(sci)?.name());
    magazine_ops::rename_magazine(&mut registry, sci, "Cosmos")?;
    println!("rename to 'Cosmos' -> {}", registry.get_magazine(sci)?.name());

    // ===== Loosely typed input =====
    println!("\n## Commands\n");

    let cmd = Command::AuthorCreate { name: json!(42) };
    match apply(&mut registry, cmd) {
        Ok(applied) => println!("unexpected: {:?}", applied),
        Err(e) => println!("author_create with a number -> {} ({:?})", e, e.kind()),
    }

    let cmd: Command = serde_json::from_value(json!({
        "op": "article_create",
        "author_id": ann.to_string(),
        "magazine_id": sci.to_string(),
        "title": "Tiny",
    }))?;
    match apply(&mut registry, cmd) {
        Ok(applied) => println!("unexpected: {:?}", applied),
        Err(e) => println!("article_create with 'Tiny' -> {} ({:?})", e, e.kind()),
    }

    println!("\nArticles in the log: {}", registry.len());
    Ok(())
}
