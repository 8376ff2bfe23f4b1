//! Field validation rules
//!
//! These checks run at construction time (where a failure is an error) and
//! again inside the Magazine setters (where a failure silently drops the
//! assignment). Lengths count Unicode scalar values, not bytes.

use crate::errors::{ModelError, Result};

/// Shortest accepted magazine name
pub const MAGAZINE_NAME_MIN: usize = 2;
/// Longest accepted magazine name
pub const MAGAZINE_NAME_MAX: usize = 16;
/// Shortest accepted article title
pub const TITLE_MIN: usize = 5;
/// Longest accepted article title
pub const TITLE_MAX: usize = 50;

fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Validate an author name
///
/// # Errors
/// * `EmptyAuthorName` - If the name is the empty string
pub fn validate_author_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ModelError::EmptyAuthorName);
    }
    Ok(())
}

/// Validate a magazine name
///
/// # Errors
/// * `InvalidMagazineName` - If the length is outside `[2, 16]`
pub fn validate_magazine_name(name: &str) -> Result<()> {
    let length = char_len(name);
    if !(MAGAZINE_NAME_MIN..=MAGAZINE_NAME_MAX).contains(&length) {
        return Err(ModelError::InvalidMagazineName { length });
    }
    Ok(())
}

/// Validate a magazine category
///
/// # Errors
/// * `EmptyCategory` - If the category is the empty string
pub fn validate_category(category: &str) -> Result<()> {
    if category.is_empty() {
        return Err(ModelError::EmptyCategory);
    }
    Ok(())
}

/// Validate an article title
///
/// # Errors
/// * `InvalidTitle` - If the length is outside `[5, 50]`
pub fn validate_title(title: &str) -> Result<()> {
    let length = char_len(title);
    if !(TITLE_MIN..=TITLE_MAX).contains(&length) {
        return Err(ModelError::InvalidTitle { length });
    }
    Ok(())
}
