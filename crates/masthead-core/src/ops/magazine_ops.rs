use masthead_core_types::MagazineId;

use super::registry::Registry;
use crate::errors::Result;
use crate::model::Magazine;
use crate::rules::validation::{validate_category, validate_magazine_name};
use crate::{log_op_end, log_op_error, log_op_start};

/// Create a new Magazine
///
/// # Arguments
/// * `store` - Mutable reference to the Registry
/// * `name` - Name of 2 to 16 characters
/// * `category` - Non-empty category
///
/// # Returns
/// The ID of the newly created Magazine
///
/// # Errors
/// * `InvalidMagazineName` - If the name length is outside `[2, 16]`
/// * `EmptyCategory` - If the category is empty
pub fn create_magazine(
    store: &mut Registry,
    name: impl Into<String>,
    category: impl Into<String>,
) -> Result<MagazineId> {
    log_op_start!("magazine_create");
    let start = std::time::Instant::now();

    let name = name.into();
    let category = category.into();
    if let Err(e) = validate_magazine_name(&name).and_then(|_| validate_category(&category)) {
        log_op_error!(
            "magazine_create",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        return Err(e);
    }

    let magazine_id = MagazineId::new();
    store.insert_magazine(Magazine::new(magazine_id, name, category));

    log_op_end!(
        "magazine_create",
        duration_ms = start.elapsed().as_millis() as u64,
        magazine_id = %magazine_id
    );

    Ok(magazine_id)
}

/// Assign a new name to a Magazine
///
/// Applied only when the name is 2 to 16 characters; otherwise dropped
/// without an error.
///
/// # Errors
/// * `MagazineNotFound` - If `magazine_id` names no Magazine in this Registry
pub fn rename_magazine(
    store: &mut Registry,
    magazine_id: MagazineId,
    name: impl Into<String>,
) -> Result<()> {
    log_op_start!("magazine_rename", magazine_id = %magazine_id);
    let start = std::time::Instant::now();

    store
        .get_magazine_mut(magazine_id)
        .map_err(|e| {
            log_op_error!(
                "magazine_rename",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?
        .set_name(name);

    log_op_end!(
        "magazine_rename",
        duration_ms = start.elapsed().as_millis() as u64,
        magazine_id = %magazine_id
    );
    Ok(())
}

/// Assign a new category to a Magazine
///
/// Applied only when the category is non-empty; otherwise dropped without
/// an error.
///
/// # Errors
/// * `MagazineNotFound` - If `magazine_id` names no Magazine in this Registry
pub fn recategorize_magazine(
    store: &mut Registry,
    magazine_id: MagazineId,
    category: impl Into<String>,
) -> Result<()> {
    log_op_start!("magazine_recategorize", magazine_id = %magazine_id);
    let start = std::time::Instant::now();

    store
        .get_magazine_mut(magazine_id)
        .map_err(|e| {
            log_op_error!(
                "magazine_recategorize",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?
        .set_category(category);

    log_op_end!(
        "magazine_recategorize",
        duration_ms = start.elapsed().as_millis() as u64,
        magazine_id = %magazine_id
    );
    Ok(())
}
