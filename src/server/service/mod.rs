//! Business logic services.
//!
//! One service per entity. Services validate payloads, resolve referenced
//! dimension ids, derive stored values such as `total_cost`, and assemble
//! response DTOs with their nested entities. Controllers above them only
//! translate between HTTP and service calls; repositories below them only
//! touch the store.

pub mod date;
pub mod discipline;
pub mod material;
pub mod tool;
pub mod transaction;

use crate::server::error::validation::ValidationError;

/// Character-count limit check for an optional text field.
pub(crate) fn check_length(
    field: &'static str,
    value: &str,
    max: usize,
) -> Result<(), ValidationError> {
    if value.chars().count() > max {
        return Err(ValidationError::TooLong { field, max });
    }

    Ok(())
}

/// Required text field check: non-blank and within the limit.
pub(crate) fn check_required(
    field: &'static str,
    value: &str,
    max: usize,
) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty { field });
    }

    check_length(field, value, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_check_counts_characters_not_bytes() {
        assert!(check_length("brand", "Mäkita", 6).is_ok());
        assert!(check_length("brand", "toolong", 6).is_err());
    }

    #[test]
    fn required_check_rejects_blank_values() {
        assert_eq!(
            check_required("material_name", "   ", 100),
            Err(ValidationError::Empty {
                field: "material_name"
            })
        );
        assert!(check_required("material_name", "Oak board", 100).is_ok());
    }
}
