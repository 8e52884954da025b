//! Field limits and validation helpers for todo lists and items.
//!
//! The `validate_*` functions are plugged into `validator` derives on the
//! request DTOs via `#[validate(custom(function = ...))]`, so the limits
//! live in exactly one place.

use std::borrow::Cow;

use validator::{ValidationError, ValidationErrors};

// ---------------------------------------------------------------------------
// Field limits
// ---------------------------------------------------------------------------

/// Maximum title length in characters (lists and items).
pub const MAX_TITLE_LENGTH: usize = 100;

/// Maximum description length in characters (lists and items).
pub const MAX_DESCRIPTION_LENGTH: usize = 200;

/// Message returned when a list update omits the title.
pub const TITLE_REQUIRED_MESSAGE: &str = "Title is required";

// ---------------------------------------------------------------------------
// Validation functions
// ---------------------------------------------------------------------------

/// Title must be 1..=100 characters.
pub fn validate_title(title: &str) -> Result<(), ValidationError> {
    check_length(title, MAX_TITLE_LENGTH, "Title")
}

/// Description must be 1..=200 characters.
pub fn validate_description(description: &str) -> Result<(), ValidationError> {
    check_length(description, MAX_DESCRIPTION_LENGTH, "Description")
}

/// Length check counting characters, not bytes.
fn check_length(value: &str, max: usize, label: &str) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if (1..=max).contains(&len) {
        Ok(())
    } else {
        Err(ValidationError::new("length").with_message(Cow::Owned(format!(
            "{label} must be between 1 and {max} characters"
        ))))
    }
}

// ---------------------------------------------------------------------------
// Error formatting
// ---------------------------------------------------------------------------

/// Flatten `validator` field errors into one human-readable message.
///
/// Fields are sorted by name so the output is stable, e.g.
/// `"description: Description must be between 1 and 200 characters; title: ..."`.
pub fn describe_validation_errors(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| match &e.message {
                Some(msg) => format!("{field}: {msg}"),
                None => format!("{field}: invalid value ({})", e.code),
            })
        })
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_bounds() {
        assert!(validate_title("").is_err());
        assert!(validate_title("a").is_ok());
        assert!(validate_title(&"a".repeat(MAX_TITLE_LENGTH)).is_ok());
        assert!(validate_title(&"a".repeat(MAX_TITLE_LENGTH + 1)).is_err());
    }

    #[test]
    fn bounds_count_characters_not_bytes() {
        // 100 three-byte characters.
        assert!(validate_title(&"あ".repeat(MAX_TITLE_LENGTH)).is_ok());
    }

    #[test]
    fn description_bounds() {
        assert!(validate_description("").is_err());
        assert!(validate_description(&"d".repeat(MAX_DESCRIPTION_LENGTH)).is_ok());
        assert!(validate_description(&"d".repeat(MAX_DESCRIPTION_LENGTH + 1)).is_err());
    }

    #[test]
    fn error_message_names_the_limit() {
        let err = validate_description("").unwrap_err();
        assert_eq!(
            err.message.as_deref(),
            Some("Description must be between 1 and 200 characters")
        );
    }

    #[test]
    fn describe_sorts_fields_and_uses_messages() {
        let mut errors = ValidationErrors::new();
        errors.add(
            "title",
            ValidationError::new("length").with_message("too long".into()),
        );
        errors.add("description", ValidationError::new("length"));

        assert_eq!(
            describe_validation_errors(&errors),
            "description: invalid value (length); title: too long"
        );
    }
}
