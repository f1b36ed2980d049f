//! Per-field input validation.
//!
//! Validation runs before any store mutation and is surfaced as a
//! [`ValidationError`] carrying one entry per offending field, so a form
//! layer can render messages next to the fields instead of handling a
//! generic thrown error. Messages are in the origin locale of the API this
//! stack mocks.
//!
//! Limits count characters as the user sees them (`chars().count()`), not
//! bytes.

use crate::types::{CreateTodoInput, UpdateTodoInput};
use thiserror::Error;

/// Maximum length of a todo title, in characters
pub const TITLE_MAX_CHARS: usize = 100;

/// Maximum length of a todo description, in characters
pub const DESCRIPTION_MAX_CHARS: usize = 500;

const TITLE_REQUIRED: &str = "タイトルは必須です";
const TITLE_TOO_LONG: &str = "タイトルは100文字以内で入力してください";
const DESCRIPTION_TOO_LONG: &str = "説明は500文字以内で入力してください";

/// A single field that failed validation
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldError {
    /// Name of the offending input field
    pub field: &'static str,
    /// User-facing message for the field
    pub message: &'static str,
}

/// Input validation failure with one entry per offending field
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("入力値が不正です: {}", join_messages(.errors))]
pub struct ValidationError {
    errors: Vec<FieldError>,
}

impl ValidationError {
    /// Returns the per-field errors
    #[must_use]
    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// Returns the message for a field, if that field failed
    #[must_use]
    pub fn message_for(&self, field: &str) -> Option<&'static str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message)
    }
}

fn join_messages(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.message)
        .collect::<Vec<_>>()
        .join(", ")
}

fn validate_title(title: &str) -> Option<FieldError> {
    if title.trim().is_empty() {
        return Some(FieldError {
            field: "title",
            message: TITLE_REQUIRED,
        });
    }

    if title.chars().count() > TITLE_MAX_CHARS {
        return Some(FieldError {
            field: "title",
            message: TITLE_TOO_LONG,
        });
    }

    None
}

fn validate_description(description: &str) -> Option<FieldError> {
    if description.chars().count() > DESCRIPTION_MAX_CHARS {
        return Some(FieldError {
            field: "description",
            message: DESCRIPTION_TOO_LONG,
        });
    }

    None
}

impl CreateTodoInput {
    /// Validates this input
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the title is empty or blank, the
    /// title exceeds [`TITLE_MAX_CHARS`], or the description exceeds
    /// [`DESCRIPTION_MAX_CHARS`].
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();

        if let Some(error) = validate_title(&self.title) {
            errors.push(error);
        }
        if let Some(error) = self.description.as_deref().and_then(validate_description) {
            errors.push(error);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { errors })
        }
    }
}

impl UpdateTodoInput {
    /// Validates this patch
    ///
    /// Only fields present in the patch are checked; an empty patch is
    /// valid.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] under the same rules as
    /// [`CreateTodoInput::validate`] for every `Some` field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let mut errors = Vec::new();

        if let Some(error) = self.title.as_deref().and_then(validate_title) {
            errors.push(error);
        }
        if let Some(error) = self.description.as_deref().and_then(validate_description) {
            errors.push(error);
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { errors })
        }
    }
}
