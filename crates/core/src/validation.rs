//! Conversion of `validator` failures into [`CoreError::Validation`].

use validator::{ValidationError, ValidationErrors};

use crate::error::CoreError;

/// Render every field violation as `field: message`, sorted, joined by `"; "`.
///
/// Uses the attribute's `message` when one was given and falls back to the
/// validator code (e.g. `length`) otherwise.
pub fn describe(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter()
                .map(move |err| format!("{field}: {}", message_of(err)))
        })
        .collect();
    parts.sort();
    parts.join("; ")
}

fn message_of(err: &ValidationError) -> String {
    match &err.message {
        Some(msg) => msg.to_string(),
        None => err.code.to_string(),
    }
}

impl From<ValidationErrors> for CoreError {
    fn from(errors: ValidationErrors) -> Self {
        CoreError::Validation(describe(&errors))
    }
}
