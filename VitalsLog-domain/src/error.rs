use std::collections::BTreeMap;

use thiserror::Error;
use validator::ValidationErrors;

/// Rejected user input, with a reason for every failing field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Validation error: {}", describe(.errors))]
pub struct ValidationFailure {
    errors: BTreeMap<String, String>,
}

impl ValidationFailure {
    pub fn new(errors: BTreeMap<String, String>) -> Self {
        Self { errors }
    }

    /// Failure for a single field
    pub fn field(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::new(BTreeMap::from([(field.into(), reason.into())]))
    }

    pub fn errors(&self) -> &BTreeMap<String, String> {
        &self.errors
    }

    pub fn into_errors(self) -> BTreeMap<String, String> {
        self.errors
    }
}

fn describe(errors: &BTreeMap<String, String>) -> String {
    errors
        .iter()
        .map(|(field, reason)| format!("{}: {}", field, reason))
        .collect::<Vec<String>>()
        .join("; ")
}

impl From<ValidationErrors> for ValidationFailure {
    /// Keeps the first message per field; fields without a message get a
    /// generic one.
    fn from(validation_errors: ValidationErrors) -> Self {
        let errors = validation_errors
            .field_errors()
            .into_iter()
            .filter_map(|(field, errors)| {
                errors.first().map(|err| {
                    let reason = match &err.message {
                        Some(msg) => msg.to_string(),
                        None => format!("Invalid {}", field),
                    };
                    (field.to_string(), reason)
                })
            })
            .collect();
        Self::new(errors)
    }
}
