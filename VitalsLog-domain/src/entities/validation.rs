use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::ValidationFailure;

/// Field-by-field validation result
///
/// `errors` holds one reason per failing field and is empty exactly when
/// `success` is true.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationOutcome {
    pub success: bool,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub errors: BTreeMap<String, String>,
}

impl ValidationOutcome {
    pub fn from_errors(errors: BTreeMap<String, String>) -> Self {
        Self {
            success: errors.is_empty(),
            errors,
        }
    }

    pub fn valid() -> Self {
        Self::from_errors(BTreeMap::new())
    }

    /// Reason recorded for `field`, if it failed
    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.errors.get(field).map(String::as_str)
    }

    pub fn into_result(self) -> Result<(), ValidationFailure> {
        if self.success {
            Ok(())
        } else {
            Err(ValidationFailure::new(self.errors))
        }
    }
}

impl From<ValidationFailure> for ValidationOutcome {
    fn from(failure: ValidationFailure) -> Self {
        Self::from_errors(failure.into_errors())
    }
}
