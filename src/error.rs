//! Error types

use crate::state::FieldName;
use thiserror::Error;

/// A single field failing one of its rules
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct FieldValidationError {
    pub field: FieldName,
    pub message: String,
}

impl FieldValidationError {
    pub fn new(field: FieldName, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Failure reported by an options provider
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("options source unavailable: {0}")]
    Unavailable(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_error_display() {
        let err = FieldValidationError::new(FieldName::Email, "Enter EmailId");
        assert_eq!(err.to_string(), "email: Enter EmailId");
    }

    #[test]
    fn test_options_error_display() {
        let err = OptionsError::Unavailable("no options configured".to_string());
        assert_eq!(
            err.to_string(),
            "options source unavailable: no options configured"
        );
    }
}
