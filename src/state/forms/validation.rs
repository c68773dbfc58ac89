//! Whole-record validation

use super::record::{FieldName, FormRecord};
use super::rules::first_failure;
use crate::error::FieldValidationError;
use std::collections::BTreeMap;

/// Per-field validation errors, at most one per field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors {
    errors: BTreeMap<FieldName, FieldValidationError>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: FieldName) -> Option<&FieldValidationError> {
        self.errors.get(&field)
    }

    pub fn message(&self, field: FieldName) -> Option<&str> {
        self.get(field).map(|e| e.message.as_str())
    }

    /// Replace the error for one field; `None` clears it
    pub fn set(&mut self, field: FieldName, error: Option<FieldValidationError>) {
        match error {
            Some(error) => {
                self.errors.insert(field, error);
            }
            None => {
                self.errors.remove(&field);
            }
        }
    }

    pub fn clear(&mut self) {
        self.errors.clear();
    }

    /// Failing fields in declaration order
    pub fn fields(&self) -> Vec<FieldName> {
        self.errors.keys().copied().collect()
    }
}

/// Evaluate one field's rules against the record
pub fn validate_field(field: FieldName, record: &FormRecord) -> Option<FieldValidationError> {
    first_failure(field, record).map(|rule| FieldValidationError::new(field, rule.message))
}

/// Validate every field; the record is accepted only if all fields pass
pub fn validate_record(record: &FormRecord) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();
    for field in FieldName::ALL {
        errors.set(field, validate_field(field, record));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
