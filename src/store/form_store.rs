//! In-memory holder of the last committed registration

use crate::state::{FieldName, FormRecord};
use serde::{Deserialize, Serialize};

/// Option structure with no fields, the qualification's initial shape
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmptyOption {}

/// Stored qualification: an empty option structure until the first write
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StoredQualification {
    EmptyOption(EmptyOption),
    Text(String),
}

impl Default for StoredQualification {
    fn default() -> Self {
        StoredQualification::EmptyOption(EmptyOption {})
    }
}

impl StoredQualification {
    pub fn as_text(&self) -> &str {
        match self {
            StoredQualification::EmptyOption(_) => "",
            StoredQualification::Text(s) => s,
        }
    }
}

/// Values held by the store
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredValues {
    pub full_name: String,
    pub mobile_number: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub qualification: StoredQualification,
    pub marital_status: String,
    pub accept_terms_and_conditions: String,
}

impl StoredValues {
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::FullName => &self.full_name,
            FieldName::Email => &self.email,
            FieldName::MobileNumber => &self.mobile_number,
            FieldName::Password => &self.password,
            FieldName::ConfirmPassword => &self.confirm_password,
            FieldName::Qualification => self.qualification.as_text(),
            FieldName::MaritalStatus => &self.marital_status,
            FieldName::AcceptTermsAndConditions => &self.accept_terms_and_conditions,
        }
    }

    /// Every field is an empty string
    pub fn is_cleared(&self) -> bool {
        *self == Self::cleared()
    }

    fn cleared() -> Self {
        Self {
            qualification: StoredQualification::Text(String::new()),
            ..Default::default()
        }
    }
}

impl From<FormRecord> for StoredValues {
    fn from(record: FormRecord) -> Self {
        Self {
            full_name: record.full_name,
            mobile_number: record.mobile_number,
            email: record.email,
            password: record.password,
            confirm_password: record.confirm_password,
            qualification: StoredQualification::Text(record.qualification),
            marital_status: record.marital_status,
            accept_terms_and_conditions: record.accept_terms_and_conditions,
        }
    }
}

/// Single-writer store for submitted form values
#[derive(Debug, Clone, Default)]
pub struct FormStore {
    values: StoredValues,
}

impl FormStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn values(&self) -> &StoredValues {
        &self.values
    }

    /// Replace the held values wholesale. No validation happens here.
    pub fn set_values(&mut self, record: FormRecord) {
        self.values = record.into();
    }

    /// Reset every field to an empty string
    pub fn clear(&mut self) {
        self.values = StoredValues::cleared();
    }
}
