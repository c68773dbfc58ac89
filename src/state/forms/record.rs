//! The registration record and its field names

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies one field of the registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldName {
    FullName,
    Email,
    MobileNumber,
    Password,
    ConfirmPassword,
    Qualification,
    MaritalStatus,
    AcceptTermsAndConditions,
}

impl FieldName {
    /// All fields in declaration order
    pub const ALL: [FieldName; 8] = [
        FieldName::FullName,
        FieldName::Email,
        FieldName::MobileNumber,
        FieldName::Password,
        FieldName::ConfirmPassword,
        FieldName::Qualification,
        FieldName::MaritalStatus,
        FieldName::AcceptTermsAndConditions,
    ];

    /// Key used for the field in serialized records
    pub fn key(&self) -> &'static str {
        match self {
            Self::FullName => "fullName",
            Self::Email => "email",
            Self::MobileNumber => "mobileNumber",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
            Self::Qualification => "qualification",
            Self::MaritalStatus => "maritalStatus",
            Self::AcceptTermsAndConditions => "acceptTermsAndConditions",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::FullName => "Full Name",
            Self::Email => "Email address",
            Self::MobileNumber => "Mobile Number",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm Password",
            Self::Qualification => "Qualification",
            Self::MaritalStatus => "Marital Status",
            Self::AcceptTermsAndConditions => "Accept Terms and Condition's",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::FullName => "Enter Your FullName",
            Self::Email => "Enter Your Email ID",
            Self::MobileNumber => "Enter Your Mobile Number",
            Self::Password => "Enter Your Password",
            Self::ConfirmPassword => "Enter Your Confirm Password",
            Self::Qualification => "Select...",
            Self::MaritalStatus | Self::AcceptTermsAndConditions => "",
        }
    }

    /// Whether the field holds a secret that is masked by default
    pub fn is_secret(&self) -> bool {
        matches!(self, Self::Password | Self::ConfirmPassword)
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Full set of registration values, as submitted
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormRecord {
    pub full_name: String,
    pub email: String,
    pub mobile_number: String,
    pub password: String,
    pub confirm_password: String,
    pub qualification: String,
    pub marital_status: String,
    pub accept_terms_and_conditions: String,
}

impl FormRecord {
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::FullName => &self.full_name,
            FieldName::Email => &self.email,
            FieldName::MobileNumber => &self.mobile_number,
            FieldName::Password => &self.password,
            FieldName::ConfirmPassword => &self.confirm_password,
            FieldName::Qualification => &self.qualification,
            FieldName::MaritalStatus => &self.marital_status,
            FieldName::AcceptTermsAndConditions => &self.accept_terms_and_conditions,
        }
    }

    pub fn set(&mut self, field: FieldName, value: String) {
        let slot = match field {
            FieldName::FullName => &mut self.full_name,
            FieldName::Email => &mut self.email,
            FieldName::MobileNumber => &mut self.mobile_number,
            FieldName::Password => &mut self.password,
            FieldName::ConfirmPassword => &mut self.confirm_password,
            FieldName::Qualification => &mut self.qualification,
            FieldName::MaritalStatus => &mut self.marital_status,
            FieldName::AcceptTermsAndConditions => &mut self.accept_terms_and_conditions,
        };
        *slot = value;
    }
}
