//! Ordered field rules for the registration form
//!
//! Every field owns a fixed list of rules. A rule pairs a predicate with the
//! message shown when the predicate fails. Rules are evaluated in list order
//! and the first failure wins.

use super::record::{FieldName, FormRecord};
use once_cell::sync::Lazy;
use regex::Regex;

pub const FULL_NAME_REQUIRED: &str = "Full Name is Required";
pub const FULL_NAME_INVALID: &str = "Enter Valid Full Name";
pub const EMAIL_REQUIRED: &str = "Enter EmailId";
pub const EMAIL_INVALID: &str = "Enter Valid EmailId";
pub const MOBILE_REQUIRED: &str = "Mobile Number is Required";
pub const MOBILE_LENGTH: &str = "Mobile Number Must 10 Numbers Only";
pub const MOBILE_INVALID: &str = "Invalid Mobile Number";
pub const PASSWORD_REQUIRED: &str = "Password is Required";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters";
pub const PASSWORD_WEAK: &str = "Password must contain at least one special character, four digit's number,two uppercase and two lowercase letters";
pub const CONFIRM_PASSWORD_REQUIRED: &str = "Confirm Password is Required";
pub const CONFIRM_PASSWORD_MISMATCH: &str = "Passwords Not Match";
pub const QUALIFICATION_REQUIRED: &str = "Qualification is Required";
pub const MARITAL_STATUS_REQUIRED: &str = "Marital Status is Required";
pub const TERMS_REQUIRED: &str = "Accept Terms And Conditions is Required";

/// Values offered by the marital status radio group
pub const MARITAL_STATUS_CHOICES: &[&str] = &["Single", "Maried"];

/// Value carried by the terms checkbox when it is checked
pub const TERMS_ACCEPTED: &str = "yes";

static LETTERS_AND_SPACES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z ]*$").expect("valid full name pattern"));

// WHATWG <input type=email> grammar
static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("valid email pattern")
});

static MOBILE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[6-9][0-9+-]+$").expect("valid mobile pattern"));

/// Predicate over a field value, with the whole record for cross-field rules
pub type Check = fn(value: &str, record: &FormRecord) -> bool;

/// A named predicate and the message reported when it fails
#[derive(Debug, Clone, Copy)]
pub struct FieldRule {
    pub name: &'static str,
    pub message: &'static str,
    check: Check,
}

impl FieldRule {
    const fn new(name: &'static str, message: &'static str, check: Check) -> Self {
        Self {
            name,
            message,
            check,
        }
    }

    pub fn passes(&self, value: &str, record: &FormRecord) -> bool {
        (self.check)(value, record)
    }
}

fn char_len(value: &str) -> usize {
    value.chars().count()
}

fn required(value: &str, _: &FormRecord) -> bool {
    !value.is_empty()
}

fn full_name_min(value: &str, _: &FormRecord) -> bool {
    char_len(value) >= 3
}

fn full_name_max(value: &str, _: &FormRecord) -> bool {
    char_len(value) <= 50
}

fn letters_and_spaces(value: &str, _: &FormRecord) -> bool {
    LETTERS_AND_SPACES.is_match(value)
}

fn email_syntax(value: &str, _: &FormRecord) -> bool {
    EMAIL.is_match(value)
}

fn mobile_max(value: &str, _: &FormRecord) -> bool {
    char_len(value) <= 10
}

fn mobile_min(value: &str, _: &FormRecord) -> bool {
    char_len(value) >= 10
}

fn mobile_pattern(value: &str, _: &FormRecord) -> bool {
    MOBILE.is_match(value)
}

fn password_min(value: &str, _: &FormRecord) -> bool {
    char_len(value) >= 8
}

fn count_matching(value: &str, pred: fn(&char) -> bool) -> usize {
    value.chars().filter(pred).count()
}

fn password_strength(value: &str, _: &FormRecord) -> bool {
    char_len(value) >= 9
        && count_matching(value, |c| matches!(*c, '@' | '#' | '$')) >= 1
        && count_matching(value, char::is_ascii_digit) >= 2
        && count_matching(value, char::is_ascii_uppercase) >= 2
        && count_matching(value, char::is_ascii_lowercase) >= 2
}

fn matches_password(value: &str, record: &FormRecord) -> bool {
    value == record.password
}

fn marital_choice(value: &str, _: &FormRecord) -> bool {
    MARITAL_STATUS_CHOICES.contains(&value)
}

fn terms_accepted(value: &str, _: &FormRecord) -> bool {
    value == TERMS_ACCEPTED
}

static FULL_NAME_RULES: [FieldRule; 4] = [
    FieldRule::new("required", FULL_NAME_REQUIRED, required),
    FieldRule::new("min", FULL_NAME_INVALID, full_name_min),
    FieldRule::new("max", FULL_NAME_INVALID, full_name_max),
    FieldRule::new("matches", FULL_NAME_INVALID, letters_and_spaces),
];

static EMAIL_RULES: [FieldRule; 2] = [
    FieldRule::new("required", EMAIL_REQUIRED, required),
    FieldRule::new("email", EMAIL_INVALID, email_syntax),
];

static MOBILE_RULES: [FieldRule; 4] = [
    FieldRule::new("required", MOBILE_REQUIRED, required),
    FieldRule::new("max", MOBILE_LENGTH, mobile_max),
    FieldRule::new("min", MOBILE_LENGTH, mobile_min),
    FieldRule::new("matches", MOBILE_INVALID, mobile_pattern),
];

static PASSWORD_RULES: [FieldRule; 3] = [
    FieldRule::new("required", PASSWORD_REQUIRED, required),
    FieldRule::new("min", PASSWORD_TOO_SHORT, password_min),
    FieldRule::new("matches", PASSWORD_WEAK, password_strength),
];

static CONFIRM_PASSWORD_RULES: [FieldRule; 2] = [
    FieldRule::new("required", CONFIRM_PASSWORD_REQUIRED, required),
    FieldRule::new("oneOf", CONFIRM_PASSWORD_MISMATCH, matches_password),
];

static QUALIFICATION_RULES: [FieldRule; 1] =
    [FieldRule::new("required", QUALIFICATION_REQUIRED, required)];

static MARITAL_STATUS_RULES: [FieldRule; 2] = [
    FieldRule::new("required", MARITAL_STATUS_REQUIRED, required),
    FieldRule::new("oneOf", MARITAL_STATUS_REQUIRED, marital_choice),
];

static TERMS_RULES: [FieldRule; 2] = [
    FieldRule::new("required", TERMS_REQUIRED, required),
    FieldRule::new("oneOf", TERMS_REQUIRED, terms_accepted),
];

/// Rules for a field, in evaluation order
pub fn rules_for(field: FieldName) -> &'static [FieldRule] {
    match field {
        FieldName::FullName => &FULL_NAME_RULES,
        FieldName::Email => &EMAIL_RULES,
        FieldName::MobileNumber => &MOBILE_RULES,
        FieldName::Password => &PASSWORD_RULES,
        FieldName::ConfirmPassword => &CONFIRM_PASSWORD_RULES,
        FieldName::Qualification => &QUALIFICATION_RULES,
        FieldName::MaritalStatus => &MARITAL_STATUS_RULES,
        FieldName::AcceptTermsAndConditions => &TERMS_RULES,
    }
}

/// First failing rule for `field`, if any
pub fn first_failure(field: FieldName, record: &FormRecord) -> Option<&'static FieldRule> {
    let value = record.get(field);
    rules_for(field)
        .iter()
        .find(|rule| !rule.passes(value, record))
}
