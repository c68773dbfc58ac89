//! Form field value objects

use super::record::FieldName;
use super::rules::{MARITAL_STATUS_CHOICES, TERMS_ACCEPTED};

/// How a field takes input and renders its value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    /// Digits plus `+` and `-`
    Numeric,
    /// Masked unless its visibility flag is set
    Secret,
    /// Value chosen from the options dropdown
    Select,
    Radio(&'static [&'static str]),
    Checkbox,
}

impl FieldKind {
    pub fn for_field(name: FieldName) -> Self {
        match name {
            FieldName::FullName => FieldKind::Text,
            FieldName::Email => FieldKind::Email,
            FieldName::MobileNumber => FieldKind::Numeric,
            FieldName::Password | FieldName::ConfirmPassword => FieldKind::Secret,
            FieldName::Qualification => FieldKind::Select,
            FieldName::MaritalStatus => FieldKind::Radio(MARITAL_STATUS_CHOICES),
            FieldName::AcceptTermsAndConditions => FieldKind::Checkbox,
        }
    }

    /// Whether typed characters go straight into the value
    pub fn accepts_typing(&self) -> bool {
        matches!(
            self,
            FieldKind::Text | FieldKind::Email | FieldKind::Numeric | FieldKind::Secret
        )
    }
}

/// Represents a single form field with its configuration and value
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: FieldName,
    pub label: &'static str,
    pub placeholder: &'static str,
    pub kind: FieldKind,
    value: String,
}

impl FormField {
    pub fn new(name: FieldName) -> Self {
        Self::with_value(name, String::new())
    }

    pub fn with_value(name: FieldName, value: String) -> Self {
        Self {
            name,
            label: name.label(),
            placeholder: name.placeholder(),
            kind: FieldKind::for_field(name),
            value,
        }
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn set_text(&mut self, value: String) {
        self.value = value;
    }

    /// Push a character to the field value.
    /// Returns false when the field's kind rejects the character.
    pub fn push_char(&mut self, c: char) -> bool {
        let accepted = match self.kind {
            FieldKind::Numeric => c.is_ascii_digit() || c == '+' || c == '-',
            kind => kind.accepts_typing(),
        };
        if accepted {
            self.value.push(c);
        }
        accepted
    }

    /// Remove the last character from the field value
    pub fn pop_char(&mut self) -> bool {
        if !self.kind.accepts_typing() {
            return false;
        }
        self.value.pop().is_some()
    }

    /// Flip a checkbox between unchecked and checked
    pub fn toggle_checked(&mut self) {
        if self.kind == FieldKind::Checkbox {
            self.value = if self.is_checked() {
                String::new()
            } else {
                TERMS_ACCEPTED.to_string()
            };
        }
    }

    pub fn is_checked(&self) -> bool {
        self.kind == FieldKind::Checkbox && self.value == TERMS_ACCEPTED
    }

    /// Move a radio group to its next (or previous) choice.
    /// An empty group starts at the first choice either way.
    pub fn cycle_choice(&mut self, forward: bool) {
        let FieldKind::Radio(choices) = self.kind else {
            return;
        };
        if choices.is_empty() {
            return;
        }
        let next = match choices.iter().position(|c| *c == self.value) {
            None => 0,
            Some(i) if forward => (i + 1) % choices.len(),
            Some(0) => choices.len() - 1,
            Some(i) => i - 1,
        };
        self.value = choices[next].to_string();
    }

    /// Get the display value for rendering
    pub fn display_value(&self, revealed: bool, mask: char) -> String {
        match self.kind {
            FieldKind::Secret if !revealed => {
                std::iter::repeat(mask).take(self.value.chars().count()).collect()
            }
            FieldKind::Radio(choices) => choices
                .iter()
                .map(|c| {
                    let mark = if *c == self.value { "(•)" } else { "( )" };
                    format!("{mark} {c}")
                })
                .collect::<Vec<_>>()
                .join("  "),
            FieldKind::Checkbox => {
                let mark = if self.is_checked() { "[x]" } else { "[ ]" };
                format!("{mark} {}", self.label)
            }
            _ => self.value.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_takes_label_and_kind_from_name() {
        let field = FormField::new(FieldName::MobileNumber);
        assert_eq!(field.label, "Mobile Number");
        assert_eq!(field.kind, FieldKind::Numeric);
        assert!(field.is_empty());
    }

    #[test]
    fn test_numeric_rejects_letters() {
        let mut field = FormField::new(FieldName::MobileNumber);
        assert!(field.push_char('9'));
        assert!(!field.push_char('a'));
        assert!(field.push_char('-'));
        assert!(field.push_char('+'));
        assert_eq!(field.as_text(), "9-+");
    }

    #[test]
    fn test_select_ignores_typing() {
        let mut field = FormField::new(FieldName::Qualification);
        assert!(!field.push_char('U'));
        assert!(!field.pop_char());
        assert!(field.is_empty());
    }

    #[test]
    fn test_pop_char_on_empty_reports_nothing_removed() {
        let mut field = FormField::new(FieldName::FullName);
        assert!(!field.pop_char());
        field.push_char('a');
        assert!(field.pop_char());
        assert!(field.is_empty());
    }

    #[test]
    fn test_secret_masks_by_char_count() {
        let field = FormField::with_value(FieldName::Password, "Aä1@".to_string());
        assert_eq!(field.display_value(false, '*'), "****");
        assert_eq!(field.display_value(true, '*'), "Aä1@");
    }

    #[test]
    fn test_checkbox_toggles_between_empty_and_yes() {
        let mut field = FormField::new(FieldName::AcceptTermsAndConditions);
        field.toggle_checked();
        assert_eq!(field.as_text(), "yes");
        assert!(field.is_checked());
        field.toggle_checked();
        assert_eq!(field.as_text(), "");
    }

    #[test]
    fn test_radio_cycles_both_ways() {
        let mut field = FormField::new(FieldName::MaritalStatus);
        field.cycle_choice(true);
        assert_eq!(field.as_text(), "Single");
        field.cycle_choice(true);
        assert_eq!(field.as_text(), "Maried");
        field.cycle_choice(true);
        assert_eq!(field.as_text(), "Single");
        field.cycle_choice(false);
        assert_eq!(field.as_text(), "Maried");
    }

    #[test]
    fn test_radio_display_marks_selection() {
        let field = FormField::with_value(FieldName::MaritalStatus, "Maried".to_string());
        assert_eq!(field.display_value(false, '*'), "( ) Single  (•) Maried");
    }

    #[test]
    fn test_cycle_choice_on_text_is_noop() {
        let mut field = FormField::new(FieldName::FullName);
        field.cycle_choice(true);
        assert!(field.is_empty());
    }
}
