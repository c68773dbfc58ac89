//! Registration form state and the submit cycle

use super::field::{FieldKind, FormField};
use super::record::{FieldName, FormRecord};
use super::validation::{validate_field, validate_record, FieldErrors};
use crate::options::SelectOption;
use crate::store::FormStore;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Where a submission attempt currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Validating,
    Rejected,
    Accepted,
    Committing,
}

impl SubmissionPhase {
    pub fn can_advance_to(&self, next: SubmissionPhase) -> bool {
        use SubmissionPhase::*;
        matches!(
            (self, next),
            (Idle, Validating)
                | (Validating, Rejected)
                | (Validating, Accepted)
                | (Rejected, Idle)
                | (Accepted, Committing)
                | (Committing, Idle)
        )
    }
}

/// Result of one submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The record that was committed to the store
    Accepted(FormRecord),
    Rejected(FieldErrors),
}

/// Index of the Submit button row, after the last field
pub const SUBMIT_ROW: usize = FieldName::ALL.len();

#[derive(Debug, Clone)]
pub struct RegistrationForm {
    fields: Vec<FormField>,
    pub active_field_index: usize,
    show_password: bool,
    show_confirm_password: bool,
    errors: FieldErrors,
    phase: SubmissionPhase,
    /// Set once a submission was rejected; edits then re-check their field
    revalidate_on_change: bool,
}

impl RegistrationForm {
    /// Build the form with default values taken from the store
    pub fn mount(store: &FormStore) -> Self {
        let values = store.values();
        Self {
            fields: FieldName::ALL
                .iter()
                .map(|name| FormField::with_value(*name, values.get(*name).to_string()))
                .collect(),
            active_field_index: 0,
            show_password: false,
            show_confirm_password: false,
            errors: FieldErrors::default(),
            phase: SubmissionPhase::Idle,
            revalidate_on_change: false,
        }
    }

    /// Replace every visible value with the store's and drop errors
    pub fn reset_from(&mut self, store: &FormStore) {
        let values = store.values();
        for field in &mut self.fields {
            field.set_text(values.get(field.name).to_string());
        }
        self.errors.clear();
        self.revalidate_on_change = false;
    }

    pub fn field(&self, name: FieldName) -> &FormField {
        &self.fields[name as usize]
    }

    fn field_mut(&mut self, name: FieldName) -> &mut FormField {
        &mut self.fields[name as usize]
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    /// Current input as a record
    pub fn record(&self) -> FormRecord {
        let mut record = FormRecord::default();
        for field in &self.fields {
            record.set(field.name, field.as_text().to_string());
        }
        record
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn error_message(&self, name: FieldName) -> Option<&str> {
        self.errors.message(name)
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == SUBMIT_ROW
    }

    pub fn active_field_name(&self) -> Option<FieldName> {
        self.fields.get(self.active_field_index).map(|f| f.name)
    }

    pub fn active_kind(&self) -> Option<FieldKind> {
        self.fields.get(self.active_field_index).map(|f| f.kind)
    }

    /// Type a character into the active field
    pub fn input_char(&mut self, c: char) -> bool {
        let Some(name) = self.active_field_name() else {
            return false;
        };
        let changed = self.field_mut(name).push_char(c);
        if changed {
            self.field_changed(name);
        }
        changed
    }

    pub fn backspace(&mut self) {
        if let Some(name) = self.active_field_name() {
            if self.field_mut(name).pop_char() {
                self.field_changed(name);
            }
        }
    }

    /// Space on a checkbox or radio group
    pub fn toggle_choice(&mut self) {
        match self.active_kind() {
            Some(FieldKind::Checkbox) => self.with_active(|f| f.toggle_checked()),
            Some(FieldKind::Radio(_)) => self.with_active(|f| f.cycle_choice(true)),
            _ => {}
        }
    }

    pub fn cycle_choice(&mut self, forward: bool) {
        if let Some(FieldKind::Radio(_)) = self.active_kind() {
            self.with_active(|f| f.cycle_choice(forward));
        }
    }

    fn with_active(&mut self, edit: impl FnOnce(&mut FormField)) {
        if let Some(name) = self.active_field_name() {
            edit(self.field_mut(name));
            self.field_changed(name);
        }
    }

    /// Set the qualification from a dropdown choice and drop its error
    pub fn select_option(&mut self, option: &SelectOption) {
        self.field_mut(FieldName::Qualification)
            .set_text(option.value.clone());
        self.errors.set(FieldName::Qualification, None);
    }

    pub fn is_revealed(&self, name: FieldName) -> bool {
        match name {
            FieldName::Password => self.show_password,
            FieldName::ConfirmPassword => self.show_confirm_password,
            _ => false,
        }
    }

    /// The reveal affordance exists only for non-empty secret fields
    pub fn can_toggle_visibility(&self, name: FieldName) -> bool {
        name.is_secret() && !self.field(name).is_empty()
    }

    /// Flip the display mode of a secret field. The value is untouched.
    pub fn toggle_visibility(&mut self, name: FieldName) -> bool {
        if !self.can_toggle_visibility(name) {
            return false;
        }
        let flag = match name {
            FieldName::Password => &mut self.show_password,
            _ => &mut self.show_confirm_password,
        };
        *flag = !*flag;
        true
    }

    /// Validate all fields; on success commit to the store, clear it and
    /// reset the visible fields from it.
    pub fn submit(&mut self, store: &mut FormStore) -> SubmitOutcome {
        self.advance(SubmissionPhase::Validating);
        let record = self.record();

        match validate_record(&record) {
            Err(errors) => {
                self.advance(SubmissionPhase::Rejected);
                tracing::info!(fields = ?errors.fields(), "Submission rejected");
                self.errors = errors.clone();
                self.revalidate_on_change = true;
                self.advance(SubmissionPhase::Idle);
                SubmitOutcome::Rejected(errors)
            }
            Ok(()) => {
                self.advance(SubmissionPhase::Accepted);
                self.advance(SubmissionPhase::Committing);
                store.set_values(record.clone());
                store.clear();
                self.reset_from(store);
                self.advance(SubmissionPhase::Idle);
                tracing::info!("Submission committed");
                SubmitOutcome::Accepted(record)
            }
        }
    }

    fn advance(&mut self, next: SubmissionPhase) {
        debug_assert!(
            self.phase.can_advance_to(next),
            "illegal submission transition {:?} -> {:?}",
            self.phase,
            next
        );
        tracing::trace!(from = ?self.phase, to = ?next, "Submission phase");
        self.phase = next;
    }

    fn field_changed(&mut self, name: FieldName) {
        if !self.revalidate_on_change {
            return;
        }
        let record = self.record();
        self.errors.set(name, validate_field(name, &record));
        if name == FieldName::Password {
            let confirm = FieldName::ConfirmPassword;
            self.errors.set(confirm, validate_field(confirm, &record));
        }
    }
}

impl Form for RegistrationForm {
    fn field_count(&self) -> usize {
        SUBMIT_ROW + 1 // fields, submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(SUBMIT_ROW);
    }
}
