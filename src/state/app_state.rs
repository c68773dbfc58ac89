//! Application state definitions

use super::dropdown::DropdownState;
use super::forms::RegistrationForm;
use crate::store::FormStore;

/// Feedback from the last submit, shown in the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    /// The submit it reports was rejected
    pub is_error: bool,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
        }
    }
}

/// Everything the UI renders from
#[derive(Debug, Clone)]
pub struct AppState {
    pub store: FormStore,
    pub form: RegistrationForm,
    pub dropdown: DropdownState,
    pub status_message: Option<StatusMessage>,
}

impl AppState {
    /// Mount the form against a store
    pub fn new(store: FormStore) -> Self {
        let form = RegistrationForm::mount(&store);
        Self {
            store,
            form,
            dropdown: DropdownState::default(),
            status_message: None,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(FormStore::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FormRecord;

    #[test]
    fn test_default_mounts_empty_form() {
        let state = AppState::default();
        assert_eq!(state.form.record(), FormRecord::default());
        assert!(!state.dropdown.is_open);
        assert!(state.status_message.is_none());
    }
}
