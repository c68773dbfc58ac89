//! Application state and core logic

use crate::config::RegistrationConfig;
use crate::options::{load_or_empty, OptionsProvider};
use crate::state::{AppState, FieldKind, Form, StatusMessage, SubmitOutcome};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// User configuration
    pub config: RegistrationConfig,
    /// Source of qualification options
    options: Box<dyn OptionsProvider>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: RegistrationConfig, options: Box<dyn OptionsProvider>) -> Self {
        Self {
            state: AppState::default(),
            config,
            options,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if self.state.dropdown.is_open {
            self.handle_dropdown_key(key).await
        } else {
            self.handle_form_key(key).await
        }
    }

    /// Handle keys while a form field or the submit button is focused
    async fn handle_form_key(&mut self, key: KeyEvent) -> Result<()> {
        let kind = self.state.form.active_kind();
        let on_submit_row = self.state.form.is_submit_row_active();
        let is_choice = matches!(kind, Some(FieldKind::Checkbox | FieldKind::Radio(_)));
        let is_radio = matches!(kind, Some(FieldKind::Radio(_)));
        let is_select = kind == Some(FieldKind::Select);
        let plain = !key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER);

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            // Keyboard shortcuts (work from anywhere)
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => self.submit(),
            KeyCode::Char('t') if key.modifiers.contains(crate::platform::REVEAL_MODIFIER) => {
                self.toggle_active_visibility();
            }
            KeyCode::Enter if on_submit_row => self.submit(),
            KeyCode::Enter if is_select => self.open_dropdown().await,
            KeyCode::Enter => self.state.form.next_field(),
            KeyCode::Char(' ') if is_choice => self.state.form.toggle_choice(),
            KeyCode::Left if is_radio => self.state.form.cycle_choice(false),
            KeyCode::Right if is_radio => self.state.form.cycle_choice(true),
            // Typing on the select opens it with the character as search text
            KeyCode::Char(c) if is_select && plain => {
                self.open_dropdown().await;
                self.state.dropdown.push_search(c);
            }
            KeyCode::Char(c) if plain => {
                self.state.form.input_char(c);
            }
            KeyCode::Backspace => self.state.form.backspace(),
            KeyCode::Esc => self.quit = true,
            _ => {}
        }
        Ok(())
    }

    /// Handle keys while the qualification dropdown is open
    async fn handle_dropdown_key(&mut self, key: KeyEvent) -> Result<()> {
        let plain = !key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER);

        match key.code {
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.dropdown.close();
                self.submit();
            }
            KeyCode::Esc => self.state.dropdown.close(),
            KeyCode::Up => self.state.dropdown.move_up(),
            KeyCode::Down => self.state.dropdown.move_down(),
            KeyCode::Enter | KeyCode::Tab => {
                if let Some(option) = self.state.dropdown.highlighted_option().cloned() {
                    tracing::debug!(value = %option.value, "Qualification selected");
                    self.state.form.select_option(&option);
                }
                self.state.dropdown.close();
            }
            KeyCode::Char(c) if plain => {
                self.state.dropdown.push_search(c);
                self.refresh_options().await;
            }
            KeyCode::Backspace => {
                if self.state.dropdown.pop_search() {
                    self.refresh_options().await;
                }
            }
            _ => {}
        }
        Ok(())
    }

    async fn open_dropdown(&mut self) {
        self.state.dropdown.open();
        self.refresh_options().await;
    }

    /// Ask the provider for options; failures leave the list empty
    async fn refresh_options(&mut self) {
        self.state.dropdown.begin_loading();
        let options = load_or_empty(self.options.as_ref()).await;
        self.state.dropdown.finish_loading(options);
    }

    fn toggle_active_visibility(&mut self) {
        if let Some(name) = self.state.form.active_field_name() {
            self.state.form.toggle_visibility(name);
        }
    }

    /// Run the submit cycle and report the outcome in the status bar
    fn submit(&mut self) {
        let AppState { store, form, .. } = &mut self.state;
        let message = match form.submit(store) {
            SubmitOutcome::Accepted(_) => StatusMessage::success("Registration submitted"),
            SubmitOutcome::Rejected(errors) => {
                StatusMessage::error(format!("{} field(s) need attention", errors.len()))
            }
        };
        tracing::debug!(phase = ?form.phase(), "Submit finished");
        self.state.status_message = Some(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OptionsError;
    use crate::options::{MockOptionsProvider, OptionsPage, SelectOption, StaticOptions};
    use crate::state::{FieldName, FormRecord};
    use pretty_assertions::assert_eq;

    fn app_with(provider: impl OptionsProvider + 'static) -> App {
        App::new(RegistrationConfig::default(), Box::new(provider))
    }

    fn press(app: &mut App, code: KeyCode) {
        tokio_test::block_on(app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))).unwrap();
    }

    fn press_ctrl(app: &mut App, c: char) {
        tokio_test::block_on(app.handle_key(KeyEvent::new(
            KeyCode::Char(c),
            crate::platform::REVEAL_MODIFIER | KeyModifiers::CONTROL,
        )))
        .unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_full_keyboard_registration_is_committed_and_cleared() {
        let mut app = app_with(StaticOptions::default());

        type_text(&mut app, "Jane Doe");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "jane@example.com");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "9123456789");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "Aa11@Aa11");
        press(&mut app, KeyCode::Tab);
        type_text(&mut app, "Aa11@Aa11");
        press(&mut app, KeyCode::Tab);
        // qualification: open, pick UG
        press(&mut app, KeyCode::Enter);
        assert!(app.state.dropdown.is_open);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert!(!app.state.dropdown.is_open);
        assert_eq!(app.state.form.field(FieldName::Qualification).as_text(), "UG");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Tab);
        assert!(app.state.form.is_submit_row_active());
        press(&mut app, KeyCode::Enter);

        assert_eq!(
            app.state.status_message.as_ref().map(|m| m.text.as_str()),
            Some("Registration submitted")
        );
        assert!(app.state.store.values().is_cleared());
        assert_eq!(app.state.form.record(), FormRecord::default());
    }

    #[test]
    fn test_submit_shortcut_on_empty_form_reports_all_fields() {
        let mut app = app_with(StaticOptions::default());
        press_ctrl(&mut app, 's');
        assert_eq!(
            app.state.status_message.as_ref().map(|m| m.text.as_str()),
            Some("8 field(s) need attention")
        );
        assert_eq!(app.state.form.errors().len(), 8);
    }

    #[test]
    fn test_reveal_shortcut_toggles_active_password() {
        let mut app = app_with(StaticOptions::default());
        app.state.form.set_active_field(FieldName::Password as usize);
        press_ctrl(&mut app, 't');
        assert!(!app.state.form.is_revealed(FieldName::Password));

        type_text(&mut app, "secret");
        press_ctrl(&mut app, 't');
        assert!(app.state.form.is_revealed(FieldName::Password));
        assert_eq!(app.state.form.field(FieldName::Password).as_text(), "secret");
    }

    #[test]
    fn test_provider_failure_opens_empty_dropdown() {
        let mut provider = MockOptionsProvider::new();
        provider
            .expect_load_options()
            .times(1)
            .returning(|| Err(OptionsError::Unavailable("offline".to_string())));
        let mut app = app_with(provider);
        app.state.form.set_active_field(FieldName::Qualification as usize);

        press(&mut app, KeyCode::Enter);
        assert!(app.state.dropdown.is_open);
        assert!(app.state.dropdown.visible_options().is_empty());

        press(&mut app, KeyCode::Enter);
        assert!(!app.state.dropdown.is_open);
        assert_eq!(app.state.form.field(FieldName::Qualification).as_text(), "");
    }

    #[test]
    fn test_dropdown_search_reloads_and_filters() {
        let mut provider = MockOptionsProvider::new();
        provider.expect_load_options().times(3).returning(|| {
            Ok(OptionsPage {
                options: vec![SelectOption::new("UG", "UG"), SelectOption::new("PG", "PG")],
                has_more: false,
            })
        });
        let mut app = app_with(provider);
        app.state.form.set_active_field(FieldName::Qualification as usize);

        // typing on the select opens it pre-filtered
        press(&mut app, KeyCode::Char('p'));
        assert_eq!(app.state.dropdown.search, "p");
        press(&mut app, KeyCode::Char('g'));
        let visible: Vec<_> = app
            .state
            .dropdown
            .visible_options()
            .iter()
            .map(|o| o.value.clone())
            .collect();
        assert_eq!(visible, vec!["PG".to_string()]);

        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Esc);
        assert!(!app.state.dropdown.is_open);
        assert!(!app.should_quit());
    }

    #[test]
    fn test_mobile_field_drops_letters() {
        let mut app = app_with(StaticOptions::default());
        app.state.form.set_active_field(FieldName::MobileNumber as usize);
        type_text(&mut app, "9a8b7");
        assert_eq!(app.state.form.field(FieldName::MobileNumber).as_text(), "987");
    }

    #[test]
    fn test_radio_arrows_and_checkbox_space() {
        let mut app = app_with(StaticOptions::default());
        app.state.form.set_active_field(FieldName::MaritalStatus as usize);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.state.form.field(FieldName::MaritalStatus).as_text(), "Maried");

        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(
            app.state.form.field(FieldName::AcceptTermsAndConditions).as_text(),
            "yes"
        );
    }

    #[test]
    fn test_escape_on_form_quits() {
        let mut app = app_with(StaticOptions::default());
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit());
    }

    #[test]
    fn test_submit_shortcut_from_open_dropdown() {
        let mut app = app_with(StaticOptions::default());
        app.state.form.set_active_field(FieldName::Qualification as usize);
        press(&mut app, KeyCode::Enter);
        assert!(app.state.dropdown.is_open);

        press_ctrl(&mut app, 's');
        assert!(!app.state.dropdown.is_open);
        assert_eq!(app.state.dropdown.search, "");
        let status = app.state.status_message.clone().unwrap();
        assert!(status.is_error);
        assert_eq!(status.text, "8 field(s) need attention");
    }

    #[test]
    fn test_modified_keys_do_not_reach_dropdown_search() {
        let mut app = app_with(StaticOptions::default());
        app.state.form.set_active_field(FieldName::Qualification as usize);
        press(&mut app, KeyCode::Enter);

        tokio_test::block_on(app.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT)))
            .unwrap();
        assert!(app.state.dropdown.is_open);
        assert_eq!(app.state.dropdown.search, "");
    }

    #[test]
    fn test_rejection_status_survives_live_fixes() {
        let mut app = app_with(StaticOptions::default());
        press_ctrl(&mut app, 's');

        for (name, text) in [
            (FieldName::FullName, "Jane Doe"),
            (FieldName::Email, "jane@example.com"),
            (FieldName::MobileNumber, "9123456789"),
            (FieldName::Password, "Aa11@Aa11"),
            (FieldName::ConfirmPassword, "Aa11@Aa11"),
        ] {
            app.state.form.set_active_field(name as usize);
            type_text(&mut app, text);
        }
        app.state
            .form
            .select_option(&SelectOption::new("UG", "UG"));
        app.state.form.set_active_field(FieldName::MaritalStatus as usize);
        press(&mut app, KeyCode::Char(' '));
        app.state
            .form
            .set_active_field(FieldName::AcceptTermsAndConditions as usize);
        press(&mut app, KeyCode::Char(' '));

        assert!(app.state.form.errors().is_empty());
        let status = app.state.status_message.clone().unwrap();
        assert!(status.is_error);
        assert_eq!(status.text, "8 field(s) need attention");
    }
}
