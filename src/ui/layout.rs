//! Layout components (header, status bar)

use crate::app::App;
use crate::state::FieldKind;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into header, content and status bar
pub fn create_layout(area: Rect) -> (Rect, Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1], chunks[2])
}

/// Draw the title line
pub fn draw_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(Span::styled(
        "Basic Registration Form",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::ITALIC | Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(header, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::raw(" ")];

    let hints = get_hints(app);
    spans.push(Span::styled(hints, Style::default().fg(Color::Gray)));

    // Outcome of the last submit
    if let Some(msg) = &app.state.status_message {
        let color = if msg.is_error { Color::Red } else { Color::Green };
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg.text.as_str(), Style::default().fg(color)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}

/// Get keyboard hints for the focused element
fn get_hints(app: &App) -> String {
    let submit = crate::platform::SUBMIT_SHORTCUT;
    if app.state.dropdown.is_open {
        return "↑/↓:choose  Enter:select  type:search  Esc:close".to_string();
    }
    if app.state.form.is_submit_row_active() {
        return format!("Enter:submit  Tab:next  Esc:quit  {submit}:submit");
    }
    match app.state.form.active_kind() {
        Some(FieldKind::Secret) => format!(
            "Tab:next  {}:show/hide  {submit}:submit  Esc:quit",
            crate::platform::REVEAL_SHORTCUT
        ),
        Some(FieldKind::Select) => format!("Enter:open  Tab:next  {submit}:submit  Esc:quit"),
        Some(FieldKind::Radio(_)) => format!("←/→:choose  Tab:next  {submit}:submit  Esc:quit"),
        Some(FieldKind::Checkbox) => format!("Space:toggle  Tab:next  {submit}:submit  Esc:quit"),
        _ => format!("Tab:next  {submit}:submit  Esc:quit"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RegistrationConfig;
    use crate::options::StaticOptions;
    use crate::state::StatusMessage;
    use ratatui::{backend::TestBackend, Terminal};

    fn message_color(app: &App) -> Option<Color> {
        let backend = TestBackend::new(120, 1);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| {
                let area = frame.area();
                draw_status_bar(frame, area, app);
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        let text = &app.state.status_message.as_ref()?.text;
        // The status line is ASCII, so byte offsets are cell offsets
        let row: String = buffer.content().iter().map(|cell| cell.symbol()).collect();
        let start = row.find(text.as_str())?;
        Some(buffer.content()[start].fg)
    }

    fn app() -> App {
        App::new(RegistrationConfig::default(), Box::new(StaticOptions::default()))
    }

    #[test]
    fn test_status_colour_follows_submit_outcome() {
        let mut app = app();
        app.state.status_message = Some(StatusMessage::error("2 field(s) need attention"));
        assert_eq!(message_color(&app), Some(Color::Red));

        app.state.status_message = Some(StatusMessage::success("Registration submitted"));
        assert_eq!(message_color(&app), Some(Color::Green));
    }

    #[test]
    fn test_rejection_stays_red_without_form_errors() {
        let mut app = app();
        assert!(app.state.form.errors().is_empty());
        app.state.status_message = Some(StatusMessage::error("8 field(s) need attention"));
        assert_eq!(message_color(&app), Some(Color::Red));
    }
}
