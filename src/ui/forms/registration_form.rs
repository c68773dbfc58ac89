//! Registration form rendering

use super::field_renderer::{draw_field, FieldDisplay};
use crate::app::App;
use crate::state::{FieldName, Form};
use crate::ui::components::{render_button, render_dropdown, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Fields per column
const COLUMN_LEN: usize = 4;
const FIELD_HEIGHT: u16 = 3;

/// Draw the registration form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Register ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(FIELD_HEIGHT * COLUMN_LEN as u16), // Fields
            Constraint::Length(BUTTON_HEIGHT),                    // Submit
            Constraint::Length(3),                                // Help / active error
            Constraint::Min(0),                                   // Remaining space
        ])
        .margin(1)
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[0]);

    let form = &app.state.form;
    let mut qualification_area = None;

    let rows: Vec<_> = columns
        .iter()
        .map(|column| {
            Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Length(FIELD_HEIGHT); COLUMN_LEN])
                .split(*column)
        })
        .collect();

    for (index, field) in form.fields().iter().enumerate() {
        let field_area = rows[index / COLUMN_LEN][index % COLUMN_LEN];
        // Short terminals squeeze the lower rows away
        if field_area.is_empty() {
            continue;
        }
        if field.name == FieldName::Qualification {
            qualification_area = Some(field_area);
        }

        draw_field(
            frame,
            field_area,
            field,
            FieldDisplay {
                is_active: form.active_field() == index,
                revealed: form.is_revealed(field.name),
                show_toggle: form.can_toggle_visibility(field.name),
                error: form.error_message(field.name),
                mask: app.config.mask_char(),
            },
        );
    }

    draw_submit(frame, chunks[1], form.is_submit_row_active());
    draw_help(frame, chunks[2], app);

    if app.state.dropdown.is_open {
        if let Some(anchor) = qualification_area {
            render_dropdown(frame, anchor, &app.state.dropdown);
        }
    }
}

fn draw_submit(frame: &mut Frame, area: Rect, is_selected: bool) {
    let row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(14),
            Constraint::Min(0),
        ])
        .split(area);

    render_button(frame, row[1], "Submit", is_selected, Color::Blue);
}

/// The active field's full error, or key help when it has none
fn draw_help(frame: &mut Frame, area: Rect, app: &App) {
    let form = &app.state.form;
    let active_error = form
        .active_field_name()
        .and_then(|name| form.error_message(name));

    let line = match active_error {
        Some(error) => Line::from(Span::styled(error, Style::default().fg(Color::Red))),
        None if app.config.show_help() => Line::from(vec![
            Span::styled("Tab", Style::default().fg(Color::Cyan)),
            Span::raw(": next field  "),
            Span::styled(
                crate::platform::SUBMIT_SHORTCUT,
                Style::default().fg(Color::Cyan),
            ),
            Span::raw(": submit  "),
            Span::styled(
                crate::platform::REVEAL_SHORTCUT,
                Style::default().fg(Color::Cyan),
            ),
            Span::raw(": show/hide password  "),
            Span::styled("Esc", Style::default().fg(Color::Cyan)),
            Span::raw(": quit"),
        ]),
        None => return,
    };

    let help = Paragraph::new(line)
        .style(Style::default().fg(Color::DarkGray))
        .wrap(Wrap { trim: true });
    frame.render_widget(help, area);
}
