//! Field rendering utilities for forms

use crate::state::{FieldKind, FormField};
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Per-frame display state of one field
pub struct FieldDisplay<'a> {
    pub is_active: bool,
    /// Secret field currently shown in plain text
    pub revealed: bool,
    /// Show the show/hide affordance
    pub show_toggle: bool,
    pub error: Option<&'a str>,
    pub mask: char,
}

/// Draw a form field using FormField from the domain layer
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FormField, display: FieldDisplay) {
    let style = if display.is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    };

    let border_style = if display.error.is_some() {
        Style::default().fg(Color::Red)
    } else if display.is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let mut spans = if field.is_empty() && !field.placeholder.is_empty() {
        vec![Span::styled(
            field.placeholder,
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )]
    } else {
        vec![Span::styled(
            field.display_value(display.revealed, display.mask),
            style,
        )]
    };

    if display.is_active && field.kind.accepts_typing() {
        spans.push(Span::styled("▌", Style::default().fg(Color::Cyan)));
    }
    if field.kind == FieldKind::Select {
        spans.push(Span::styled(" ▾", Style::default().fg(Color::DarkGray)));
    }

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    if field.kind != FieldKind::Checkbox {
        block = block.title(format!(" {} ", field.label));
    }

    if display.show_toggle {
        let toggle = if display.revealed { " hide " } else { " show " };
        block = block.title(
            Line::from(Span::styled(toggle, Style::default().fg(Color::Yellow)))
                .alignment(Alignment::Right),
        );
    }

    if let Some(error) = display.error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {error} "),
            Style::default().fg(Color::Red),
        )));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
