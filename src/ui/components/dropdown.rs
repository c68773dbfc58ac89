//! Dropdown overlay - option picker with search

use crate::state::DropdownState;
use crate::ui::widgets::render_scrollable_list;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph},
    Frame,
};

/// Tallest the option list may grow, in rows
const MAX_VISIBLE_OPTIONS: u16 = 6;

/// Render the dropdown directly under `anchor`
pub fn render_dropdown(frame: &mut Frame, anchor: Rect, dropdown: &DropdownState) {
    let screen = frame.area();
    let options = dropdown.visible_options();

    // search line + options (at least one row for the empty/loading note) + borders
    let rows = (options.len() as u16).clamp(1, MAX_VISIBLE_OPTIONS);
    let below = screen
        .height
        .saturating_sub(anchor.y + anchor.height);
    let height = (rows + 3).min(below.max(4));

    let area = Rect {
        x: anchor.x,
        y: (anchor.y + anchor.height).min(screen.height.saturating_sub(height)),
        width: anchor.width,
        height,
    }
    .intersection(screen);
    if area.is_empty() {
        return;
    }

    frame.render_widget(Clear, area);

    let search = if dropdown.search.is_empty() {
        Span::styled("type to filter...", Style::default().fg(Color::DarkGray))
    } else {
        Span::styled(dropdown.search.as_str(), Style::default().fg(Color::Yellow))
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .style(Style::default().bg(Color::Black));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height == 0 {
        return;
    }

    let search_area = Rect { height: 1, ..inner };
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Search: ", Style::default().fg(Color::DarkGray)),
            search,
        ])),
        search_area,
    );

    let list_area = Rect {
        y: inner.y + 1,
        height: inner.height.saturating_sub(1),
        ..inner
    };

    if options.is_empty() {
        let note = if dropdown.is_loading {
            "  Loading..."
        } else {
            "  No options"
        };
        frame.render_widget(
            Paragraph::new(Span::styled(note, Style::default().fg(Color::DarkGray))),
            list_area,
        );
        return;
    }

    let items: Vec<ListItem> = options
        .iter()
        .map(|o| ListItem::new(format!(" {}", o.label)))
        .collect();
    let list = List::new(items).highlight_style(
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );
    render_scrollable_list(frame, list_area, list, dropdown.highlighted);
}
