//! Reusable UI widget helpers

use ratatui::{
    layout::Rect,
    widgets::{List, ListState},
    Frame,
};

/// Render a list scrolled so that `highlighted` stays visible.
///
/// Out-of-range indices are clamped to the last item.
pub fn render_scrollable_list(frame: &mut Frame, area: Rect, list: List, highlighted: usize) {
    let selected = list.len().checked_sub(1).map(|last| highlighted.min(last));
    let mut list_state = ListState::default().with_selected(selected);
    frame.render_stateful_widget(list.highlight_symbol("› "), area, &mut list_state);
}
