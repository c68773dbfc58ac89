//! Dropdown state for the qualification select

use crate::options::SelectOption;

#[derive(Debug, Clone, Default)]
pub struct DropdownState {
    pub is_open: bool,
    /// A load is in flight; no options are listed meanwhile
    pub is_loading: bool,
    pub options: Vec<SelectOption>,
    pub search: String,
    pub highlighted: usize,
}

impl DropdownState {
    /// Open and mark a load as pending
    pub fn open(&mut self) {
        self.is_open = true;
        self.begin_loading();
    }

    pub fn close(&mut self) {
        self.is_open = false;
        self.is_loading = false;
        self.search.clear();
        self.highlighted = 0;
    }

    pub fn begin_loading(&mut self) {
        self.is_loading = true;
        self.options.clear();
        self.highlighted = 0;
    }

    pub fn finish_loading(&mut self, options: Vec<SelectOption>) {
        self.is_loading = false;
        self.options = options;
        self.highlighted = 0;
    }

    /// Options whose label contains the search text, ignoring case
    pub fn visible_options(&self) -> Vec<&SelectOption> {
        if self.is_loading {
            return Vec::new();
        }
        let needle = self.search.to_lowercase();
        self.options
            .iter()
            .filter(|o| o.label.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn highlighted_option(&self) -> Option<&SelectOption> {
        self.visible_options().get(self.highlighted).copied()
    }

    pub fn move_down(&mut self) {
        let count = self.visible_options().len();
        if count > 0 {
            self.highlighted = (self.highlighted + 1) % count;
        }
    }

    pub fn move_up(&mut self) {
        let count = self.visible_options().len();
        if count > 0 {
            self.highlighted = if self.highlighted == 0 {
                count - 1
            } else {
                self.highlighted - 1
            };
        }
    }

    pub fn push_search(&mut self, c: char) {
        self.search.push(c);
        self.highlighted = 0;
    }

    pub fn pop_search(&mut self) -> bool {
        let popped = self.search.pop().is_some();
        self.highlighted = 0;
        popped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded() -> DropdownState {
        let mut dropdown = DropdownState::default();
        dropdown.open();
        dropdown.finish_loading(
            ["SSLC", "HSC", "UG", "PG"]
                .iter()
                .map(|q| SelectOption::new(q, q))
                .collect(),
        );
        dropdown
    }

    #[test]
    fn test_no_options_while_loading() {
        let mut dropdown = loaded();
        dropdown.begin_loading();
        assert!(dropdown.visible_options().is_empty());
        assert!(dropdown.highlighted_option().is_none());
    }

    #[test]
    fn test_search_filters_by_label_case_insensitive() {
        let mut dropdown = loaded();
        dropdown.push_search('s');
        let labels: Vec<_> = dropdown.visible_options().iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["SSLC", "HSC"]);
    }

    #[test]
    fn test_highlight_wraps() {
        let mut dropdown = loaded();
        dropdown.move_up();
        assert_eq!(dropdown.highlighted_option().unwrap().value, "PG");
        dropdown.move_down();
        assert_eq!(dropdown.highlighted_option().unwrap().value, "SSLC");
    }

    #[test]
    fn test_move_on_empty_list_is_noop() {
        let mut dropdown = DropdownState::default();
        dropdown.move_down();
        dropdown.move_up();
        assert_eq!(dropdown.highlighted, 0);
    }

    #[test]
    fn test_close_resets_search_and_highlight() {
        let mut dropdown = loaded();
        dropdown.push_search('u');
        dropdown.move_down();
        dropdown.close();
        assert!(!dropdown.is_open);
        assert!(dropdown.search.is_empty());
        assert_eq!(dropdown.highlighted, 0);
    }
}
