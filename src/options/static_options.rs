//! Fixed qualification options

use super::provider::{OptionsPage, OptionsProvider, SelectOption};
use crate::error::OptionsError;
use async_trait::async_trait;

const DEFAULT_QUALIFICATIONS: [&str; 4] = ["SSLC", "HSC", "UG", "PG"];

/// Provider that serves a fixed, single-page option list
#[derive(Debug, Clone)]
pub struct StaticOptions {
    options: Vec<SelectOption>,
}

impl StaticOptions {
    pub fn new(options: Vec<SelectOption>) -> Self {
        Self { options }
    }

    /// The built-in qualification levels
    pub fn qualifications() -> Self {
        Self::new(
            DEFAULT_QUALIFICATIONS
                .iter()
                .map(|q| SelectOption::new(q, q))
                .collect(),
        )
    }
}

impl Default for StaticOptions {
    fn default() -> Self {
        Self::qualifications()
    }
}

#[async_trait]
impl OptionsProvider for StaticOptions {
    async fn load_options(&self) -> Result<OptionsPage, OptionsError> {
        if self.options.is_empty() {
            return Err(OptionsError::Unavailable(
                "no qualification options configured".to_string(),
            ));
        }
        Ok(OptionsPage {
            options: self.options.clone(),
            has_more: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::load_or_empty;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_serves_four_qualifications() {
        let page = tokio_test::block_on(StaticOptions::default().load_options()).unwrap();
        let values: Vec<_> = page.options.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["SSLC", "HSC", "UG", "PG"]);
        assert!(page.options.iter().all(|o| o.value == o.label));
        assert!(!page.has_more);
    }

    #[test]
    fn test_custom_options_are_served_verbatim() {
        let provider = StaticOptions::new(vec![SelectOption::new("phd", "Doctorate")]);
        let page = tokio_test::block_on(provider.load_options()).unwrap();
        assert_eq!(page.options, vec![SelectOption::new("phd", "Doctorate")]);
    }

    #[test]
    fn test_empty_list_degrades_to_no_options() {
        let provider = StaticOptions::new(Vec::new());
        assert!(tokio_test::block_on(provider.load_options()).is_err());
        assert!(tokio_test::block_on(load_or_empty(&provider)).is_empty());
    }
}
