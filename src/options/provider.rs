//! Trait abstraction for the qualification options source to enable mocking in tests

use crate::error::OptionsError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One selectable dropdown entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

/// A page of options as returned by a provider
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionsPage {
    pub options: Vec<SelectOption>,
    pub has_more: bool,
}

/// Asynchronous source of dropdown options
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OptionsProvider: Send + Sync {
    /// Load the available options
    async fn load_options(&self) -> Result<OptionsPage, OptionsError>;
}

/// Load options, degrading any provider failure to an empty list
pub async fn load_or_empty(provider: &dyn OptionsProvider) -> Vec<SelectOption> {
    match provider.load_options().await {
        Ok(page) => {
            tracing::debug!(
                count = page.options.len(),
                has_more = page.has_more,
                "options loaded"
            );
            page.options
        }
        Err(err) => {
            tracing::warn!("Failed to load options: {err}");
            Vec::new()
        }
    }
}
