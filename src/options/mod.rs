//! Options providers for the qualification dropdown

mod provider;
mod static_options;

pub use provider::{load_or_empty, OptionsProvider, SelectOption};
pub use static_options::StaticOptions;

#[cfg(test)]
pub use provider::{MockOptionsProvider, OptionsPage};
