//! State store for submitted registrations

mod form_store;

pub use form_store::FormStore;
