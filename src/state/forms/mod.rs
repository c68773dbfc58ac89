//! Form domain layer
//!
//! Field definitions, the ordered rule lists evaluated on submit, and the
//! registration form state that drives the submit cycle against the store.

mod field;
mod form_state;
mod record;
pub mod rules;
mod validation;

pub use field::{FieldKind, FormField};
pub use form_state::{Form, RegistrationForm, SubmitOutcome};
pub use record::{FieldName, FormRecord};
