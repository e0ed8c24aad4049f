//! Field-validation rules for the intake form.
//!
//! One rule set linked by both the server endpoint and the wasm form
//! controller, so the two sides cannot drift apart.

pub mod form;
pub mod rules;

pub use form::{FIELD_ORDER, Submission};
pub use rules::{validate_eircode, validate_email, validate_name, validate_phone};
