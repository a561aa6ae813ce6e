//! Form domain layer
//!
//! Type-safe input handling for the active template's form session.

mod field;
mod form_state;

pub use field::FieldInput;
pub use form_state::DocumentForm;
