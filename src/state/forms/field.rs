//! Form field input objects

use crate::templates::{DocumentField, FieldKind};

/// Live input state for a single template field.
///
/// Carries its own definition (copied from the registry) so the renderer
/// and validator never consult a second field list.
#[derive(Debug, Clone)]
pub struct FieldInput {
    pub id: String,
    pub label: String,
    pub kind: FieldKind,
    pub placeholder: Option<String>,
    pub required: bool,
    value: String,
    pub error: Option<String>,
}

impl FieldInput {
    pub fn from_field(field: &DocumentField) -> Self {
        Self {
            id: field.id.to_string(),
            label: field.label.to_string(),
            kind: field.kind,
            placeholder: field.placeholder.map(str::to_string),
            required: field.required,
            value: String::new(),
            error: None,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    #[allow(dead_code)]
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.error = None;
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn is_multiline(&self) -> bool {
        self.kind.is_multiline()
    }

    /// Append a character, subject to the kind's input filter.
    /// Editing clears any stale validation error.
    pub fn push_char(&mut self, c: char) {
        if self.kind.accepts_char(c) {
            self.value.push(c);
            self.error = None;
        }
    }

    /// Insert a line break (multiline fields only)
    pub fn push_newline(&mut self) {
        if self.is_multiline() {
            self.value.push('\n');
            self.error = None;
        }
    }

    pub fn pop_char(&mut self) {
        self.value.pop();
        self.error = None;
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.error = None;
    }

    /// Presence check for required fields. Stores and returns the error.
    pub fn validate(&mut self) -> bool {
        if self.required && self.value.trim().is_empty() {
            self.error = Some(format!("{} is required", self.label));
            false
        } else {
            self.error = None;
            true
        }
    }
}
