//! Form state management
//!
//! A single dynamic form is built from whichever template is selected; the
//! template's field list is the only source of truth for which inputs
//! exist and in what order.

use super::field::FieldInput;
use crate::generator::FormData;
use crate::templates::DocumentTemplate;

/// Live form session for the selected template.
///
/// `active_index` ranges over the fields plus one extra slot: the buttons
/// row at the bottom of the form.
#[derive(Debug, Clone)]
pub struct DocumentForm {
    pub template_id: String,
    fields: Vec<FieldInput>,
    active_index: usize,
    pub selected_button: usize,
}

impl DocumentForm {
    pub fn for_template(template: &DocumentTemplate) -> Self {
        Self {
            template_id: template.id.to_string(),
            fields: template.fields.iter().map(FieldInput::from_field).collect(),
            active_index: 0,
            selected_button: 0,
        }
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn fields(&self) -> &[FieldInput] {
        &self.fields
    }

    pub fn field_mut(&mut self, index: usize) -> Option<&mut FieldInput> {
        self.fields.get_mut(index)
    }

    pub fn active_index(&self) -> usize {
        self.active_index
    }

    /// True when focus sits on the buttons row below the fields
    pub fn is_buttons_row_active(&self) -> bool {
        self.active_index == self.fields.len()
    }

    pub fn active_field(&self) -> Option<&FieldInput> {
        self.fields.get(self.active_index)
    }

    pub fn active_field_mut(&mut self) -> Option<&mut FieldInput> {
        self.fields.get_mut(self.active_index)
    }

    pub fn next_field(&mut self) {
        self.active_index = (self.active_index + 1) % (self.fields.len() + 1);
    }

    pub fn prev_field(&mut self) {
        if self.active_index == 0 {
            self.active_index = self.fields.len();
        } else {
            self.active_index -= 1;
        }
    }

    pub fn focus_buttons_row(&mut self) {
        self.active_index = self.fields.len();
    }

    /// Move to the next button, wrapping within `count` buttons
    pub fn next_button(&mut self, count: usize) {
        if count > 0 {
            self.selected_button = (self.selected_button + 1) % count;
        }
    }

    /// Move to the previous button, wrapping within `count` buttons
    pub fn prev_button(&mut self, count: usize) {
        if count == 0 {
            return;
        }
        if self.selected_button == 0 {
            self.selected_button = count - 1;
        } else {
            self.selected_button -= 1;
        }
    }

    /// Presence-validate every field. Errors stick to the fields; returns
    /// whether submission may proceed.
    pub fn validate(&mut self) -> bool {
        let mut ok = true;
        for field in &mut self.fields {
            if !field.validate() {
                ok = false;
            }
        }
        ok
    }

    pub fn first_error(&self) -> Option<&str> {
        self.fields.iter().find_map(|f| f.error.as_deref())
    }

    /// Snapshot of every field's value, in declared field order
    pub fn form_data(&self) -> FormData {
        let mut data = FormData::new();
        for field in &self.fields {
            data.insert(field.id.clone(), field.value().to_string());
        }
        data
    }

    /// Preview lookup by field id
    pub fn value_of(&self, id: &str) -> Option<&str> {
        self.fields.iter().find(|f| f.id == id).map(|f| f.value())
    }
}
