//! The form/field model.
//!
//! The original page read form state straight off the DOM. Here every field
//! is a typed value owned by a [`Form`], and forms live in a [`FormRegistry`]
//! that callers pass explicitly, so scoring, validation, and the progress
//! cache are testable without a live page.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// What kind of input a field is backed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FieldKind {
    /// Free-text input.
    Text,
    /// A radio-style single-choice group. The value is the selected
    /// option's string, or empty while nothing is selected.
    SingleChoice,
}

/// One named field within a form.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Field {
    pub name: String,
    pub kind: FieldKind,
    pub required: bool,
    pub value: String,
    /// Visual error marker, the model-side equivalent of the page's
    /// `error` class. Set and cleared by the validator.
    pub invalid: bool,
}

impl Field {
    pub fn text(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Text)
    }

    pub fn single_choice(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::SingleChoice)
    }

    fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            kind,
            required: false,
            value: String::new(),
            invalid: false,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// The selected option of a single-choice field, or `None` while the
    /// group has no selection. Always `None` for text fields.
    pub fn selection(&self) -> Option<&str> {
        match self.kind {
            FieldKind::SingleChoice if !self.value.is_empty() => Some(&self.value),
            _ => None,
        }
    }

    /// Parse the selected option as a point value.
    ///
    /// `Ok(None)` while unselected; a selected value that is not a decimal
    /// integer is an explicit error rather than a poisoned sum.
    pub fn points(&self) -> Result<Option<u32>, CoreError> {
        match self.selection() {
            None => Ok(None),
            Some(raw) => raw
                .parse::<u32>()
                .map(Some)
                .map_err(|_| CoreError::UnparseableValue {
                    field: self.name.clone(),
                    value: raw.to_string(),
                }),
        }
    }
}

/// A rendered form: an identifier plus its ordered fields.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Form {
    pub id: String,
    pub fields: Vec<Field>,
}

impl Form {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            fields: Vec::new(),
        }
    }

    pub fn with_field(mut self, field: Field) -> Self {
        self.fields.push(field);
        self
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    /// Assign a field's value by name. Returns false when no field of that
    /// name exists (tolerant restore relies on this).
    pub fn set_value(&mut self, name: &str, value: &str) -> bool {
        match self.field_mut(name) {
            Some(field) => {
                field.value = value.to_string();
                true
            }
            None => false,
        }
    }
}

/// Owns the page's forms and looks them up by id.
///
/// This is the context object callers pass instead of reaching for the
/// document: a missing form is `None`, never a panic.
#[derive(Debug, Default)]
pub struct FormRegistry {
    forms: Vec<Form>,
}

impl FormRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a form, replacing any existing form with the same id
    /// (re-rendered markup supersedes the old instance).
    pub fn insert(&mut self, form: Form) {
        self.forms.retain(|f| f.id != form.id);
        self.forms.push(form);
    }

    pub fn get(&self, id: &str) -> Option<&Form> {
        self.forms.iter().find(|f| f.id == id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Form> {
        self.forms.iter_mut().find(|f| f.id == id)
    }
}
