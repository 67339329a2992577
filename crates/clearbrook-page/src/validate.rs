//! Mandatory-field validation.
//!
//! Fully re-evaluates a form on every call: whitespace-only counts as
//! empty, an empty required field gets its invalid marker set, a filled
//! one gets any prior marker cleared. Optional fields are never touched.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use clearbrook_core::FormRegistry;

/// Per-field result of one validation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldOutcome {
    pub name: String,
    pub valid: bool,
}

/// Validate every required field of `form_id`. False when the form is not
/// registered or any required field is blank.
pub fn validate(registry: &mut FormRegistry, form_id: &str) -> bool {
    match validate_fields(registry, form_id) {
        Some(outcomes) => outcomes.iter().all(|o| o.valid),
        None => false,
    }
}

/// As [`validate`], but reporting each required field's outcome so the
/// page knows which markers changed. `None` when the form is absent.
pub fn validate_fields(registry: &mut FormRegistry, form_id: &str) -> Option<Vec<FieldOutcome>> {
    let form = registry.get_mut(form_id)?;

    let mut outcomes = Vec::new();
    for field in form.fields.iter_mut().filter(|f| f.required) {
        let valid = !field.value.trim().is_empty();
        field.invalid = !valid;
        outcomes.push(FieldOutcome {
            name: field.name.clone(),
            valid,
        });
    }
    Some(outcomes)
}
