//! Form progress snapshots.
//!
//! `save_progress` mirrors a form's current field values into the session
//! store, wholesale; `load_progress` restores them tolerantly — the saved
//! shape and the current form shape may disagree after a redeploy, and a
//! mismatch is not an error.

use std::collections::BTreeMap;

use tracing::{info, warn};

use clearbrook_core::FormRegistry;

use crate::error::SessionError;
use crate::store::SessionStore;

/// Flat field-name → value snapshot of one form. BTreeMap so the
/// serialized form is deterministic.
pub type ProgressSnapshot = BTreeMap<String, String>;

/// What a restore actually did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RestoreOutcome {
    /// Fields assigned from the snapshot.
    pub restored: usize,
    /// Snapshot entries with no matching field in the current form.
    pub skipped: usize,
}

/// Snapshot every field of `form_id` and store it under the form's id,
/// overwriting any prior snapshot. A missing form is a no-op.
pub fn save_progress(
    store: &mut dyn SessionStore,
    registry: &FormRegistry,
    form_id: &str,
) -> Result<(), SessionError> {
    let Some(form) = registry.get(form_id) else {
        return Ok(());
    };

    let snapshot: ProgressSnapshot = form
        .fields
        .iter()
        .map(|f| (f.name.clone(), f.value.clone()))
        .collect();

    store.set(form_id, serde_json::to_string(&snapshot)?);
    info!(form_id, fields = snapshot.len(), "progress saved");
    Ok(())
}

/// Restore `form_id` from its stored snapshot, if any.
///
/// Assigns each snapshotted value to the field of the same name, skipping
/// names the current form no longer has. No snapshot is a no-op; a
/// malformed snapshot is treated as a cache miss and left untouched.
pub fn load_progress(
    store: &dyn SessionStore,
    registry: &mut FormRegistry,
    form_id: &str,
) -> Result<RestoreOutcome, SessionError> {
    let Some(raw) = store.get(form_id) else {
        return Ok(RestoreOutcome::default());
    };

    let snapshot: ProgressSnapshot = match serde_json::from_str(&raw) {
        Ok(snapshot) => snapshot,
        Err(err) => {
            warn!(form_id, %err, "malformed progress snapshot, ignoring");
            return Ok(RestoreOutcome::default());
        }
    };

    let Some(form) = registry.get_mut(form_id) else {
        return Ok(RestoreOutcome::default());
    };

    let mut outcome = RestoreOutcome::default();
    for (name, value) in &snapshot {
        if form.set_value(name, value) {
            outcome.restored += 1;
        } else {
            outcome.skipped += 1;
        }
    }

    info!(
        form_id,
        restored = outcome.restored,
        skipped = outcome.skipped,
        "progress loaded"
    );
    Ok(outcome)
}
