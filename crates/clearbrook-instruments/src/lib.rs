//! clearbrook-instruments
//!
//! Screening instrument definitions. Pure data and pure functions — defines
//! the items, severity band tables, and scoring rules for each supported
//! instrument (PHQ-9 and GAD-7).

pub mod error;
pub mod instruments;
pub mod scoring;

use clearbrook_core::{Field, Form};
use scoring::{INVALID_SCORE, Item, SeverityBand};

/// Trait implemented by each screening instrument.
pub trait Instrument: Send + Sync {
    /// Unique identifier for this instrument (e.g., "phq9", "gad7").
    fn id(&self) -> &str;

    /// Human-readable name (e.g., "PHQ-9", "GAD-7").
    fn name(&self) -> &str;

    /// The page form id this instrument's questionnaire renders under.
    fn form_id(&self) -> &str;

    /// The questionnaire items, in presentation order.
    fn items(&self) -> &[Item];

    /// The severity band table: contiguous inclusive ranges from 0,
    /// upper-open top band.
    fn severity_bands(&self) -> &[SeverityBand];

    /// Map a total score to its severity label.
    ///
    /// Total over all integers: a score no band covers (negative input
    /// included) returns [`INVALID_SCORE`] rather than a misleading label.
    fn classify(&self, score: i64) -> &str {
        let Ok(score) = u32::try_from(score) else {
            return INVALID_SCORE;
        };
        self.severity_bands()
            .iter()
            .find(|band| band.contains(score))
            .map(|band| band.label.as_str())
            .unwrap_or(INVALID_SCORE)
    }
}

/// Return all registered instruments.
pub fn all_instruments() -> Vec<Box<dyn Instrument>> {
    vec![
        Box::new(instruments::phq9::Phq9),
        Box::new(instruments::gad7::Gad7),
    ]
}

/// Look up an instrument by ID.
pub fn get_instrument(id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.id() == id)
}

/// Look up the instrument whose questionnaire renders under `form_id`.
pub fn instrument_for_form(form_id: &str) -> Option<Box<dyn Instrument>> {
    all_instruments().into_iter().find(|i| i.form_id() == form_id)
}

/// Build the blank form for an instrument's questionnaire: one required
/// single-choice field per item, named by item id.
pub fn form_for(instrument: &dyn Instrument) -> Form {
    let mut form = Form::new(instrument.form_id());
    for item in instrument.items() {
        form = form.with_field(Field::single_choice(&item.id).required());
    }
    form
}
