use serde::{Deserialize, Serialize};
use ts_rs::TS;

use clearbrook_core::{FieldKind, FormRegistry};

use crate::Instrument;
use crate::error::InstrumentError;

/// Sentinel severity for scores outside every band (negative or otherwise
/// out of range). Returned instead of erroring so callers can render a
/// degraded result.
pub const INVALID_SCORE: &str = "Invalid score";

/// One inclusive severity band: `min..=max` maps to `label`.
/// `max: None` marks the upper-open top band.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SeverityBand {
    pub min: u32,
    pub max: Option<u32>,
    pub label: String,
}

impl SeverityBand {
    pub fn contains(&self, score: u32) -> bool {
        score >= self.min && self.max.is_none_or(|max| score <= max)
    }
}

/// A questionnaire item: one single-choice question and its point values.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Item {
    pub id: String,
    pub prompt: String,
    pub options: Vec<u32>,
}

impl Item {
    /// The standard 0–3 frequency scale both screeners use
    /// ("not at all" through "nearly every day").
    pub fn likert(id: impl Into<String>, prompt: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            options: vec![0, 1, 2, 3],
        }
    }
}

/// A computed screening result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ScoreResult {
    pub score: u32,
    pub severity: String,
}

/// Sum the instrument's currently selected answers and classify the total.
///
/// Returns `Ok(None)` when the instrument's form is not registered — the
/// page is not ready, which is not an error. Unselected questions are
/// excluded from the sum, so an incomplete form yields a partial score.
/// A selected answer that does not parse as an integer is reported as a
/// typed error instead of contaminating the total.
pub fn compute_score(
    registry: &FormRegistry,
    instrument: &dyn Instrument,
) -> Result<Option<ScoreResult>, InstrumentError> {
    let Some(form) = registry.get(instrument.form_id()) else {
        return Ok(None);
    };

    let mut total: u32 = 0;
    for field in form.fields.iter().filter(|f| f.kind == FieldKind::SingleChoice) {
        if let Some(points) = field.points()? {
            total += points;
        }
    }

    Ok(Some(ScoreResult {
        score: total,
        severity: instrument.classify(i64::from(total)).to_string(),
    }))
}
