use crate::Instrument;
use crate::scoring::{Item, SeverityBand};

/// GAD-7: Generalized Anxiety Disorder scale, 7 items scored 0–3.
/// Four severity bands over 0–21, top band upper-open.
pub struct Gad7;

impl Instrument for Gad7 {
    fn id(&self) -> &str {
        "gad7"
    }

    fn name(&self) -> &str {
        "GAD-7"
    }

    fn form_id(&self) -> &str {
        "gad7-form"
    }

    fn items(&self) -> &[Item] {
        static ITEMS: std::sync::LazyLock<Vec<Item>> = std::sync::LazyLock::new(|| {
            vec![
                Item::likert("gad7-q1", "Feeling nervous, anxious, or on edge"),
                Item::likert("gad7-q2", "Not being able to stop or control worrying"),
                Item::likert("gad7-q3", "Worrying too much about different things"),
                Item::likert("gad7-q4", "Trouble relaxing"),
                Item::likert("gad7-q5", "Being so restless that it is hard to sit still"),
                Item::likert("gad7-q6", "Becoming easily annoyed or irritable"),
                Item::likert("gad7-q7", "Feeling afraid as if something awful might happen"),
            ]
        });
        &ITEMS
    }

    fn severity_bands(&self) -> &[SeverityBand] {
        static BANDS: std::sync::LazyLock<Vec<SeverityBand>> = std::sync::LazyLock::new(|| {
            vec![
                SeverityBand {
                    min: 0,
                    max: Some(4),
                    label: "Minimal anxiety".to_string(),
                },
                SeverityBand {
                    min: 5,
                    max: Some(9),
                    label: "Mild anxiety".to_string(),
                },
                SeverityBand {
                    min: 10,
                    max: Some(14),
                    label: "Moderate anxiety".to_string(),
                },
                SeverityBand {
                    min: 15,
                    max: None,
                    label: "Severe anxiety".to_string(),
                },
            ]
        });
        &BANDS
    }
}
