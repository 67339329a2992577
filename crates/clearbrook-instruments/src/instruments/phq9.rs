use crate::Instrument;
use crate::scoring::{Item, SeverityBand};

/// PHQ-9: Patient Health Questionnaire, 9 items scored 0–3.
/// Five severity bands over 0–27, top band upper-open.
pub struct Phq9;

impl Instrument for Phq9 {
    fn id(&self) -> &str {
        "phq9"
    }

    fn name(&self) -> &str {
        "PHQ-9"
    }

    fn form_id(&self) -> &str {
        "phq9-form"
    }

    fn items(&self) -> &[Item] {
        static ITEMS: std::sync::LazyLock<Vec<Item>> = std::sync::LazyLock::new(|| {
            vec![
                Item::likert("phq9-q1", "Little interest or pleasure in doing things"),
                Item::likert("phq9-q2", "Feeling down, depressed, or hopeless"),
                Item::likert(
                    "phq9-q3",
                    "Trouble falling or staying asleep, or sleeping too much",
                ),
                Item::likert("phq9-q4", "Feeling tired or having little energy"),
                Item::likert("phq9-q5", "Poor appetite or overeating"),
                Item::likert(
                    "phq9-q6",
                    "Feeling bad about yourself, or that you are a failure",
                ),
                Item::likert(
                    "phq9-q7",
                    "Trouble concentrating on things, such as reading or watching television",
                ),
                Item::likert(
                    "phq9-q8",
                    "Moving or speaking noticeably slowly, or being fidgety or restless",
                ),
                Item::likert(
                    "phq9-q9",
                    "Thoughts that you would be better off dead or of hurting yourself",
                ),
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
                    label: "Minimal depression".to_string(),
                },
                SeverityBand {
                    min: 5,
                    max: Some(9),
                    label: "Mild depression".to_string(),
                },
                SeverityBand {
                    min: 10,
                    max: Some(14),
                    label: "Moderate depression".to_string(),
                },
                SeverityBand {
                    min: 15,
                    max: Some(19),
                    label: "Moderately severe depression".to_string(),
                },
                SeverityBand {
                    min: 20,
                    max: None,
                    label: "Severe depression".to_string(),
                },
            ]
        });
        &BANDS
    }
}
