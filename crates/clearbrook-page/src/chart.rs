//! The PHQ-9 progress chart binding.
//!
//! Clearbrook owns no chart rendering: it hands a typed configuration to an
//! external line-chart component through [`ChartRenderer`]. The spec types
//! serialize camelCase to match the renderer's options shape, and
//! [`phq9_progress_chart`] is the fixed twelve-week dataset the landing
//! page shows.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::PageError;

/// Canvas element the progress chart mounts on.
pub const CHART_CANVAS_ID: &str = "phq9-chart";

/// Fixed display height of the mounted canvas.
pub const CHART_HEIGHT_PX: u32 = 300;

/// A complete chart configuration: type tag, data, display options.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ChartSpec {
    #[serde(rename = "type")]
    pub chart_type: String,
    pub data: ChartData,
    pub options: ChartOptions,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub datasets: Vec<Dataset>,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Dataset {
    pub label: String,
    pub data: Vec<u32>,
    pub border_color: String,
    pub background_color: String,
    pub border_width: u32,
    pub tension: f64,
    pub point_radius: u32,
    pub point_background_color: String,
    pub point_border_color: String,
    pub point_border_width: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ChartOptions {
    pub responsive: bool,
    pub maintain_aspect_ratio: bool,
    pub plugins: Plugins,
    pub scales: Scales,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Plugins {
    pub legend: Legend,
    pub tooltip: Tooltip,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Legend {
    pub display: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Tooltip {
    pub background_color: String,
    pub title_font: Font,
    pub body_font: Font,
    pub padding: u32,
    pub corner_radius: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Font {
    pub size: u32,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub weight: Option<String>,
}

impl Font {
    fn size(size: u32) -> Self {
        Self { size, weight: None }
    }

    fn bold(size: u32) -> Self {
        Self {
            size,
            weight: Some("bold".to_string()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Scales {
    pub y: ValueAxis,
    pub x: CategoryAxis,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ValueAxis {
    pub begin_at_zero: bool,
    pub max: u32,
    pub ticks: Ticks,
    pub title: AxisTitle,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CategoryAxis {
    pub ticks: Ticks,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Ticks {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub step_size: Option<u32>,
    pub font: Font,
}

#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AxisTitle {
    pub display: bool,
    pub text: String,
    pub font: Font,
}

/// The landing page's PHQ-9 progress line: seven samples over twelve
/// weeks, value axis pinned 0–20 with step 5, legend off.
pub fn phq9_progress_chart() -> ChartSpec {
    ChartSpec {
        chart_type: "line".to_string(),
        data: ChartData {
            labels: [
                "Week 0", "Week 2", "Week 4", "Week 6", "Week 8", "Week 10", "Week 12",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            datasets: vec![Dataset {
                label: "PHQ-9 Score".to_string(),
                data: vec![16, 14, 12, 10, 9, 8, 8],
                border_color: "#2A9D8F".to_string(),
                background_color: "rgba(42, 157, 143, 0.1)".to_string(),
                border_width: 3,
                tension: 0.3,
                point_radius: 5,
                point_background_color: "#2A9D8F".to_string(),
                point_border_color: "#fff".to_string(),
                point_border_width: 2,
            }],
        },
        options: ChartOptions {
            responsive: true,
            maintain_aspect_ratio: false,
            plugins: Plugins {
                legend: Legend { display: false },
                tooltip: Tooltip {
                    background_color: "#14213D".to_string(),
                    title_font: Font::size(14),
                    body_font: Font::size(13),
                    padding: 10,
                    corner_radius: 5,
                },
            },
            scales: Scales {
                y: ValueAxis {
                    begin_at_zero: true,
                    max: 20,
                    ticks: Ticks {
                        step_size: Some(5),
                        font: Font::size(12),
                    },
                    title: AxisTitle {
                        display: true,
                        text: "PHQ-9 Score".to_string(),
                        font: Font::bold(14),
                    },
                },
                x: CategoryAxis {
                    ticks: Ticks {
                        step_size: None,
                        font: Font::size(12),
                    },
                },
            },
        },
    }
}

/// The external rendering component boundary.
pub trait ChartRenderer {
    /// Whether the target canvas exists in the current page.
    fn has_canvas(&self, canvas_id: &str) -> bool;

    /// Mount a chart spec on a canvas at a fixed display height.
    fn render(&mut self, canvas_id: &str, height_px: u32, spec: &ChartSpec)
    -> Result<(), PageError>;
}

/// Mount the progress chart once at page load. Returns false (without
/// rendering) when the canvas is absent — not every page carries it.
pub fn mount_progress_chart(renderer: &mut dyn ChartRenderer) -> Result<bool, PageError> {
    if !renderer.has_canvas(CHART_CANVAS_ID) {
        return Ok(false);
    }
    renderer.render(CHART_CANVAS_ID, CHART_HEIGHT_PX, &phq9_progress_chart())?;
    Ok(true)
}
