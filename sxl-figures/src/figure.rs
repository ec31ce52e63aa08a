//! Chart specifications produced by the handlers.
//!
//! All structs derive `Serialize` so they can be passed to D3.js as JSON.
//! Only ordered collections are used, so serializing the same figure twice
//! yields identical bytes.

use serde::Serialize;

/// A chart specification for one graph output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Figure {
    Pie(PieFigure),
    Scatter(ScatterFigure),
}

impl Figure {
    pub fn title(&self) -> &str {
        match self {
            Figure::Pie(pie) => &pie.title,
            Figure::Scatter(scatter) => &scatter.title,
        }
    }

    /// True when there is nothing to draw (no slices or no points).
    pub fn is_empty(&self) -> bool {
        match self {
            Figure::Pie(pie) => pie.slices.is_empty(),
            Figure::Scatter(scatter) => scatter.points.is_empty(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

/// One wedge of a pie chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub label: String,
    pub value: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieFigure {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieFigure {
    /// Sum of all slice values.
    pub fn total(&self) -> u32 {
        self.slices.iter().map(|s| s.value).sum()
    }

    pub fn slice(&self, label: &str) -> Option<&PieSlice> {
        self.slices.iter().find(|s| s.label == label)
    }
}

/// One launch plotted as payload (x) against outcome class (y).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: u8,
    /// Booster version category; drives the point color.
    pub group: String,
    pub site: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub booster_version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flight_number: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterFigure {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub color_label: String,
    /// Color groups present in `points`, in first-appearance order.
    pub groups: Vec<String>,
    pub points: Vec<ScatterPoint>,
}
