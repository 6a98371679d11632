use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, DashboardResult};

/// Fixed x-axis label of the payload scatter chart.
pub const PAYLOAD_AXIS_LABEL: &str = "Payload Mass (kg)";
/// Fixed y-axis label of the payload scatter chart.
pub const OUTCOME_AXIS_LABEL: &str = "Launch Outcome";
/// Fixed legend title of the payload scatter chart.
pub const BOOSTER_LEGEND_TITLE: &str = "Booster Version Category";

/// One labeled slice of a pie chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieSlice {
    pub label: String,
    pub value: u64,
}

impl PieSlice {
    #[must_use]
    pub fn new(label: impl Into<String>, value: u64) -> Self {
        Self {
            label: label.into(),
            value,
        }
    }

    pub fn validate(&self) -> DashboardResult<()> {
        if self.label.is_empty() {
            return Err(DashboardError::InvalidData(
                "pie slice label must not be empty".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Renderer-agnostic pie chart description.
///
/// Produced fresh on every recompute and owned by the display surface after
/// handoff. A spec with zero slices is well-formed and renders as an empty
/// chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PieChartSpec {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

impl PieChartSpec {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            slices: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_slice(mut self, slice: PieSlice) -> Self {
        self.slices.push(slice);
        self
    }

    /// Total record count across all slices.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.slices.iter().map(|slice| slice.value).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    pub fn validate(&self) -> DashboardResult<()> {
        if self.title.is_empty() {
            return Err(DashboardError::InvalidData(
                "pie chart title must not be empty".to_owned(),
            ));
        }
        for slice in &self.slices {
            slice.validate()?;
        }
        Ok(())
    }
}

/// One scatter sample: payload mass against launch outcome, colored by
/// booster version category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    pub category: String,
}

impl ScatterPoint {
    #[must_use]
    pub fn new(x: f64, y: f64, category: impl Into<String>) -> Self {
        Self {
            x,
            y,
            category: category.into(),
        }
    }

    pub fn validate(&self) -> DashboardResult<()> {
        if !self.x.is_finite() || !self.y.is_finite() {
            return Err(DashboardError::InvalidData(
                "scatter point coordinates must be finite".to_owned(),
            ));
        }
        if self.category.is_empty() {
            return Err(DashboardError::InvalidData(
                "scatter point category must not be empty".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Renderer-agnostic scatter chart description.
///
/// Axis labels and the legend title are fixed for the payload-vs-outcome
/// visualization; only the title and point set vary per recompute. A spec
/// with zero points is well-formed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterChartSpec {
    pub title: String,
    pub x_axis_label: String,
    pub y_axis_label: String,
    pub legend_title: String,
    pub points: Vec<ScatterPoint>,
}

impl ScatterChartSpec {
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            x_axis_label: PAYLOAD_AXIS_LABEL.to_owned(),
            y_axis_label: OUTCOME_AXIS_LABEL.to_owned(),
            legend_title: BOOSTER_LEGEND_TITLE.to_owned(),
            points: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_point(mut self, point: ScatterPoint) -> Self {
        self.points.push(point);
        self
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn validate(&self) -> DashboardResult<()> {
        if self.title.is_empty() {
            return Err(DashboardError::InvalidData(
                "scatter chart title must not be empty".to_owned(),
            ));
        }
        for point in &self.points {
            point.validate()?;
        }
        Ok(())
    }
}
