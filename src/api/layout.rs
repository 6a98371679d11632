use serde::{Deserialize, Serialize};

use crate::api::engine_config::DashboardConfig;
use crate::api::invalidation::ChartId;
use crate::data::LaunchDataset;
use crate::interaction::ALL_SITES_VALUE;

/// Dropdown label of the all-sites option.
pub const ALL_SITES_OPTION_LABEL: &str = "All Sites";

/// One entry of the site dropdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteOption {
    pub label: String,
    pub value: String,
}

impl SiteOption {
    #[must_use]
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Range-slider geometry for the payload filter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayloadSliderSpec {
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub marks: Vec<f64>,
}

impl PayloadSliderSpec {
    #[must_use]
    pub fn new(min: f64, max: f64, step: f64, mark_interval: f64) -> Self {
        Self {
            min,
            max,
            step,
            marks: slider_marks(min, max, mark_interval),
        }
    }
}

/// Declarative description of the dashboard's control surface.
///
/// Hosts materialize widgets from this instead of re-deriving dropdown
/// options or slider bounds from the dataset: heading, site dropdown with
/// the all-sites option first, the payload slider, and the charts in
/// display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardLayout {
    pub title: String,
    pub site_options: Vec<SiteOption>,
    pub payload_slider: PayloadSliderSpec,
    pub charts: Vec<ChartId>,
}

impl DashboardLayout {
    #[must_use]
    pub fn new(dataset: &LaunchDataset, config: &DashboardConfig) -> Self {
        let mut site_options = vec![SiteOption::new(ALL_SITES_OPTION_LABEL, ALL_SITES_VALUE)];
        site_options.extend(
            dataset
                .distinct_sites()
                .map(|site| SiteOption::new(site, site)),
        );

        Self {
            title: config.title.clone(),
            site_options,
            payload_slider: PayloadSliderSpec::new(
                dataset.min_payload(),
                dataset.max_payload(),
                config.slider_step,
                config.slider_mark_interval,
            ),
            charts: ChartId::ALL.to_vec(),
        }
    }
}

/// Tick positions from `floor(min)` to `ceil(max)` inclusive.
fn slider_marks(min: f64, max: f64, interval: f64) -> Vec<f64> {
    if !interval.is_finite() || interval <= 0.0 || min > max {
        return Vec::new();
    }

    let mut marks = Vec::new();
    let mut mark = min.floor();
    let end = max.ceil();
    while mark <= end {
        marks.push(mark);
        mark += interval;
    }
    marks
}
