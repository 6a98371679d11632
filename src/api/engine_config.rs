use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, DashboardResult};
use crate::interaction::SiteSelection;

/// Public dashboard bootstrap configuration.
///
/// This type is serializable so host applications can persist/load
/// dashboard setup without inventing their own ad-hoc format.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_title")]
    pub title: String,
    /// Range-slider step in kilograms.
    #[serde(default = "default_slider_step")]
    pub slider_step: f64,
    /// Spacing between slider tick marks in kilograms.
    #[serde(default = "default_slider_mark_interval")]
    pub slider_mark_interval: f64,
    #[serde(default)]
    pub initial_site: SiteSelection,
}

impl DashboardConfig {
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: default_title(),
            slider_step: default_slider_step(),
            slider_mark_interval: default_slider_mark_interval(),
            initial_site: SiteSelection::AllSites,
        }
    }

    /// Sets the dashboard heading.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the range-slider step.
    #[must_use]
    pub fn with_slider_step(mut self, step: f64) -> Self {
        self.slider_step = step;
        self
    }

    /// Sets the slider tick-mark spacing.
    #[must_use]
    pub fn with_slider_mark_interval(mut self, interval: f64) -> Self {
        self.slider_mark_interval = interval;
        self
    }

    /// Sets the site selected before any user interaction.
    #[must_use]
    pub fn with_initial_site(mut self, selection: SiteSelection) -> Self {
        self.initial_site = selection;
        self
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> DashboardResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| DashboardError::InvalidData(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> DashboardResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| DashboardError::InvalidData(format!("failed to parse config: {e}")))
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn default_title() -> String {
    "SpaceX Launch Records Dashboard".to_owned()
}

fn default_slider_step() -> f64 {
    1_000.0
}

fn default_slider_mark_interval() -> f64 {
    2_000.0
}
