use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, DashboardResult};

/// Sentinel wire value for the all-sites selection.
pub const ALL_SITES_VALUE: &str = "ALL";

/// Site dropdown selection: every site, or one concrete site code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum SiteSelection {
    #[default]
    AllSites,
    Site(String),
}

impl SiteSelection {
    /// Parses the control wire value (the `"ALL"` sentinel or a site code).
    #[must_use]
    pub fn from_value(value: &str) -> Self {
        if value == ALL_SITES_VALUE {
            Self::AllSites
        } else {
            Self::Site(value.to_owned())
        }
    }

    /// Control wire value round-tripped by `from_value`.
    #[must_use]
    pub fn value(&self) -> &str {
        match self {
            Self::AllSites => ALL_SITES_VALUE,
            Self::Site(code) => code,
        }
    }

    /// The concrete site code, when one is selected.
    #[must_use]
    pub fn site_code(&self) -> Option<&str> {
        match self {
            Self::AllSites => None,
            Self::Site(code) => Some(code),
        }
    }
}

/// Inclusive payload-mass window selected by the range slider.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PayloadRange {
    lo: f64,
    hi: f64,
}

impl PayloadRange {
    /// Builds a validated closed interval with `lo <= hi`, both finite.
    pub fn new(lo: f64, hi: f64) -> DashboardResult<Self> {
        if !lo.is_finite() || !hi.is_finite() || lo > hi {
            return Err(DashboardError::InvalidPayloadRange { lo, hi });
        }
        Ok(Self { lo, hi })
    }

    /// Builds the window covering known-ordered dataset bounds.
    #[must_use]
    pub fn full(min: f64, max: f64) -> Self {
        Self {
            lo: min.min(max),
            hi: max.max(min),
        }
    }

    #[must_use]
    pub const fn lo(self) -> f64 {
        self.lo
    }

    #[must_use]
    pub const fn hi(self) -> f64 {
        self.hi
    }

    /// Clamps both endpoints into `[min, max]`.
    #[must_use]
    pub fn clamped_to(self, min: f64, max: f64) -> Self {
        Self {
            lo: self.lo.clamp(min, max),
            hi: self.hi.clamp(min, max),
        }
    }

    #[must_use]
    pub fn contains(self, payload_mass_kg: f64) -> bool {
        payload_mass_kg >= self.lo && payload_mass_kg <= self.hi
    }
}

/// Live control values for one dashboard session.
///
/// Mutated only through the engine's event entry points; each mutation is
/// atomic and reports whether the value actually changed.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlState {
    selected_site: SiteSelection,
    payload_range: PayloadRange,
}

impl ControlState {
    #[must_use]
    pub fn new(selected_site: SiteSelection, payload_range: PayloadRange) -> Self {
        Self {
            selected_site,
            payload_range,
        }
    }

    #[must_use]
    pub fn selected_site(&self) -> &SiteSelection {
        &self.selected_site
    }

    #[must_use]
    pub fn payload_range(&self) -> PayloadRange {
        self.payload_range
    }

    /// Applies a site-dropdown event; returns whether the value changed.
    pub fn on_site_selected(&mut self, selection: SiteSelection) -> bool {
        if self.selected_site == selection {
            return false;
        }
        self.selected_site = selection;
        true
    }

    /// Applies a payload-slider event; returns whether the window changed.
    pub fn on_payload_range_changed(&mut self, range: PayloadRange) -> bool {
        if self.payload_range == range {
            return false;
        }
        self.payload_range = range;
        true
    }
}
