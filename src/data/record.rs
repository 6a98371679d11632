use serde::{Deserialize, Serialize};

/// Binary launch outcome label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Failure,
    Success,
}

impl Outcome {
    /// Parses the dataset wire form (the `class` column, 0/1).
    #[must_use]
    pub const fn from_class(class: u8) -> Option<Self> {
        match class {
            0 => Some(Self::Failure),
            1 => Some(Self::Success),
            _ => None,
        }
    }

    /// Wire form of the outcome.
    #[must_use]
    pub const fn class(self) -> u8 {
        match self {
            Self::Failure => 0,
            Self::Success => 1,
        }
    }

    /// Numeric form used for the scatter y axis.
    #[must_use]
    pub const fn as_f64(self) -> f64 {
        match self {
            Self::Failure => 0.0,
            Self::Success => 1.0,
        }
    }

    /// Slice label for outcome-grouped charts.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Failure => "Failure",
            Self::Success => "Success",
        }
    }
}

/// One row of the launch dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    pub launch_site: String,
    pub payload_mass_kg: f64,
    pub outcome: Outcome,
    pub booster_version_category: String,
}

impl LaunchRecord {
    #[must_use]
    pub fn new(
        launch_site: impl Into<String>,
        payload_mass_kg: f64,
        outcome: Outcome,
        booster_version_category: impl Into<String>,
    ) -> Self {
        Self {
            launch_site: launch_site.into(),
            payload_mass_kg,
            outcome,
            booster_version_category: booster_version_category.into(),
        }
    }
}
