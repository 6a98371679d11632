use std::path::PathBuf;

use thiserror::Error;

pub type DashboardResult<T> = Result<T, DashboardError>;

/// Failures while acquiring the launch dataset.
///
/// All variants are fatal at startup: the dashboard cannot run without a
/// valid dataset.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read dataset `{}`", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed dataset row: {0}")]
    Malformed(#[from] csv::Error),

    #[error("dataset is missing required column `{0}`")]
    MissingColumn(&'static str),

    #[error("record {line}: launch outcome must be 0 or 1, got {value}")]
    InvalidOutcome { line: u64, value: u8 },

    #[error("record {line}: payload mass must be finite and non-negative, got {value}")]
    InvalidPayload { line: u64, value: f64 },

    #[error("dataset contains no launch records")]
    Empty,
}

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Load(#[from] LoadError),

    #[error("unknown launch site `{0}`")]
    UnknownSite(String),

    #[error("invalid payload range: lo={lo}, hi={hi}")]
    InvalidPayloadRange { lo: f64, hi: f64 },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
