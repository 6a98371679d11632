use std::fs::File;
use std::io::Read;
use std::path::Path;

use indexmap::IndexSet;
use ordered_float::OrderedFloat;
use serde::Deserialize;
use tracing::debug;

use crate::data::record::{LaunchRecord, Outcome};
use crate::data::windowing::records_at_site;
use crate::error::LoadError;
use crate::interaction::PayloadRange;

pub const LAUNCH_SITE_COLUMN: &str = "Launch Site";
pub const PAYLOAD_MASS_COLUMN: &str = "Payload Mass (kg)";
pub const OUTCOME_COLUMN: &str = "class";
pub const BOOSTER_CATEGORY_COLUMN: &str = "Booster Version Category";

const REQUIRED_COLUMNS: [&str; 4] = [
    LAUNCH_SITE_COLUMN,
    PAYLOAD_MASS_COLUMN,
    OUTCOME_COLUMN,
    BOOSTER_CATEGORY_COLUMN,
];

/// Raw CSV row shape; columns beyond the required four are ignored.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "Launch Site")]
    launch_site: String,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "class")]
    class: u8,
    #[serde(rename = "Booster Version Category")]
    booster_version_category: String,
}

/// Immutable launch-records store.
///
/// Loaded once at startup. Distinct sites (in first-seen source order) and
/// the payload bounds are computed at construction; every filter view is
/// pure and leaves the records untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchDataset {
    records: Vec<LaunchRecord>,
    sites: IndexSet<String>,
    min_payload: f64,
    max_payload: f64,
}

impl LaunchDataset {
    /// Loads the dataset from a CSV file on disk.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let dataset = Self::from_reader(file)?;
        debug!(
            path = %path.display(),
            records = dataset.records.len(),
            sites = dataset.sites.len(),
            "loaded launch dataset"
        );
        Ok(dataset)
    }

    /// Loads the dataset from any CSV byte stream.
    ///
    /// Fails when a required column is absent from the header, a row fails
    /// to parse, an outcome is outside {0, 1}, a payload mass is non-finite
    /// or negative, or the stream holds zero data rows.
    pub fn from_reader(reader: impl Read) -> Result<Self, LoadError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        for column in REQUIRED_COLUMNS {
            if !headers.iter().any(|header| header == column) {
                return Err(LoadError::MissingColumn(column));
            }
        }

        let mut records = Vec::new();
        for (index, row) in csv_reader.deserialize::<RawRow>().enumerate() {
            // 1-based data line, counting the header as line 1.
            let line = index as u64 + 2;
            let row = row?;

            let outcome = Outcome::from_class(row.class).ok_or(LoadError::InvalidOutcome {
                line,
                value: row.class,
            })?;
            if !row.payload_mass_kg.is_finite() || row.payload_mass_kg < 0.0 {
                return Err(LoadError::InvalidPayload {
                    line,
                    value: row.payload_mass_kg,
                });
            }

            records.push(LaunchRecord {
                launch_site: row.launch_site,
                payload_mass_kg: row.payload_mass_kg,
                outcome,
                booster_version_category: row.booster_version_category,
            });
        }

        Self::from_records(records)
    }

    /// Builds a dataset from records that already satisfy the row
    /// invariants (finite, non-negative payload masses).
    pub fn from_records(records: Vec<LaunchRecord>) -> Result<Self, LoadError> {
        if records.is_empty() {
            return Err(LoadError::Empty);
        }

        let sites: IndexSet<String> = records
            .iter()
            .map(|record| record.launch_site.clone())
            .collect();
        let min_payload = records
            .iter()
            .map(|record| OrderedFloat(record.payload_mass_kg))
            .min()
            .map_or(0.0, OrderedFloat::into_inner);
        let max_payload = records
            .iter()
            .map(|record| OrderedFloat(record.payload_mass_kg))
            .max()
            .map_or(0.0, OrderedFloat::into_inner);

        Ok(Self {
            records,
            sites,
            min_payload,
            max_payload,
        })
    }

    #[must_use]
    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Site codes in first-seen source order.
    pub fn distinct_sites(&self) -> impl Iterator<Item = &str> {
        self.sites.iter().map(String::as_str)
    }

    #[must_use]
    pub fn contains_site(&self, site: &str) -> bool {
        self.sites.contains(site)
    }

    #[must_use]
    pub fn min_payload(&self) -> f64 {
        self.min_payload
    }

    #[must_use]
    pub fn max_payload(&self) -> f64 {
        self.max_payload
    }

    /// The widest selectable payload window for this dataset.
    #[must_use]
    pub fn full_payload_range(&self) -> PayloadRange {
        PayloadRange::full(self.min_payload, self.max_payload)
    }

    /// Records launched from one concrete site code.
    #[must_use]
    pub fn filter_by_site(&self, site: &str) -> Vec<&LaunchRecord> {
        records_at_site(&self.records, site)
    }
}
