use crate::data::record::LaunchRecord;

/// Returns the records launched from one concrete site code.
#[must_use]
pub fn records_at_site<'a>(records: &'a [LaunchRecord], site: &str) -> Vec<&'a LaunchRecord> {
    records
        .iter()
        .filter(|record| record.launch_site == site)
        .collect()
}

/// Returns the records whose payload mass falls inside an inclusive window.
#[must_use]
pub fn records_in_payload_window<'a>(
    records: &[&'a LaunchRecord],
    lo: f64,
    hi: f64,
) -> Vec<&'a LaunchRecord> {
    records
        .iter()
        .copied()
        .filter(|record| record.payload_mass_kg >= lo && record.payload_mass_kg <= hi)
        .collect()
}
