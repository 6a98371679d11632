pub mod dataset;
pub mod record;
pub mod windowing;

pub use dataset::LaunchDataset;
pub use record::{LaunchRecord, Outcome};
pub use windowing::{records_at_site, records_in_payload_window};
