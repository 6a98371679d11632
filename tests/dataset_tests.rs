use launchdash_rs::data::{LaunchDataset, Outcome, records_in_payload_window};
use launchdash_rs::error::LoadError;

const SAMPLE_CSV: &str = "\
Flight Number,Launch Site,class,Payload Mass (kg),Booster Version Category
1,CCAFS LC-40,0,0.0,v1.0
2,CCAFS LC-40,0,525.0,v1.0
3,VAFB SLC-4E,1,500.0,v1.1
4,KSC LC-39A,1,3170.0,FT
5,CCAFS SLC-40,0,2395.0,v1.1
6,KSC LC-39A,1,9600.0,B4
";

fn sample_dataset() -> LaunchDataset {
    LaunchDataset::from_reader(SAMPLE_CSV.as_bytes()).expect("sample dataset loads")
}

#[test]
fn loads_records_and_ignores_extra_columns() {
    let dataset = sample_dataset();
    assert_eq!(dataset.len(), 6);

    let first = &dataset.records()[0];
    assert_eq!(first.launch_site, "CCAFS LC-40");
    assert_eq!(first.payload_mass_kg, 0.0);
    assert_eq!(first.outcome, Outcome::Failure);
    assert_eq!(first.booster_version_category, "v1.0");
}

#[test]
fn distinct_sites_keep_first_seen_order() {
    let dataset = sample_dataset();
    let sites: Vec<&str> = dataset.distinct_sites().collect();
    assert_eq!(
        sites,
        vec!["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"]
    );
    assert!(dataset.contains_site("KSC LC-39A"));
    assert!(!dataset.contains_site("KSC LC-39B"));
}

#[test]
fn payload_bounds_are_computed_at_load() {
    let dataset = sample_dataset();
    assert_eq!(dataset.min_payload(), 0.0);
    assert_eq!(dataset.max_payload(), 9_600.0);

    let range = dataset.full_payload_range();
    assert_eq!(range.lo(), 0.0);
    assert_eq!(range.hi(), 9_600.0);
}

#[test]
fn filter_by_site_returns_only_matching_records() {
    let dataset = sample_dataset();
    let records = dataset.filter_by_site("KSC LC-39A");
    assert_eq!(records.len(), 2);
    assert!(
        records
            .iter()
            .all(|record| record.launch_site == "KSC LC-39A")
    );

    assert!(dataset.filter_by_site("nowhere").is_empty());
}

#[test]
fn payload_window_is_inclusive_at_both_ends() {
    let dataset = sample_dataset();
    let base: Vec<_> = dataset.records().iter().collect();

    let windowed = records_in_payload_window(&base, 500.0, 3_170.0);
    let masses: Vec<f64> = windowed
        .iter()
        .map(|record| record.payload_mass_kg)
        .collect();
    assert_eq!(masses, vec![525.0, 500.0, 3_170.0, 2_395.0]);
}

#[test]
fn missing_required_column_is_rejected() {
    let csv = "\
Launch Site,class,Booster Version Category
CCAFS LC-40,1,v1.0
";
    let err = LaunchDataset::from_reader(csv.as_bytes()).expect_err("load must fail");
    assert!(matches!(err, LoadError::MissingColumn("Payload Mass (kg)")));
}

#[test]
fn outcome_outside_binary_domain_is_rejected() {
    let csv = "\
Launch Site,class,Payload Mass (kg),Booster Version Category
CCAFS LC-40,2,100.0,v1.0
";
    let err = LaunchDataset::from_reader(csv.as_bytes()).expect_err("load must fail");
    assert!(matches!(err, LoadError::InvalidOutcome { line: 2, value: 2 }));
}

#[test]
fn negative_payload_mass_is_rejected() {
    let csv = "\
Launch Site,class,Payload Mass (kg),Booster Version Category
CCAFS LC-40,1,100.0,v1.0
VAFB SLC-4E,0,-3.5,v1.1
";
    let err = LaunchDataset::from_reader(csv.as_bytes()).expect_err("load must fail");
    assert!(matches!(err, LoadError::InvalidPayload { line: 3, .. }));
}

#[test]
fn unparsable_row_is_rejected() {
    let csv = "\
Launch Site,class,Payload Mass (kg),Booster Version Category
CCAFS LC-40,1,not-a-number,v1.0
";
    let err = LaunchDataset::from_reader(csv.as_bytes()).expect_err("load must fail");
    assert!(matches!(err, LoadError::Malformed(_)));
}

#[test]
fn dataset_without_rows_is_rejected() {
    let csv = "Launch Site,class,Payload Mass (kg),Booster Version Category\n";
    let err = LaunchDataset::from_reader(csv.as_bytes()).expect_err("load must fail");
    assert!(matches!(err, LoadError::Empty));
}

#[test]
fn missing_file_surfaces_io_error() {
    let err = LaunchDataset::load("/nonexistent/spacex_launch_dash.csv")
        .expect_err("load must fail");
    assert!(matches!(err, LoadError::Io { .. }));
}
