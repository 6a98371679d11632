use launchdash_rs::core::pie::{ALL_SITES_PIE_TITLE, success_pie};
use launchdash_rs::data::{LaunchDataset, LaunchRecord, Outcome};
use launchdash_rs::interaction::SiteSelection;

fn dataset() -> LaunchDataset {
    // Site "A" has 3 launches (2 successes), site "B" has 2 (1 success).
    LaunchDataset::from_records(vec![
        LaunchRecord::new("A", 100.0, Outcome::Success, "v1.0"),
        LaunchRecord::new("A", 200.0, Outcome::Success, "v1.0"),
        LaunchRecord::new("B", 300.0, Outcome::Failure, "v1.1"),
        LaunchRecord::new("A", 400.0, Outcome::Failure, "FT"),
        LaunchRecord::new("B", 500.0, Outcome::Success, "FT"),
    ])
    .expect("dataset builds")
}

#[test]
fn all_sites_pie_counts_records_per_site() {
    let dataset = dataset();
    let spec = success_pie(&dataset, &SiteSelection::AllSites);

    assert_eq!(spec.title, ALL_SITES_PIE_TITLE);
    assert_eq!(spec.slices.len(), 2);
    assert_eq!(spec.slices[0].label, "A");
    assert_eq!(spec.slices[0].value, 3);
    assert_eq!(spec.slices[1].label, "B");
    assert_eq!(spec.slices[1].value, 2);
    assert_eq!(spec.total(), dataset.len() as u64);
    spec.validate().expect("all-sites pie is well-formed");
}

#[test]
fn concrete_site_pie_counts_success_vs_failure() {
    let dataset = dataset();
    let spec = success_pie(&dataset, &SiteSelection::Site("A".to_owned()));

    assert_eq!(spec.title, "Success vs. Failed Launches for A");
    assert_eq!(spec.slices.len(), 2);

    let success = spec
        .slices
        .iter()
        .find(|slice| slice.label == "Success")
        .expect("success slice present");
    let failure = spec
        .slices
        .iter()
        .find(|slice| slice.label == "Failure")
        .expect("failure slice present");
    assert_eq!(success.value, 2);
    assert_eq!(failure.value, 1);
}

#[test]
fn slices_follow_first_seen_outcome_order() {
    let dataset = dataset();
    let spec = success_pie(&dataset, &SiteSelection::Site("B".to_owned()));

    // B's first record is a failure, so the failure slice leads.
    let labels: Vec<&str> = spec
        .slices
        .iter()
        .map(|slice| slice.label.as_str())
        .collect();
    assert_eq!(labels, vec!["Failure", "Success"]);
}

#[test]
fn site_matching_zero_records_yields_zero_slices() {
    let dataset = dataset();
    let spec = success_pie(&dataset, &SiteSelection::Site("nowhere".to_owned()));

    assert!(spec.is_empty());
    assert_eq!(spec.total(), 0);
    spec.validate().expect("empty pie is well-formed");
}

#[test]
fn single_outcome_site_yields_one_slice() {
    let dataset = LaunchDataset::from_records(vec![
        LaunchRecord::new("C", 10.0, Outcome::Success, "v1.0"),
        LaunchRecord::new("C", 20.0, Outcome::Success, "v1.0"),
    ])
    .expect("dataset builds");

    let spec = success_pie(&dataset, &SiteSelection::Site("C".to_owned()));
    assert_eq!(spec.slices.len(), 1);
    assert_eq!(spec.slices[0].label, "Success");
    assert_eq!(spec.slices[0].value, 2);
}
