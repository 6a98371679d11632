use tracing::trace;

use crate::core::chart_spec::{ScatterChartSpec, ScatterPoint};
use crate::data::{LaunchDataset, LaunchRecord, records_in_payload_window};
use crate::interaction::{PayloadRange, SiteSelection};

/// Title of the all-sites payload scatter.
pub const ALL_SITES_SCATTER_TITLE: &str = "Payload vs. Launch Success for All Sites";

/// Pure scatter recompute: (dataset, selected site, payload range) ->
/// scatter spec.
///
/// The base set is the whole dataset for the all-sites selection, otherwise
/// the records at the site; the payload window then keeps records with
/// `lo <= payload <= hi`. One point per surviving record. A window that
/// excludes every record yields a zero-point spec.
#[must_use]
pub fn payload_scatter(
    dataset: &LaunchDataset,
    selection: &SiteSelection,
    range: PayloadRange,
) -> ScatterChartSpec {
    let (title, base): (String, Vec<&LaunchRecord>) = match selection {
        SiteSelection::AllSites => (
            ALL_SITES_SCATTER_TITLE.to_owned(),
            dataset.records().iter().collect(),
        ),
        SiteSelection::Site(code) => (
            format!("Payload vs. Launch Success for {code}"),
            dataset.filter_by_site(code),
        ),
    };

    let mut spec = ScatterChartSpec::new(title);
    for record in records_in_payload_window(&base, range.lo(), range.hi()) {
        spec = spec.with_point(ScatterPoint::new(
            record.payload_mass_kg,
            record.outcome.as_f64(),
            record.booster_version_category.clone(),
        ));
    }

    trace!(points = spec.points.len(), "recomputed payload scatter");
    spec
}
