use indexmap::IndexMap;
use tracing::trace;

use crate::core::chart_spec::{PieChartSpec, PieSlice};
use crate::data::{LaunchDataset, Outcome};
use crate::interaction::SiteSelection;

/// Title of the all-sites success pie.
pub const ALL_SITES_PIE_TITLE: &str = "Total Success Launches By Site";

/// Pure pie recompute: (dataset, selected site) -> pie spec.
///
/// All-sites: one slice per launch site with that site's record count.
/// Concrete site: success vs failure counts for the site. Slices follow
/// first-seen grouping order; a selection matching zero records yields a
/// zero-slice spec.
#[must_use]
pub fn success_pie(dataset: &LaunchDataset, selection: &SiteSelection) -> PieChartSpec {
    let spec = match selection {
        SiteSelection::AllSites => {
            let mut counts: IndexMap<&str, u64> = IndexMap::new();
            for record in dataset.records() {
                // Site values outside the discovered set stay out of the
                // all-sites view.
                if !dataset.contains_site(&record.launch_site) {
                    continue;
                }
                *counts.entry(record.launch_site.as_str()).or_insert(0) += 1;
            }

            let mut spec = PieChartSpec::new(ALL_SITES_PIE_TITLE);
            for (site, count) in counts {
                spec = spec.with_slice(PieSlice::new(site, count));
            }
            spec
        }
        SiteSelection::Site(code) => {
            let mut counts: IndexMap<Outcome, u64> = IndexMap::new();
            for record in dataset.filter_by_site(code) {
                *counts.entry(record.outcome).or_insert(0) += 1;
            }

            let mut spec = PieChartSpec::new(format!("Success vs. Failed Launches for {code}"));
            for (outcome, count) in counts {
                spec = spec.with_slice(PieSlice::new(outcome.label(), count));
            }
            spec
        }
    };

    trace!(slices = spec.slices.len(), "recomputed success pie");
    spec
}
