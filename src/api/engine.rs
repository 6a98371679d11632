use tracing::{debug, trace};

use crate::api::engine_config::DashboardConfig;
use crate::api::invalidation::{ChartId, ChartSet, ControlSignal};
use crate::api::layout::DashboardLayout;
use crate::core::{payload_scatter, success_pie};
use crate::data::LaunchDataset;
use crate::error::{DashboardError, DashboardResult};
use crate::interaction::{ControlState, PayloadRange, SiteSelection};
use crate::render::DisplaySurface;

/// Main orchestration facade consumed by host applications.
///
/// `DashboardEngine` owns the immutable dataset, the live control state,
/// and the pending-chart set. Control events invalidate charts through the
/// `ControlSignal` dispatch table; `refresh` recomputes exactly the
/// invalidated charts from the current inputs and pushes the fresh specs
/// to the display surface.
#[derive(Debug)]
pub struct DashboardEngine<S: DisplaySurface> {
    surface: S,
    dataset: LaunchDataset,
    config: DashboardConfig,
    controls: ControlState,
    pending: ChartSet,
}

impl<S: DisplaySurface> DashboardEngine<S> {
    /// Builds an engine with controls at their initial values.
    ///
    /// The payload range starts at the dataset's full `[min, max]` window
    /// and every chart starts pending, so the first `refresh` draws both.
    pub fn new(
        surface: S,
        dataset: LaunchDataset,
        config: DashboardConfig,
    ) -> DashboardResult<Self> {
        if let Some(code) = config.initial_site.site_code()
            && !dataset.contains_site(code)
        {
            return Err(DashboardError::UnknownSite(code.to_owned()));
        }

        let controls = ControlState::new(config.initial_site.clone(), dataset.full_payload_range());
        Ok(Self {
            surface,
            dataset,
            config,
            controls,
            pending: ChartSet::all(),
        })
    }

    /// Handles a site-dropdown event.
    ///
    /// Concrete codes not present in the dataset are rejected. An unchanged
    /// value invalidates nothing.
    pub fn select_site(&mut self, selection: SiteSelection) -> DashboardResult<()> {
        if let Some(code) = selection.site_code()
            && !self.dataset.contains_site(code)
        {
            return Err(DashboardError::UnknownSite(code.to_owned()));
        }

        if self.controls.on_site_selected(selection) {
            debug!(
                site = self.controls.selected_site().value(),
                "site selection changed"
            );
            self.pending = self.pending.union(ControlSignal::SiteSelection.charts());
        }
        Ok(())
    }

    /// Handles a payload-slider event.
    ///
    /// `lo > hi` and non-finite endpoints are rejected; in-order endpoints
    /// outside the dataset's payload bounds are clamped. An unchanged
    /// window (after clamping) invalidates nothing.
    pub fn set_payload_range(&mut self, lo: f64, hi: f64) -> DashboardResult<()> {
        let range = PayloadRange::new(lo, hi)?
            .clamped_to(self.dataset.min_payload(), self.dataset.max_payload());

        if self.controls.on_payload_range_changed(range) {
            debug!(lo = range.lo(), hi = range.hi(), "payload range changed");
            self.pending = self.pending.union(ControlSignal::PayloadRange.charts());
        }
        Ok(())
    }

    /// Recomputes every pending chart from the current control state and
    /// presents the fresh specs to the surface.
    ///
    /// Superseded intermediate control values are never drawn: only the
    /// latest state feeds each recompute. Returns the set that was redrawn;
    /// charts stay pending if the surface rejects their spec.
    pub fn refresh(&mut self) -> DashboardResult<ChartSet> {
        let pending = self.pending;
        for chart in pending.iter() {
            match chart {
                ChartId::SuccessPie => {
                    let spec = success_pie(&self.dataset, self.controls.selected_site());
                    self.surface.present_pie(&spec)?;
                }
                ChartId::PayloadScatter => {
                    let spec = payload_scatter(
                        &self.dataset,
                        self.controls.selected_site(),
                        self.controls.payload_range(),
                    );
                    self.surface.present_scatter(&spec)?;
                }
            }
        }

        self.pending = ChartSet::none();
        trace!(charts = pending.len(), "refresh pass complete");
        Ok(pending)
    }

    #[must_use]
    pub fn controls(&self) -> &ControlState {
        &self.controls
    }

    #[must_use]
    pub fn dataset(&self) -> &LaunchDataset {
        &self.dataset
    }

    #[must_use]
    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Control-surface description for the current dataset and config.
    #[must_use]
    pub fn layout(&self) -> DashboardLayout {
        DashboardLayout::new(&self.dataset, &self.config)
    }

    #[must_use]
    pub fn pending_charts(&self) -> ChartSet {
        self.pending
    }

    #[must_use]
    pub fn has_pending_charts(&self) -> bool {
        !self.pending.is_none()
    }

    #[must_use]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    #[must_use]
    pub fn into_surface(self) -> S {
        self.surface
    }
}
