mod null_surface;

pub use null_surface::NullSurface;

use crate::core::{PieChartSpec, ScatterChartSpec};
use crate::error::DashboardResult;

/// Contract implemented by any display surface.
///
/// Surfaces receive fully materialized, renderer-agnostic chart specs so
/// drawing and event plumbing remain isolated from dataset and control
/// logic. Each call fully replaces the previously presented spec for that
/// chart; surfaces own the specs after handoff.
pub trait DisplaySurface {
    fn present_pie(&mut self, spec: &PieChartSpec) -> DashboardResult<()>;
    fn present_scatter(&mut self, spec: &ScatterChartSpec) -> DashboardResult<()>;
}
