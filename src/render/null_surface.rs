use crate::core::{PieChartSpec, ScatterChartSpec};
use crate::error::DashboardResult;
use crate::render::DisplaySurface;

/// No-op surface used by tests and headless engine usage.
///
/// It still validates every spec it receives so tests can catch malformed
/// chart data before a real frontend is introduced, and it keeps the last
/// presented specs so tests can observe which charts a refresh replaced.
#[derive(Debug, Default)]
pub struct NullSurface {
    pub pie_present_count: usize,
    pub scatter_present_count: usize,
    pub last_pie: Option<PieChartSpec>,
    pub last_scatter: Option<ScatterChartSpec>,
}

impl DisplaySurface for NullSurface {
    fn present_pie(&mut self, spec: &PieChartSpec) -> DashboardResult<()> {
        spec.validate()?;
        self.pie_present_count += 1;
        self.last_pie = Some(spec.clone());
        Ok(())
    }

    fn present_scatter(&mut self, spec: &ScatterChartSpec) -> DashboardResult<()> {
        spec.validate()?;
        self.scatter_present_count += 1;
        self.last_scatter = Some(spec.clone());
        Ok(())
    }
}
