pub mod chart_spec;
pub mod pie;
pub mod scatter;

pub use chart_spec::{PieChartSpec, PieSlice, ScatterChartSpec, ScatterPoint};
pub use pie::success_pie;
pub use scatter::payload_scatter;
