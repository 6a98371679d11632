mod engine;
mod engine_config;
mod invalidation;
mod layout;

pub use engine::DashboardEngine;
pub use engine_config::DashboardConfig;
pub use invalidation::{ChartId, ChartSet, ControlSignal};
pub use layout::{ALL_SITES_OPTION_LABEL, DashboardLayout, PayloadSliderSpec, SiteOption};
