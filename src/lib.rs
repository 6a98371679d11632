//! launchdash-rs: reactive dashboard core for launch records.
//!
//! This crate owns the non-visual half of a small analytics dashboard over
//! an immutable launch-records dataset: CSV ingestion, control state, two
//! pure chart recompute functions, and an explicit invalidation table that
//! wires control changes to recomputes. Rendering and event delivery belong
//! to host applications, which implement [`render::DisplaySurface`] and
//! consume serializable chart specs.

pub mod api;
pub mod core;
pub mod data;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{DashboardConfig, DashboardEngine};
pub use error::{DashboardError, DashboardResult, LoadError};
