//! Tracing setup for hosts embedding the dashboard core.
//!
//! Logging stays opt-in: nothing installs a subscriber unless the host
//! asks for one here or brings its own.

/// Default environment-filter directive when `RUST_LOG` is unset.
#[cfg(feature = "telemetry")]
const DEFAULT_FILTER: &str = "info";

/// Installs a compact, env-filtered `tracing` subscriber.
///
/// Returns `true` when a subscriber was installed. Returns `false` when the
/// `telemetry` feature is disabled or another subscriber was already set by
/// the host application.
#[must_use]
pub fn init_default_tracing() -> bool {
    #[cfg(feature = "telemetry")]
    {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER));

        return tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
            .is_ok();
    }

    #[cfg(not(feature = "telemetry"))]
    {
        false
    }
}
