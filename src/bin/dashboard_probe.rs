//! Headless dashboard probe.
//!
//! Loads a launch CSV, applies an optional site selection and payload
//! window, and prints the control-surface layout plus both chart specs as
//! pretty JSON.
//!
//! Usage: `dashboard_probe <csv-path> [site|ALL] [lo hi]`

use std::env;
use std::process::ExitCode;

use launchdash_rs::api::{DashboardConfig, DashboardEngine};
use launchdash_rs::data::LaunchDataset;
use launchdash_rs::interaction::SiteSelection;
use launchdash_rs::render::NullSurface;
use launchdash_rs::telemetry;

fn main() -> ExitCode {
    let _ = telemetry::init_default_tracing();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(path) = args.first() else {
        eprintln!("usage: dashboard_probe <csv-path> [site|ALL] [lo hi]");
        return ExitCode::FAILURE;
    };

    match run(path, &args[1..]) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("dashboard_probe: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(path: &str, rest: &[String]) -> Result<(), Box<dyn std::error::Error>> {
    let dataset = LaunchDataset::load(path)?;
    let mut engine = DashboardEngine::new(NullSurface::default(), dataset, DashboardConfig::new())?;

    if let Some(site) = rest.first() {
        engine.select_site(SiteSelection::from_value(site))?;
    }
    if let (Some(lo), Some(hi)) = (rest.get(1), rest.get(2)) {
        engine.set_payload_range(lo.parse()?, hi.parse()?)?;
    }

    let layout = engine.layout();
    engine.refresh()?;
    let surface = engine.into_surface();

    println!("{}", serde_json::to_string_pretty(&layout)?);
    if let Some(pie) = surface.last_pie {
        println!("{}", serde_json::to_string_pretty(&pie)?);
    }
    if let Some(scatter) = surface.last_scatter {
        println!("{}", serde_json::to_string_pretty(&scatter)?);
    }
    Ok(())
}
