//! Deterministic per-zone subnet planning for a single IPv4 base network.
//!
//! The base network is split into one equal zone block per zone; each zone
//! block yields a private subnet (first half) and a public subnet (first
//! quarter of the second half).

pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod processing;

use config::{OutputFormat, PlanConfig};
use models::{Network, ZoneSubnets};
use std::error::Error;

pub use error::NetworkError;

/// Validate `config`, lay out its zones and verify the resulting plan.
///
/// # Returns
/// * `Ok((Network, Vec<ZoneSubnets>))` - The base network and one entry per zone
/// * `Err` - Invalid configuration, insufficient address space, or a failed check
pub fn build_plan(config: &PlanConfig) -> Result<(Network, Vec<ZoneSubnets>), Box<dyn Error>> {
    let base = config.validate()?;
    log::info!("Planning {} zones in {base}", config.zones.len());

    let layout = processing::layout_zones(&base, &config.zones)?;
    let plan = models::AllocationPlan {
        pairs: layout
            .iter()
            .map(|z| models::SubnetPair {
                private: z.private,
                public: z.public,
            })
            .collect(),
    };
    processing::verify_plan(&base, &plan)?;

    Ok((base, layout))
}

/// Print a layout in the configured format.
pub fn print_plan(
    format: OutputFormat,
    base: &Network,
    layout: &[ZoneSubnets],
) -> Result<(), Box<dyn Error>> {
    match format {
        OutputFormat::Csv => output::plan_print(base, layout),
        OutputFormat::Json => output::plan_print_json(base, layout),
    }
}
