//! JSON report of a zone layout.

use crate::models::{Network, ZoneSubnets};
use serde::Serialize;
use std::error::Error;

/// Serialized form of a planning run.
#[derive(Serialize, Debug)]
pub struct PlanReport<'a> {
    /// RFC 3339 timestamp of the run.
    pub generated_at: String,
    pub base_cidr: Network,
    pub zones: &'a [ZoneSubnets],
}

impl<'a> PlanReport<'a> {
    pub fn new(base: &Network, layout: &'a [ZoneSubnets]) -> PlanReport<'a> {
        PlanReport {
            generated_at: chrono::Utc::now().to_rfc3339(),
            base_cidr: *base,
            zones: layout,
        }
    }
}

/// Render a zone layout as pretty printed JSON.
pub fn plan_to_json(base: &Network, layout: &[ZoneSubnets]) -> Result<String, Box<dyn Error>> {
    let report = PlanReport::new(base, layout);
    serde_json::to_string_pretty(&report).map_err(|e| format!("Error serializing JSON: {e}").into())
}

/// Print a zone layout as JSON to stdout.
pub fn plan_print_json(base: &Network, layout: &[ZoneSubnets]) -> Result<(), Box<dyn Error>> {
    log::info!("#Start plan_print_json() base={base} zones={}", layout.len());
    println!("{}", plan_to_json(base, layout)?);
    Ok(())
}
