//! CSV output formatting for a zone layout.

use crate::models::{num_hosts, Network, ZoneSubnets};
use colored::Colorize;
use std::error::Error;

use super::terminal::{format_field, print_summary};

const CSV_HEADER: &str = r#""cnt",           "zone",        "zone_block",    "private_subnet", "private_hosts",     "public_subnet", "public_hosts",                          "reserved""#;

/// Render usable hosts, or `n/a` for blocks too small to hold one.
fn hosts(network: &Network) -> String {
    num_hosts(network.mask)
        .map(|h| h.to_string())
        .unwrap_or_else(|| "n/a".to_string())
}

/// Format one zone as a CSV row.
pub fn format_row(i: usize, zone: &ZoneSubnets) -> String {
    format!(
        r#"{j},{zone},{zone_block},{private},{private_hosts},{public},{public_hosts},{reserved}"#,
        j = format_field(i + 1, 6),
        zone = format_field(&zone.zone, 16),
        zone_block = format_field(zone.zone_block, 18),
        private = format_field(zone.private, 18),
        private_hosts = format_field(format!("{}_hosts", hosts(&zone.private)), 16),
        public = format_field(zone.public, 18),
        public_hosts = format_field(format!("{}_hosts", hosts(&zone.public)), 16),
        reserved = format_field(
            zone.reserved
                .iter()
                .map(|n| n.to_string())
                .collect::<Vec<String>>()
                .join(","),
            40
        ),
    )
}

/// Print a zone layout as CSV to stdout.
///
/// # Arguments
/// * `base` - The partitioned base network
/// * `layout` - One entry per zone, in zone order
pub fn plan_print(base: &Network, layout: &[ZoneSubnets]) -> Result<(), Box<dyn Error>> {
    log::info!("#Start plan_print() base={base} zones={}", layout.len());

    println!("{}", CSV_HEADER.bold());
    for (i, zone) in layout.iter().enumerate() {
        println!("{}", format_row(i, zone));
    }
    print_summary(base, layout);

    Ok(())
}
