//! Terminal output utilities.
//!
//! Provides formatting helpers for terminal output.

use crate::models::{Network, ZoneSubnets};
use colored::Colorize;

/// Format a value as a quoted, right-aligned field.
///
/// # Arguments
/// * `value` - The value to format
/// * `width` - The minimum width of the field
pub fn format_field<T: ToString>(value: T, width: usize) -> String {
    let quoted = format!("\"{}\"", value.to_string());
    format!("{quoted:>width$}")
}

/// Address usage of a layout relative to its base network.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct AddressUsage {
    pub private: u64,
    pub public: u64,
    pub reserved: u64,
    /// Base addresses outside every zone block (zone count not a power of two).
    pub unassigned: u64,
}

/// Sum up where the addresses of `base` went.
pub fn address_usage(base: &Network, layout: &[ZoneSubnets]) -> AddressUsage {
    let mut usage = AddressUsage::default();
    for zone in layout {
        usage.private += zone.private.size();
        usage.public += zone.public.size();
        usage.reserved += zone.reserved.iter().map(|n| n.size()).sum::<u64>();
    }
    usage.unassigned = base
        .size()
        .saturating_sub(usage.private + usage.public + usage.reserved);
    usage
}

/// Print a one-line summary of the address usage.
pub fn print_summary(base: &Network, layout: &[ZoneSubnets]) {
    let usage = address_usage(base, layout);
    println!(
        "#{}# {base} across {zones} zones: private={private} public={public} reserved={reserved} unassigned={unassigned}",
        "SUMMARY".on_blue(),
        zones = layout.len(),
        private = usage.private.to_string().green(),
        public = usage.public.to_string().yellow(),
        reserved = usage.reserved,
        unassigned = usage.unassigned,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processing::layout_zones;

    #[test]
    fn test_format_field_short() {
        assert_eq!(format_field("test", 10), "    \"test\"");
    }

    #[test]
    fn test_format_field_long() {
        assert_eq!(format_field("long_value", 5), "\"long_value\"");
    }

    #[test]
    fn test_format_field_number() {
        assert_eq!(format_field(42, 6), "  \"42\"");
    }

    #[test]
    fn test_address_usage_three_zones() {
        let base = Network::new("10.0.0.0/16").unwrap();
        let zones: Vec<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();
        let layout = layout_zones(&base, &zones).unwrap();

        let usage = address_usage(&base, &layout);
        assert_eq!(usage.private, 3 * 8192);
        assert_eq!(usage.public, 3 * 2048);
        assert_eq!(usage.reserved, 3 * 6144);
        assert_eq!(usage.unassigned, 16384);
    }
}
