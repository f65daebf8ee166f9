//! Address-space partitioning logic.
//!
//! This module contains the planning steps:
//! - [`carve`] - Carving a sub-network out of a parent network
//! - [`partition`] - Per-zone private/public subnet allocation
//! - [`layout`] - Joining the plan with zone names
//! - [`verify`] - Containment and overlap checks on a plan

mod carve;
mod layout;
mod partition;
mod verify;

// Re-export public functions
pub use carve::carve;
pub use layout::{layout_zones, reserved_ranges};
pub use partition::{
    carve_zones, next_power_of_two, partition, partition_cidr, split_zone_block, zone_blocks,
    zone_extra_bits,
};
pub use verify::verify_plan;
