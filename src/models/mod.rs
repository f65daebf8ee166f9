//! Domain models for zone subnet planning.
//!
//! This module contains the core data structures used throughout the application:
//! - [`Network`] - block-aligned IPv4 network in CIDR notation
//! - [`AllocationPlan`] and [`SubnetPair`] - partitioner output
//! - [`ZoneSubnets`] - a plan pair joined with its zone name

mod network;
mod plan;

// Re-export public types
pub use network::{
    block_size, broadcast_addr, get_cidr_mask, num_hosts, Network, MAX_LENGTH,
};
pub use plan::{AllocationPlan, SubnetPair, ZoneSubnets};
