//! Partitioning a base network into per-zone private and public subnets.
//!
//! Every zone gets an equal, power-of-two aligned zone block. Inside a zone
//! block the private subnet takes the first half and the public subnet the
//! first quarter of the second half; the remaining 3/8 stay unallocated.

use super::carve::carve;
use crate::error::NetworkError;
use crate::models::{AllocationPlan, Network, SubnetPair};

/// Smallest power of two `>= n`, with `next_power_of_two(0) == 1`.
///
/// Computed in `u64` so counts above `2^31` give `2^32` instead of wrapping.
///
/// # Examples
/// ```
/// use zone_subnet_plan::processing::next_power_of_two;
/// assert_eq!(next_power_of_two(5), 8);
/// ```
pub fn next_power_of_two(n: u32) -> u64 {
    if n == 0 {
        return 1;
    }
    let mut v = n as u64 - 1;
    v |= v >> 1;
    v |= v >> 2;
    v |= v >> 4;
    v |= v >> 8;
    v |= v >> 16;
    v + 1
}

/// Extra prefix bits needed to give each of `zone_count` zones its own block.
pub fn zone_extra_bits(zone_count: u32) -> u8 {
    next_power_of_two(zone_count).trailing_zeros() as u8
}

/// Split `base` into one zone block per zone, in zone order.
pub fn zone_blocks(base: &Network, zone_count: u32) -> Result<Vec<Network>, NetworkError> {
    let zone_bits = zone_extra_bits(zone_count);
    (0..zone_count as u64)
        .map(|i| carve(base, zone_bits, i))
        .collect()
}

/// Carve zone `index` out of `base` and split it, one zone at a time.
///
/// Yields `(zone_block, pair)` per zone and stops at the first error, so an
/// infeasible zone count fails on zone 0 without building the other zones.
pub fn carve_zones(
    base: &Network,
    zone_count: u32,
) -> impl Iterator<Item = Result<(Network, SubnetPair), NetworkError>> + '_ {
    let zone_bits = zone_extra_bits(zone_count);
    (0..zone_count as u64).map(move |i| -> Result<(Network, SubnetPair), NetworkError> {
        let zone_block = carve(base, zone_bits, i)?;
        Ok((zone_block, split_zone_block(&zone_block)?))
    })
}

/// Carve the private and public subnet out of a single zone block.
pub fn split_zone_block(zone_block: &Network) -> Result<SubnetPair, NetworkError> {
    let private = carve(zone_block, 1, 0)?;
    // Same size as private, one block further: the zone block's second half.
    let public_candidate = carve(&private, 0, 1)?;
    let public = carve(&public_candidate, 2, 0)?;
    Ok(SubnetPair { private, public })
}

/// Partition `base` into `zone_count` private/public subnet pairs.
///
/// Zone `i` of the result belongs to the caller's `i`-th zone. A zone count
/// of zero yields an empty plan. Any carving error aborts the whole plan.
pub fn partition(base: &Network, zone_count: u32) -> Result<AllocationPlan, NetworkError> {
    log::debug!(
        "partition({base}, {zone_count}) rounded={} zone_bits={}",
        next_power_of_two(zone_count),
        zone_extra_bits(zone_count)
    );

    let pairs = carve_zones(base, zone_count)
        .map(|zone| zone.map(|(_, pair)| pair))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(AllocationPlan { pairs })
}

/// Parse `base_cidr` and partition it.
pub fn partition_cidr(base_cidr: &str, zone_count: u32) -> Result<AllocationPlan, NetworkError> {
    let base = Network::new(base_cidr)?;
    partition(&base, zone_count)
}
