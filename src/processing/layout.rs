//! Zone layout: joins the index-ordered plan with caller zone names.

use super::carve::carve;
use super::partition::carve_zones;
use crate::error::NetworkError;
use crate::models::{Network, SubnetPair, ZoneSubnets};

/// Ranges of a zone block that neither subnet uses.
///
/// The second half of a zone block holds the public subnet (first quarter),
/// then a reserved block of the same size, then a reserved block twice that
/// size closing the zone block.
pub fn reserved_ranges(zone_block: &Network, pair: &SubnetPair) -> Result<Vec<Network>, NetworkError> {
    let second_half = carve(zone_block, 1, 1)?;
    Ok(vec![carve(&pair.public, 0, 1)?, carve(&second_half, 1, 1)?])
}

/// Partition `base` for `zones` and attach each zone name to its subnets.
///
/// Zone names are not interpreted; the `i`-th name gets the `i`-th pair.
pub fn layout_zones(base: &Network, zones: &[String]) -> Result<Vec<ZoneSubnets>, NetworkError> {
    let zone_count = u32::try_from(zones.len()).unwrap_or(u32::MAX);

    zones
        .iter()
        .zip(carve_zones(base, zone_count))
        .map(|(zone, carved)| -> Result<ZoneSubnets, NetworkError> {
            let (block, pair) = carved?;
            let reserved = reserved_ranges(&block, &pair)?;
            log::debug!(
                "zone {zone}: block={block} private={} public={} reserved={:?}",
                pair.private,
                pair.public,
                reserved
            );
            Ok(ZoneSubnets {
                zone: zone.clone(),
                zone_block: block,
                private: pair.private,
                public: pair.public,
                reserved,
            })
        })
        .collect()
}
