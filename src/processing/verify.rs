//! Plan verification.
//!
//! Re-checks a computed plan before it is handed to provisioning: every
//! subnet inside the base network, no two subnets overlapping.

use crate::models::{AllocationPlan, Network};
use itertools::Itertools;
use std::error::Error;

/// Verify containment and pairwise disjointness of all subnets in `plan`.
///
/// # Returns
/// * `Ok(())` - The plan is safe to provision
/// * `Err` - Names the first subnet outside `base` or the first overlapping pair
pub fn verify_plan(base: &Network, plan: &AllocationPlan) -> Result<(), Box<dyn Error>> {
    let subnets = plan.subnets();

    if let Some(outside) = subnets.iter().find(|s| !base.contains_network(s)) {
        log::error!("Subnet {outside} lies outside base network {base}");
        return Err(format!("Subnet {outside} is not contained in {base}").into());
    }

    if let Some((a, b)) = subnets
        .iter()
        .tuple_combinations()
        .find(|(a, b)| a.overlaps(b))
    {
        log::error!("Subnets {a} and {b} overlap");
        return Err(format!("Overlapping subnets: {a} and {b}").into());
    }

    log::debug!("Verified {} subnets inside {base}", subnets.len());
    Ok(())
}
