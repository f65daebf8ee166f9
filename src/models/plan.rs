//! Allocation plan data model.

use super::Network;
use serde::{Deserialize, Serialize};

/// The private and public subnet carved from one zone block.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubnetPair {
    /// First half of the zone block.
    pub private: Network,
    /// First quarter of the zone block's second half.
    pub public: Network,
}

/// Ordered subnet pairs, one per requested zone.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct AllocationPlan {
    pub pairs: Vec<SubnetPair>,
}

impl AllocationPlan {
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SubnetPair> {
        self.pairs.iter()
    }

    /// All subnets in address order of allocation: private then public per zone.
    pub fn subnets(&self) -> Vec<Network> {
        self.pairs
            .iter()
            .flat_map(|p| [p.private, p.public])
            .collect()
    }
}

impl<'a> IntoIterator for &'a AllocationPlan {
    type Item = &'a SubnetPair;
    type IntoIter = std::slice::Iter<'a, SubnetPair>;

    fn into_iter(self) -> Self::IntoIter {
        self.pairs.iter()
    }
}

/// A plan pair joined with the zone it was assigned to.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct ZoneSubnets {
    /// Caller supplied zone identifier.
    pub zone: String,
    /// Equal share of the base network owned by this zone.
    pub zone_block: Network,
    pub private: Network,
    pub public: Network,
    /// Parts of the zone block left unallocated.
    pub reserved: Vec<Network>,
}
