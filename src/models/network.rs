//! IPv4 network (CIDR block) model.
//!
//! Provides [`Network`] for representing block-aligned IPv4 networks, along
//! with the mask and broadcast helpers the carver builds on.

use crate::error::NetworkError;
use regex::Regex;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;
use std::sync::OnceLock;

/// Maximum length for an IPv4 prefix (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Addresses every cloud subnet gives up (network, broadcast, gateway and 2 DNS).
const RESERVED_HOSTS: u64 = 5;

static CIDR_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_cidr_regex() -> &'static Regex {
    CIDR_REGEX.get_or_init(|| {
        Regex::new(r"^(\d{1,3}(?:\.\d{1,3}){3})/(\d{1,2})$").expect("Invalid Regex")
    })
}

/// Convert a prefix length to a subnet mask as u32.
///
/// Lengths above 32 saturate to `/32`.
///
/// # Examples
/// ```
/// use zone_subnet_plan::models::get_cidr_mask;
/// assert_eq!(get_cidr_mask(24), 0xFFFFFF00);
/// ```
pub fn get_cidr_mask(len: u8) -> u32 {
    let right_len = MAX_LENGTH - len.min(MAX_LENGTH);
    let all_bits = u32::MAX as u64;
    ((all_bits >> right_len) << right_len) as u32
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Ipv4Addr {
    let mask = get_cidr_mask(len);
    Ipv4Addr::from((u32::from(addr) & mask) | !mask)
}

/// Number of addresses in a block of the given prefix length.
pub fn block_size(len: u8) -> u64 {
    1u64 << (MAX_LENGTH - len.min(MAX_LENGTH))
}

/// Usable host addresses in a cloud subnet of the given prefix length.
///
/// Returns `None` for `/30` and smaller, which cannot hold a host once the
/// reserved addresses are taken.
pub fn num_hosts(len: u8) -> Option<u64> {
    if len >= MAX_LENGTH - 2 {
        None
    } else {
        Some(block_size(len) - RESERVED_HOSTS)
    }
}

/// Block-aligned IPv4 network in CIDR notation.
#[derive(Eq, Ord, Debug, Copy, Clone, Hash, PartialEq, PartialOrd)]
pub struct Network {
    /// Base (network) address.
    pub addr: Ipv4Addr,
    /// Prefix length (0-32).
    pub mask: u8,
}

impl Network {
    /// Parse a network from `a.b.c.d/prefix` text.
    ///
    /// The address must be block-aligned for its prefix: `10.0.0.1/16` is
    /// rejected rather than silently truncated.
    pub fn new(addr_cidr: &str) -> Result<Network, NetworkError> {
        let text = addr_cidr.trim();
        let caps = get_cidr_regex()
            .captures(text)
            .ok_or_else(|| NetworkError::invalid(addr_cidr))?;

        let addr: Ipv4Addr = caps[1]
            .parse()
            .map_err(|_| NetworkError::invalid(addr_cidr))?;
        let mask: u8 = caps[2]
            .parse()
            .map_err(|_| NetworkError::invalid(addr_cidr))?;

        let network = Network { addr, mask };
        network
            .validate()
            .map_err(|_| NetworkError::invalid(addr_cidr))?;
        Ok(network)
    }

    /// Check the prefix range and block alignment.
    pub fn validate(&self) -> Result<(), NetworkError> {
        if self.mask > MAX_LENGTH || u32::from(self.addr) & !get_cidr_mask(self.mask) != 0 {
            return Err(NetworkError::invalid(self.to_string()));
        }
        Ok(())
    }

    /// Lowest (network) address of the block.
    pub fn lo(&self) -> Ipv4Addr {
        Ipv4Addr::from(u32::from(self.addr) & get_cidr_mask(self.mask))
    }

    /// Highest (broadcast) address of the block.
    pub fn hi(&self) -> Ipv4Addr {
        broadcast_addr(self.addr, self.mask)
    }

    /// Number of addresses covered.
    pub fn size(&self) -> u64 {
        block_size(self.mask)
    }

    /// Check whether an address falls inside this network.
    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        self.lo() <= ip && ip <= self.hi()
    }

    /// Check whether `other` lies entirely inside this network.
    pub fn contains_network(&self, other: &Network) -> bool {
        self.contains(other.lo()) && self.contains(other.hi())
    }

    /// Check whether the two address ranges share any address.
    pub fn overlaps(&self, other: &Network) -> bool {
        self.lo() <= other.hi() && other.lo() <= self.hi()
    }
}

impl FromStr for Network {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Network::new(s)
    }
}

impl std::fmt::Display for Network {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}

impl Serialize for Network {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Network {
    fn deserialize<D>(deserializer: D) -> Result<Network, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Network::new(&s).map_err(de::Error::custom)
    }
}
