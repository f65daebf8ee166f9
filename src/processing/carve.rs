//! Carving sub-networks out of a parent network.

use crate::error::NetworkError;
use crate::models::{block_size, Network, MAX_LENGTH};
use std::net::Ipv4Addr;

/// Carve the `index`-th sub-network of `parent` split by `extra_bits` prefix bits.
///
/// The result has prefix `parent.mask + extra_bits` and starts at
/// `parent.addr + index * 2^(32 - parent.mask - extra_bits)`. All arithmetic
/// is done in `u64`, so the top of the address space never wraps.
///
/// `index` must be below `2^extra_bits`. The one exception is index 1 with
/// zero extra bits, which selects the next sibling block of the same size.
/// An index outside that range, or a sibling past `255.255.255.255`, fails
/// with `InvalidNetwork` naming `parent`.
///
/// # Examples
/// ```
/// use zone_subnet_plan::models::Network;
/// use zone_subnet_plan::processing::carve;
///
/// let base = Network::new("10.0.0.0/16").unwrap();
/// assert_eq!(carve(&base, 1, 1).unwrap().to_string(), "10.0.128.0/17");
/// ```
pub fn carve(parent: &Network, extra_bits: u8, index: u64) -> Result<Network, NetworkError> {
    parent.validate()?;

    let available = MAX_LENGTH - parent.mask;
    if extra_bits > available {
        return Err(NetworkError::InsufficientAddressSpace {
            requested: extra_bits,
            available,
        });
    }

    let children = 1u64 << extra_bits;
    let sibling = extra_bits == 0 && index == 1;
    if index >= children && !sibling {
        log::warn!("carve({parent}, {extra_bits}, {index}): index outside {children} children");
        return Err(NetworkError::invalid(parent.to_string()));
    }

    let mask = parent.mask + extra_bits;
    let addr = u32::from(parent.addr) as u64 + index * block_size(mask);
    if addr > u32::MAX as u64 {
        log::warn!("carve({parent}, {extra_bits}, {index}): past end of address space");
        return Err(NetworkError::invalid(parent.to_string()));
    }

    let network = Network {
        addr: Ipv4Addr::from(addr as u32),
        mask,
    };
    log::trace!("carve({parent}, {extra_bits}, {index}) = {network}");
    Ok(network)
}
