//! Error types for network carving and partitioning.

use thiserror::Error;

/// Errors raised while parsing or splitting a [`Network`](crate::models::Network).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NetworkError {
    /// The text is not a valid, block-aligned IPv4 CIDR, or the network
    /// cannot yield the requested sub-network.
    #[error("Invalid network: {cidr}")]
    InvalidNetwork { cidr: String },

    /// A split needs more prefix bits than remain before `/32`.
    #[error("Insufficient address space: requested {requested} extra bits, {available} available")]
    InsufficientAddressSpace { requested: u8, available: u8 },
}

impl NetworkError {
    pub(crate) fn invalid(cidr: impl Into<String>) -> Self {
        NetworkError::InvalidNetwork { cidr: cidr.into() }
    }
}
