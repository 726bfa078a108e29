//! Domain models for block adjustment.
//!
//! - [`Prefix`] - IPv4/IPv6 network block in canonical CIDR form
//! - [`Family`] - Address family of a block

mod prefix;

// Re-export public types
pub use prefix::{
    broadcast_addr, cut_addr, get_cidr_mask, host_mask, Family, Prefix, MAX_LENGTH_V4,
    MAX_LENGTH_V6,
};
