//! Block adjustment logic.
//!
//! This module contains the conflict resolution between nested blocks:
//! - [`adjuster`] - Ordering and driving the whole adjustment
//! - [`resolver`] - Subnet detection and recursive splitting around subnets
//! - [`splitter`] - Bit arithmetic for dividing a block into subnets

mod adjuster;
mod resolver;
mod splitter;

// Re-export public functions
pub use adjuster::{adjust, adjust_prefixes, adjust_trie, parse_blocks};
pub use resolver::{generate_subnets, has_subnet};
pub use splitter::{children, subnets, Subnets};
