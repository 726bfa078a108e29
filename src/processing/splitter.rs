//! Splitting a network block into equal-size subnets.

use crate::error::{Error, Result};
use crate::models::{broadcast_addr, Family, Prefix};

/// Iterator over the equal-size subnets of a block, lowest address first.
#[derive(Debug, Clone)]
pub struct Subnets {
    family: Family,
    next: Option<u128>,
    last: u128,
    step: u128,
    len: u8,
}

impl Iterator for Subnets {
    type Item = Prefix;

    fn next(&mut self) -> Option<Prefix> {
        let bits = self.next?;
        self.next = if bits < self.last {
            bits.checked_add(self.step)
        } else {
            None
        };
        Prefix::from_bits(self.family, bits, self.len).ok()
    }
}

/// Split `prefix` into all of its `/new_len` subnets.
///
/// # Errors
/// * [`Error::InvalidSplit`] if `new_len` is not longer than the block or is
///   beyond the family's maximum length.
pub fn subnets(prefix: &Prefix, new_len: u8) -> Result<Subnets> {
    if new_len <= prefix.prefix_len() || new_len > prefix.max_length() {
        return Err(Error::InvalidSplit {
            prefix: prefix.to_string(),
            new_len,
        });
    }
    let family = prefix.family();
    let step = 1u128 << (prefix.max_length() - new_len);
    let broadcast = broadcast_addr(family, prefix.bits(), prefix.prefix_len())?;
    Ok(Subnets {
        family,
        next: Some(prefix.bits()),
        last: broadcast - (step - 1),
        step,
        len: new_len,
    })
}

/// The two halves of `prefix`, or `None` for a host block.
pub fn children(prefix: &Prefix) -> Option<[Prefix; 2]> {
    if prefix.prefix_len() >= prefix.max_length() {
        return None;
    }
    Some([prefix.extend(0), prefix.extend(1)])
}
