//! Subnet conflict detection and resolution.
//!
//! A block "has a subnet" when the trie holds another block strictly nested
//! inside it. Such a block cannot be kept as-is without covering some hosts
//! twice, so it is replaced by the coarsest set of its sub-blocks that leaves
//! every nested block untouched.

use super::splitter::children;
use crate::models::Prefix;
use crate::trie::PrefixTrie;
use colored::Colorize;

/// Check whether `network` has a strict subnet stored in `trie`.
pub fn has_subnet(network: &Prefix, trie: &PrefixTrie) -> bool {
    let subnet = trie
        .covered(network)
        .filter(|candidate| candidate != network)
        .find(|candidate| network.is_strict_supernet_of(candidate));

    match subnet {
        Some(subnet) => {
            log::debug!(" {network} has the subnet: {subnet}");
            true
        }
        None => {
            log::debug!(" {network} has zero subnets.");
            false
        }
    }
}

/// Fill the address range of `network` with non-overlapping blocks.
///
/// Each half of `network` is skipped when already stored, inserted when it
/// has no subnet, and split further otherwise. `network` itself is never
/// inserted or removed. Nothing happens once `max_prefixlen` is reached.
pub fn generate_subnets(trie: &mut PrefixTrie, network: &Prefix, max_prefixlen: u8) {
    let subnet_prefixlen = network.prefix_len() + 1;
    if subnet_prefixlen > max_prefixlen {
        return;
    }
    let Some(halves) = children(network) else {
        return;
    };
    log::debug!(" Generate /{subnet_prefixlen} subnets for {network}");

    for subnet in halves {
        log::trace!(" Decide what to do with generated subnet {subnet}");
        if trie.exact_match(&subnet) {
            log::debug!(" Subnet {subnet} exists - {}", "SKIP".yellow());
            continue;
        }
        if !has_subnet(&subnet, trie) {
            log::debug!(" Subnet {subnet} is desired - {}", "ADD".green());
            trie.insert(subnet);
        } else {
            generate_subnets(trie, &subnet, max_prefixlen);
        }
    }
}
