//! Block adjustment.
//!
//! Given a list of networks, reorganise them so that no host is represented
//! in more than one block and the most specific blocks are preserved. For
//! example `[1.0.0.0/8, 1.0.0.0/9]` becomes `[1.0.0.0/9, 1.128.0.0/9]`: the
//! /8 keeps full coverage and the /9 survives unchanged.

use super::resolver::{generate_subnets, has_subnet};
use crate::models::Prefix;
use crate::trie::PrefixTrie;
use colored::Colorize;
use itertools::Itertools;

/// Parse network blocks into a fresh trie.
///
/// Blocks that fail to parse are logged and skipped.
pub fn parse_blocks<S: AsRef<str>>(blocks: &[S]) -> PrefixTrie {
    let mut trie = PrefixTrie::new();
    for block in blocks {
        let block = block.as_ref();
        match block.parse::<Prefix>() {
            Ok(prefix) => {
                trie.insert(prefix);
            }
            Err(e) => {
                log::warn!(
                    "Not a valid representation of a network: {} ({e})",
                    block.on_red()
                );
            }
        }
    }
    trie
}

/// Adjust the blocks stored in `trie` in place.
///
/// Blocks are visited from least to most specific, so every block is judged
/// against the blocks originally nested inside it. A block with a subnet is
/// replaced by the coarsest partition of itself that keeps the subnets.
pub fn adjust_trie(trie: &mut PrefixTrie) {
    if log::log_enabled!(log::Level::Debug) {
        log::debug!("Initial networks: [{}]", trie.iter().join(", "));
    }

    let sorted_nodes: Vec<Prefix> = trie.iter().sorted_by_key(|p| p.prefix_len()).collect();
    for node in sorted_nodes {
        if !trie.exact_match(&node) {
            log::trace!("Network {node} is gone, skipping");
            continue;
        }
        log::debug!(
            "Decide what to do with original network {}",
            node.to_string().on_blue()
        );
        if has_subnet(&node, trie) {
            generate_subnets(trie, &node, node.max_length());
            trie.delete_exact(&node);
        }
    }
}

/// Adjust already parsed blocks, returning them in address order.
pub fn adjust_prefixes<I: IntoIterator<Item = Prefix>>(prefixes: I) -> Vec<Prefix> {
    let mut trie: PrefixTrie = prefixes.into_iter().collect();
    adjust_trie(&mut trie);
    trie.all()
}

/// Adjust networks to preserve the most specific and avoid duplicates.
///
/// Invalid blocks are dropped with a warning, so the result may be empty.
///
/// # Examples
/// ```
/// use blockadjust::processing::adjust;
/// assert_eq!(
///     adjust(&["1.0.0.0/8", "1.0.0.0/9"]),
///     vec!["1.0.0.0/9", "1.128.0.0/9"]
/// );
/// ```
pub fn adjust<S: AsRef<str>>(blocks: &[S]) -> Vec<String> {
    let mut trie = parse_blocks(blocks);
    adjust_trie(&mut trie);
    trie.iter().map(|p| p.to_string()).collect()
}
