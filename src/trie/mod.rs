//! Bitwise prefix trie.
//!
//! [`PrefixTrie`] stores a set of [`Prefix`] values, one binary tree per
//! address family. A prefix of length `n` lives at depth `n`, on the path
//! spelled by its first `n` address bits, so every block nested inside a
//! prefix sits in the subtree below it.
//!
//! Iteration is pre-order with the lower half first: ascending network
//! address, and for equal addresses the shorter prefix first. All IPv4
//! prefixes come before IPv6 ones.

mod node;

use crate::models::{Family, Prefix};
use node::Node;

/// Set of network prefixes supporting exact and covered lookups.
#[derive(Debug, Default, Clone)]
pub struct PrefixTrie {
    v4: Node,
    v6: Node,
    count: usize,
}

impl PrefixTrie {
    pub fn new() -> Self {
        Self::default()
    }

    fn root(&self, family: Family) -> &Node {
        match family {
            Family::Ipv4 => &self.v4,
            Family::Ipv6 => &self.v6,
        }
    }

    fn root_mut(&mut self, family: Family) -> &mut Node {
        match family {
            Family::Ipv4 => &mut self.v4,
            Family::Ipv6 => &mut self.v6,
        }
    }

    fn find(&self, prefix: &Prefix) -> Option<&Node> {
        let mut node = self.root(prefix.family());
        for depth in 0..prefix.prefix_len() {
            node = node.child(prefix.bit(depth))?;
        }
        Some(node)
    }

    /// Add `prefix`. Returns false if it was already stored.
    pub fn insert(&mut self, prefix: Prefix) -> bool {
        let inserted = {
            let mut node = self.root_mut(prefix.family());
            for depth in 0..prefix.prefix_len() {
                node = node.child_or_insert(prefix.bit(depth));
            }
            !std::mem::replace(&mut node.present, true)
        };
        if inserted {
            self.count += 1;
        }
        inserted
    }

    /// Remove exactly `prefix`, leaving blocks nested inside it in place.
    /// Returns false if it was not stored.
    pub fn delete_exact(&mut self, prefix: &Prefix) -> bool {
        let removed = self.root_mut(prefix.family()).remove(prefix, 0);
        if removed {
            self.count -= 1;
        }
        removed
    }

    /// True if `prefix` itself is stored.
    pub fn exact_match(&self, prefix: &Prefix) -> bool {
        self.find(prefix).is_some_and(|node| node.present)
    }

    /// Iterate stored prefixes equal to or nested inside `prefix`.
    pub fn covered(&self, prefix: &Prefix) -> Iter<'_> {
        let stack = match self.find(prefix) {
            Some(node) => vec![(node, *prefix)],
            None => Vec::new(),
        };
        Iter { stack }
    }

    /// All stored prefixes equal to or nested inside `prefix`.
    pub fn covered_search(&self, prefix: &Prefix) -> Vec<Prefix> {
        self.covered(prefix).collect()
    }

    /// Iterate every stored prefix in address order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            stack: vec![
                (&self.v6, Prefix::default_route(Family::Ipv6)),
                (&self.v4, Prefix::default_route(Family::Ipv4)),
            ],
        }
    }

    /// Every stored prefix in address order.
    pub fn all(&self) -> Vec<Prefix> {
        self.iter().collect()
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }
}

/// Pre-order walk over a trie subtree.
pub struct Iter<'a> {
    stack: Vec<(&'a Node, Prefix)>,
}

impl Iterator for Iter<'_> {
    type Item = Prefix;

    fn next(&mut self) -> Option<Prefix> {
        while let Some((node, prefix)) = self.stack.pop() {
            // upper half pushed first so the lower half is visited first
            for bit in [1, 0] {
                if let Some(child) = node.child(bit) {
                    self.stack.push((child, prefix.extend(bit)));
                }
            }
            if node.present {
                return Some(prefix);
            }
        }
        None
    }
}

impl<'a> IntoIterator for &'a PrefixTrie {
    type Item = Prefix;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl Extend<Prefix> for PrefixTrie {
    fn extend<T: IntoIterator<Item = Prefix>>(&mut self, iter: T) {
        for prefix in iter {
            self.insert(prefix);
        }
    }
}

impl FromIterator<Prefix> for PrefixTrie {
    fn from_iter<T: IntoIterator<Item = Prefix>>(iter: T) -> Self {
        let mut trie = PrefixTrie::new();
        trie.extend(iter);
        trie
    }
}
