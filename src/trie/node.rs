use crate::models::Prefix;

/// One bit position of the trie. `children[0]` holds the lower half of the
/// address range, `children[1]` the upper half.
#[derive(Debug, Default, Clone)]
pub(crate) struct Node {
    pub(crate) present: bool,
    pub(crate) children: [Option<Box<Node>>; 2],
}

impl Node {
    pub(crate) fn child(&self, bit: u8) -> Option<&Node> {
        self.children[bit as usize].as_deref()
    }

    pub(crate) fn child_or_insert(&mut self, bit: u8) -> &mut Node {
        self.children[bit as usize].get_or_insert_with(Box::default)
    }

    /// No stored prefix at or below this node.
    pub(crate) fn is_empty(&self) -> bool {
        !self.present && self.children.iter().all(Option::is_none)
    }

    /// Clear `prefix` below this node (which sits at `depth`), pruning
    /// branches left empty. Returns whether `prefix` was stored.
    pub(crate) fn remove(&mut self, prefix: &Prefix, depth: u8) -> bool {
        if depth == prefix.prefix_len() {
            return std::mem::replace(&mut self.present, false);
        }
        let bit = prefix.bit(depth) as usize;
        let Some(child) = self.children[bit].as_mut() else {
            return false;
        };
        let removed = child.remove(prefix, depth + 1);
        if removed && child.is_empty() {
            self.children[bit] = None;
        }
        removed
    }
}
