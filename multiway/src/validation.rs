//! Validation and debugging utilities for OrderedMultiwayTree.
//!
//! The audit walks the tree with the same height counter the operations
//! use and checks every structural property the operations rely on. It is
//! deliberately conservative about routing keys: slot 0 of a routing node
//! holds a historical minimum that legitimately goes stale, so only the
//! tail keys are required to be exact subtree minimums.

use crate::error::{MultiwayTreeError, TreeResult};
use crate::types::{Node, OrderedMultiwayTree, Payload};

impl<K: Ord + Clone, V> OrderedMultiwayTree<K, V> {
    /// Check if the tree maintains its structural invariants.
    pub fn check_invariants(&self) -> bool {
        self.check_invariants_detailed().is_ok()
    }

    /// Check invariants with detailed error reporting.
    ///
    /// Audits, over the whole tree: payload kinds agreeing with the height
    /// counter (which also pins every leaf to the same depth), per-node
    /// occupancy, strictly ascending live routing keys and their agreement
    /// with subtree minimums, strictly ascending leaf keys overall, and the
    /// recorded size against the actual leaf entry count.
    pub fn check_invariants_detailed(&self) -> TreeResult<()> {
        if self.root.is_empty() {
            return if self.height == 0 && self.size == 0 {
                Ok(())
            } else {
                Err(MultiwayTreeError::invariant_violation(
                    "root",
                    "empty root but non-zero recorded height or size",
                ))
            };
        }

        self.check_node(&self.root, self.height, None, None)?;

        let keys = self.leaf_keys();
        if keys.len() != self.size {
            return Err(MultiwayTreeError::invariant_violation(
                "size accounting",
                &format!(
                    "{} leaf entries vs recorded size {}",
                    keys.len(),
                    self.size
                ),
            ));
        }
        for (index, pair) in keys.windows(2).enumerate() {
            if pair[0] >= pair[1] {
                return Err(MultiwayTreeError::invariant_violation(
                    "leaf order",
                    &format!("leaf keys not strictly ascending at position {}", index + 1),
                ));
            }
        }

        Ok(())
    }

    /// The in-order leaf keys, left to right. Diagnostic helper for the
    /// audit and for tests; on a consistent tree the result is strictly
    /// ascending.
    pub fn leaf_keys(&self) -> Vec<&K> {
        let mut keys = Vec::with_capacity(self.size);
        Self::collect_leaf_keys(&self.root, self.height, &mut keys);
        keys
    }

    fn collect_leaf_keys<'a>(node: &'a Node<K, V>, h: usize, keys: &mut Vec<&'a K>) {
        if h == 0 {
            keys.extend(node.entries.iter().map(|entry| &entry.key));
            return;
        }
        for entry in &node.entries {
            Self::collect_leaf_keys(entry.child(), h - 1, keys);
        }
    }

    /// Audit one node and its subtree. `lower`, when set, is the exact
    /// minimum this subtree must start with; `upper` is an exclusive bound
    /// on every key below this node.
    fn check_node(
        &self,
        node: &Node<K, V>,
        h: usize,
        lower: Option<&K>,
        upper: Option<&K>,
    ) -> TreeResult<()> {
        if node.len() > self.order - 1 {
            return Err(MultiwayTreeError::invariant_violation(
                "occupancy",
                &format!(
                    "node holds {} entries, more than order {} allows",
                    node.len(),
                    self.order
                ),
            ));
        }

        if h == 0 {
            return self.check_leaf(node, lower, upper);
        }

        if node.len() < 2 {
            return Err(MultiwayTreeError::invariant_violation(
                "routing level",
                "routing node with fewer than two entries",
            ));
        }
        for window in node.entries[1..].windows(2) {
            if window[0].key >= window[1].key {
                return Err(MultiwayTreeError::invariant_violation(
                    "routing level",
                    "live routing keys not strictly ascending",
                ));
            }
        }

        for (index, entry) in node.entries.iter().enumerate() {
            let child = match entry.payload {
                Payload::Child(ref child) => child,
                Payload::Value(_) => {
                    return Err(MultiwayTreeError::invariant_violation(
                        "routing level",
                        "value entry found above leaf level",
                    ));
                }
            };
            let child_lower = if index == 0 { lower } else { Some(&entry.key) };
            let child_upper = match node.entries.get(index + 1) {
                Some(next) => Some(&next.key),
                None => upper,
            };
            self.check_node(child, h - 1, child_lower, child_upper)?;
        }

        // Slot 0 routes by position alone; its key may exceed the subtree
        // minimum but never undercut it.
        let min = Self::subtree_min(node.entries[0].child(), h - 1);
        if node.entries[0].key < *min {
            return Err(MultiwayTreeError::invariant_violation(
                "routing level",
                "slot 0 key below its subtree minimum",
            ));
        }

        Ok(())
    }

    fn check_leaf(&self, node: &Node<K, V>, lower: Option<&K>, upper: Option<&K>) -> TreeResult<()> {
        if node.is_empty() {
            return Err(MultiwayTreeError::invariant_violation(
                "leaf level",
                "empty leaf below a routing level",
            ));
        }
        for entry in &node.entries {
            if matches!(entry.payload, Payload::Child(_)) {
                return Err(MultiwayTreeError::invariant_violation(
                    "leaf level",
                    "routing entry found at leaf level",
                ));
            }
        }
        for window in node.entries.windows(2) {
            if window[0].key >= window[1].key {
                return Err(MultiwayTreeError::invariant_violation(
                    "leaf level",
                    "leaf keys not strictly ascending within a node",
                ));
            }
        }
        if let Some(expected) = lower {
            if node.first_key() != expected {
                return Err(MultiwayTreeError::invariant_violation(
                    "routing key",
                    "routing key does not match its subtree minimum",
                ));
            }
        }
        if let Some(bound) = upper {
            let last = &node.entries[node.len() - 1].key;
            if last >= bound {
                return Err(MultiwayTreeError::invariant_violation(
                    "leaf level",
                    "leaf key at or above the next routing key",
                ));
            }
        }
        Ok(())
    }

    fn subtree_min<'a>(node: &'a Node<K, V>, h: usize) -> &'a K {
        if h == 0 {
            node.first_key()
        } else {
            Self::subtree_min(node.entries[0].child(), h - 1)
        }
    }
}
