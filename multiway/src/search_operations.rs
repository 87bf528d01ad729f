//! Search operations for OrderedMultiwayTree.
//!
//! Lookup descends from the root with the tree height as a hop counter.
//! The counter, not the node, decides how a node is read: at zero the node
//! is a leaf and is scanned for an exact key, above zero it routes the
//! descent one level down.

use crate::types::{Node, OrderedMultiwayTree};

impl<K: Ord, V> OrderedMultiwayTree<K, V> {
    /// Get a reference to the value stored under a key.
    ///
    /// # Arguments
    ///
    /// * `key` - The key to look up
    ///
    /// # Returns
    ///
    /// A reference to the value if the key exists, `None` otherwise. An
    /// empty tree simply reports `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use multiway::OrderedMultiwayTree;
    ///
    /// let mut tree = OrderedMultiwayTree::new(4).unwrap();
    /// tree.put(1, "one");
    /// assert_eq!(tree.search(&1), Some(&"one"));
    /// assert_eq!(tree.search(&2), None);
    /// ```
    pub fn search(&self, key: &K) -> Option<&V> {
        Self::search_in(&self.root, key, self.height)
    }

    /// Check if a key exists in the tree.
    ///
    /// # Examples
    ///
    /// ```
    /// use multiway::OrderedMultiwayTree;
    ///
    /// let mut tree = OrderedMultiwayTree::new(4).unwrap();
    /// tree.put(1, "one");
    /// assert!(tree.contains(&1));
    /// assert!(!tree.contains(&2));
    /// ```
    pub fn contains(&self, key: &K) -> bool {
        self.search(key).is_some()
    }

    /// Height-counted descent. `h` is the number of routing levels left
    /// between `node` and the leaves.
    fn search_in<'a>(node: &'a Node<K, V>, key: &K, h: usize) -> Option<&'a V> {
        if h == 0 {
            return node
                .entries
                .binary_search_by(|entry| entry.key.cmp(key))
                .ok()
                .map(|index| node.entries[index].value());
        }
        let index = node.route_index(key);
        Self::search_in(node.entries[index].child(), key, h - 1)
    }
}
