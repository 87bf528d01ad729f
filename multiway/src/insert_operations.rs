//! Insert operations for OrderedMultiwayTree.
//!
//! `put` drives a height-counted recursive insert. New entries always land
//! in a leaf; a node that reaches M entries splits left-biased and hands its
//! right half to the caller, which lifts a routing entry for it. A split
//! that reaches all the way out of the root grows the tree by one level.

use crate::types::{Entry, InsertResult, Node, OrderedMultiwayTree};

impl<K: Ord + Clone, V> OrderedMultiwayTree<K, V> {
    /// Insert a key/value pair.
    ///
    /// Inserting a key that already exists overwrites the stored value in
    /// place and changes nothing else.
    ///
    /// # Returns
    ///
    /// `true` iff the insertion made the tree taller. Height grows only
    /// here, when a root split lifts a new two-entry root; every other
    /// split keeps all leaves at the same depth.
    ///
    /// # Examples
    ///
    /// ```
    /// use multiway::OrderedMultiwayTree;
    ///
    /// let mut tree = OrderedMultiwayTree::new(4).unwrap();
    /// assert!(!tree.put(1, "one"));
    /// assert!(!tree.put(2, "two"));
    /// assert!(!tree.put(3, "three"));
    /// // The fourth key fills the root leaf and splits it.
    /// assert!(tree.put(4, "four"));
    /// assert_eq!(tree.height(), 1);
    /// ```
    pub fn put(&mut self, key: K, value: V) -> bool {
        let order = self.order;
        let before = self.height;

        match self.root.insert(key, value, self.height, order) {
            InsertResult::Updated(Some(_)) => {}
            InsertResult::Updated(None) => self.size += 1,
            InsertResult::Split(right) => {
                self.size += 1;
                self.grow_root(right);
            }
        }

        self.height != before
    }

    /// Replace the root with a new two-entry node routing to the old root
    /// (now the left half) and the freshly split-off right half.
    fn grow_root(&mut self, right: Node<K, V>) {
        let left = std::mem::take(&mut self.root);
        let left_key = left.first_key().clone();
        let right_key = right.first_key().clone();

        let mut new_root = Node::new(self.order);
        new_root.entries.push(Entry::routing(left_key, left));
        new_root.entries.push(Entry::routing(right_key, right));

        self.root = new_root;
        self.height += 1;
    }
}

impl<K: Ord + Clone, V> Node<K, V> {
    /// Recursive insert with `h` routing levels left below this node.
    ///
    /// At leaf level the entry goes into its sorted slot. At routing level
    /// the insert recurses into the covering child; if the child splits,
    /// a routing entry for the right half is lifted into this node at the
    /// slot after the descent. Either way the node then splits itself if
    /// the new entry pushed it to `order` entries.
    pub(crate) fn insert(&mut self, key: K, value: V, h: usize, order: usize) -> InsertResult<K, V> {
        if h == 0 {
            match self.entries.binary_search_by(|entry| entry.key.cmp(&key)) {
                Ok(index) => {
                    let old = self.entries[index].replace_value(value);
                    return InsertResult::Updated(Some(old));
                }
                Err(index) => self.entries.insert(index, Entry::leaf(key, value)),
            }
        } else {
            let index = self.route_index(&key);
            let outcome = self.entries[index].child_mut().insert(key, value, h - 1, order);
            match outcome {
                // An untouched child means no local mutation either.
                InsertResult::Updated(replaced) => return InsertResult::Updated(replaced),
                InsertResult::Split(right) => {
                    let lifted = Entry::routing(right.first_key().clone(), right);
                    self.entries.insert(index + 1, lifted);
                }
            }
        }

        debug_assert!(self.entries.len() <= order);
        if self.entries.len() < order {
            InsertResult::Updated(None)
        } else {
            InsertResult::Split(self.split(order))
        }
    }
}
