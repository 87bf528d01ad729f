//! Core types and data structures for OrderedMultiwayTree.
//!
//! This module contains the fundamental data structures, type definitions,
//! and constants used throughout the multiway tree implementation.

// ============================================================================
// CONSTANTS
// ============================================================================

/// Minimum order for any multiway tree node.
pub(crate) const MIN_ORDER: usize = 4;

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// Order-M B+ tree built bottom-up.
///
/// All key/value pairs live in leaf entries; internal entries carry routing
/// keys and exclusively own their child subtrees. Inserts go into a leaf and
/// splits propagate upward, so every leaf always sits at the same depth. The
/// tree grows taller only at the root, when a root split lifts a brand-new
/// two-entry root on top of the pile.
///
/// A node is not tagged leaf or internal. Every traversal carries the
/// remaining height `h` and interprets the node from it: `h == 0` means leaf
/// level, anything else means routing level. Search and insert share this
/// contract, so the two always agree on where the leaf level is.
///
/// # Type Parameters
///
/// * `K` - Key type, totally ordered; routing keys are cloned on splits
/// * `V` - Value type, stored by value in leaf entries
///
/// # Examples
///
/// ```
/// use multiway::OrderedMultiwayTree;
///
/// let mut tree = OrderedMultiwayTree::new(4).unwrap();
/// tree.put(1, "one");
/// tree.put(2, "two");
/// tree.put(3, "three");
///
/// assert_eq!(tree.search(&2), Some(&"two"));
/// assert_eq!(tree.size(), 3);
/// assert_eq!(tree.height(), 0);
/// ```
#[derive(Debug)]
pub struct OrderedMultiwayTree<K, V> {
    /// Branching factor M: a node splits the moment it holds M entries.
    pub(crate) order: usize,
    /// Number of internal levels above the leaf level (0 = root is a leaf).
    pub(crate) height: usize,
    /// Total number of keys stored at leaf level.
    pub(crate) size: usize,
    /// Root node, exclusively owned by the tree.
    pub(crate) root: Node<K, V>,
}

/// A tree node: an ordered, variable-occupancy run of entry slots.
///
/// Holds at most M-1 entries between operations and exactly M for the one
/// moment before a split divides it.
#[derive(Debug, Clone)]
pub struct Node<K, V> {
    pub(crate) entries: Vec<Entry<K, V>>,
}

/// A single slot of a node: a key plus either a stored value (leaf level)
/// or an owned child subtree (routing level).
#[derive(Debug, Clone)]
pub struct Entry<K, V> {
    pub(crate) key: K,
    pub(crate) payload: Payload<K, V>,
}

/// What an entry carries; which variant is legal at a given node follows
/// from the height counter, not from the node itself.
#[derive(Debug, Clone)]
pub enum Payload<K, V> {
    /// Leaf level: the stored value.
    Value(V),
    /// Routing level: the child subtree reached through this entry.
    Child(Box<Node<K, V>>),
}

// ============================================================================
// RESULT TYPES
// ============================================================================

/// Result of an insertion into a node.
pub enum InsertResult<K, V> {
    /// Insertion completed without overflowing this node. Carries the old
    /// value when the key already existed and was overwritten.
    Updated(Option<V>),
    /// The node reached M entries and split; the upper half now lives in
    /// the returned right sibling, which the caller must link in.
    Split(Node<K, V>),
}
