//! Construction and initialization logic for OrderedMultiwayTree and nodes.
//!
//! This module contains construction, order validation, and default
//! implementations for the tree and its nodes.

use crate::error::InitResult;
use crate::types::{Entry, Node, OrderedMultiwayTree, Payload};

/// Order used when no explicit order is requested.
pub const DEFAULT_ORDER: usize = 4;

impl<K, V> OrderedMultiwayTree<K, V> {
    /// Create a tree with the given branching factor.
    ///
    /// # Arguments
    ///
    /// * `order` - Branching factor M; must be even and at least 4
    ///
    /// # Returns
    ///
    /// Returns `Ok(OrderedMultiwayTree)` for a valid order,
    /// `Err(MultiwayTreeError::InvalidConfiguration)` otherwise. No partial
    /// tree is produced on failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use multiway::OrderedMultiwayTree;
    ///
    /// let tree = OrderedMultiwayTree::<i32, String>::new(4).unwrap();
    /// assert!(tree.is_empty());
    ///
    /// assert!(OrderedMultiwayTree::<i32, String>::new(5).is_err());
    /// assert!(OrderedMultiwayTree::<i32, String>::new(2).is_err());
    /// ```
    pub fn new(order: usize) -> InitResult<Self> {
        validation::validate_order(order)?;

        Ok(Self {
            order,
            height: 0,
            size: 0,
            root: Node::new(order),
        })
    }

    /// Create a tree with the default order.
    ///
    /// This is equivalent to calling `new(DEFAULT_ORDER)`.
    pub fn with_default_order() -> InitResult<Self> {
        Self::new(DEFAULT_ORDER)
    }
}

impl<K, V> Node<K, V> {
    /// Creates an empty node with room for `order` entries, one more than a
    /// node may keep, so the transient pre-split entry never reallocates.
    pub(crate) fn new(order: usize) -> Self {
        Self {
            entries: Vec::with_capacity(order),
        }
    }
}

impl<K, V> Default for Node<K, V> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<K, V> Entry<K, V> {
    /// A leaf-level entry holding a stored value.
    pub(crate) fn leaf(key: K, value: V) -> Self {
        Self {
            key,
            payload: Payload::Value(value),
        }
    }

    /// A routing entry owning the given child subtree.
    pub(crate) fn routing(key: K, child: Node<K, V>) -> Self {
        Self {
            key,
            payload: Payload::Child(Box::new(child)),
        }
    }
}

impl<K: Ord + Clone, V> Default for OrderedMultiwayTree<K, V> {
    /// Create a tree with the default order.
    fn default() -> Self {
        Self::with_default_order().unwrap()
    }
}

/// Validation utilities for construction.
pub mod validation {
    use crate::error::{InitResult, MultiwayTreeError};
    use crate::types::MIN_ORDER;

    /// Validate that an order can back a multiway tree.
    ///
    /// The order must be even so a full node of M entries divides into two
    /// equal halves, and at least 4 so both halves keep at least two entries.
    pub fn validate_order(order: usize) -> InitResult<()> {
        if order < MIN_ORDER || order % 2 == 1 {
            Err(MultiwayTreeError::invalid_order(order, MIN_ORDER))
        } else {
            Ok(())
        }
    }
}
