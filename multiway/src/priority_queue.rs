//! Array-backed max-heap with explicit priorities.
//!
//! Peer design to the tree containers under the priority-container
//! contract: the slot array encodes a complete binary tree (children of
//! slot `i` at `2i + 1` and `2i + 2`, parent at `(i - 1) / 2`), and every
//! parent outranks its children. Push appends and sifts up; pop moves the
//! last slot over the vacated root and sifts it back down.

/// One heap slot: the stored item and the priority that orders it.
#[derive(Debug, Clone)]
struct Slot<T> {
    item: T,
    priority: i64,
}

/// Max-first priority queue.
///
/// # Examples
///
/// ```
/// use multiway::PriorityQueue;
///
/// let mut queue = PriorityQueue::new();
/// queue.push("low", 1);
/// queue.push("high", 9);
/// queue.push("mid", 5);
///
/// assert_eq!(queue.pop(), Some("high"));
/// assert_eq!(queue.pop(), Some("mid"));
/// assert_eq!(queue.pop(), Some("low"));
/// assert_eq!(queue.pop(), None);
/// ```
#[derive(Debug)]
pub struct PriorityQueue<T> {
    slots: Vec<Slot<T>>,
}

impl<T> PriorityQueue<T> {
    /// Create an empty queue.
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Create an empty queue with room for `capacity` items before the
    /// backing storage grows.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of queued items.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if the queue holds no items.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Queue an item under the given priority.
    pub fn push(&mut self, item: T, priority: i64) {
        self.slots.push(Slot { item, priority });
        self.sift_up(self.slots.len() - 1);
    }

    /// Remove and return the highest-priority item, or `None` on an empty
    /// queue.
    pub fn pop(&mut self) -> Option<T> {
        if self.slots.is_empty() {
            return None;
        }
        let last = self.slots.len() - 1;
        self.slots.swap(0, last);
        let top = self.slots.pop()?;
        if !self.slots.is_empty() {
            self.sift_down(0);
        }
        Some(top.item)
    }

    /// The highest-priority item and its priority, without dequeuing it.
    pub fn peek(&self) -> Option<(&T, i64)> {
        self.slots.first().map(|slot| (&slot.item, slot.priority))
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let parent = (index - 1) / 2;
            if self.slots[index].priority <= self.slots[parent].priority {
                break;
            }
            self.slots.swap(index, parent);
            index = parent;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        loop {
            let left = 2 * index + 1;
            let right = 2 * index + 2;
            let mut largest = index;
            if left < self.slots.len() && self.slots[left].priority > self.slots[largest].priority {
                largest = left;
            }
            if right < self.slots.len() && self.slots[right].priority > self.slots[largest].priority
            {
                largest = right;
            }
            if largest == index {
                break;
            }
            self.slots.swap(index, largest);
            index = largest;
        }
    }
}

impl<T> Default for PriorityQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}
