use num_traits::Float;
use ordered_float::OrderedFloat;
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// A min-priority queue over floating point keys for shortest path algorithms.
///
/// A vertex may be pushed several times with different keys. Outdated entries
/// are not removed; callers skip them when they are popped.
#[derive(Debug)]
pub struct MinQueue<V, P>
where
    V: Ord + Debug,
    P: Float + Debug,
{
    /// The underlying binary heap
    heap: BinaryHeap<Reverse<(OrderedFloat<P>, V)>>,
}

impl<V, P> MinQueue<V, P>
where
    V: Ord + Debug,
    P: Float + Debug,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        MinQueue {
            heap: BinaryHeap::new(),
        }
    }

    /// Returns true if the priority queue is empty
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the number of entries, stale ones included
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes a vertex with the given key
    pub fn push(&mut self, vertex: V, priority: P) {
        self.heap.push(Reverse((OrderedFloat(priority), vertex)));
    }

    /// Removes the entry with the smallest key
    pub fn pop(&mut self) -> Option<(V, P)> {
        self.heap
            .pop()
            .map(|Reverse((OrderedFloat(priority), vertex))| (vertex, priority))
    }
}

impl<V, P> Default for MinQueue<V, P>
where
    V: Ord + Debug,
    P: Float + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pops_in_ascending_key_order() {
        let mut queue = MinQueue::new();
        queue.push("c", 3.0);
        queue.push("a", 1.0);
        queue.push("b", 2.0);

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.pop(), Some(("a", 1.0)));
        assert_eq!(queue.pop(), Some(("b", 2.0)));
        assert_eq!(queue.pop(), Some(("c", 3.0)));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_duplicate_vertices_are_kept() {
        let mut queue = MinQueue::new();
        queue.push(1, 5.0);
        queue.push(1, 2.0);

        assert_eq!(queue.pop(), Some((1, 2.0)));
        assert_eq!(queue.pop(), Some((1, 5.0)));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn test_infinity_sorts_last() {
        let mut queue = MinQueue::new();
        queue.push(0, f64::INFINITY);
        queue.push(1, 1e300);

        assert_eq!(queue.pop(), Some((1, 1e300)));
        assert_eq!(queue.pop(), Some((0, f64::INFINITY)));
    }
}
