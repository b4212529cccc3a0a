//! Frontiers of discovered but unexpanded search nodes

use crate::error::{Error, Result};
use crate::node::Node;
use crate::person::PersonId;
use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, VecDeque};
use std::rc::Rc;

/// Container of unexpanded nodes with a fixed removal discipline
///
/// `add` never checks for duplicates; callers test `contains_state` first.
pub trait Frontier {
    fn add(&mut self, node: Rc<Node>);

    fn contains_state(&self, state: &PersonId) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Take the next node, or fail with [`Error::EmptyFrontier`]
    fn remove(&mut self) -> Result<Rc<Node>>;
}

/// Multiset of resident states for O(1) membership tests
#[derive(Debug, Default)]
struct StateIndex {
    counts: HashMap<PersonId, usize>,
}

impl StateIndex {
    fn insert(&mut self, state: &PersonId) {
        *self.counts.entry(state.clone()).or_insert(0) += 1;
    }

    fn release(&mut self, state: &PersonId) {
        if let Some(count) = self.counts.get_mut(state) {
            *count -= 1;
            if *count == 0 {
                self.counts.remove(state);
            }
        }
    }

    fn contains(&self, state: &PersonId) -> bool {
        self.counts.contains_key(state)
    }
}

/// Last in, first out (depth-first)
#[derive(Debug, Default)]
pub struct StackFrontier {
    nodes: Vec<Rc<Node>>,
    index: StateIndex,
}

impl StackFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for StackFrontier {
    fn add(&mut self, node: Rc<Node>) {
        self.index.insert(&node.state);
        self.nodes.push(node);
    }

    fn contains_state(&self, state: &PersonId) -> bool {
        self.index.contains(state)
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn remove(&mut self) -> Result<Rc<Node>> {
        let node = self.nodes.pop().ok_or(Error::EmptyFrontier)?;
        self.index.release(&node.state);
        Ok(node)
    }
}

/// First in, first out (breadth-first)
#[derive(Debug, Default)]
pub struct QueueFrontier {
    nodes: VecDeque<Rc<Node>>,
    index: StateIndex,
}

impl QueueFrontier {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Frontier for QueueFrontier {
    fn add(&mut self, node: Rc<Node>) {
        self.index.insert(&node.state);
        self.nodes.push_back(node);
    }

    fn contains_state(&self, state: &PersonId) -> bool {
        self.index.contains(state)
    }

    fn len(&self) -> usize {
        self.nodes.len()
    }

    fn remove(&mut self) -> Result<Rc<Node>> {
        let node = self.nodes.pop_front().ok_or(Error::EmptyFrontier)?;
        self.index.release(&node.state);
        Ok(node)
    }
}

/// Heap entry ordered for a min-heap, ties broken by insertion order
struct Prioritized {
    priority: f64,
    seq: u64,
    node: Rc<Node>,
}

impl PartialEq for Prioritized {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Prioritized {}

impl Ord for Prioritized {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse order for min-heap
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Prioritized {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Lowest priority first, FIFO among equal priorities
#[derive(Default)]
pub struct PriorityQueueFrontier {
    heap: BinaryHeap<Prioritized>,
    next_seq: u64,
    index: StateIndex,
}

impl PriorityQueueFrontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, node: Rc<Node>, priority: f64) {
        self.index.insert(&node.state);
        self.heap.push(Prioritized {
            priority,
            seq: self.next_seq,
            node,
        });
        self.next_seq += 1;
    }

    pub fn contains_state(&self, state: &PersonId) -> bool {
        self.index.contains(state)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Take the lowest-priority node, or fail with [`Error::EmptyFrontier`]
    pub fn remove(&mut self) -> Result<Rc<Node>> {
        let entry = self.heap.pop().ok_or(Error::EmptyFrontier)?;
        self.index.release(&entry.node.state);
        Ok(entry.node)
    }
}

impl std::fmt::Debug for PriorityQueueFrontier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PriorityQueueFrontier")
            .field("len", &self.heap.len())
            .field("next_seq", &self.next_seq)
            .finish()
    }
}
