//! Search tree nodes

use crate::movie::MovieId;
use crate::person::PersonId;
use std::rc::Rc;

/// One step of a search path
///
/// Nodes are immutable. A node's ancestry is shared with every node
/// descended from it, so parents are reference counted and the chain back to
/// the search origin never forms a cycle.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    /// Person reached by this step
    pub state: PersonId,

    /// Node this one was expanded from (`None` at the origin)
    pub parent: Option<Rc<Node>>,

    /// Movie that connected the parent to `state` (`None` at the origin)
    pub action: Option<MovieId>,

    /// Links traversed from the origin
    pub cost: u32,
}

impl Node {
    /// Origin of a search
    pub fn root(state: PersonId) -> Self {
        Self {
            state,
            parent: None,
            action: None,
            cost: 0,
        }
    }

    /// Node reached from `parent` through `action`
    pub fn child(parent: &Rc<Node>, action: MovieId, state: PersonId) -> Self {
        Self {
            state,
            parent: Some(Rc::clone(parent)),
            action: Some(action),
            cost: parent.cost + 1,
        }
    }

    pub fn is_root(&self) -> bool {
        self.parent.is_none()
    }

    /// Iterate from this node back to the origin, this node first
    pub fn ancestry(&self) -> Ancestry<'_> {
        Ancestry { next: Some(self) }
    }
}

/// Iterator over a node and its ancestors
pub struct Ancestry<'a> {
    next: Option<&'a Node>,
}

impl<'a> Iterator for Ancestry<'a> {
    type Item = &'a Node;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.parent.as_deref();
        Some(current)
    }
}
