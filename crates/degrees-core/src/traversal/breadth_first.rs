//! Single-direction exhaustive search

use super::Tracker;
use crate::dataset::Dataset;
use crate::error::Result;
use crate::frontier::Frontier;
use crate::node::Node;
use crate::path::{Path, PathBuilder};
use crate::person::PersonId;
use std::collections::HashSet;
use std::rc::Rc;

/// Expand from `source` until `target` is removed from the frontier
///
/// With a [`QueueFrontier`](crate::frontier::QueueFrontier) this is
/// breadth-first and returns a shortest path; with a
/// [`StackFrontier`](crate::frontier::StackFrontier) it is depth-first.
pub(crate) fn search<F: Frontier>(
    mut frontier: F,
    dataset: &Dataset,
    source: &PersonId,
    target: &PersonId,
    tracker: &mut Tracker,
) -> Result<Option<Path>> {
    let mut explored: HashSet<PersonId> = HashSet::new();
    frontier.add(Rc::new(Node::root(source.clone())));

    while !frontier.is_empty() {
        let node = frontier.remove()?;
        tracker.explored();

        if &node.state == target {
            return Ok(Some(PathBuilder::from_terminal(&node)));
        }

        explored.insert(node.state.clone());

        for (movie, person) in dataset.neighbors(&node.state) {
            if !explored.contains(&person) && !frontier.contains_state(&person) {
                frontier.add(Rc::new(Node::child(&node, movie, person)));
            }
        }
        tracker.frontier(frontier.len());
    }

    Ok(None)
}
