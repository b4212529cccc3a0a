//! Bidirectional breadth-first search
//!
//! Two breadth-first searches grow from the source and from the target, one
//! whole level at a time. The forward side expands whenever it is not ahead
//! of the backward side, and the backward side only catches up afterwards.
//! Each new child is checked against the opposite side's explored map before
//! it is enqueued; under this schedule the first meeting found is on a
//! shortest path.

use super::Tracker;
use crate::dataset::Dataset;
use crate::error::Result;
use crate::frontier::{Frontier, QueueFrontier};
use crate::node::Node;
use crate::path::{Path, PathBuilder};
use crate::person::PersonId;
use std::collections::HashMap;
use std::rc::Rc;

type Explored = HashMap<PersonId, Rc<Node>>;

/// One direction of the search
struct Side {
    frontier: QueueFrontier,
    explored: Explored,
    level: u32,
}

/// Child from the expanding side and the opposite side's node for the same
/// person
struct Meeting {
    child: Rc<Node>,
    opposite: Rc<Node>,
}

impl Side {
    fn new(origin: &PersonId) -> Self {
        let mut frontier = QueueFrontier::new();
        frontier.add(Rc::new(Node::root(origin.clone())));
        Self {
            frontier,
            explored: HashMap::new(),
            level: 0,
        }
    }

    /// Expand every node currently in the frontier, which is exactly one level
    ///
    /// The frontier peak counts both sides' frontiers after every expansion.
    fn expand_level(
        &mut self,
        dataset: &Dataset,
        opposite: &Side,
        tracker: &mut Tracker,
    ) -> Result<Option<Meeting>> {
        let width = self.frontier.len();

        for _ in 0..width {
            let node = self.frontier.remove()?;
            tracker.explored();
            self.explored.insert(node.state.clone(), Rc::clone(&node));

            for (movie, person) in dataset.neighbors(&node.state) {
                if self.explored.contains_key(&person) || self.frontier.contains_state(&person) {
                    continue;
                }

                let child = Rc::new(Node::child(&node, movie, person));
                if let Some(met) = opposite.explored.get(&child.state) {
                    tracker.frontier(self.frontier.len() + opposite.frontier.len());
                    return Ok(Some(Meeting {
                        child,
                        opposite: Rc::clone(met),
                    }));
                }
                self.frontier.add(child);
            }
            tracker.frontier(self.frontier.len() + opposite.frontier.len());
        }

        self.level += 1;
        Ok(None)
    }
}

pub(crate) fn search(
    dataset: &Dataset,
    source: &PersonId,
    target: &PersonId,
    tracker: &mut Tracker,
) -> Result<Option<Path>> {
    let mut forward = Side::new(source);
    let mut backward = Side::new(target);

    while !forward.frontier.is_empty() && !backward.frontier.is_empty() {
        if forward.level <= backward.level {
            if let Some(meeting) = forward.expand_level(dataset, &backward, tracker)? {
                tracker.met(&meeting.child.state);
                return Ok(Some(PathBuilder::stitch(&meeting.child, &meeting.opposite)));
            }
        } else if let Some(meeting) = backward.expand_level(dataset, &forward, tracker)? {
            tracker.met(&meeting.child.state);
            return Ok(Some(PathBuilder::stitch(&meeting.opposite, &meeting.child)));
        }
    }

    tracing::debug!(
        "Bidirectional search exhausted at levels {}/{}",
        forward.level,
        backward.level
    );
    Ok(None)
}
