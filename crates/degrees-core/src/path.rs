//! Path reconstruction from terminal search nodes

use crate::movie::MovieId;
use crate::node::Node;
use crate::person::PersonId;
use serde::{Deserialize, Serialize};

/// One link of a connection: `person` was reached through `movie`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PathStep {
    pub movie: MovieId,
    pub person: PersonId,
}

impl PathStep {
    pub fn new(movie: impl Into<MovieId>, person: impl Into<PersonId>) -> Self {
        Self {
            movie: movie.into(),
            person: person.into(),
        }
    }
}

/// Ordered chain of steps away from the source
///
/// Step 0 is the first move away from the source; the last step reaches the
/// target. An empty path means source and target are the same person.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path {
    pub steps: Vec<PathStep>,
}

impl Path {
    pub fn new(steps: Vec<PathStep>) -> Self {
        Self { steps }
    }

    /// Degrees of separation
    pub fn degrees(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PathStep> {
        self.steps.iter()
    }

    /// Consecutive `(from, movie, to)` hops, starting at `source`
    pub fn hops<'a>(
        &'a self,
        source: &'a PersonId,
    ) -> impl Iterator<Item = (&'a PersonId, &'a MovieId, &'a PersonId)> + 'a {
        let froms = std::iter::once(source).chain(self.steps.iter().map(|s| &s.person));
        froms
            .zip(self.steps.iter())
            .map(|(from, step)| (from, &step.movie, &step.person))
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a PathStep;
    type IntoIter = std::slice::Iter<'a, PathStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}

/// Turns terminal search nodes into a [`Path`]
pub struct PathBuilder;

impl PathBuilder {
    /// Walk parents from `terminal` back to the origin, then reverse
    pub fn from_terminal(terminal: &Node) -> Path {
        let mut steps: Vec<PathStep> = terminal
            .ancestry()
            .filter_map(|node| {
                node.action.as_ref().map(|movie| PathStep {
                    movie: movie.clone(),
                    person: node.state.clone(),
                })
            })
            .collect();
        steps.reverse();
        Path::new(steps)
    }

    /// Join a forward fragment and a backward fragment meeting at one person
    ///
    /// `forward` is the meeting node in the tree grown from the source and
    /// `backward` is the node for the same person in the tree grown from the
    /// target. The backward tree is already ordered towards the target, so each
    /// backward node contributes the hop from itself to its parent.
    pub fn stitch(forward: &Node, backward: &Node) -> Path {
        debug_assert_eq!(forward.state, backward.state);

        let mut path = Self::from_terminal(forward);
        path.steps.extend(backward.ancestry().filter_map(|node| {
            match (&node.action, &node.parent) {
                (Some(movie), Some(parent)) => Some(PathStep {
                    movie: movie.clone(),
                    person: parent.state.clone(),
                }),
                _ => None,
            }
        }));
        path
    }
}
