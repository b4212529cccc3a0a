//! Heuristic best-first (A*) search

use super::Tracker;
use crate::dataset::Dataset;
use crate::error::Result;
use crate::frontier::PriorityQueueFrontier;
use crate::heuristic::Heuristic;
use crate::node::Node;
use crate::path::{Path, PathBuilder};
use crate::person::PersonId;
use std::collections::HashSet;
use std::rc::Rc;

/// Expand the node with the lowest `cost + estimate` first
///
/// Frontier entries are never re-prioritized, so the result is only as good
/// as the heuristic is admissible.
pub(crate) fn search(
    dataset: &Dataset,
    source: &PersonId,
    target: &PersonId,
    heuristic: &dyn Heuristic,
    tracker: &mut Tracker,
) -> Result<Option<Path>> {
    let mut frontier = PriorityQueueFrontier::new();
    let mut explored: HashSet<PersonId> = HashSet::new();

    let start = Rc::new(Node::root(source.clone()));
    let priority = heuristic.estimate(dataset, source, target);
    frontier.add(start, priority);

    while !frontier.is_empty() {
        let node = frontier.remove()?;
        tracker.explored();

        if &node.state == target {
            return Ok(Some(PathBuilder::from_terminal(&node)));
        }

        explored.insert(node.state.clone());

        for (movie, person) in dataset.neighbors(&node.state) {
            if explored.contains(&person) || frontier.contains_state(&person) {
                continue;
            }
            let child = Rc::new(Node::child(&node, movie, person));
            let priority =
                f64::from(child.cost) + heuristic.estimate(dataset, &child.state, target);
            frontier.add(child, priority);
        }
        tracker.frontier(frontier.len());
    }

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristic::{BirthYearHeuristic, ZeroHeuristic};
    use crate::movie::Movie;
    use crate::person::Person;
    use crate::traversal::Strategy;

    fn run(dataset: &Dataset, heuristic: &dyn Heuristic, source: &str, target: &str) -> Option<Path> {
        let mut tracker = Tracker::new(Strategy::Heuristic, 0);
        search(dataset, &source.into(), &target.into(), heuristic, &mut tracker).unwrap()
    }

    #[test]
    fn test_birth_year_heuristic_finds_path() {
        let mut builder = Dataset::builder();
        builder.add_person(Person::new("a", "A").with_birth(1950)).unwrap();
        builder.add_person(Person::new("b", "B").with_birth(1960)).unwrap();
        builder.add_person(Person::new("c", "C")).unwrap();
        builder.add_person(Person::new("d", "D").with_birth(1990)).unwrap();
        for (m, stars) in [("m1", ["a", "b"]), ("m2", ["b", "c"]), ("m3", ["c", "d"])] {
            builder.add_movie(Movie::new(m, m)).unwrap();
            for s in stars {
                builder.add_star(&s.into(), &m.into());
            }
        }
        let dataset = builder.build();

        let path = run(&dataset, &BirthYearHeuristic::default(), "a", "d").unwrap();
        assert_eq!(path.degrees(), 3);
    }

    #[test]
    fn test_zero_heuristic_prefers_shorter_branch() {
        let dataset = crate::traversal::test_support::dataset(
            &["S", "A", "B", "T"],
            &[("m1", "S A"), ("m2", "A B"), ("m3", "B T"), ("m4", "S T")],
        );
        let path = run(&dataset, &ZeroHeuristic, "S", "T").unwrap();
        assert_eq!(path.degrees(), 1);
    }
}
