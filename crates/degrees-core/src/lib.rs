//! Degrees Core - Shortest connection search over a co-membership graph
//!
//! People are linked when they appear together in a movie. This crate holds the
//! in-memory dataset and the search engine that finds the chain of movies
//! connecting two people.

pub mod dataset;
pub mod error;
pub mod frontier;
pub mod heuristic;
pub mod movie;
pub mod node;
pub mod path;
pub mod person;
pub mod traversal;

pub use dataset::{Attribute, AttributeValue, Dataset, DatasetBuilder, DatasetStats};
pub use error::{Error, Result};
pub use frontier::{Frontier, PriorityQueueFrontier, QueueFrontier, StackFrontier};
pub use heuristic::{BirthYearHeuristic, Heuristic, HeuristicConfig, ZeroHeuristic};
pub use movie::{Movie, MovieId};
pub use node::Node;
pub use path::{Path, PathBuilder, PathStep};
pub use person::{Person, PersonId};
pub use traversal::{Outcome, SearchConfig, SearchEngine, SearchReport, SearchStats, Strategy};
