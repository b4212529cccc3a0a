//! Shortest connection search
//!
//! [`SearchEngine`] runs one of several strategies over a [`Dataset`] and
//! reports either the chain of movies linking two people or that they are not
//! connected.

mod astar;
mod bidirectional;
mod breadth_first;

use crate::dataset::Dataset;
use crate::error::{Error, Result};
use crate::frontier::{QueueFrontier, StackFrontier};
use crate::heuristic::{BirthYearHeuristic, Heuristic, HeuristicConfig};
use crate::path::Path;
use crate::person::PersonId;
use serde::{Deserialize, Serialize};
use std::time::Instant;

/// Search algorithm selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Strategy {
    /// Breadth-first from the source; shortest path
    Unidirectional,
    /// Breadth-first from both ends at once; shortest path
    #[default]
    Bidirectional,
    /// A* ordered by links so far plus a heuristic estimate
    Heuristic,
    /// Depth-first from the source; finds a path, not the shortest
    DepthFirst,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::Unidirectional,
        Strategy::Bidirectional,
        Strategy::Heuristic,
        Strategy::DepthFirst,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unidirectional => "unidirectional",
            Self::Bidirectional => "bidirectional",
            Self::Heuristic => "heuristic",
            Self::DepthFirst => "depth-first",
        }
    }

    /// Whether the strategy always returns a minimum-length path
    pub fn is_optimal(&self) -> bool {
        matches!(self, Self::Unidirectional | Self::Bidirectional)
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Strategy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "unidirectional" | "bfs" => Ok(Self::Unidirectional),
            "bidirectional" | "bi" => Ok(Self::Bidirectional),
            "heuristic" | "astar" | "a*" => Ok(Self::Heuristic),
            "depth-first" | "dfs" => Ok(Self::DepthFirst),
            other => Err(Error::Validation(format!("unknown strategy: {}", other))),
        }
    }
}

/// Search tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Emit a progress trace every this many expansions (0 disables)
    pub progress_interval: u64,

    /// Parameters for the birth-year heuristic
    pub heuristic: HeuristicConfig,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            progress_interval: 1111,
            heuristic: HeuristicConfig::default(),
        }
    }
}

/// How a search ended
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "path", rename_all = "snake_case")]
pub enum Outcome {
    Connected(Path),
    NotConnected,
}

impl Outcome {
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Connected(path) => Some(path),
            Self::NotConnected => None,
        }
    }

    pub fn is_connected(&self) -> bool {
        matches!(self, Self::Connected(_))
    }
}

/// Search statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    pub strategy: Strategy,
    pub nodes_explored: u64,
    pub frontier_peak: usize,

    /// Person where the two halves of a bidirectional search met
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meeting_point: Option<PersonId>,
}

/// Result of a search
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    pub source: PersonId,
    pub target: PersonId,
    pub outcome: Outcome,
    pub stats: SearchStats,
}

/// Bookkeeping shared by every strategy
pub(crate) struct Tracker {
    stats: SearchStats,
    interval: u64,
    window_start: Instant,
}

impl Tracker {
    fn new(strategy: Strategy, interval: u64) -> Self {
        Self {
            stats: SearchStats {
                strategy,
                ..Default::default()
            },
            interval,
            window_start: Instant::now(),
        }
    }

    pub(crate) fn explored(&mut self) {
        self.stats.nodes_explored += 1;
        if self.interval > 0 && self.stats.nodes_explored % self.interval == 0 {
            tracing::trace!(
                "Explored {} nodes, {:.2?} for the last {}",
                self.stats.nodes_explored,
                self.window_start.elapsed(),
                self.interval
            );
            self.window_start = Instant::now();
        }
    }

    pub(crate) fn frontier(&mut self, len: usize) {
        self.stats.frontier_peak = self.stats.frontier_peak.max(len);
    }

    pub(crate) fn met(&mut self, state: &PersonId) {
        tracing::debug!("Forward and backward searches met at {}", state);
        self.stats.meeting_point = Some(state.clone());
    }
}

/// Shortest connection search engine
pub struct SearchEngine {
    config: SearchConfig,
    heuristic: Box<dyn Heuristic>,
}

impl SearchEngine {
    /// Engine using [`BirthYearHeuristic`] tuned by `config.heuristic`
    pub fn new(config: SearchConfig) -> Self {
        let heuristic = BirthYearHeuristic::new(config.heuristic.clone());
        Self {
            config,
            heuristic: Box::new(heuristic),
        }
    }

    /// Replace the heuristic used by [`Strategy::Heuristic`]
    pub fn with_heuristic(mut self, heuristic: impl Heuristic + 'static) -> Self {
        self.heuristic = Box::new(heuristic);
        self
    }

    /// Find a connection from `source` to `target`
    ///
    /// Both ids must exist in the dataset. Disconnected people yield
    /// [`Outcome::NotConnected`].
    pub fn search(
        &self,
        dataset: &Dataset,
        source: &PersonId,
        target: &PersonId,
        strategy: Strategy,
    ) -> Result<SearchReport> {
        for id in [source, target] {
            if !dataset.contains_person(id) {
                return Err(Error::PersonNotFound(id.to_string()));
            }
        }

        tracing::debug!(
            "Executing search: source={}, target={}, strategy={}",
            source,
            target,
            strategy
        );

        let mut tracker = Tracker::new(strategy, self.config.progress_interval);
        let started = Instant::now();

        let found = if source == target {
            Some(Path::default())
        } else {
            match strategy {
                Strategy::Unidirectional => breadth_first::search(
                    QueueFrontier::new(),
                    dataset,
                    source,
                    target,
                    &mut tracker,
                )?,
                Strategy::DepthFirst => breadth_first::search(
                    StackFrontier::new(),
                    dataset,
                    source,
                    target,
                    &mut tracker,
                )?,
                Strategy::Bidirectional => {
                    bidirectional::search(dataset, source, target, &mut tracker)?
                }
                Strategy::Heuristic => astar::search(
                    dataset,
                    source,
                    target,
                    self.heuristic.as_ref(),
                    &mut tracker,
                )?,
            }
        };

        let outcome = match found {
            Some(path) => Outcome::Connected(path),
            None => Outcome::NotConnected,
        };

        tracing::debug!(
            "Search finished in {:.2?}: connected={}, degrees={:?}, explored={}",
            started.elapsed(),
            outcome.is_connected(),
            outcome.path().map(Path::degrees),
            tracker.stats.nodes_explored
        );

        Ok(SearchReport {
            source: source.clone(),
            target: target.clone(),
            outcome,
            stats: tracker.stats,
        })
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl std::fmt::Debug for SearchEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchEngine")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
