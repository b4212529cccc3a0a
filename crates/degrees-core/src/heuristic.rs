//! Remaining-distance estimates for best-first search

use crate::dataset::Dataset;
use crate::error::{Error, Result};
use crate::person::PersonId;
use serde::{Deserialize, Serialize};

/// Non-negative estimate of the links left between `state` and `target`
///
/// A* only returns shortest paths when the estimate never exceeds the true
/// remaining distance.
pub trait Heuristic {
    fn estimate(&self, dataset: &Dataset, state: &PersonId, target: &PersonId) -> f64;
}

impl<F> Heuristic for F
where
    F: Fn(&Dataset, &PersonId, &PersonId) -> f64,
{
    fn estimate(&self, dataset: &Dataset, state: &PersonId, target: &PersonId) -> f64 {
        self(dataset, state, target)
    }
}

/// Always zero; turns A* into uniform-cost search
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl Heuristic for ZeroHeuristic {
    fn estimate(&self, _dataset: &Dataset, _state: &PersonId, _target: &PersonId) -> f64 {
        0.0
    }
}

/// Tuning values for [`BirthYearHeuristic`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeuristicConfig {
    /// Birth-year gap tolerated before any penalty applies
    pub year_gap_threshold: u32,

    /// Years beyond the threshold that count as one extra link
    pub year_gap_scale: f64,

    /// Added when the candidate's own birth year is unknown
    pub missing_birth_penalty: f64,

    /// Added when the gap cannot be computed
    pub unknown_gap_penalty: f64,
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        Self {
            year_gap_threshold: 40,
            year_gap_scale: 10.0,
            missing_birth_penalty: 2.0,
            unknown_gap_penalty: 1.0,
        }
    }
}

impl HeuristicConfig {
    /// Reject values that would silence the gap penalty or make the estimate negative
    pub fn validate(&self) -> Result<()> {
        if self.year_gap_scale.is_nan() || self.year_gap_scale <= 0.0 {
            return Err(Error::Validation(format!(
                "year_gap_scale must be positive, got {}",
                self.year_gap_scale
            )));
        }
        for (name, value) in [
            ("missing_birth_penalty", self.missing_birth_penalty),
            ("unknown_gap_penalty", self.unknown_gap_penalty),
        ] {
            if value.is_nan() || value < 0.0 {
                return Err(Error::Validation(format!(
                    "{} must not be negative, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

/// Guesses distance from how far apart two people were born
///
/// People of very different generations rarely share a cast, so a large
/// birth-year gap is read as extra distance. This is not admissible in
/// general and can steer A* onto a longer path.
#[derive(Debug, Clone, Default)]
pub struct BirthYearHeuristic {
    config: HeuristicConfig,
}

impl BirthYearHeuristic {
    pub fn new(config: HeuristicConfig) -> Self {
        Self { config }
    }
}

impl Heuristic for BirthYearHeuristic {
    fn estimate(&self, dataset: &Dataset, state: &PersonId, target: &PersonId) -> f64 {
        let state_birth = dataset.birth_year(state);
        let target_birth = dataset.birth_year(target);
        let mut h = 0.0;

        if state_birth.is_none() {
            h += self.config.missing_birth_penalty;
        }

        match (state_birth, target_birth) {
            (Some(a), Some(b)) => {
                let gap = a.abs_diff(b);
                if gap > self.config.year_gap_threshold && self.config.year_gap_scale > 0.0 {
                    h += f64::from(gap - self.config.year_gap_threshold)
                        / self.config.year_gap_scale;
                }
            }
            _ => h += self.config.unknown_gap_penalty,
        }

        h
    }
}
