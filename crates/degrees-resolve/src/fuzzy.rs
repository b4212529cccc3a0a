//! Fuzzy resolver using nucleo

use nucleo_matcher::{
    pattern::{AtomKind, CaseMatching, Normalization, Pattern},
    Config, Matcher,
};
use std::collections::BTreeMap;

use crate::exact::ExactResolver;
use crate::traits::{NameResolver, Resolution};
use degrees_core::Dataset;

/// Exact resolution with "did you mean" suggestions on a miss
pub struct FuzzyResolver {
    pub max_suggestions: usize,
}

impl FuzzyResolver {
    pub fn new() -> Self {
        Self { max_suggestions: 5 }
    }

    pub fn with_max_suggestions(mut self, max: usize) -> Self {
        self.max_suggestions = max;
        self
    }

    /// Best-scoring distinct names for `pattern`, highest score first
    pub fn suggest(&self, dataset: &Dataset, pattern: &str) -> Vec<String> {
        if pattern.trim().is_empty() || self.max_suggestions == 0 {
            return Vec::new();
        }

        let pat = Pattern::new(
            pattern,
            CaseMatching::Ignore,
            Normalization::Smart,
            AtomKind::Fuzzy,
        );
        let mut matcher = Matcher::new(Config::DEFAULT);
        let mut buf = Vec::new();

        // Keep the best score per distinct name
        let mut best: BTreeMap<&str, u32> = BTreeMap::new();
        for person in dataset.people() {
            let haystack = nucleo_matcher::Utf32Str::new(&person.name, &mut buf);
            if let Some(score) = pat.score(haystack, &mut matcher) {
                let entry = best.entry(person.name.as_str()).or_insert(0);
                *entry = (*entry).max(score);
            }
        }

        let mut scored: Vec<(&str, u32)> = best.into_iter().collect();
        // Sort by score descending, then name for stable output
        scored.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));

        scored
            .into_iter()
            .take(self.max_suggestions)
            .map(|(name, _)| name.to_string())
            .collect()
    }
}

impl Default for FuzzyResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl NameResolver for FuzzyResolver {
    fn resolve(&self, dataset: &Dataset, name: &str) -> Resolution {
        match ExactResolver.resolve(dataset, name) {
            Resolution::NotFound { .. } => {
                let suggestions = self.suggest(dataset, name.trim());
                tracing::debug!("No exact match for {:?}, {} suggestions", name, suggestions.len());
                Resolution::NotFound { suggestions }
            }
            resolved => resolved,
        }
    }
}
