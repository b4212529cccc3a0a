//! Movie (graph link) types

use crate::person::PersonId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Unique identifier for a movie, as it appears in the source data
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(pub String);

impl MovieId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for MovieId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for MovieId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for MovieId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A movie linking everyone who starred in it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,

    pub title: String,

    /// Release year, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,

    /// People who starred in this movie
    #[serde(default)]
    pub stars: BTreeSet<PersonId>,
}

impl Movie {
    /// Create a movie with no stars yet
    pub fn new(id: impl Into<MovieId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            year: None,
            stars: BTreeSet::new(),
        }
    }

    /// Set the release year
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = Some(year);
        self
    }

    /// Check whether a person starred in this movie
    pub fn has_star(&self, person: &PersonId) -> bool {
        self.stars.contains(person)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_creation() {
        let movie = Movie::new("112384", "Apollo 13").with_year(1995);

        assert_eq!(movie.id.as_str(), "112384");
        assert_eq!(movie.title, "Apollo 13");
        assert_eq!(movie.year, Some(1995));
        assert!(!movie.has_star(&PersonId::from("102")));
    }
}
