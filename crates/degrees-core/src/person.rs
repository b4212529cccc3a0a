//! Person (graph node) types

use crate::movie::MovieId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Unique identifier for a person, as it appears in the source data
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PersonId(pub String);

impl PersonId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PersonId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for PersonId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for PersonId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A person in the graph
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,

    /// Display name (not unique)
    pub name: String,

    /// Birth year, when known
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth: Option<i32>,

    /// Movies this person starred in
    #[serde(default)]
    pub movies: BTreeSet<MovieId>,
}

impl Person {
    /// Create a person with no movies yet
    pub fn new(id: impl Into<PersonId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            birth: None,
            movies: BTreeSet::new(),
        }
    }

    /// Set the birth year
    pub fn with_birth(mut self, birth: i32) -> Self {
        self.birth = Some(birth);
        self
    }

    /// Key used for name lookups
    pub fn name_key(&self) -> String {
        self.name.to_lowercase()
    }
}
