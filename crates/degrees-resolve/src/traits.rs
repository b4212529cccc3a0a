//! Resolver traits and result types

use degrees_core::{Dataset, Person, PersonId};
use serde::Serialize;

/// One person sharing an ambiguous name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub id: PersonId,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub birth: Option<i32>,
}

impl From<&Person> for Candidate {
    fn from(person: &Person) -> Self {
        Self {
            id: person.id.clone(),
            name: person.name.clone(),
            birth: person.birth,
        }
    }
}

/// Outcome of resolving a name
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Resolution {
    Found { id: PersonId },
    Ambiguous { candidates: Vec<Candidate> },
    NotFound { suggestions: Vec<String> },
}

impl Resolution {
    /// Pick one candidate of an ambiguous name by id
    pub fn choose(&self, id: &PersonId) -> Option<PersonId> {
        match self {
            Self::Found { id: found } if found == id => Some(found.clone()),
            Self::Ambiguous { candidates } => candidates
                .iter()
                .find(|c| &c.id == id)
                .map(|c| c.id.clone()),
            _ => None,
        }
    }

    pub fn found(&self) -> Option<&PersonId> {
        match self {
            Self::Found { id } => Some(id),
            _ => None,
        }
    }
}

/// Trait for name resolvers
///
/// The search engine never calls a resolver; it only receives the ids that
/// a resolver produced.
pub trait NameResolver {
    fn resolve(&self, dataset: &Dataset, name: &str) -> Resolution;
}
