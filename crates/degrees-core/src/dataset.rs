//! In-memory dataset of people and the movies linking them

use crate::error::{Error, Result};
use crate::movie::{Movie, MovieId};
use crate::person::{Person, PersonId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Person attributes exposed to searches and heuristics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Attribute {
    Name,
    Birth,
}

/// Value of a person attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    Text(String),
    Year(i32),
}

impl AttributeValue {
    pub fn as_year(&self) -> Option<i32> {
        match self {
            Self::Year(y) => Some(*y),
            Self::Text(_) => None,
        }
    }
}

/// Dataset size counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetStats {
    pub people: usize,
    pub movies: usize,
    pub stars: usize,
    pub skipped_stars: usize,
}

/// Read-only graph of people linked by shared movies
///
/// Built once through [`DatasetBuilder`] and never mutated afterwards, so a
/// single instance can back any number of searches.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    people: HashMap<PersonId, Person>,
    movies: HashMap<MovieId, Movie>,
    names: HashMap<String, BTreeSet<PersonId>>,
    stats: DatasetStats,
}

impl Dataset {
    pub fn builder() -> DatasetBuilder {
        DatasetBuilder::default()
    }

    pub fn person(&self, id: &PersonId) -> Option<&Person> {
        self.people.get(id)
    }

    pub fn movie(&self, id: &MovieId) -> Option<&Movie> {
        self.movies.get(id)
    }

    pub fn contains_person(&self, id: &PersonId) -> bool {
        self.people.contains_key(id)
    }

    pub fn people(&self) -> impl Iterator<Item = &Person> {
        self.people.values()
    }

    pub fn stats(&self) -> DatasetStats {
        self.stats
    }

    /// All person ids whose name matches, ignoring case, in id order
    pub fn person_ids_for_name(&self, name: &str) -> Vec<PersonId> {
        self.names
            .get(&name.to_lowercase())
            .map(|ids| ids.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// `(movie, co-star)` pairs for everyone who starred with `id`
    ///
    /// The person appears among their own neighbors once per movie. Unknown
    /// ids have no neighbors.
    pub fn neighbors(&self, id: &PersonId) -> BTreeSet<(MovieId, PersonId)> {
        let Some(person) = self.people.get(id) else {
            return BTreeSet::new();
        };

        person
            .movies
            .iter()
            .filter_map(|movie_id| self.movies.get(movie_id))
            .flat_map(|movie| {
                movie
                    .stars
                    .iter()
                    .map(move |star| (movie.id.clone(), star.clone()))
            })
            .collect()
    }

    pub fn attribute(&self, id: &PersonId, attribute: Attribute) -> Option<AttributeValue> {
        let person = self.people.get(id)?;
        match attribute {
            Attribute::Name => Some(AttributeValue::Text(person.name.clone())),
            Attribute::Birth => person.birth.map(AttributeValue::Year),
        }
    }

    pub fn birth_year(&self, id: &PersonId) -> Option<i32> {
        self.attribute(id, Attribute::Birth)
            .and_then(|value| value.as_year())
    }

    /// Display name for a person, falling back to the raw id
    pub fn display_name(&self, id: &PersonId) -> String {
        self.people
            .get(id)
            .map(|p| p.name.clone())
            .unwrap_or_else(|| id.to_string())
    }

    /// Display title for a movie, falling back to the raw id
    pub fn display_title(&self, id: &MovieId) -> String {
        self.movies
            .get(id)
            .map(|m| m.title.clone())
            .unwrap_or_else(|| id.to_string())
    }
}

/// Incremental builder for a [`Dataset`]
#[derive(Debug, Default)]
pub struct DatasetBuilder {
    dataset: Dataset,
}

impl DatasetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a person. Ids must be unique.
    pub fn add_person(&mut self, person: Person) -> Result<()> {
        if person.id.as_str().is_empty() {
            return Err(Error::Validation("person id cannot be empty".to_string()));
        }
        if self.dataset.people.contains_key(&person.id) {
            return Err(Error::Validation(format!(
                "duplicate person id: {}",
                person.id
            )));
        }

        self.dataset
            .names
            .entry(person.name_key())
            .or_default()
            .insert(person.id.clone());
        self.dataset.people.insert(person.id.clone(), person);
        self.dataset.stats.people += 1;
        Ok(())
    }

    /// Register a movie. Ids must be unique.
    pub fn add_movie(&mut self, movie: Movie) -> Result<()> {
        if movie.id.as_str().is_empty() {
            return Err(Error::Validation("movie id cannot be empty".to_string()));
        }
        if self.dataset.movies.contains_key(&movie.id) {
            return Err(Error::Validation(format!("duplicate movie id: {}", movie.id)));
        }

        self.dataset.movies.insert(movie.id.clone(), movie);
        self.dataset.stats.movies += 1;
        Ok(())
    }

    /// Record that a person starred in a movie
    ///
    /// Returns `false` and skips the link when either side is unknown.
    pub fn add_star(&mut self, person_id: &PersonId, movie_id: &MovieId) -> bool {
        let (Some(person), Some(movie)) = (
            self.dataset.people.get_mut(person_id),
            self.dataset.movies.get_mut(movie_id),
        ) else {
            tracing::debug!("Skipping star link {} -> {}", person_id, movie_id);
            self.dataset.stats.skipped_stars += 1;
            return false;
        };

        if person.movies.insert(movie_id.clone()) {
            movie.stars.insert(person_id.clone());
            self.dataset.stats.stars += 1;
        }
        true
    }

    pub fn build(self) -> Dataset {
        tracing::debug!(
            "Built dataset: {} people, {} movies, {} star links ({} skipped)",
            self.dataset.stats.people,
            self.dataset.stats.movies,
            self.dataset.stats.stars,
            self.dataset.stats.skipped_stars
        );
        self.dataset
    }
}
