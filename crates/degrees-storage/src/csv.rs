//! CSV directory loader
//!
//! A data directory holds three files:
//!
//! * `people.csv` with columns `id,name,birth` (birth may be blank)
//! * `movies.csv` with columns `id,title,year` (year may be blank)
//! * `stars.csv` with columns `person_id,movie_id`
//!
//! Star rows naming an unknown person or movie are skipped.

use crate::error::{StorageError, StorageResult};
use crate::traits::DatasetSource;
use degrees_core::{Dataset, Movie, MovieId, Person, PersonId};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const PEOPLE_FILE: &str = "people.csv";
pub const MOVIES_FILE: &str = "movies.csv";
pub const STARS_FILE: &str = "stars.csv";

#[derive(Debug, Deserialize)]
struct PersonRow {
    id: String,
    name: String,
    #[serde(default)]
    birth: String,
}

#[derive(Debug, Deserialize)]
struct MovieRow {
    id: String,
    title: String,
    #[serde(default)]
    year: String,
}

#[derive(Debug, Deserialize)]
struct StarRow {
    person_id: String,
    movie_id: String,
}

/// Loads a [`Dataset`] from a directory of CSV files
#[derive(Debug, Clone)]
pub struct CsvSource {
    dir: PathBuf,
}

impl CsvSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn file(&self, name: &str) -> StorageResult<PathBuf> {
        let path = self.dir.join(name);
        if !path.is_file() {
            return Err(StorageError::MissingFile(path));
        }
        Ok(path)
    }
}

impl DatasetSource for CsvSource {
    fn describe(&self) -> String {
        format!("csv:{}", self.dir.display())
    }

    fn load(&self) -> StorageResult<Dataset> {
        if !self.dir.is_dir() {
            return Err(StorageError::NotADirectory(self.dir.clone()));
        }

        let people = self.file(PEOPLE_FILE)?;
        let movies = self.file(MOVIES_FILE)?;
        let stars = self.file(STARS_FILE)?;
        let mut builder = Dataset::builder();

        for (line, row) in read_rows::<PersonRow>(&people)? {
            let mut person = Person::new(row.id, row.name);
            person.birth = parse_year(PEOPLE_FILE, line, &row.birth)?;
            builder
                .add_person(person)
                .map_err(|e| parse_error(PEOPLE_FILE, line, e))?;
        }

        for (line, row) in read_rows::<MovieRow>(&movies)? {
            let mut movie = Movie::new(row.id, row.title);
            movie.year = parse_year(MOVIES_FILE, line, &row.year)?;
            builder
                .add_movie(movie)
                .map_err(|e| parse_error(MOVIES_FILE, line, e))?;
        }

        for (_, row) in read_rows::<StarRow>(&stars)? {
            builder.add_star(&PersonId::from(row.person_id), &MovieId::from(row.movie_id));
        }

        let dataset = builder.build();
        let stats = dataset.stats();
        tracing::info!(
            "Loaded {} people, {} movies, {} star links from {}",
            stats.people,
            stats.movies,
            stats.stars,
            self.dir.display()
        );
        if stats.skipped_stars > 0 {
            tracing::warn!(
                "Skipped {} star rows referring to unknown people or movies",
                stats.skipped_stars
            );
        }

        Ok(dataset)
    }
}

/// Read every row of a CSV file along with its line number
fn read_rows<T: DeserializeOwned>(path: &Path) -> StorageResult<Vec<(u64, T)>> {
    let mut reader = ::csv::ReaderBuilder::new()
        .trim(::csv::Trim::All)
        .from_path(path)?;
    let headers = reader.headers()?.clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        rows.push((line, record.deserialize(Some(&headers))?));
    }

    tracing::debug!("Read {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

fn parse_year(file: &str, line: u64, value: &str) -> StorageResult<Option<i32>> {
    if value.is_empty() {
        return Ok(None);
    }
    value
        .parse()
        .map(Some)
        .map_err(|_| parse_error(file, line, format!("invalid year: {:?}", value)))
}

fn parse_error(file: &str, line: u64, message: impl ToString) -> StorageError {
    StorageError::Parse {
        file: file.to_string(),
        line,
        message: message.to_string(),
    }
}
