//! CLI command implementations

pub mod completions;
pub mod config;
pub mod info;
pub mod path;
pub mod who;

use std::io::{BufRead, Write};

use degrees_core::{Dataset, PersonId};
use degrees_resolve::{Candidate, NameResolver, Resolution};

/// Resolver used by every command
#[cfg(feature = "fuzzy")]
pub fn resolver() -> impl NameResolver {
    degrees_resolve::FuzzyResolver::new()
}

/// Resolver used by every command
#[cfg(not(feature = "fuzzy"))]
pub fn resolver() -> impl NameResolver {
    degrees_resolve::ExactResolver::new()
}

/// Turn a typed name into a person id
///
/// An explicit id wins over the name. Ambiguous names are settled by asking
/// on `input` unless prompting is disabled.
pub fn resolve_person<R: BufRead, W: Write>(
    dataset: &Dataset,
    name: &str,
    explicit_id: Option<&str>,
    prompt: Option<(R, W)>,
) -> anyhow::Result<PersonId> {
    if let Some(id) = explicit_id {
        let id = PersonId::from(id);
        if !dataset.contains_person(&id) {
            anyhow::bail!("Person not found: no person with id {}", id);
        }
        return Ok(id);
    }

    let resolution = resolver().resolve(dataset, name);
    match resolution {
        Resolution::Found { id } => Ok(id),
        Resolution::NotFound { suggestions } if suggestions.is_empty() => {
            anyhow::bail!("Person not found: {}", name)
        }
        Resolution::NotFound { suggestions } => anyhow::bail!(
            "Person not found: {}. Did you mean: {}?",
            name,
            suggestions.join(", ")
        ),
        Resolution::Ambiguous { ref candidates } => {
            let Some((input, output)) = prompt else {
                anyhow::bail!(
                    "Name {:?} is ambiguous; pass an id ({})",
                    name,
                    candidate_ids(candidates)
                );
            };
            let chosen = prompt_choice(name, candidates, input, output)?;
            resolution
                .choose(&chosen)
                .ok_or_else(|| anyhow::anyhow!("Person not found: {} is not a listed id", chosen))
        }
    }
}

fn candidate_ids(candidates: &[Candidate]) -> String {
    candidates
        .iter()
        .map(|c| c.id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// List the candidates and read the intended id
fn prompt_choice<R: BufRead, W: Write>(
    name: &str,
    candidates: &[Candidate],
    mut input: R,
    mut output: W,
) -> anyhow::Result<PersonId> {
    writeln!(output, "Which '{}'?", name)?;
    for candidate in candidates {
        let birth = candidate
            .birth
            .map(|b| b.to_string())
            .unwrap_or_else(|| "unknown".to_string());
        writeln!(
            output,
            "ID: {}, Name: {}, Birth: {}",
            candidate.id, candidate.name, birth
        )?;
    }
    write!(output, "Intended Person ID: ")?;
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(PersonId::from(line.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use degrees_core::Person;
    use std::io::Cursor;

    fn create_test_dataset() -> Dataset {
        let mut builder = Dataset::builder();
        builder.add_person(Person::new("1", "Emma Watson").with_birth(1990)).unwrap();
        builder.add_person(Person::new("2", "Emma Watson")).unwrap();
        builder.add_person(Person::new("3", "Kevin Bacon")).unwrap();
        builder.build()
    }

    fn no_prompt() -> Option<(Cursor<Vec<u8>>, Vec<u8>)> {
        None
    }

    #[test]
    fn test_unique_name() {
        let dataset = create_test_dataset();
        let id = resolve_person(&dataset, "kevin bacon", None, no_prompt()).unwrap();
        assert_eq!(id, PersonId::from("3"));
    }

    #[test]
    fn test_explicit_id() {
        let dataset = create_test_dataset();
        let id = resolve_person(&dataset, "Emma Watson", Some("2"), no_prompt()).unwrap();
        assert_eq!(id, PersonId::from("2"));
        assert!(resolve_person(&dataset, "Emma Watson", Some("9"), no_prompt()).is_err());
    }

    #[test]
    fn test_ambiguous_without_prompt_fails() {
        let dataset = create_test_dataset();
        let err = resolve_person(&dataset, "Emma Watson", None, no_prompt()).unwrap_err();
        assert!(err.to_string().contains("ambiguous"));
    }

    #[test]
    fn test_ambiguous_with_prompt() {
        let dataset = create_test_dataset();
        let mut output = Vec::new();
        let id = resolve_person(
            &dataset,
            "Emma Watson",
            None,
            Some((Cursor::new(b"2\n".to_vec()), &mut output)),
        )
        .unwrap();

        assert_eq!(id, PersonId::from("2"));
        let shown = String::from_utf8(output).unwrap();
        assert!(shown.contains("ID: 1, Name: Emma Watson, Birth: 1990"));
        assert!(shown.contains("ID: 2, Name: Emma Watson, Birth: unknown"));
    }

    #[test]
    fn test_prompt_rejects_unlisted_id() {
        let dataset = create_test_dataset();
        let result = resolve_person(
            &dataset,
            "Emma Watson",
            None,
            Some((Cursor::new(b"3\n".to_vec()), Vec::new())),
        );
        assert!(result.is_err());
    }
}
