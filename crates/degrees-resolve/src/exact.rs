//! Exact resolver - case-insensitive full-name matching

use crate::traits::{Candidate, NameResolver, Resolution};
use degrees_core::Dataset;

/// Case-insensitive exact name resolver (stateless)
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactResolver;

impl ExactResolver {
    pub fn new() -> Self {
        Self
    }
}

impl NameResolver for ExactResolver {
    fn resolve(&self, dataset: &Dataset, name: &str) -> Resolution {
        let mut ids = dataset.person_ids_for_name(name.trim());

        match ids.len() {
            0 => Resolution::NotFound {
                suggestions: Vec::new(),
            },
            1 => Resolution::Found { id: ids.remove(0) },
            _ => {
                tracing::debug!("Name {:?} matches {} people", name, ids.len());
                Resolution::Ambiguous {
                    candidates: ids
                        .iter()
                        .filter_map(|id| dataset.person(id))
                        .map(Candidate::from)
                        .collect(),
                }
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use degrees_core::{Person, PersonId};

    pub(crate) fn create_test_dataset() -> Dataset {
        let mut builder = Dataset::builder();
        for (id, name, birth) in [
            ("102", "Kevin Bacon", Some(1958)),
            ("129", "Tom Cruise", Some(1962)),
            ("144", "Chris Sarandon", None),
            ("1697", "Emma Watson", Some(1990)),
            ("1698", "Emma Watson", Some(1970)),
        ] {
            let mut person = Person::new(id, name);
            person.birth = birth;
            builder.add_person(person).unwrap();
        }
        builder.build()
    }

    #[test]
    fn test_exact_match_ignores_case_and_padding() {
        let dataset = create_test_dataset();
        let resolution = ExactResolver::new().resolve(&dataset, "  kevin BACON ");
        assert_eq!(resolution.found(), Some(&PersonId::from("102")));
    }

    #[test]
    fn test_ambiguous_name_lists_candidates() {
        let dataset = create_test_dataset();
        let resolution = ExactResolver::new().resolve(&dataset, "Emma Watson");

        let Resolution::Ambiguous { candidates } = &resolution else {
            panic!("expected ambiguity, got {:?}", resolution);
        };
        let ids: Vec<&str> = candidates.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["1697", "1698"]);
        assert_eq!(candidates[1].birth, Some(1970));

        assert_eq!(
            resolution.choose(&"1698".into()),
            Some(PersonId::from("1698"))
        );
        assert_eq!(resolution.choose(&"102".into()), None);
    }

    #[test]
    fn test_unknown_name() {
        let dataset = create_test_dataset();
        assert_eq!(
            ExactResolver::new().resolve(&dataset, "Nobody"),
            Resolution::NotFound {
                suggestions: vec![]
            }
        );
    }
}
