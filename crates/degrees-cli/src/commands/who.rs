//! Who command - look up people by name

use clap::Args;
use serde::Serialize;

use super::resolver;
use crate::output::{self, OutputFormat};
use crate::AppContext;
use degrees_core::Dataset;
use degrees_resolve::{Candidate, NameResolver, Resolution};

#[derive(Args)]
pub struct WhoArgs {
    /// Name to look up
    pub name: String,
}

#[derive(Debug, Serialize)]
struct PersonRow {
    id: String,
    name: String,
    birth: String,
    movies: usize,
}

pub fn run(args: &WhoArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let resolution = resolver().resolve(&ctx.dataset, &args.name);
    println!("{}", render(&ctx.dataset, &args.name, &resolution, ctx.format)?);
    Ok(())
}

fn render(
    dataset: &Dataset,
    name: &str,
    resolution: &Resolution,
    format: OutputFormat,
) -> anyhow::Result<String> {
    if format == OutputFormat::Json {
        return output::to_json(resolution);
    }

    let candidates: Vec<Candidate> = match resolution {
        Resolution::Found { id } => dataset.person(id).map(Candidate::from).into_iter().collect(),
        Resolution::Ambiguous { candidates } => candidates.clone(),
        Resolution::NotFound { suggestions } => {
            let mut text = format!("No person named {:?}.", name);
            if !suggestions.is_empty() {
                text.push_str(&format!(" Did you mean: {}?", suggestions.join(", ")));
            }
            return Ok(text);
        }
    };

    let rows: Vec<PersonRow> = candidates
        .into_iter()
        .map(|c| PersonRow {
            movies: dataset.person(&c.id).map(|p| p.movies.len()).unwrap_or_default(),
            birth: c.birth.map(|b| b.to_string()).unwrap_or_default(),
            id: c.id.to_string(),
            name: c.name,
        })
        .collect();

    match format {
        OutputFormat::Csv => output::to_csv(&rows),
        _ => Ok(output::to_table(
            &["ID", "Name", "Birth", "Movies"],
            &rows
                .iter()
                .map(|r| vec![r.id.clone(), r.name.clone(), r.birth.clone(), r.movies.to_string()])
                .collect::<Vec<_>>(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use degrees_core::{Movie, Person};

    fn create_test_dataset() -> Dataset {
        let mut builder = Dataset::builder();
        builder.add_person(Person::new("1697", "Emma Watson").with_birth(1990)).unwrap();
        builder.add_person(Person::new("1698", "Emma Watson")).unwrap();
        builder.add_movie(Movie::new("m1", "Film")).unwrap();
        builder.add_star(&"1697".into(), &"m1".into());
        builder.build()
    }

    #[test]
    fn test_ambiguous_table() {
        let dataset = create_test_dataset();
        let resolution = resolver().resolve(&dataset, "emma watson");
        let text = render(&dataset, "emma watson", &resolution, OutputFormat::Table).unwrap();
        assert_eq!(
            text,
            "ID    Name         Birth  Movies\n\
             1697  Emma Watson  1990   1\n\
             1698  Emma Watson         0"
        );
    }

    #[test]
    fn test_not_found_message() {
        let dataset = create_test_dataset();
        let resolution = Resolution::NotFound {
            suggestions: vec!["Emma Watson".to_string()],
        };
        let text = render(&dataset, "Ema", &resolution, OutputFormat::Table).unwrap();
        assert_eq!(text, "No person named \"Ema\". Did you mean: Emma Watson?");
    }

    #[test]
    fn test_json_is_the_resolution() {
        let dataset = create_test_dataset();
        let resolution = resolver().resolve(&dataset, "Emma Watson");
        let text = render(&dataset, "Emma Watson", &resolution, OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["status"], "ambiguous");
        assert_eq!(value["candidates"][0]["birth"], 1990);
    }
}
