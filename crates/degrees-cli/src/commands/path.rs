//! Path command - find how two people are connected

use std::io;

use clap::{Args, ValueEnum};
use serde::Serialize;

use super::resolve_person;
use crate::output::{self, OutputFormat};
use crate::AppContext;
use degrees_core::{Dataset, PersonId, SearchEngine, SearchReport, SearchStats, Strategy};

#[derive(Args)]
pub struct PathArgs {
    /// Name of the first person
    pub source: String,

    /// Name of the second person
    pub target: String,

    /// Search strategy (defaults to the configured one)
    #[arg(short, long, value_enum)]
    pub strategy: Option<StrategyArg>,

    /// Use this person id for the source instead of resolving the name
    #[arg(long)]
    pub source_id: Option<String>,

    /// Use this person id for the target instead of resolving the name
    #[arg(long)]
    pub target_id: Option<String>,

    /// Fail on ambiguous names instead of asking which person was meant
    #[arg(long)]
    pub no_prompt: bool,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum StrategyArg {
    Unidirectional,
    Bidirectional,
    Heuristic,
    DepthFirst,
}

impl From<StrategyArg> for Strategy {
    fn from(s: StrategyArg) -> Self {
        match s {
            StrategyArg::Unidirectional => Strategy::Unidirectional,
            StrategyArg::Bidirectional => Strategy::Bidirectional,
            StrategyArg::Heuristic => Strategy::Heuristic,
            StrategyArg::DepthFirst => Strategy::DepthFirst,
        }
    }
}

/// One hop of a connection as shown to the user
#[derive(Debug, Serialize)]
struct HopView {
    degree: usize,
    from_id: String,
    from: String,
    movie_id: String,
    movie: String,
    to_id: String,
    to: String,
}

#[derive(Debug, Serialize)]
struct ConnectionView<'a> {
    source: String,
    target: String,
    connected: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    degrees: Option<usize>,
    hops: Vec<HopView>,
    stats: &'a SearchStats,
}

pub fn run(args: &PathArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let source = resolve(ctx, &args.source, args.source_id.as_deref(), args.no_prompt)?;
    let target = resolve(ctx, &args.target, args.target_id.as_deref(), args.no_prompt)?;

    let strategy = args.strategy.map(Strategy::from).unwrap_or(ctx.config.strategy);
    let engine = SearchEngine::new(ctx.config.search.clone());
    let report = engine.search(&ctx.dataset, &source, &target, strategy)?;

    tracing::info!(
        "{} search explored {} nodes (frontier peak {})",
        strategy,
        report.stats.nodes_explored,
        report.stats.frontier_peak
    );
    if !strategy.is_optimal() && report.outcome.is_connected() {
        tracing::warn!("{} does not guarantee the shortest connection", strategy);
    }

    println!("{}", render(&ctx.dataset, &report, ctx.format)?);
    Ok(())
}

fn resolve(
    ctx: &AppContext,
    name: &str,
    explicit_id: Option<&str>,
    no_prompt: bool,
) -> anyhow::Result<PersonId> {
    if no_prompt {
        resolve_person(&ctx.dataset, name, explicit_id, None::<(io::StdinLock, io::Stderr)>)
    } else {
        resolve_person(
            &ctx.dataset,
            name,
            explicit_id,
            Some((io::stdin().lock(), io::stderr())),
        )
    }
}

fn hops(dataset: &Dataset, report: &SearchReport) -> Vec<HopView> {
    let Some(path) = report.outcome.path() else {
        return Vec::new();
    };
    path.hops(&report.source)
        .enumerate()
        .map(|(i, (from, movie, to))| HopView {
            degree: i + 1,
            from_id: from.to_string(),
            from: dataset.display_name(from),
            movie_id: movie.to_string(),
            movie: dataset.display_title(movie),
            to_id: to.to_string(),
            to: dataset.display_name(to),
        })
        .collect()
}

fn render(dataset: &Dataset, report: &SearchReport, format: OutputFormat) -> anyhow::Result<String> {
    let hops = hops(dataset, report);

    match format {
        OutputFormat::Json => output::to_json(&ConnectionView {
            source: dataset.display_name(&report.source),
            target: dataset.display_name(&report.target),
            connected: report.outcome.is_connected(),
            degrees: report.outcome.path().map(|p| p.degrees()),
            hops,
            stats: &report.stats,
        }),
        OutputFormat::Csv => output::to_csv(&hops),
        OutputFormat::Table => {
            let Some(path) = report.outcome.path() else {
                return Ok("Not connected.".to_string());
            };
            let mut lines = vec![format!("{} degrees of separation.", path.degrees())];
            lines.extend(hops.iter().map(|hop| {
                format!(
                    "{}: {} and {} starred in {}",
                    hop.degree, hop.from, hop.to, hop.movie
                )
            }));
            Ok(lines.join("\n"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use degrees_core::{Movie, Person};

    fn create_test_dataset() -> Dataset {
        let mut builder = Dataset::builder();
        builder.add_person(Person::new("102", "Kevin Bacon")).unwrap();
        builder.add_person(Person::new("129", "Tom Cruise")).unwrap();
        builder.add_person(Person::new("163", "Dustin Hoffman")).unwrap();
        builder.add_person(Person::new("999", "Nobody")).unwrap();
        builder.add_movie(Movie::new("104257", "A Few Good Men")).unwrap();
        builder.add_movie(Movie::new("95953", "Rain Man")).unwrap();
        for (person, movie) in [("102", "104257"), ("129", "104257"), ("129", "95953"), ("163", "95953")] {
            builder.add_star(&person.into(), &movie.into());
        }
        builder.build()
    }

    fn report(source: &str, target: &str) -> SearchReport {
        let dataset = create_test_dataset();
        SearchEngine::default()
            .search(&dataset, &source.into(), &target.into(), Strategy::Bidirectional)
            .unwrap()
    }

    #[test]
    fn test_table_lists_each_hop() {
        let dataset = create_test_dataset();
        let text = render(&dataset, &report("163", "102"), OutputFormat::Table).unwrap();
        assert_eq!(
            text,
            "2 degrees of separation.\n\
             1: Dustin Hoffman and Tom Cruise starred in Rain Man\n\
             2: Tom Cruise and Kevin Bacon starred in A Few Good Men"
        );
    }

    #[test]
    fn test_table_not_connected() {
        let dataset = create_test_dataset();
        let text = render(&dataset, &report("102", "999"), OutputFormat::Table).unwrap();
        assert_eq!(text, "Not connected.");
    }

    #[test]
    fn test_same_person_is_zero_degrees() {
        let dataset = create_test_dataset();
        let text = render(&dataset, &report("102", "102"), OutputFormat::Table).unwrap();
        assert_eq!(text, "0 degrees of separation.");
    }

    #[test]
    fn test_json_view() {
        let dataset = create_test_dataset();
        let text = render(&dataset, &report("102", "163"), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["connected"], true);
        assert_eq!(value["degrees"], 2);
        assert_eq!(value["hops"][0]["movie"], "A Few Good Men");
        assert_eq!(value["hops"][1]["to_id"], "163");
        assert_eq!(value["stats"]["strategy"], "bidirectional");
    }

    #[test]
    fn test_csv_rows() {
        let dataset = create_test_dataset();
        let text = render(&dataset, &report("102", "129"), OutputFormat::Csv).unwrap();
        assert_eq!(
            text,
            "degree,from_id,from,movie_id,movie,to_id,to\n\
             1,102,Kevin Bacon,104257,A Few Good Men,129,Tom Cruise"
        );
    }
}
