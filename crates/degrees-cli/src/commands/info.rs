//! Info command - dataset statistics

use crate::output::{self, OutputFormat};
use crate::AppContext;

pub fn run(ctx: &AppContext) -> anyhow::Result<()> {
    let stats = ctx.dataset.stats();

    let text = match ctx.format {
        OutputFormat::Json => output::to_json(&stats)?,
        OutputFormat::Csv => output::to_csv(&[stats])?,
        OutputFormat::Table => output::to_table(
            &["People", "Movies", "Stars", "Skipped"],
            &[vec![
                stats.people.to_string(),
                stats.movies.to_string(),
                stats.stars.to_string(),
                stats.skipped_stars.to_string(),
            ]],
        ),
    };
    println!("{}", text);
    Ok(())
}
