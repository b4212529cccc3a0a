//! Degrees CLI - Degrees of separation between people who starred together

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod output;

use commands::{completions, info, path, who};
use config::{Config, DEFAULT_DATA_DIR, DEFAULT_FORMAT};
use degrees_core::Dataset;
use degrees_storage::{CsvSource, DatasetSource};
use output::OutputFormat;

#[derive(Parser)]
#[command(name = "degrees")]
#[command(
    author,
    version,
    about = "Find the chain of movies connecting two people"
)]
pub struct Cli {
    /// Directory containing people.csv, movies.csv and stars.csv
    #[arg(short, long, global = true, env = "DEGREES_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Output format: table, json, csv
    #[arg(short, long, global = true)]
    pub format: Option<String>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Get the data directory path
    pub fn data_dir(&self, config: &Config) -> PathBuf {
        self.data_dir
            .clone()
            .or_else(|| config.data_dir.clone())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
    }

    /// Get the output format
    pub fn output_format(&self, config: &Config) -> OutputFormat {
        self.format
            .as_deref()
            .or(config.format.as_deref())
            .unwrap_or(DEFAULT_FORMAT)
            .into()
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Find how two people are connected
    Path(path::PathArgs),
    /// Look up people by name
    Who(who::WhoArgs),
    /// Show dataset statistics
    Info,
    /// Manage configuration
    Config(commands::config::ConfigArgs),
    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}

/// Application context with the loaded dataset
pub struct AppContext {
    pub config: Config,
    pub dataset: Dataset,
    pub format: OutputFormat,
}

impl AppContext {
    pub fn new(cli: &Cli) -> anyhow::Result<Self> {
        let config = Config::load()?;
        let source = CsvSource::new(cli.data_dir(&config));
        tracing::debug!("Loading dataset from {}", source.describe());

        if !cli.quiet {
            eprintln!("Loading data...");
        }
        let dataset = source.load()?;
        if !cli.quiet {
            eprintln!("Data loaded.");
        }

        Ok(Self {
            format: cli.output_format(&config),
            config,
            dataset,
        })
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .init();

    tracing::debug!("Starting degrees CLI");

    match &cli.command {
        Commands::Path(args) => path::run(args, &AppContext::new(&cli)?)?,
        Commands::Who(args) => who::run(args, &AppContext::new(&cli)?)?,
        Commands::Info => info::run(&AppContext::new(&cli)?)?,
        Commands::Config(args) => commands::config::run(args)?,
        Commands::Completions(args) => completions::run(args)?,
    }

    Ok(())
}
