//! `degrees config` - inspect and edit the settings file

use clap::{Args, Subcommand};

use crate::config::{config_file_path, Config, ConfigKey};
use crate::output;

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Print the value a key resolves to, built-in fallback included
    Get {
        /// Dotted key such as `strategy` or `search.heuristic.year_gap_scale`
        key: String,
    },
    /// Store a value in the settings file
    Set {
        /// Dotted key such as `data_dir` or `search.progress_interval`
        key: String,
        /// Value, checked against the key's type before anything is written
        value: String,
    },
    /// Show every key with its effective value and where it comes from
    List,
    /// Print where the settings file lives (override with DEGREES_CONFIG)
    Path,
    /// Write a settings file holding the built-in search defaults
    Init {
        /// Replace a settings file that already exists
        #[arg(long)]
        force: bool,
    },
}

pub fn run(args: &ConfigArgs) -> anyhow::Result<()> {
    let path = config_file_path();

    match &args.action {
        ConfigAction::Get { key } => {
            println!("{}", Config::load()?.effective(key)?.value);
        }
        ConfigAction::Set { key, value } => {
            let mut config = Config::load()?;
            config.set(key, value)?;
            config.save()?;
            tracing::info!("Updated {} in {}", key, path.display());
            println!("{} = {}", key, config.effective(key)?.value);
        }
        ConfigAction::List => println!("{}", list(&Config::load()?)?),
        ConfigAction::Path => println!("{}", path.display()),
        ConfigAction::Init { force } => {
            if path.exists() && !force {
                anyhow::bail!(
                    "{} already exists; pass --force to replace it",
                    path.display()
                );
            }
            Config::default().save()?;
            println!("Wrote default settings to {}", path.display());
        }
    }
    Ok(())
}

fn list(config: &Config) -> anyhow::Result<String> {
    let rows = ConfigKey::ALL
        .iter()
        .map(|key| {
            let setting = config.effective(key.as_str())?;
            Ok(vec![key.to_string(), setting.value, setting.origin.to_string()])
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(output::to_table(&["Key", "Value", "Source"], &rows))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_marks_fallbacks() {
        let mut config = Config::default();
        config.set("data_dir", "small").unwrap();

        let table = list(&config).unwrap();
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines.len(), ConfigKey::ALL.len() + 1);
        assert!(lines[0].starts_with("Key"));
        assert!(lines[1].starts_with("data_dir"));
        assert!(lines[1].contains("small") && lines[1].ends_with("file"));
        assert!(lines[3].starts_with("format") && lines[3].contains("table"));
        assert!(lines[3].ends_with("default"));
    }
}
