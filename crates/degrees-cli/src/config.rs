//! CLI configuration

use std::path::PathBuf;

use anyhow::Context;
use degrees_core::{SearchConfig, Strategy};
use serde::{Deserialize, Serialize};

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "DEGREES_CONFIG";

/// Data directory used when neither the command line nor the config names one
pub const DEFAULT_DATA_DIR: &str = "large";

/// Output format used when neither the command line nor the config names one
pub const DEFAULT_FORMAT: &str = "table";

/// Get the config file path
pub fn config_file_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_ENV) {
        return PathBuf::from(path);
    }
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("degrees")
        .join("config.toml")
}

/// Settable config keys, named by their dotted TOML path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    DataDir,
    Strategy,
    Format,
    ProgressInterval,
    YearGapThreshold,
    YearGapScale,
    MissingBirthPenalty,
    UnknownGapPenalty,
}

impl ConfigKey {
    pub const ALL: [ConfigKey; 8] = [
        ConfigKey::DataDir,
        ConfigKey::Strategy,
        ConfigKey::Format,
        ConfigKey::ProgressInterval,
        ConfigKey::YearGapThreshold,
        ConfigKey::YearGapScale,
        ConfigKey::MissingBirthPenalty,
        ConfigKey::UnknownGapPenalty,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DataDir => "data_dir",
            Self::Strategy => "strategy",
            Self::Format => "format",
            Self::ProgressInterval => "search.progress_interval",
            Self::YearGapThreshold => "search.heuristic.year_gap_threshold",
            Self::YearGapScale => "search.heuristic.year_gap_scale",
            Self::MissingBirthPenalty => "search.heuristic.missing_birth_penalty",
            Self::UnknownGapPenalty => "search.heuristic.unknown_gap_penalty",
        }
    }
}

impl std::fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ConfigKey {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Self> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| {
                let known: Vec<&str> = Self::ALL.iter().map(ConfigKey::as_str).collect();
                anyhow::anyhow!("Unknown config key: {} (available: {})", s, known.join(", "))
            })
    }
}

/// Where an effective value comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    /// Differs from the built-in value, so the config file set it
    File,
    Default,
}

impl std::fmt::Display for Origin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::File => "file",
            Self::Default => "default",
        })
    }
}

/// Value a key resolves to once built-in fallbacks are applied
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setting {
    pub value: String,
    pub origin: Origin,
}

/// Configuration for the CLI, stored as TOML
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,

    pub strategy: Strategy,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    pub search: SearchConfig,
}

impl Config {
    /// Parse config text, rejecting heuristic values the search cannot use
    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.search.heuristic.validate()?;
        Ok(config)
    }

    /// Load the config file, or defaults when it does not exist
    pub fn load() -> anyhow::Result<Self> {
        let path = config_file_path();
        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_toml(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Write the config file, creating its directory if needed
    pub fn save(&self) -> anyhow::Result<()> {
        let path = config_file_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, toml::to_string_pretty(self)?)
            .with_context(|| format!("Failed to write config file {}", path.display()))?;
        Ok(())
    }

    /// Value stored for `key`, or the built-in fallback the CLI would use
    pub fn effective(&self, key: &str) -> anyhow::Result<Setting> {
        let key: ConfigKey = key.parse()?;
        let fallback = match key {
            ConfigKey::DataDir => Some(DEFAULT_DATA_DIR.to_string()),
            ConfigKey::Format => Some(DEFAULT_FORMAT.to_string()),
            _ => Self::default().value(key),
        };

        let setting = match self.value(key) {
            Some(value) if Some(&value) != fallback.as_ref() => Setting {
                value,
                origin: Origin::File,
            },
            _ => Setting {
                value: fallback.unwrap_or_default(),
                origin: Origin::Default,
            },
        };
        Ok(setting)
    }

    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        let key: ConfigKey = key.parse()?;
        let mut next = self.clone();
        let heuristic = &mut next.search.heuristic;

        match key {
            ConfigKey::DataDir => next.data_dir = Some(PathBuf::from(value)),
            ConfigKey::Strategy => next.strategy = value.parse()?,
            ConfigKey::Format => match value {
                "table" | "json" | "csv" => next.format = Some(value.to_string()),
                other => anyhow::bail!("Unknown format: {} (expected table, json, csv)", other),
            },
            ConfigKey::ProgressInterval => next.search.progress_interval = parse(key, value)?,
            ConfigKey::YearGapThreshold => heuristic.year_gap_threshold = parse(key, value)?,
            ConfigKey::YearGapScale => heuristic.year_gap_scale = parse(key, value)?,
            ConfigKey::MissingBirthPenalty => heuristic.missing_birth_penalty = parse(key, value)?,
            ConfigKey::UnknownGapPenalty => heuristic.unknown_gap_penalty = parse(key, value)?,
        }

        next.search.heuristic.validate()?;
        *self = next;
        Ok(())
    }

    fn value(&self, key: ConfigKey) -> Option<String> {
        let heuristic = &self.search.heuristic;
        let value = match key {
            ConfigKey::DataDir => self.data_dir.as_ref()?.display().to_string(),
            ConfigKey::Strategy => self.strategy.to_string(),
            ConfigKey::Format => self.format.clone()?,
            ConfigKey::ProgressInterval => self.search.progress_interval.to_string(),
            ConfigKey::YearGapThreshold => heuristic.year_gap_threshold.to_string(),
            ConfigKey::YearGapScale => heuristic.year_gap_scale.to_string(),
            ConfigKey::MissingBirthPenalty => heuristic.missing_birth_penalty.to_string(),
            ConfigKey::UnknownGapPenalty => heuristic.unknown_gap_penalty.to_string(),
        };
        Some(value)
    }
}

fn parse<T>(key: ConfigKey, value: &str) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value
        .parse()
        .with_context(|| format!("Invalid value for {}: {:?}", key, value))
}
