//! Configuration system for Rivercross.
//!
//! Load the puzzle definition (horse crossing times, boat capacity and
//! stamina limit) from JSON, TOML or YAML files.
//!
//! # Examples
//!
//! Load configuration from a JSON string, the format the puzzle is usually
//! distributed in:
//!
//! ```
//! use rivercross_config::CrossingConfig;
//!
//! let config = CrossingConfig::from_json_str(r#"{
//!     "horse_time_limit": 0,
//!     "horse_num_limit": 2,
//!     "horse_times": [1, 2, 5, 10]
//! }"#).unwrap();
//!
//! assert_eq!(config.stamina_limit(), None);
//! assert_eq!(config.group_limit(), 2);
//! assert_eq!(config.herd().unwrap().len(), 4);
//! ```
//!
//! The same settings in TOML, with the optional search section:
//!
//! ```
//! use rivercross_config::{CrossingConfig, StaminaMode};
//!
//! let config = CrossingConfig::from_toml_str(r#"
//!     horse_time_limit = 20
//!     horse_num_limit = 3
//!     horse_times = [3, 3, 3]
//!     stamina_mode = "per_crossing"
//!
//!     [search]
//!     parallel = true
//! "#).unwrap();
//!
//! assert_eq!(config.stamina_limit(), Some(20));
//! assert_eq!(config.stamina_mode, StaminaMode::PerCrossing);
//! assert!(config.search.parallel);
//! ```

use std::path::Path;

use rivercross_core::bank::MAX_HORSES;
use rivercross_core::horse::{auto_label, letter_label, number_label};
use rivercross_core::{Herd, RiverCrossingError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unsupported configuration format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<RiverCrossingError> for ConfigError {
    fn from(err: RiverCrossingError) -> Self {
        match err {
            RiverCrossingError::Config(msg) | RiverCrossingError::InvalidState(msg) => {
                ConfigError::Invalid(msg)
            }
        }
    }
}

/// Puzzle configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct CrossingConfig {
    /// Stamina limit per horse; zero or negative disables it.
    #[serde(default)]
    pub horse_time_limit: i64,

    /// Maximum number of horses on one crossing.
    pub horse_num_limit: i64,

    /// Crossing duration of each horse, in horse id order.
    pub horse_times: Vec<i64>,

    /// How the stamina limit is applied.
    #[serde(default)]
    pub stamina_mode: StaminaMode,

    /// How horses are labelled in the output.
    #[serde(default)]
    pub label_style: LabelStyle,

    /// Search engine settings.
    #[serde(default)]
    pub search: SearchConfig,
}

impl CrossingConfig {
    /// Creates a configuration with no stamina limit.
    pub fn new(horse_times: Vec<i64>, horse_num_limit: i64) -> Self {
        Self {
            horse_time_limit: 0,
            horse_num_limit,
            horse_times,
            stamina_mode: StaminaMode::default(),
            label_style: LabelStyle::default(),
            search: SearchConfig::default(),
        }
    }

    /// Loads configuration from a file, choosing the format by extension.
    ///
    /// `.json`, `.toml`, `.yaml` and `.yml` are recognised.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist, has an unknown extension or
    /// cannot be parsed.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("json") => Self::from_json_file(path),
            Some("toml") => Self::from_toml_file(path),
            Some("yaml") | Some("yml") => Self::from_yaml_file(path),
            _ => Err(ConfigError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Loads configuration from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Parses configuration from a JSON string.
    pub fn from_json_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(s)?)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the stamina limit.
    pub fn with_time_limit(mut self, limit: i64) -> Self {
        self.horse_time_limit = limit;
        self
    }

    /// Sets the stamina mode.
    pub fn with_stamina_mode(mut self, mode: StaminaMode) -> Self {
        self.stamina_mode = mode;
        self
    }

    /// Sets the label style.
    pub fn with_label_style(mut self, style: LabelStyle) -> Self {
        self.label_style = style;
        self
    }

    /// Enables or disables the parallel root split.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.search.parallel = parallel;
        self
    }

    /// Checks every setting that has to hold before a search can start.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] describing the first violation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.horse_num_limit < 2 {
            return Err(ConfigError::Invalid(format!(
                "At least 2 horses have to be able to go at the same time. Current limit {}",
                self.horse_num_limit
            )));
        }
        if self.horse_times.is_empty() {
            return Err(ConfigError::Invalid(
                "horse_times must list at least one horse".to_string(),
            ));
        }
        if self.horse_times.len() > MAX_HORSES {
            return Err(ConfigError::Invalid(format!(
                "at most {MAX_HORSES} horses are supported, got {}",
                self.horse_times.len()
            )));
        }
        if let Some((index, time)) = self
            .horse_times
            .iter()
            .enumerate()
            .find(|&(_, &t)| t <= 0)
        {
            return Err(ConfigError::Invalid(format!(
                "horse {index} has a non-positive crossing time {time}"
            )));
        }
        if self.label_style == LabelStyle::Letters && self.horse_times.len() > 26 {
            return Err(ConfigError::Invalid(format!(
                "letter labels support at most 26 horses, got {}",
                self.horse_times.len()
            )));
        }
        Ok(())
    }

    /// Returns the enabled stamina limit, or `None` when unlimited.
    pub fn stamina_limit(&self) -> Option<u64> {
        (self.horse_time_limit > 0).then_some(self.horse_time_limit as u64)
    }

    /// Returns the boat capacity, at least 1.
    pub fn group_limit(&self) -> usize {
        usize::try_from(self.horse_num_limit).unwrap_or(0).max(1)
    }

    /// Returns the horse labels according to the label style.
    pub fn labels(&self) -> Vec<String> {
        let count = self.horse_times.len();
        (0..count)
            .map(|i| match self.label_style {
                LabelStyle::Auto => auto_label(i, count),
                LabelStyle::Letters => letter_label(i),
                LabelStyle::Numbers => number_label(i),
            })
            .collect()
    }

    /// Validates the configuration and builds the herd.
    pub fn herd(&self) -> Result<Herd, ConfigError> {
        self.validate()?;
        let durations = self.horse_times.iter().map(|&t| t as u64).collect();
        Ok(Herd::new(durations, self.labels())?)
    }
}

/// How the stamina limit constrains a horse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StaminaMode {
    /// The limit caps the total time a horse spends crossing.
    #[default]
    Cumulative,

    /// The limit caps the duration of any single crossing a horse takes.
    PerCrossing,
}

/// Label style for horses in the output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelStyle {
    /// Letters for up to 26 horses, numbers beyond.
    #[default]
    Auto,

    /// Letters `A`..`Z`.
    Letters,

    /// Numbers `1`..`N`.
    Numbers,
}

/// Search engine configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SearchConfig {
    /// Split the root moves across a thread pool.
    #[serde(default)]
    pub parallel: bool,
}
