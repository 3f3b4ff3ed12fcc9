// ABOUTME: Environment configuration for planner defaults and CLI output
// ABOUTME: Parses catalog path, default goal, strength days, and output format with validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::error::ConfigError;
use crate::constants::env_config;
use clap::ValueEnum;
use longevity_core::models::{StrengthDays, TrainingGoal};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::debug;

/// How the CLI renders its results
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// Human-readable text
    #[default]
    Text,
}

impl OutputFormat {
    /// Wire name of the format
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "text" => Ok(Self::Text),
            _ => Err(ConfigError::Parse {
                key: env_config::OUTPUT,
                value: s.to_owned(),
                expected: "json or text",
            }),
        }
    }
}

/// Planner defaults
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PlannerConfig {
    /// Exercise catalog file; `None` selects the built-in catalog
    pub catalog_path: Option<PathBuf>,
    /// Goal used when a request does not name one
    pub default_goal: TrainingGoal,
    /// Weekly strength days used when a request does not name a count
    pub strength_days: StrengthDays,
    /// CLI output format
    pub output: OutputFormat,
}

impl PlannerConfig {
    /// Load configuration from environment variables
    ///
    /// Unset or blank variables fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if any variable is set to an invalid value
    pub fn from_env() -> Result<Self, ConfigError> {
        let catalog_path = read_var(env_config::CATALOG_PATH)?.map(PathBuf::from);

        let default_goal = read_var(env_config::DEFAULT_GOAL)?
            .map(|value| {
                value.parse::<TrainingGoal>().map_err(|_| ConfigError::Parse {
                    key: env_config::DEFAULT_GOAL,
                    value,
                    expected: "strength, hypertrophy, mobility, or balanced",
                })
            })
            .transpose()?
            .unwrap_or_default();

        let strength_days = read_var(env_config::STRENGTH_DAYS)?
            .map(|value| parse_strength_days(&value))
            .transpose()?
            .unwrap_or_default();

        let output = read_var(env_config::OUTPUT)?
            .map(|value| value.parse::<OutputFormat>())
            .transpose()?
            .unwrap_or_default();

        let config = Self {
            catalog_path,
            default_goal,
            strength_days,
            output,
        };
        debug!("Planner configuration loaded: {}", config.summary());
        Ok(config)
    }

    /// One-line description for logs
    #[must_use]
    pub fn summary(&self) -> String {
        let catalog = self
            .catalog_path
            .as_ref()
            .map_or_else(|| "built-in".to_owned(), |path| path.display().to_string());
        format!(
            "catalog={catalog} goal={} strength_days={} output={}",
            self.default_goal,
            self.strength_days.get(),
            self.output
        )
    }
}

fn parse_strength_days(value: &str) -> Result<StrengthDays, ConfigError> {
    let days = value.trim().parse::<u8>().map_err(|_| ConfigError::Parse {
        key: env_config::STRENGTH_DAYS,
        value: value.to_owned(),
        expected: "an integer from 2 to 5",
    })?;
    StrengthDays::try_from(days).map_err(|_| ConfigError::ValueOutOfRange {
        key: env_config::STRENGTH_DAYS,
        value: value.to_owned(),
        range: "2..=5",
    })
}

fn read_var(key: &'static str) -> Result<Option<String>, ConfigError> {
    match env::var(key) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value.trim().to_owned())),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(source) => Err(ConfigError::EnvVar { key, source }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_parsing() {
        assert!(matches!("JSON".parse::<OutputFormat>(), Ok(OutputFormat::Json)));
        assert!(matches!(" text ".parse::<OutputFormat>(), Ok(OutputFormat::Text)));
        assert!("yaml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_strength_days_parsing() {
        assert_eq!(parse_strength_days("4").map(StrengthDays::get).ok(), Some(4));
        assert!(matches!(
            parse_strength_days("6"),
            Err(ConfigError::ValueOutOfRange { .. })
        ));
        assert!(matches!(
            parse_strength_days("three"),
            Err(ConfigError::Parse { .. })
        ));
    }
}
