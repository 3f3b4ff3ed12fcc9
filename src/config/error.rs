// ABOUTME: Configuration error types for environment validation
// ABOUTME: Defines error variants for unreadable variables, unparseable values, and out-of-range settings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use longevity_core::errors::AppError;
use std::env;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Environment variable is set but not valid unicode
    #[error("Environment variable {key}: {source}")]
    EnvVar {
        /// Variable name
        key: &'static str,
        /// Underlying access error
        #[source]
        source: env::VarError,
    },

    /// Value could not be parsed
    #[error("Invalid value '{value}' for {key}: expected {expected}")]
    Parse {
        /// Variable name
        key: &'static str,
        /// Raw value
        value: String,
        /// Accepted values
        expected: &'static str,
    },

    /// Numeric value outside the accepted range
    #[error("Value {value} for {key} out of range: {range}")]
    ValueOutOfRange {
        /// Variable name
        key: &'static str,
        /// Rejected value
        value: String,
        /// Accepted range
        range: &'static str,
    },
}

impl From<ConfigError> for AppError {
    fn from(error: ConfigError) -> Self {
        Self::config(error.to_string())
    }
}
