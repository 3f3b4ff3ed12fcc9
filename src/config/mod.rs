// ABOUTME: Configuration module for planner defaults read from the environment
// ABOUTME: Exposes PlannerConfig and its validation error type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration for the Longevity planner
//!
//! Settings come from environment variables only; there is no config file.
//! Command-line flags override whatever the environment provides.

/// Environment-backed planner configuration
pub mod environment;
/// Configuration error types
pub mod error;

pub use environment::{OutputFormat, PlannerConfig};
pub use error::ConfigError;
