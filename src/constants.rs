// ABOUTME: Application constants for environment variable names and service identification
// ABOUTME: Re-exports engine-level constants from longevity-core alongside caller-layer names
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use longevity_core::constants::{defaults, deload, engine, notes, ranges};

/// Environment variable names read by `PlannerConfig::from_env`
pub mod env_config {
    /// Path to a JSON or YAML exercise catalog
    pub const CATALOG_PATH: &str = "LONGEVITY_CATALOG_PATH";
    /// Default training goal
    pub const DEFAULT_GOAL: &str = "LONGEVITY_DEFAULT_GOAL";
    /// Default weekly strength-day count
    pub const STRENGTH_DAYS: &str = "LONGEVITY_STRENGTH_DAYS";
    /// Output format for the CLI
    pub const OUTPUT: &str = "LONGEVITY_OUTPUT";
}

/// Service identification for structured logs
pub mod service_names {
    /// Service name used in log output
    pub const LONGEVITY_PLANNER: &str = "longevity-planner";
}
