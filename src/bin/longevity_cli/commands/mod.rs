// ABOUTME: Command modules for longevity-cli
// ABOUTME: Shared command context carrying the loaded catalog and effective configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub mod catalog;
pub mod plan;
pub mod progress;
pub mod swap;

use longevity_planner::catalog::ExerciseCatalog;
use longevity_planner::config::PlannerConfig;

/// Everything a command needs besides its own arguments
pub struct CommandContext {
    /// Validated exercise catalog
    pub catalog: ExerciseCatalog,
    /// Environment configuration with CLI overrides applied
    pub config: PlannerConfig,
}
