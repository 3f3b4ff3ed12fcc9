// ABOUTME: Exercise catalog commands
// ABOUTME: Lists the active catalog and validates catalog files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::CommandContext;
use crate::helpers::display;
use anyhow::Result;
use clap::Subcommand;
use longevity_planner::catalog::ExerciseCatalog;
use longevity_planner::models::{ExerciseDefinition, MovementPattern};
use serde_json::Value;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum CatalogCommand {
    /// List exercises in the active catalog
    List {
        /// Only exercises with this movement pattern (e.g. squat, overhead_pull)
        #[arg(long)]
        pattern: Option<String>,
    },

    /// Validate a catalog file without using it
    Validate {
        /// Catalog file (JSON or YAML)
        path: PathBuf,
    },
}

/// Run a catalog subcommand
///
/// # Errors
///
/// Returns an error if the pattern is unknown or the file fails validation
pub fn run(context: &CommandContext, action: &CatalogCommand) -> Result<()> {
    match action {
        CatalogCommand::List { pattern } => {
            let pattern = pattern
                .as_deref()
                .map(|value| serde_json::from_value::<MovementPattern>(Value::String(value.to_owned())))
                .transpose()?;
            let exercises: Vec<&ExerciseDefinition> = context
                .catalog
                .exercises()
                .iter()
                .filter(|exercise| pattern.is_none_or(|wanted| exercise.movement_pattern == wanted))
                .collect();
            display::emit(
                context.config.output,
                exercises.as_slice(),
                display::render_catalog,
            )
        }
        CatalogCommand::Validate { path } => {
            let catalog = ExerciseCatalog::load(path)?;
            println!("{}: {} exercises, valid", path.display(), catalog.len());
            Ok(())
        }
    }
}
