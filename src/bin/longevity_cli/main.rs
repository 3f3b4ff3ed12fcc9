// ABOUTME: Longevity CLI - command-line front end for the training planner
// ABOUTME: Generates sessions and weekly plans, applies results, evaluates deloads, and swaps exercises
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Today's session for the default goal
//! longevity-cli session
//!
//! # Weekly plan for the week containing a date, four strength days, JSON output
//! longevity-cli --output json week --date 2026-02-18 --strength-days 4
//!
//! # Apply submitted results to a stored progression state
//! longevity-cli progress --progression state.json --results results.json
//!
//! # Evaluate a deload directly
//! longevity-cli deload --fatigue 9 --rpe 8.8 --completion 0.7
//!
//! # List swap candidates, then apply one to a stored session
//! longevity-cli swap candidates --exercise squat-goblet
//! longevity-cli swap apply --session session.json --from squat-goblet --to squat-back
//!
//! # Validate a custom catalog
//! longevity-cli --catalog exercises.yaml catalog validate
//! ```

mod commands;
mod helpers;

use anyhow::Result;
use clap::{Parser, Subcommand};
use longevity_planner::catalog::ExerciseCatalog;
use longevity_planner::config::{OutputFormat, PlannerConfig};
use longevity_planner::logging::LoggingConfig;
use std::path::PathBuf;
use tracing::debug;

use commands::CommandContext;

#[derive(Parser)]
#[command(
    name = "longevity-cli",
    about = "Longevity training planner",
    long_about = "Deterministic strength, cardio, and recovery programming from an exercise catalog, progression state, and readiness."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Exercise catalog (JSON or YAML); overrides LONGEVITY_CATALOG_PATH
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Output format; overrides LONGEVITY_OUTPUT
    #[arg(long, value_enum, global = true)]
    output: Option<OutputFormat>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a single session
    Session(commands::plan::SessionArgs),

    /// Generate a seven-day plan
    Week(commands::plan::WeekArgs),

    /// Apply submitted results to a progression state
    Progress(commands::progress::ProgressArgs),

    /// Evaluate whether a deload is due
    Deload(commands::progress::DeloadArgs),

    /// Exercise swap commands
    Swap {
        #[command(subcommand)]
        action: commands::swap::SwapCommand,
    },

    /// Exercise catalog commands
    Catalog {
        #[command(subcommand)]
        action: commands::catalog::CatalogCommand,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        "debug".clone_into(&mut logging.level);
    }
    logging.init()?;

    let mut config = PlannerConfig::from_env()?;
    if let Some(path) = cli.catalog {
        config.catalog_path = Some(path);
    }
    if let Some(output) = cli.output {
        config.output = output;
    }
    debug!("Effective configuration: {}", config.summary());

    let catalog = ExerciseCatalog::load_or_built_in(config.catalog_path.as_deref())?;
    let context = CommandContext { catalog, config };

    match cli.command {
        Command::Session(args) => commands::plan::session(&context, &args),
        Command::Week(args) => commands::plan::week(&context, &args),
        Command::Progress(args) => commands::progress::progress(&context, &args),
        Command::Deload(args) => commands::progress::deload(&context, &args),
        Command::Swap { action } => commands::swap::run(&context, &action),
        Command::Catalog { action } => commands::catalog::run(&context, &action),
    }
}
