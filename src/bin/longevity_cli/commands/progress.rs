// ABOUTME: Progression and deload commands
// ABOUTME: Applies submitted results to stored state or evaluates a deload from raw signals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::CommandContext;
use crate::helpers::{display, input};
use anyhow::Result;
use clap::Args;
use longevity_planner::engine::evaluate_deload;
use longevity_planner::models::{ExerciseResult, ProgressionState};
use longevity_planner::services::apply_session_results;
use std::path::PathBuf;

/// Arguments for `progress`
#[derive(Args)]
pub struct ProgressArgs {
    /// JSON file with the stored progression state; defaults to a new athlete
    #[arg(long)]
    progression: Option<PathBuf>,

    /// JSON file with a list of exercise results
    #[arg(long)]
    results: PathBuf,
}

/// Arguments for `deload`
#[derive(Args)]
pub struct DeloadArgs {
    /// Fatigue score (0-10)
    #[arg(long, value_parser = clap::value_parser!(u8).range(0..=10))]
    fatigue: u8,

    /// Average RPE of the last session
    #[arg(long)]
    rpe: f64,

    /// Completion rate of the last session (0.0-1.0)
    #[arg(long)]
    completion: f64,
}

/// Apply a result batch and print the state to persist
///
/// # Errors
///
/// Returns an error if an input file cannot be read or parsed
pub fn progress(context: &CommandContext, args: &ProgressArgs) -> Result<()> {
    let previous = args
        .progression
        .as_ref()
        .map(|path| input::read_json::<ProgressionState>(path))
        .transpose()?
        .unwrap_or_default();
    let results: Vec<ExerciseResult> = input::read_json(&args.results)?;

    let outcome = apply_session_results(&previous, &results);
    display::emit(context.config.output, &outcome, display::render_progression)
}

/// Evaluate and print a deload decision
///
/// # Errors
///
/// Returns an error if JSON output fails to serialize
pub fn deload(context: &CommandContext, args: &DeloadArgs) -> Result<()> {
    let decision = evaluate_deload(args.fatigue, args.rpe, args.completion);
    display::emit(context.config.output, &decision, display::render_deload)
}
