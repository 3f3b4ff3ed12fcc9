// ABOUTME: Session and weekly plan generation commands
// ABOUTME: Builds engine requests from flags, JSON input files, and configuration defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::CommandContext;
use crate::helpers::{display, input};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use clap::Args;
use longevity_planner::engine::{
    generate_session, generate_weekly_plan, parse_iso_date, SessionRequest, WeeklyPlanRequest,
};
use longevity_planner::models::{ProgressionState, ReadinessSignal, StrengthDays, TrainingGoal};
use longevity_planner::services::{readiness_trend, week_range, ReadinessEntry};
use std::path::{Path, PathBuf};
use tracing::info;

/// Arguments for `session`
#[derive(Args)]
pub struct SessionArgs {
    /// Session date (YYYY-MM-DD); defaults to today
    #[arg(long)]
    date: Option<String>,

    /// Training goal; defaults to LONGEVITY_DEFAULT_GOAL
    #[arg(long)]
    goal: Option<TrainingGoal>,

    /// JSON file with today's readiness signal
    #[arg(long)]
    readiness: Option<PathBuf>,

    /// JSON file with the current progression state
    #[arg(long)]
    progression: Option<PathBuf>,

    /// Seed override
    #[arg(long, allow_negative_numbers = true)]
    seed: Option<i64>,
}

/// Arguments for `week`
#[derive(Args)]
pub struct WeekArgs {
    /// Any date in the target week (YYYY-MM-DD); defaults to today
    #[arg(long)]
    date: Option<String>,

    /// Strength days (2-5); defaults to LONGEVITY_STRENGTH_DAYS
    #[arg(long)]
    strength_days: Option<u8>,

    /// Training goal; defaults to LONGEVITY_DEFAULT_GOAL
    #[arg(long)]
    goal: Option<TrainingGoal>,

    /// JSON file with the current progression state
    #[arg(long)]
    progression: Option<PathBuf>,

    /// JSON file with a list of daily readiness entries
    #[arg(long)]
    readiness_log: Option<PathBuf>,

    /// Seed override
    #[arg(long, allow_negative_numbers = true)]
    seed: Option<i64>,
}

fn resolve_date(date: Option<&str>) -> Result<NaiveDate> {
    Ok(match date {
        Some(value) => parse_iso_date(value)?,
        None => Local::now().date_naive(),
    })
}

fn load_progression(path: Option<&Path>) -> Result<ProgressionState> {
    Ok(path
        .map(|path| input::read_json::<ProgressionState>(path))
        .transpose()?
        .unwrap_or_default())
}

/// Generate and print one session
///
/// # Errors
///
/// Returns an error if the date or an input file is invalid
pub fn session(context: &CommandContext, args: &SessionArgs) -> Result<()> {
    let date = resolve_date(args.date.as_deref())?;
    let readiness = args
        .readiness
        .as_ref()
        .map(|path| input::read_json::<ReadinessSignal>(path))
        .transpose()?;

    let request = SessionRequest {
        date,
        goal: args.goal.unwrap_or(context.config.default_goal),
        readiness,
        progression: load_progression(args.progression.as_deref())?,
        exercise_pool: context.catalog.exercises().to_vec(),
        seed: args.seed,
    };

    let generated = generate_session(&request);
    info!(%date, exercises = generated.exercises.len(), "Generated session");
    display::emit(context.config.output, &generated, display::render_session)
}

/// Generate and print a weekly plan for the Monday-anchored week containing the date
///
/// # Errors
///
/// Returns an error if the date, strength-day count, or an input file is
/// invalid, or if a recovery day cannot be built from the catalog
pub fn week(context: &CommandContext, args: &WeekArgs) -> Result<()> {
    let date = resolve_date(args.date.as_deref())?;
    let range = week_range(date);
    let strength_days = args
        .strength_days
        .map(StrengthDays::try_from)
        .transpose()?
        .unwrap_or(context.config.strength_days);

    let readiness_trend = args
        .readiness_log
        .as_ref()
        .map(|path| input::read_json::<Vec<ReadinessEntry>>(path))
        .transpose()?
        .and_then(|entries| readiness_trend(&entries, date));

    let request = WeeklyPlanRequest {
        week_start: range.start,
        strength_days,
        goal: args.goal.unwrap_or(context.config.default_goal),
        progression: load_progression(args.progression.as_deref())?,
        readiness_trend,
        exercise_pool: context.catalog.exercises().to_vec(),
        seed: args.seed,
    };

    let plan = generate_weekly_plan(&request)?;
    info!(
        week_start = %range.start,
        strength_days = plan.strength_day_count(),
        "Generated weekly plan"
    );
    display::emit(context.config.output, &plan, display::render_week)
}
