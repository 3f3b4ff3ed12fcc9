// ABOUTME: Display helpers for longevity-cli
// ABOUTME: Renders sessions, plans, and decisions as text, or passes them through as JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use anyhow::Result;
use longevity_planner::config::OutputFormat;
use longevity_planner::models::{DayPlan, DeloadDecision, ExerciseDefinition, GeneratedSession, WeeklyPlan};
use longevity_planner::services::{ProgressionOutcome, SwapCandidate};
use serde::Serialize;

/// Print `value` as pretty JSON or through its text renderer
///
/// # Errors
///
/// Returns an error if JSON serialization fails
pub fn emit<T: Serialize + ?Sized>(
    format: OutputFormat,
    value: &T,
    render_text: fn(&T),
) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputFormat::Text => render_text(value),
    }
    Ok(())
}

fn print_exercises(session: &GeneratedSession, indent: &str) {
    for (index, exercise) in session.exercises.iter().enumerate() {
        println!(
            "{indent}{:>2}. {:<32} {} x {:<3} @ {}",
            index + 1,
            exercise.name,
            exercise.sets,
            exercise.reps,
            exercise.intensity
        );
    }
    for note in &session.notes {
        println!("{indent}    note: {note}");
    }
}

/// Render a single session
pub fn render_session(session: &GeneratedSession) {
    println!("Session ({})", session.engine_version);
    println!("{}", "=".repeat(60));
    print_exercises(session, "");
}

fn day_header(day: &DayPlan) -> String {
    match day {
        DayPlan::Strength { date, emphasis, .. } => {
            format!("{date} ({})  strength: {emphasis}", date.format("%a"))
        }
        DayPlan::Zone2 { date, minutes, .. }
        | DayPlan::Mobility { date, minutes, .. }
        | DayPlan::Recovery { date, minutes, .. } => {
            format!("{date} ({})  {}: {minutes} min", date.format("%a"), day.kind())
        }
    }
}

fn day_notes(day: &DayPlan) -> Option<&str> {
    match day {
        DayPlan::Strength { .. } => None,
        DayPlan::Zone2 { notes, .. }
        | DayPlan::Mobility { notes, .. }
        | DayPlan::Recovery { notes, .. } => notes.as_deref(),
    }
}

/// Render a weekly plan
pub fn render_week(plan: &WeeklyPlan) {
    println!(
        "Weekly plan ({}), {} strength days",
        plan.engine_version,
        plan.strength_day_count()
    );
    println!("{}", "=".repeat(60));
    for day in &plan.days {
        println!();
        println!("{}", day_header(day));
        if let Some(notes) = day_notes(day) {
            println!("    {notes}");
        }
        match day.session() {
            Some(session) => print_exercises(session, "  "),
            None => println!("    (no matching exercises in catalog)"),
        }
    }
}

/// Render a progression outcome
pub fn render_progression(outcome: &ProgressionOutcome) {
    let state = &outcome.progression;
    println!("Progression");
    println!("{}", "=".repeat(40));
    println!("Strength level: {}", state.strength_level);
    println!("Volume level:   {}", state.volume_level);
    println!("Fatigue score:  {}", state.fatigue_score);
    println!("Deload count:   {}", state.deload_count);
    if let Some(summary) = &outcome.summary {
        println!(
            "Completion:     {:.0}%  (avg RPE {:.1})",
            summary.completion_rate * 100.0,
            summary.average_rpe
        );
    }
    println!();
    render_deload(&outcome.deload);
}

/// Render a deload decision
pub fn render_deload(decision: &DeloadDecision) {
    let verdict = if decision.should_deload {
        "Deload recommended"
    } else {
        "No deload"
    };
    println!("{verdict}: {}", decision.reason);
}

/// Render swap candidates
pub fn render_candidates(candidates: &[SwapCandidate]) {
    if candidates.is_empty() {
        println!("No like-for-like candidates");
        return;
    }
    for candidate in candidates {
        println!("{:<28} {}", candidate.id, candidate.name);
    }
}

/// Render catalog entries
pub fn render_catalog(exercises: &[&ExerciseDefinition]) {
    println!("{} exercises", exercises.len());
    println!("{}", "=".repeat(80));
    for exercise in exercises {
        println!(
            "{:<28} {:<32} {:<14} {:<10} d{}",
            exercise.id,
            exercise.name,
            exercise.movement_pattern,
            exercise.equipment,
            exercise.difficulty
        );
    }
}
