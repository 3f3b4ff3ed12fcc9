// ABOUTME: Strength day construction for weekly plans
// ABOUTME: Balanced goals fill slot templates; other goals filter by emphasis then generate a session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::WeekContext;
use crate::ordering::deterministic_order;
use crate::prescription::{
    clamp_u32, clamp_u8, is_mobility_like, is_time_like, sets_for_index,
};
use crate::readiness::{resolve_adaptive_target_count, TargetCount};
use crate::session::build_session;
use crate::templates::{resolve_slots, SlotSelection};
use chrono::NaiveDate;
use longevity_core::constants::{engine, ranges};
use longevity_core::models::{
    DayPlan, ExerciseDefinition, GeneratedSession, MovementPattern, SessionExercise,
    StrengthEmphasis, TemplateEmphasis, TrainingGoal,
};
use std::collections::HashSet;

use MovementPattern::{
    Balance, Calf, Carry, Core, Hinge, Lunge, OverheadPull, OverheadPush, Pull, Push, Squat,
};

const LOWER_DAY_PATTERNS: &[MovementPattern] = &[Squat, Hinge, Lunge, Calf, Balance, Core, Carry];
const PUSH_DAY_PATTERNS: &[MovementPattern] = &[Push, OverheadPush, Core];
const PULL_ONLY_PATTERNS: &[MovementPattern] = &[Pull, OverheadPull];
const PULL_DAY_PATTERNS: &[MovementPattern] = &[Pull, OverheadPull, Core];
const FULL_BODY_LIGHT_PATTERNS: &[MovementPattern] = &[
    Squat,
    Hinge,
    Lunge,
    Push,
    OverheadPush,
    Pull,
    OverheadPull,
    Core,
    Carry,
];

/// Pure-pull candidates needed before core work is left out of a pull day
const MIN_PULL_ONLY_CANDIDATES: usize = 5;
/// Seed offset between days for generated strength sessions
const DAY_SEED_STRIDE: i64 = 17;
/// Reps for timed mobility-like entries on a template day
const TIMED_MOBILITY_REPS: u32 = 30;
/// Reps for counted mobility-like entries on a template day
const COUNTED_MOBILITY_REPS: u32 = 12;
/// Intensity for mobility-like entries on a template day
const MOBILITY_INTENSITY: u8 = 6;

pub(super) fn build_strength_day(
    context: &WeekContext<'_>,
    date: NaiveDate,
    day_index: usize,
    emphasis: StrengthEmphasis,
) -> DayPlan {
    let seed_key = format!("{}:{date}:{emphasis}", context.base_seed);

    let session = match emphasis.template() {
        Some(template) if context.goal.uses_slot_template() => {
            template_session(context, template, &seed_key)
        }
        _ => generated_session(context, emphasis, day_index, &seed_key),
    };

    DayPlan::Strength {
        date,
        emphasis,
        session,
    }
}

fn template_session(
    context: &WeekContext<'_>,
    template: TemplateEmphasis,
    seed_key: &str,
) -> GeneratedSession {
    let target = resolve_adaptive_target_count(
        context.trend_signal.as_ref(),
        context.progression.fatigue_score,
    );
    let selection = resolve_slots(context.pool, template, target, seed_key);
    dose_template_selection(context, selection, target, seed_key)
}

/// Top up a slot selection from the whole pool and prescribe it directly
fn dose_template_selection<'a>(
    context: &WeekContext<'a>,
    selection: SlotSelection<'a>,
    target: TargetCount,
    seed_key: &str,
) -> GeneratedSession {
    let target_count = target.get();
    let SlotSelection {
        mut selected,
        notes,
    } = selection;
    let mut selected_ids: HashSet<String> =
        selected.iter().map(|exercise| exercise.id.clone()).collect();

    if selected.len() < target_count {
        let direct_fill =
            deterministic_order(context.pool, &format!("{seed_key}:balanced-direct-fill"));
        for exercise in direct_fill {
            if selected.len() >= target_count {
                break;
            }
            if selected_ids.insert(exercise.id.clone()) {
                selected.push(exercise);
            }
        }
    }

    let progression = context.progression;
    let strength_intensity = clamp_u8(
        7 + i32::from(progression.strength_level) / 3
            - i32::from(progression.fatigue_score >= 7),
        ranges::MIN_STRENGTH_INTENSITY,
        ranges::MAX_INTENSITY,
    );
    let base_sets = clamp_u32(
        3 + (i32::from(progression.volume_level) + i32::from(progression.strength_level)) / 6,
        ranges::MIN_STRENGTH_SETS,
        ranges::MAX_STRENGTH_SETS,
    );
    let strength_reps = if context.goal == TrainingGoal::Strength {
        6
    } else {
        8
    };

    let exercises = selected
        .iter()
        .take(target_count)
        .enumerate()
        .map(|(index, exercise)| {
            let (reps, intensity) = if is_mobility_like(exercise) {
                let reps = if is_time_like(exercise) {
                    TIMED_MOBILITY_REPS
                } else {
                    COUNTED_MOBILITY_REPS
                };
                (reps, MOBILITY_INTENSITY)
            } else {
                (strength_reps, strength_intensity)
            };
            SessionExercise {
                exercise_id: exercise.id.clone(),
                name: exercise.name.clone(),
                sets: sets_for_index(base_sets, index),
                reps,
                intensity,
            }
        })
        .collect();

    GeneratedSession {
        exercises,
        engine_version: engine::SESSION_ENGINE_VERSION.to_owned(),
        notes,
    }
}

#[allow(clippy::cast_possible_wrap)] // Safe: day index is below seven
fn generated_session(
    context: &WeekContext<'_>,
    emphasis: StrengthEmphasis,
    day_index: usize,
    seed_key: &str,
) -> GeneratedSession {
    let pool = emphasis_pool(context.pool, emphasis, seed_key);
    let seed = context
        .base_seed
        .saturating_add(day_index as i64 * DAY_SEED_STRIDE);
    let mut session = build_session(
        &pool,
        context.goal,
        context.trend_signal.as_ref(),
        context.progression,
        seed,
    );

    if emphasis == StrengthEmphasis::FullBodyLight {
        for exercise in &mut session.exercises {
            exercise.intensity = exercise
                .intensity
                .saturating_sub(1)
                .max(ranges::MIN_STRENGTH_INTENSITY);
        }
    }

    session
}

/// Pool restricted to the emphasis's movement patterns, seeded per day
///
/// Falls back to the whole pool when nothing matches.
fn emphasis_pool<'a>(
    pool: &'a [ExerciseDefinition],
    emphasis: StrengthEmphasis,
    seed_key: &str,
) -> Vec<&'a ExerciseDefinition> {
    let patterns = match emphasis {
        StrengthEmphasis::Lower => LOWER_DAY_PATTERNS,
        StrengthEmphasis::Push => PUSH_DAY_PATTERNS,
        StrengthEmphasis::Pull => {
            let pull_only = pool
                .iter()
                .filter(|exercise| PULL_ONLY_PATTERNS.contains(&exercise.movement_pattern))
                .count();
            if pull_only < MIN_PULL_ONLY_CANDIDATES {
                PULL_DAY_PATTERNS
            } else {
                PULL_ONLY_PATTERNS
            }
        }
        StrengthEmphasis::FullBodyLight => FULL_BODY_LIGHT_PATTERNS,
    };

    let filtered: Vec<&ExerciseDefinition> = pool
        .iter()
        .filter(|exercise| patterns.contains(&exercise.movement_pattern))
        .collect();

    if filtered.is_empty() {
        deterministic_order(pool, &format!("{seed_key}:global"))
    } else {
        deterministic_order(filtered, &format!("{seed_key}:filtered"))
    }
}
