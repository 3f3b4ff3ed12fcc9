// ABOUTME: Single-session generator for non-template goals and light full-body days
// ABOUTME: Greedy movement-category fill over a seeded order with readiness-aware dosing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Single-Session Generator
//!
//! Orders the pool by the session seed, then fills up to five exercises by
//! movement category: a lower-body pattern, a push, a pull (each preferring
//! compound lifts), a core or carry, and a mobility drill. Spots left over
//! go to the candidate that adds a movement pattern not yet in the session.

use crate::calendar::date_seed;
use crate::ordering::deterministic_order;
use crate::prescription::{clamp_u32, sets_for_index, strength_intensity};
use crate::readiness::score_readiness;
use chrono::NaiveDate;
use longevity_core::constants::{engine, notes, ranges};
use longevity_core::models::{
    ExerciseCategory, ExerciseDefinition, GeneratedSession, MovementPattern, ProgressionState,
    ReadinessSignal, SessionExercise, TrainingGoal,
};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

/// Default session size
const STANDARD_SESSION_SIZE: usize = 5;
/// Size for a balanced goal handed exactly six exercises
const EXTENDED_SESSION_SIZE: usize = 6;
/// Reps prescribed for mobility-category exercises regardless of goal
const MOBILITY_CATEGORY_REPS: u32 = 12;

/// Inputs for one generated workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRequest {
    /// Calendar date of the session
    pub date: NaiveDate,
    /// Athlete training goal
    #[serde(default)]
    pub goal: TrainingGoal,
    /// Readiness self-report for the day
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub readiness: Option<ReadinessSignal>,
    /// Current progression state
    #[serde(default)]
    pub progression: ProgressionState,
    /// Exercises available for selection
    pub exercise_pool: Vec<ExerciseDefinition>,
    /// Seed override; defaults to the date digits
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
}

/// Generate one workout
///
/// Pure function of the request: identical requests produce equal sessions.
#[must_use]
pub fn generate_session(request: &SessionRequest) -> GeneratedSession {
    let pool: Vec<&ExerciseDefinition> = request.exercise_pool.iter().collect();
    let seed = request.seed.unwrap_or_else(|| date_seed(request.date));
    build_session(
        &pool,
        request.goal,
        request.readiness.as_ref(),
        &request.progression,
        seed,
    )
}

/// Session construction shared with weekly strength days
pub(crate) fn build_session(
    pool: &[&ExerciseDefinition],
    goal: TrainingGoal,
    readiness: Option<&ReadinessSignal>,
    progression: &ProgressionState,
    seed: i64,
) -> GeneratedSession {
    let readiness_score = score_readiness(readiness);
    let ordered = deterministic_order(pool.iter().copied(), &format!("session:{seed}"));

    let max_exercises = if goal == TrainingGoal::Balanced && pool.len() == EXTENDED_SESSION_SIZE {
        EXTENDED_SESSION_SIZE
    } else {
        STANDARD_SESSION_SIZE
    };
    let selected = select_by_category(&ordered, max_exercises);

    let progression_bias =
        i32::from(progression.volume_level) + i32::from(progression.strength_level);
    let base_sets = clamp_u32(
        3 + progression_bias / 4 + i32::from(readiness_score >= 2),
        ranges::MIN_STRENGTH_SETS,
        ranges::MAX_STRENGTH_SETS,
    );
    let base_reps = base_reps_for(goal);
    let intensity = strength_intensity(progression, readiness_score < 0);

    let exercises = selected
        .iter()
        .enumerate()
        .map(|(index, exercise)| SessionExercise {
            exercise_id: exercise.id.clone(),
            name: exercise.name.clone(),
            sets: sets_for_index(base_sets, index),
            reps: if exercise.category == ExerciseCategory::Mobility {
                MOBILITY_CATEGORY_REPS
            } else {
                base_reps
            },
            intensity,
        })
        .collect();

    let mut session_notes = Vec::new();
    if readiness_score < 0 {
        session_notes.push(notes::REDUCED_INTENSITY.to_owned());
    }
    if progression.fatigue_score > 6 {
        session_notes.push(notes::MONITOR_FATIGUE.to_owned());
    }

    debug!(
        seed,
        readiness_score,
        selected = selected.len(),
        "generated single session"
    );

    GeneratedSession {
        exercises,
        engine_version: engine::SESSION_ENGINE_VERSION.to_owned(),
        notes: session_notes,
    }
}

const fn base_reps_for(goal: TrainingGoal) -> u32 {
    match goal {
        TrainingGoal::Strength => 6,
        TrainingGoal::Mobility => 10,
        TrainingGoal::Hypertrophy | TrainingGoal::Balanced => 8,
    }
}

const fn is_lower(pattern: MovementPattern) -> bool {
    matches!(
        pattern,
        MovementPattern::Squat | MovementPattern::Hinge | MovementPattern::Lunge
    )
}

const fn is_push(pattern: MovementPattern) -> bool {
    matches!(pattern, MovementPattern::Push | MovementPattern::OverheadPush)
}

const fn is_pull(pattern: MovementPattern) -> bool {
    matches!(pattern, MovementPattern::Pull | MovementPattern::OverheadPull)
}

const fn is_core_or_carry(pattern: MovementPattern) -> bool {
    matches!(pattern, MovementPattern::Core | MovementPattern::Carry)
}

/// Greedy category fill followed by a pattern-variety fill
struct CategoryFill<'a> {
    ordered: &'a [&'a ExerciseDefinition],
    selected: Vec<&'a ExerciseDefinition>,
    selected_ids: HashSet<&'a str>,
    max_exercises: usize,
}

impl<'a> CategoryFill<'a> {
    fn new(ordered: &'a [&'a ExerciseDefinition], max_exercises: usize) -> Self {
        Self {
            ordered,
            selected: Vec::with_capacity(max_exercises),
            selected_ids: HashSet::with_capacity(max_exercises),
            max_exercises,
        }
    }

    fn first_unused(
        &self,
        matches: impl Fn(&ExerciseDefinition) -> bool,
    ) -> Option<&'a ExerciseDefinition> {
        self.ordered
            .iter()
            .copied()
            .find(|exercise| !self.selected_ids.contains(exercise.id.as_str()) && matches(*exercise))
    }

    fn compound_then_any(&self, pattern: fn(MovementPattern) -> bool) -> Option<&'a ExerciseDefinition> {
        self.first_unused(|exercise| {
            exercise.category == ExerciseCategory::Compound && pattern(exercise.movement_pattern)
        })
        .or_else(|| self.first_unused(|exercise| pattern(exercise.movement_pattern)))
    }

    fn add(&mut self, exercise: Option<&'a ExerciseDefinition>) {
        let Some(exercise) = exercise else {
            return;
        };
        if self.selected.len() >= self.max_exercises
            || !self.selected_ids.insert(exercise.id.as_str())
        {
            return;
        }
        self.selected.push(exercise);
    }

    fn fill_for_variety(&mut self) {
        while self.selected.len() < self.max_exercises {
            let patterns: HashSet<MovementPattern> = self
                .selected
                .iter()
                .map(|exercise| exercise.movement_pattern)
                .collect();
            let next = self
                .first_unused(|exercise| !patterns.contains(&exercise.movement_pattern))
                .or_else(|| self.first_unused(|_| true));
            match next {
                Some(exercise) => self.add(Some(exercise)),
                None => break,
            }
        }
    }
}

fn select_by_category<'a>(
    ordered: &'a [&'a ExerciseDefinition],
    max_exercises: usize,
) -> Vec<&'a ExerciseDefinition> {
    let mut fill = CategoryFill::new(ordered, max_exercises);

    let lower = fill.compound_then_any(is_lower);
    fill.add(lower);
    let push = fill.compound_then_any(is_push);
    fill.add(push);
    let pull = fill.compound_then_any(is_pull);
    fill.add(pull);
    let core = fill.first_unused(|exercise| is_core_or_carry(exercise.movement_pattern));
    fill.add(core);
    let mobility = fill.first_unused(ExerciseDefinition::is_mobility_drill);
    fill.add(mobility);

    fill.fill_for_variety();
    fill.selected
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise(id: &str, category: ExerciseCategory, pattern: MovementPattern) -> ExerciseDefinition {
        ExerciseDefinition {
            id: id.to_owned(),
            name: id.replace('-', " "),
            category,
            movement_pattern: pattern,
            muscle_group: "full_body".to_owned(),
            equipment: "bodyweight".to_owned(),
            difficulty: 1,
        }
    }

    #[test]
    fn test_variety_fill_prefers_new_patterns() {
        let pool = [
            exercise("squat-a", ExerciseCategory::Compound, MovementPattern::Squat),
            exercise("squat-b", ExerciseCategory::Compound, MovementPattern::Squat),
            exercise("calf-raise", ExerciseCategory::Accessory, MovementPattern::Calf),
        ];
        let ordered: Vec<&ExerciseDefinition> = pool.iter().collect();
        let selected = select_by_category(&ordered, 2);

        assert_eq!(selected.len(), 2);
        assert_eq!(selected[1].id, "calf-raise");
    }

    #[test]
    fn test_compound_preferred_over_accessory() {
        let pool = [
            exercise("lunge-split", ExerciseCategory::Accessory, MovementPattern::Lunge),
            exercise("hinge-deadlift", ExerciseCategory::Compound, MovementPattern::Hinge),
        ];
        let ordered: Vec<&ExerciseDefinition> = pool.iter().collect();
        let selected = select_by_category(&ordered, 5);

        assert_eq!(selected[0].id, "hinge-deadlift");
        assert_eq!(selected.len(), 2);
    }

    #[test]
    fn test_base_reps_by_goal() {
        assert_eq!(base_reps_for(TrainingGoal::Strength), 6);
        assert_eq!(base_reps_for(TrainingGoal::Mobility), 10);
        assert_eq!(base_reps_for(TrainingGoal::Hypertrophy), 8);
        assert_eq!(base_reps_for(TrainingGoal::Balanced), 8);
    }
}
