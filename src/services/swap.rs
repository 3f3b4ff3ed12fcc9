// ABOUTME: Like-for-like exercise swaps inside a generated session
// ABOUTME: Candidates share movement pattern and muscle group with the exercise they replace
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::catalog::ExerciseCatalog;
use longevity_core::errors::PlanningError;
use longevity_core::models::{ExerciseDefinition, GeneratedSession};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Replacement offered for an exercise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SwapCandidate {
    /// Catalog id
    pub id: String,
    /// Display name
    pub name: String,
}

fn is_like_for_like(source: &ExerciseDefinition, candidate: &ExerciseDefinition) -> bool {
    source.movement_pattern == candidate.movement_pattern
        && source.muscle_group == candidate.muscle_group
}

/// Up to `limit` catalog exercises that could replace `exercise_id`, in catalog order
///
/// # Errors
///
/// Returns `PlanningError::ExerciseNotFound` if the exercise is not in the catalog
pub fn swap_candidates(
    catalog: &ExerciseCatalog,
    exercise_id: &str,
    limit: usize,
) -> Result<Vec<SwapCandidate>, PlanningError> {
    let source = catalog
        .get(exercise_id)
        .ok_or_else(|| PlanningError::exercise_not_found(exercise_id))?;

    Ok(catalog
        .exercises()
        .iter()
        .filter(|candidate| candidate.id != source.id && is_like_for_like(source, candidate))
        .take(limit)
        .map(|candidate| SwapCandidate {
            id: candidate.id.clone(),
            name: candidate.name.clone(),
        })
        .collect())
}

/// Replace `from_id` with `to_id` in a session
///
/// Sets, reps, and intensity carry over; only the id and name change.
///
/// # Errors
///
/// Returns an error if either id is missing from the catalog, the two do not
/// share movement pattern and muscle group, `from_id` is not in the session,
/// or `to_id` already is
pub fn apply_exercise_swap(
    session: &GeneratedSession,
    catalog: &ExerciseCatalog,
    from_id: &str,
    to_id: &str,
) -> Result<GeneratedSession, PlanningError> {
    let from = catalog
        .get(from_id)
        .ok_or_else(|| PlanningError::exercise_not_found(from_id))?;
    let to = catalog
        .get(to_id)
        .ok_or_else(|| PlanningError::exercise_not_found(to_id))?;

    if !is_like_for_like(from, to) {
        return Err(PlanningError::InvalidSwapTarget {
            from: from_id.to_owned(),
            to: to_id.to_owned(),
        });
    }

    let index = session
        .exercises
        .iter()
        .position(|exercise| exercise.exercise_id == from_id)
        .ok_or_else(|| PlanningError::ExerciseNotInSession {
            exercise_id: from_id.to_owned(),
        })?;

    if to_id != from_id && session.contains(to_id) {
        return Err(PlanningError::DuplicateExercise {
            exercise_id: to_id.to_owned(),
        });
    }

    let mut updated = session.clone();
    if let Some(entry) = updated.exercises.get_mut(index) {
        entry.exercise_id.clone_from(&to.id);
        entry.name.clone_from(&to.name);
    }
    debug!(from = from_id, to = to_id, position = index, "Swapped exercise");
    Ok(updated)
}
