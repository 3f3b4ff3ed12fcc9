// ABOUTME: Validation of persisted session snapshots
// ABOUTME: Accepts only well-formed sessions tagged with a known engine version
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use longevity_core::constants::engine;
use longevity_core::errors::PlanningError;
use longevity_core::models::{GeneratedSession, SessionExercise};
use serde::Deserialize;
use std::collections::HashSet;

/// Stored shape; unlike `GeneratedSession`, notes are mandatory
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoredSession {
    exercises: Vec<SessionExercise>,
    engine_version: String,
    notes: Vec<String>,
}

/// Parse and validate a stored session snapshot
///
/// # Errors
///
/// Returns `PlanningError::InvalidSnapshot` if the JSON does not match the
/// session shape, the engine version is unknown, or an exercise id repeats
pub fn parse_session_snapshot(json: &str) -> Result<GeneratedSession, PlanningError> {
    let stored: StoredSession = serde_json::from_str(json)
        .map_err(|error| PlanningError::invalid_snapshot(error.to_string()))?;

    if !engine::KNOWN_SESSION_VERSIONS.contains(&stored.engine_version.as_str()) {
        return Err(PlanningError::invalid_snapshot(format!(
            "unknown engine version '{}'",
            stored.engine_version
        )));
    }

    let mut seen = HashSet::with_capacity(stored.exercises.len());
    if let Some(repeat) = stored
        .exercises
        .iter()
        .find(|exercise| !seen.insert(exercise.exercise_id.as_str()))
    {
        return Err(PlanningError::invalid_snapshot(format!(
            "exercise '{}' appears more than once",
            repeat.exercise_id
        )));
    }

    Ok(GeneratedSession {
        exercises: stored.exercises,
        engine_version: stored.engine_version,
        notes: stored.notes,
    })
}
