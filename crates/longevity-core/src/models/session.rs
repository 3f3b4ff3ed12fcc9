// ABOUTME: Generated session model with prescribed exercises and advisory notes
// ABOUTME: Immutable output of the engine, persisted verbatim by callers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// One prescribed exercise within a session
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionExercise {
    /// Catalog id of the exercise
    pub exercise_id: String,
    /// Display name copied from the catalog
    pub name: String,
    /// Number of sets (at least 1)
    pub sets: u32,
    /// Reps per set, or seconds/minutes for time-based work
    pub reps: u32,
    /// Intensity on the 5-9 scale
    pub intensity: u8,
}

/// An ordered workout produced by the engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedSession {
    /// Exercises in prescribed order, ids pairwise distinct
    pub exercises: Vec<SessionExercise>,
    /// Engine version tag
    pub engine_version: String,
    /// Advisory notes
    #[serde(default)]
    pub notes: Vec<String>,
}

impl GeneratedSession {
    /// Whether the session already prescribes the given exercise
    #[must_use]
    pub fn contains(&self, exercise_id: &str) -> bool {
        self.exercises
            .iter()
            .any(|exercise| exercise.exercise_id == exercise_id)
    }

    /// Exercise ids in prescribed order
    pub fn exercise_ids(&self) -> impl Iterator<Item = &str> {
        self.exercises
            .iter()
            .map(|exercise| exercise.exercise_id.as_str())
    }
}
