// ABOUTME: Progression state, submitted exercise results, and deload decisions
// ABOUTME: Range-checked athlete state evolved by the progression updater
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::{defaults, ranges};
use serde::{Deserialize, Serialize};

/// Per-athlete progression state
///
/// Levels stay within 1-10, fatigue within 0-10, and `deload_count` never
/// decreases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressionState {
    /// Strength level (1-10)
    pub strength_level: u8,
    /// Volume level (1-10)
    pub volume_level: u8,
    /// Accumulated fatigue (0-10)
    pub fatigue_score: u8,
    /// Number of deloads taken so far
    pub deload_count: u32,
}

impl Default for ProgressionState {
    fn default() -> Self {
        Self {
            strength_level: defaults::STRENGTH_LEVEL,
            volume_level: defaults::VOLUME_LEVEL,
            fatigue_score: defaults::FATIGUE_SCORE,
            deload_count: 0,
        }
    }
}

impl ProgressionState {
    /// Build a state, clamping every field into its domain range
    #[must_use]
    pub fn new(strength_level: u8, volume_level: u8, fatigue_score: u8, deload_count: u32) -> Self {
        Self {
            strength_level: strength_level.clamp(ranges::MIN_LEVEL, ranges::MAX_LEVEL),
            volume_level: volume_level.clamp(ranges::MIN_LEVEL, ranges::MAX_LEVEL),
            fatigue_score: fatigue_score.clamp(ranges::MIN_FATIGUE, ranges::MAX_FATIGUE),
            deload_count,
        }
    }

    /// Whether every field is inside its domain range
    #[must_use]
    pub fn is_within_range(&self) -> bool {
        (ranges::MIN_LEVEL..=ranges::MAX_LEVEL).contains(&self.strength_level)
            && (ranges::MIN_LEVEL..=ranges::MAX_LEVEL).contains(&self.volume_level)
            && (ranges::MIN_FATIGUE..=ranges::MAX_FATIGUE).contains(&self.fatigue_score)
    }
}

/// Result reported by the athlete for one planned exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseResult {
    /// Exercise the result refers to
    pub exercise_id: String,
    /// Sets in the plan
    pub planned_sets: u32,
    /// Reps per set in the plan
    pub planned_reps: u32,
    /// Sets actually completed
    pub completed_sets: u32,
    /// Reps per set actually completed
    pub completed_reps: u32,
    /// Rating of perceived exertion (1-10)
    pub rpe: f64,
}

/// Outcome of the deload evaluator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeloadDecision {
    /// Whether a deload is recommended
    pub should_deload: bool,
    /// Human-readable reason for the decision
    pub reason: String,
}
