// ABOUTME: Progression updater folding submitted exercise results into athlete state
// ABOUTME: Completion rate and average RPE drive strength, volume, and fatigue deltas
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::prescription::clamp_u8;
use longevity_core::constants::ranges;
use longevity_core::models::{ExerciseResult, ProgressionState};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Completion rate at which strength may increase
const STRENGTH_UP_COMPLETION: f64 = 1.0;
/// Average RPE ceiling for a strength increase
const STRENGTH_UP_MAX_RPE: f64 = 8.0;
/// Completion rate below which strength drops
const STRENGTH_DOWN_COMPLETION: f64 = 0.85;
/// Completion rate at which volume increases
const VOLUME_UP_COMPLETION: f64 = 0.95;
/// Completion rate below which volume drops
const VOLUME_DOWN_COMPLETION: f64 = 0.8;
/// Average RPE at which fatigue jumps by two
const FATIGUE_HIGH_RPE: f64 = 8.5;
/// Average RPE at or below which fatigue recovers by one
const FATIGUE_LOW_RPE: f64 = 7.0;

/// Aggregates over a result batch
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultSummary {
    /// Mean of `completedSets / max(1, plannedSets)`
    pub completion_rate: f64,
    /// Mean RPE
    pub average_rpe: f64,
}

/// Completion rate and average RPE, or `None` for an empty batch
#[must_use]
#[allow(clippy::cast_precision_loss)] // Safe: batch sizes are small
pub fn summarize_results(results: &[ExerciseResult]) -> Option<ResultSummary> {
    if results.is_empty() {
        return None;
    }

    let count = results.len() as f64;
    let completion_total: f64 = results
        .iter()
        .map(|result| f64::from(result.completed_sets) / f64::from(result.planned_sets.max(1)))
        .sum();
    let rpe_total: f64 = results.iter().map(|result| result.rpe).sum();

    Some(ResultSummary {
        completion_rate: completion_total / count,
        average_rpe: rpe_total / count,
    })
}

/// Fold a result batch into the previous progression state
///
/// The deload counter is never touched here. An empty batch returns the
/// previous state unchanged.
#[must_use]
pub fn update_progression(
    previous: &ProgressionState,
    results: &[ExerciseResult],
) -> ProgressionState {
    let Some(summary) = summarize_results(results) else {
        return *previous;
    };

    let strength_delta = if summary.completion_rate >= STRENGTH_UP_COMPLETION
        && summary.average_rpe <= STRENGTH_UP_MAX_RPE
    {
        1
    } else if summary.completion_rate < STRENGTH_DOWN_COMPLETION {
        -1
    } else {
        0
    };

    let volume_delta = if summary.completion_rate >= VOLUME_UP_COMPLETION {
        1
    } else if summary.completion_rate < VOLUME_DOWN_COMPLETION {
        -1
    } else {
        0
    };

    let fatigue_delta = if summary.average_rpe >= FATIGUE_HIGH_RPE {
        2
    } else if summary.average_rpe <= FATIGUE_LOW_RPE {
        -1
    } else {
        1
    };

    debug!(
        completion_rate = summary.completion_rate,
        average_rpe = summary.average_rpe,
        strength_delta,
        volume_delta,
        fatigue_delta,
        "progression updated"
    );

    ProgressionState {
        strength_level: shift(previous.strength_level, strength_delta, ranges::MIN_LEVEL, ranges::MAX_LEVEL),
        volume_level: shift(previous.volume_level, volume_delta, ranges::MIN_LEVEL, ranges::MAX_LEVEL),
        fatigue_score: shift(
            previous.fatigue_score,
            fatigue_delta,
            ranges::MIN_FATIGUE,
            ranges::MAX_FATIGUE,
        ),
        deload_count: previous.deload_count,
    }
}

fn shift(value: u8, delta: i32, min: u8, max: u8) -> u8 {
    clamp_u8(i32::from(value) + delta, min, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(planned_sets: u32, completed_sets: u32, rpe: f64) -> ExerciseResult {
        ExerciseResult {
            exercise_id: "e1".to_owned(),
            planned_sets,
            planned_reps: 8,
            completed_sets,
            completed_reps: 8,
            rpe,
        }
    }

    #[test]
    fn test_summary_guards_zero_planned_sets() {
        let summary = summarize_results(&[result(0, 2, 7.0), result(4, 2, 9.0)]);
        assert_eq!(
            summary,
            Some(ResultSummary {
                completion_rate: 1.25,
                average_rpe: 8.0,
            })
        );
        assert_eq!(summarize_results(&[]), None);
    }

    #[test]
    fn test_out_of_range_state_is_clamped() {
        let previous = ProgressionState {
            strength_level: 10,
            volume_level: 10,
            fatigue_score: 10,
            deload_count: 2,
        };
        let updated = update_progression(&previous, &[result(3, 3, 9.5)]);

        assert_eq!(updated.strength_level, 10);
        assert_eq!(updated.volume_level, 10);
        assert_eq!(updated.fatigue_score, 10);
        assert_eq!(updated.deload_count, 2);
    }
}
