// ABOUTME: Applies submitted exercise results to stored progression state
// ABOUTME: Runs the progression updater, evaluates deload, and applies the deload side effect
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use longevity_core::constants::{deload, notes};
use longevity_core::models::{DeloadDecision, ExerciseResult, ProgressionState};
use longevity_engine::{evaluate_deload, summarize_results, update_progression, ResultSummary};
use serde::{Deserialize, Serialize};
use tracing::info;

/// State to persist after a result submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressionOutcome {
    /// Progression state to store, deload side effect included
    pub progression: ProgressionState,
    /// Deload decision made on the updated fatigue
    pub deload: DeloadDecision,
    /// Completion rate and average RPE of the batch, absent for an empty batch
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<ResultSummary>,
}

/// Fold a result batch into stored state
///
/// The deload decision is made on the fatigue after the update. A positive
/// decision bumps the deload counter and takes three points off fatigue,
/// floored at zero. An empty batch changes nothing.
#[must_use]
pub fn apply_session_results(
    previous: &ProgressionState,
    results: &[ExerciseResult],
) -> ProgressionOutcome {
    let Some(summary) = summarize_results(results) else {
        return ProgressionOutcome {
            progression: *previous,
            deload: DeloadDecision {
                should_deload: false,
                reason: notes::DELOAD_NOT_NEEDED.to_owned(),
            },
            summary: None,
        };
    };

    let mut progression = update_progression(previous, results);
    let decision = evaluate_deload(
        progression.fatigue_score,
        summary.average_rpe,
        summary.completion_rate,
    );

    if decision.should_deload {
        progression.deload_count = previous.deload_count.saturating_add(1);
        progression.fatigue_score = progression
            .fatigue_score
            .saturating_sub(deload::FATIGUE_REDUCTION);
        info!(
            deload_count = progression.deload_count,
            fatigue_score = progression.fatigue_score,
            reason = %decision.reason,
            "Deload triggered"
        );
    }

    ProgressionOutcome {
        progression,
        deload: decision,
        summary: Some(summary),
    }
}
