// ABOUTME: Deload evaluator deciding when sustained fatigue calls for a lighter block
// ABOUTME: Pure decision function; applying the deload is the caller's job
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use longevity_core::constants::notes;
use longevity_core::models::DeloadDecision;

/// Fatigue at which poor recovery markers trigger a deload
const DELOAD_FATIGUE_THRESHOLD: u8 = 8;
/// Average RPE considered a poor recovery marker
const DELOAD_RPE_THRESHOLD: f64 = 9.0;
/// Completion rate below which completion is a poor recovery marker
const DELOAD_COMPLETION_THRESHOLD: f64 = 0.8;

/// Decide whether a deload is due
///
/// High fatigue alone is not enough: it must come with either near-maximal
/// effort or missed work. Each branch carries its own fixed reason.
#[must_use]
pub fn evaluate_deload(fatigue_score: u8, average_rpe: f64, completion_rate: f64) -> DeloadDecision {
    let high_fatigue = fatigue_score >= DELOAD_FATIGUE_THRESHOLD;

    let reason = if high_fatigue && average_rpe >= DELOAD_RPE_THRESHOLD {
        Some(notes::DELOAD_HIGH_EFFORT)
    } else if high_fatigue && completion_rate < DELOAD_COMPLETION_THRESHOLD {
        Some(notes::DELOAD_LOW_COMPLETION)
    } else {
        None
    };

    DeloadDecision {
        should_deload: reason.is_some(),
        reason: reason.unwrap_or(notes::DELOAD_NOT_NEEDED).to_owned(),
    }
}
