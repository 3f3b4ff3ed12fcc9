// ABOUTME: Integration tests for the progression updater, deload evaluator, and result submission
// ABOUTME: Validates level deltas, clamping, deload reasons, and the deload side effect on stored state
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use longevity_planner::constants::notes;
use longevity_planner::engine::{evaluate_deload, update_progression};
use longevity_planner::models::{ExerciseResult, ProgressionState};
use longevity_planner::services::apply_session_results;

fn result(exercise_id: &str, planned_sets: u32, completed_sets: u32, rpe: f64) -> ExerciseResult {
    ExerciseResult {
        exercise_id: exercise_id.to_owned(),
        planned_sets,
        planned_reps: 8,
        completed_sets,
        completed_reps: 8,
        rpe,
    }
}

#[test]
fn test_full_completion_at_moderate_effort_progresses() {
    let previous = ProgressionState::new(4, 4, 5, 0);
    let next = update_progression(&previous, &[result("squat-goblet", 3, 3, 8.0)]);

    assert_eq!(next.strength_level, 5);
    assert_eq!(next.volume_level, 5);
    assert_eq!(next.fatigue_score, 6);
    assert_eq!(next.deload_count, 0);
}

#[test]
fn test_poor_completion_regresses() {
    let previous = ProgressionState::new(4, 4, 5, 1);
    let next = update_progression(&previous, &[result("e1", 4, 2, 9.0)]);

    assert_eq!(next.strength_level, 3);
    assert_eq!(next.volume_level, 3);
    assert_eq!(next.fatigue_score, 7);
    assert_eq!(next.deload_count, 1);
}

#[test]
fn test_partial_completion_at_easy_effort_holds_levels() {
    let previous = ProgressionState::new(4, 4, 5, 0);
    let results = [result("e1", 5, 4, 7.0), result("e2", 5, 5, 7.0)];
    let next = update_progression(&previous, &results);

    // completion 0.9: strength and volume hold, easy effort sheds fatigue
    assert_eq!(next.strength_level, 4);
    assert_eq!(next.volume_level, 4);
    assert_eq!(next.fatigue_score, 4);
}

#[test]
fn test_levels_clamp_at_floor() {
    let previous = ProgressionState::new(1, 1, 0, 0);
    let next = update_progression(&previous, &[result("e1", 3, 0, 6.0)]);

    assert_eq!(next.strength_level, 1);
    assert_eq!(next.volume_level, 1);
    assert_eq!(next.fatigue_score, 0);
    assert!(next.is_within_range());
}

#[test]
fn test_constructor_clamps_out_of_range_fields() {
    let state = ProgressionState::new(12, 0, 15, 2);

    assert!(state.is_within_range());
    assert_eq!(state.strength_level, 10);
    assert_eq!(state.volume_level, 1);
    assert_eq!(state.fatigue_score, 10);
    assert_eq!(state.deload_count, 2);
}

#[test]
fn test_empty_results_leave_state_unchanged() {
    let previous = ProgressionState::new(6, 2, 3, 4);
    assert_eq!(update_progression(&previous, &[]), previous);
}

#[test]
fn test_deload_decisions() {
    let low_completion = evaluate_deload(9, 8.8, 0.7);
    assert!(low_completion.should_deload);
    assert_eq!(low_completion.reason, notes::DELOAD_LOW_COMPLETION);

    let high_effort = evaluate_deload(8, 9.0, 1.0);
    assert!(high_effort.should_deload);
    assert_eq!(high_effort.reason, notes::DELOAD_HIGH_EFFORT);

    let fresh = evaluate_deload(3, 6.0, 0.95);
    assert!(!fresh.should_deload);
    assert_eq!(fresh.reason, notes::DELOAD_NOT_NEEDED);

    // Below the fatigue threshold nothing else matters
    assert!(!evaluate_deload(7, 10.0, 0.1).should_deload);
}

#[test]
fn test_submission_applies_deload_side_effect() {
    let previous = ProgressionState::new(5, 5, 7, 1);
    let outcome = apply_session_results(&previous, &[result("e1", 4, 2, 9.5)]);

    assert!(outcome.deload.should_deload);
    assert_eq!(outcome.deload.reason, notes::DELOAD_HIGH_EFFORT);
    assert_eq!(outcome.progression.strength_level, 4);
    assert_eq!(outcome.progression.volume_level, 4);
    // 7 + 2 = 9, then the deload takes three off
    assert_eq!(outcome.progression.fatigue_score, 6);
    assert_eq!(outcome.progression.deload_count, 2);

    let summary = outcome.summary.unwrap();
    assert!((summary.completion_rate - 0.5).abs() < f64::EPSILON);
    assert!((summary.average_rpe - 9.5).abs() < f64::EPSILON);
}

#[test]
fn test_submission_without_deload_keeps_counter() {
    let previous = ProgressionState::new(4, 4, 1, 3);
    let outcome = apply_session_results(&previous, &[result("e1", 3, 3, 8.0)]);

    assert!(!outcome.deload.should_deload);
    assert_eq!(outcome.progression.fatigue_score, 2);
    assert_eq!(outcome.progression.deload_count, 3);
}

#[test]
fn test_empty_submission_is_a_no_op() {
    let previous = ProgressionState::new(4, 4, 9, 0);
    let outcome = apply_session_results(&previous, &[]);

    assert_eq!(outcome.progression, previous);
    assert!(!outcome.deload.should_deload);
    assert!(outcome.summary.is_none());
}

#[test]
fn test_outcome_serializes_camel_case() {
    let outcome = apply_session_results(
        &ProgressionState::default(),
        &[result("e1", 3, 3, 7.0)],
    );
    let json = serde_json::to_value(&outcome).unwrap();

    assert_eq!(json["progression"]["strengthLevel"], 4);
    assert_eq!(json["deload"]["shouldDeload"], false);
    assert!(json["summary"]["completionRate"].is_number());
}
