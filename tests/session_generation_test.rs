// ABOUTME: Integration tests for the single-session generator
// ABOUTME: Validates category coverage, dosing, readiness notes, and determinism
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use chrono::NaiveDate;
use common::{patterns_by_id, progression, readiness, session_pool};
use longevity_planner::constants::notes;
use longevity_planner::engine::{generate_session, SessionRequest};
use longevity_planner::models::{MovementPattern, TrainingGoal};
use std::collections::HashSet;

fn request(seed: Option<i64>) -> SessionRequest {
    SessionRequest {
        date: NaiveDate::from_ymd_opt(2026, 2, 15).unwrap(),
        goal: TrainingGoal::Balanced,
        readiness: Some(readiness(8.0, 4.0, 1.0, 1.0)),
        progression: progression(3, 4, 2),
        exercise_pool: session_pool(),
        seed,
    }
}

#[test]
fn test_session_is_deterministic() {
    common::init_test_logging();
    let first = generate_session(&request(Some(99)));
    let second = generate_session(&request(Some(99)));

    assert_eq!(first, second);
    assert_eq!(first.engine_version, "v1");
    assert_eq!(first.exercises.len(), 5);
}

#[test]
fn test_session_covers_every_category() {
    let session = generate_session(&request(Some(99)));
    let patterns = patterns_by_id(&session_pool());
    let selected: HashSet<MovementPattern> = session
        .exercise_ids()
        .map(|id| patterns[id])
        .collect();

    let has_any = |wanted: &[MovementPattern]| wanted.iter().any(|p| selected.contains(p));
    assert!(has_any(&[MovementPattern::Squat, MovementPattern::Hinge, MovementPattern::Lunge]));
    assert!(has_any(&[MovementPattern::Push, MovementPattern::OverheadPush]));
    assert!(has_any(&[MovementPattern::Pull, MovementPattern::OverheadPull]));
    assert!(has_any(&[MovementPattern::Core, MovementPattern::Carry]));
    assert!(has_any(&[MovementPattern::Mobility, MovementPattern::Warmup]));

    let unique: HashSet<&str> = session.exercise_ids().collect();
    assert_eq!(unique.len(), session.exercises.len());
}

#[test]
fn test_session_dosing_with_good_readiness() {
    let session = generate_session(&request(Some(99)));
    assert_eq!(session.exercises[0].sets, 5);
    for exercise in &session.exercises[1..] {
        assert_eq!(exercise.sets, 4);
    }
    for exercise in &session.exercises {
        assert_eq!(exercise.intensity, 8);
        let expected_reps = if exercise.exercise_id == "mobility-90-90" {
            12
        } else {
            8
        };
        assert_eq!(exercise.reps, expected_reps);
    }
    assert!(session.notes.is_empty());
}

#[test]
fn test_poor_readiness_reduces_intensity() {
    let mut poor = request(Some(7));
    poor.readiness = Some(readiness(5.0, 2.0, 4.0, 4.0));
    let session = generate_session(&poor);

    assert!(session.exercises.iter().all(|exercise| exercise.intensity == 7));
    assert_eq!(session.notes, vec![notes::REDUCED_INTENSITY.to_owned()]);
}

#[test]
fn test_high_fatigue_adds_monitor_note() {
    let mut tired = request(Some(7));
    tired.readiness = None;
    tired.progression = progression(3, 4, 7);
    let session = generate_session(&tired);

    assert_eq!(session.notes, vec![notes::MONITOR_FATIGUE.to_owned()]);
    // Neutral readiness: 3 + 7/4 = 4 base sets
    assert_eq!(session.exercises[0].sets, 4);
}

#[test]
fn test_strength_goal_uses_low_reps() {
    let mut strength = request(Some(11));
    strength.goal = TrainingGoal::Strength;
    let session = generate_session(&strength);

    for exercise in &session.exercises {
        if exercise.exercise_id != "mobility-90-90" {
            assert_eq!(exercise.reps, 6);
        }
    }
}

#[test]
fn test_balanced_six_exercise_pool_uses_all_six() {
    let mut six = request(Some(3));
    six.exercise_pool.truncate(6);
    let session = generate_session(&six);
    assert_eq!(session.exercises.len(), 6);

    six.goal = TrainingGoal::Hypertrophy;
    assert_eq!(generate_session(&six).exercises.len(), 5);
}

#[test]
fn test_small_and_empty_pools() {
    let mut small = request(Some(5));
    small.exercise_pool.truncate(2);
    assert_eq!(generate_session(&small).exercises.len(), 2);

    small.exercise_pool.clear();
    let empty = generate_session(&small);
    assert!(empty.exercises.is_empty());
    assert_eq!(empty.engine_version, "v1");
}

#[test]
fn test_seed_defaults_to_date_digits() {
    let implicit = generate_session(&request(None));
    let explicit = generate_session(&request(Some(20_260_215)));
    assert_eq!(implicit, explicit);
}

#[test]
fn test_request_deserializes_from_camel_case_json() {
    let json = serde_json::json!({
        "date": "2026-02-15",
        "goal": "strength",
        "readiness": { "sleepHours": 8.0, "energy": 4.0 },
        "progression": { "strengthLevel": 3, "volumeLevel": 4, "fatigueScore": 2, "deloadCount": 0 },
        "exercisePool": session_pool(),
        "seed": 99
    });
    let parsed: SessionRequest = serde_json::from_value(json).unwrap();

    assert_eq!(parsed.goal, TrainingGoal::Strength);
    assert_eq!(parsed.seed, Some(99));
    assert_eq!(parsed.readiness.unwrap().soreness, None);
    assert_eq!(parsed.exercise_pool.len(), 12);
}
