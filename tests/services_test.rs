// ABOUTME: Integration tests for caller-side services around the planning engine
// ABOUTME: Validates week anchoring, readiness trends, exercise swaps, and session snapshot parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::NaiveDate;
use longevity_planner::catalog::ExerciseCatalog;
use longevity_planner::errors::PlanningError;
use longevity_planner::models::{GeneratedSession, SessionExercise};
use longevity_planner::services::{
    apply_exercise_swap, parse_session_snapshot, readiness_trend, readiness_trend_with_window,
    swap_candidates, week_range, ReadinessEntry,
};

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 2, day).unwrap()
}

fn entry(day: u32, sleep_hours: f64, energy: u8, soreness: u8, stress: u8) -> ReadinessEntry {
    ReadinessEntry {
        date: date(day),
        sleep_hours,
        energy,
        soreness,
        stress,
        notes: None,
    }
}

fn prescribed(exercise_id: &str, name: &str) -> SessionExercise {
    SessionExercise {
        exercise_id: exercise_id.to_owned(),
        name: name.to_owned(),
        sets: 3,
        reps: 8,
        intensity: 7,
    }
}

fn stored_session() -> GeneratedSession {
    GeneratedSession {
        exercises: vec![
            prescribed("squat-goblet", "Goblet Squat"),
            prescribed("push-db-press", "Dumbbell Bench Press"),
            prescribed("pull-row-cable", "Seated Cable Row"),
        ],
        engine_version: "v1".to_owned(),
        notes: Vec::new(),
    }
}

// Week anchoring

#[test]
fn test_week_range_anchors_on_monday() {
    let wednesday = week_range(date(18));
    assert_eq!(wednesday.start, date(16));
    assert_eq!(wednesday.end, date(22));

    assert_eq!(week_range(date(16)).start, date(16));
    assert_eq!(week_range(date(22)).start, date(16));
    assert_eq!(week_range(date(23)).start, date(23));
}

#[test]
fn test_week_range_dates_and_contains() {
    let week = week_range(date(19));
    let dates: Vec<NaiveDate> = week.dates().collect();

    assert_eq!(dates.len(), 7);
    assert_eq!(dates.first(), Some(&date(16)));
    assert_eq!(dates.last(), Some(&date(22)));
    assert!(week.contains(date(20)));
    assert!(!week.contains(date(23)));
}

// Readiness

#[test]
fn test_readiness_trend_averages_window() {
    let entries = [
        entry(8, 4.0, 1, 5, 5), // outside the seven-day window
        entry(10, 8.0, 4, 2, 2),
        entry(14, 6.0, 2, 4, 4),
        entry(16, 7.0, 3, 3, 3),
        entry(17, 9.0, 5, 1, 1), // after as_of
    ];
    let trend = readiness_trend(&entries, date(16)).unwrap();

    assert_eq!(trend.avg_sleep, Some(7.0));
    assert_eq!(trend.avg_energy, Some(3.0));
    assert_eq!(trend.avg_soreness, Some(3.0));
    assert_eq!(trend.avg_stress, Some(3.0));
}

#[test]
fn test_readiness_trend_custom_window_and_empty() {
    let entries = [entry(14, 6.0, 2, 4, 4), entry(16, 8.0, 4, 2, 2)];

    let last_day = readiness_trend_with_window(&entries, date(16), 1).unwrap();
    assert_eq!(last_day.avg_energy, Some(4.0));

    assert!(readiness_trend(&entries, date(1)).is_none());
    assert!(readiness_trend(&[], date(16)).is_none());
}

#[test]
fn test_readiness_entry_validation() {
    assert!(entry(16, 7.5, 3, 2, 2).validate().is_ok());
    assert!(entry(16, 25.0, 3, 2, 2).validate().is_err());
    assert!(entry(16, 7.0, 0, 2, 2).validate().is_err());
    assert!(entry(16, 7.0, 3, 6, 2).validate().is_err());

    let signal = entry(16, 7.5, 3, 2, 1).as_signal();
    assert_eq!(signal.energy, Some(3.0));
    assert_eq!(signal.stress, Some(1.0));
}

// Swaps

#[test]
fn test_swap_candidates_share_pattern_and_muscle_group() {
    let catalog = ExerciseCatalog::built_in();
    let candidates = swap_candidates(&catalog, "squat-goblet", 5).unwrap();
    let ids: Vec<&str> = candidates.iter().map(|c| c.id.as_str()).collect();

    assert_eq!(ids, ["squat-back", "squat-leg-extension"]);
    assert_eq!(swap_candidates(&catalog, "squat-goblet", 1).unwrap().len(), 1);
}

#[test]
fn test_swap_candidates_unknown_exercise() {
    let catalog = ExerciseCatalog::built_in();
    assert!(matches!(
        swap_candidates(&catalog, "does-not-exist", 5),
        Err(PlanningError::ExerciseNotFound { .. })
    ));
}

#[test]
fn test_apply_swap_replaces_identity_only() {
    let catalog = ExerciseCatalog::built_in();
    let session = stored_session();
    let updated = apply_exercise_swap(&session, &catalog, "squat-goblet", "squat-back").unwrap();

    assert_eq!(updated.exercises[0].exercise_id, "squat-back");
    assert_eq!(updated.exercises[0].name, "Back Squat");
    assert_eq!(updated.exercises[0].sets, 3);
    assert_eq!(updated.exercises[0].reps, 8);
    assert_eq!(updated.exercises[0].intensity, 7);
    assert_eq!(updated.exercises[1..], session.exercises[1..]);
}

#[test]
fn test_apply_swap_to_same_exercise_is_a_no_op() {
    let catalog = ExerciseCatalog::built_in();
    let session = stored_session();
    let updated = apply_exercise_swap(&session, &catalog, "squat-goblet", "squat-goblet").unwrap();

    assert_eq!(updated, session);
}

#[test]
fn test_apply_swap_rejections() {
    let catalog = ExerciseCatalog::built_in();
    let session = stored_session();

    assert!(matches!(
        apply_exercise_swap(&session, &catalog, "squat-goblet", "hinge-rdl"),
        Err(PlanningError::InvalidSwapTarget { .. })
    ));
    assert!(matches!(
        apply_exercise_swap(&session, &catalog, "squat-back", "squat-goblet"),
        Err(PlanningError::ExerciseNotInSession { .. })
    ));
    assert!(matches!(
        apply_exercise_swap(&session, &catalog, "squat-goblet", "nope"),
        Err(PlanningError::ExerciseNotFound { .. })
    ));

    let mut crowded = session;
    crowded.exercises.push(prescribed("squat-back", "Back Squat"));
    assert!(matches!(
        apply_exercise_swap(&crowded, &catalog, "squat-goblet", "squat-back"),
        Err(PlanningError::DuplicateExercise { .. })
    ));
}

// Snapshots

#[test]
fn test_snapshot_parses_stored_session() {
    let json = serde_json::to_string(&stored_session()).unwrap();
    assert_eq!(parse_session_snapshot(&json).unwrap(), stored_session());
}

#[test]
fn test_snapshot_rejects_bad_input() {
    let mut unknown_version = serde_json::to_value(stored_session()).unwrap();
    unknown_version["engineVersion"] = "v0".into();
    assert!(matches!(
        parse_session_snapshot(&unknown_version.to_string()),
        Err(PlanningError::InvalidSnapshot { .. })
    ));

    let mut missing_notes = serde_json::to_value(stored_session()).unwrap();
    missing_notes.as_object_mut().unwrap().remove("notes");
    assert!(parse_session_snapshot(&missing_notes.to_string()).is_err());

    let mut repeated = stored_session();
    repeated.exercises.push(prescribed("squat-goblet", "Goblet Squat"));
    let json = serde_json::to_string(&repeated).unwrap();
    assert!(matches!(
        parse_session_snapshot(&json),
        Err(PlanningError::InvalidSnapshot { reason }) if reason.contains("squat-goblet")
    ));

    assert!(parse_session_snapshot("not json").is_err());
}
