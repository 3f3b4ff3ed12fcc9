// ABOUTME: Shared fixtures for planner integration tests
// ABOUTME: Exercise pools, progression states, and readiness signals used across test files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::too_many_lines
)]
//! Shared test fixtures for `longevity_planner`

use longevity_planner::models::{
    ExerciseCategory, ExerciseDefinition, MovementPattern, ProgressionState, ReadinessSignal,
};
use std::collections::HashMap;
use std::sync::Once;

use ExerciseCategory::{Accessory, Compound, Conditioning, Mobility};
use MovementPattern as P;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

pub fn exercise(
    id: &str,
    name: &str,
    category: ExerciseCategory,
    pattern: MovementPattern,
    muscle_group: &str,
    difficulty: u8,
) -> ExerciseDefinition {
    ExerciseDefinition {
        id: id.to_owned(),
        name: name.to_owned(),
        category,
        movement_pattern: pattern,
        muscle_group: muscle_group.to_owned(),
        equipment: "dumbbell".to_owned(),
        difficulty,
    }
}

/// Twelve-exercise pool with no lunge pattern
pub fn session_pool() -> Vec<ExerciseDefinition> {
    vec![
        exercise("squat-goblet", "Goblet Squat", Compound, P::Squat, "legs", 1),
        exercise("hinge-rdl", "Romanian Deadlift", Compound, P::Hinge, "legs", 2),
        exercise("push-db-press", "Dumbbell Press", Compound, P::Push, "chest", 2),
        exercise("pull-row", "Cable Row", Accessory, P::Pull, "back", 1),
        exercise("core-plank", "Plank", Accessory, P::Core, "core", 1),
        exercise("mobility-90-90", "90/90 Hip Switch", Mobility, P::Mobility, "legs", 1),
        exercise("conditioning-incline-walk", "Incline Walk", Conditioning, P::Warmup, "full_body", 1),
        exercise("carry-farmer", "Farmer Carry", Accessory, P::Carry, "full_body", 2),
        exercise("push-lateral-raise", "Lateral Raise", Accessory, P::Push, "shoulders", 2),
        exercise("push-overhead-press", "Overhead Press", Compound, P::OverheadPush, "shoulders", 2),
        exercise("pull-lat-pulldown", "Lat Pulldown", Accessory, P::OverheadPull, "back", 1),
        exercise("warmup-cat-cow", "Cat-Cow", Accessory, P::Warmup, "core", 1),
    ]
}

/// Pool that can fill every balanced slot and every active day type
pub fn weekly_pool() -> Vec<ExerciseDefinition> {
    vec![
        exercise("strength-squat", "Goblet Squat", Compound, P::Squat, "legs", 1),
        exercise("strength-push", "Dumbbell Press", Compound, P::Push, "chest", 2),
        exercise("strength-pull", "Cable Row", Accessory, P::Pull, "back", 1),
        exercise("strength-hinge", "Romanian Deadlift", Compound, P::Hinge, "legs", 2),
        exercise("strength-lunge", "Split Squat", Compound, P::Lunge, "legs", 2),
        exercise("strength-calf", "Standing Calf Raise", Accessory, P::Calf, "legs", 1),
        exercise("strength-overhead-push", "Dumbbell Shoulder Press", Compound, P::OverheadPush, "shoulders", 2),
        exercise("strength-push-incline", "Incline Dumbbell Press", Compound, P::Push, "chest", 2),
        exercise("strength-overhead-push-landmine", "Half-Kneeling Landmine Press", Compound, P::OverheadPush, "shoulders", 2),
        exercise("strength-overhead-pull", "Lat Pulldown", Accessory, P::OverheadPull, "back", 1),
        exercise("strength-pull-row-supported", "Chest-Supported Row", Accessory, P::Pull, "back", 1),
        exercise("strength-pull-face-pull", "Face Pull", Accessory, P::OverheadPull, "shoulders", 1),
        exercise("carry-1", "Farmer Carry", Accessory, P::Carry, "full_body", 1),
        exercise("mobility-1", "90/90 Hip Switch", Mobility, P::Mobility, "legs", 1),
        exercise("mobility-2", "Thoracic Rotation", Mobility, P::Mobility, "back", 1),
        exercise("mobility-3", "Wall Slide", Mobility, P::Mobility, "shoulders", 1),
        exercise("warmup-1", "Cat-Cow Flow", Accessory, P::Warmup, "core", 1),
        exercise("condition-1", "Incline Walk", Conditioning, P::Warmup, "full_body", 1),
        exercise("condition-2", "Bike Erg", Conditioning, P::Warmup, "full_body", 1),
        exercise("recovery-1", "Box Breathing", Accessory, P::Core, "core", 1),
    ]
}

pub fn patterns_by_id(pool: &[ExerciseDefinition]) -> HashMap<String, MovementPattern> {
    pool.iter()
        .map(|exercise| (exercise.id.clone(), exercise.movement_pattern))
        .collect()
}

pub fn progression(strength: u8, volume: u8, fatigue: u8) -> ProgressionState {
    ProgressionState::new(strength, volume, fatigue, 0)
}

pub fn readiness(sleep: f64, energy: f64, soreness: f64, stress: f64) -> ReadinessSignal {
    ReadinessSignal {
        sleep_hours: Some(sleep),
        energy: Some(energy),
        soreness: Some(soreness),
        stress: Some(stress),
    }
}
