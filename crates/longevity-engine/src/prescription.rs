// ABOUTME: Shared prescription arithmetic for sets, reps, and intensity
// ABOUTME: Range clamping helpers and exercise heuristics used by several generators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use longevity_core::constants::ranges;
use longevity_core::models::{
    ExerciseCategory, ExerciseDefinition, MovementPattern, ProgressionState,
};

/// Keywords marking exercises prescribed in seconds rather than reps
const TIME_LIKE_KEYWORDS: &[&str] = &[
    "walk",
    "bike",
    "row",
    "elliptical",
    "swim",
    "breath",
    "breathing",
    "carry",
    "hold",
    "stretch",
];

/// Clamp a signed value into a `u8` range
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // Safe: clamped into u8 bounds first
pub fn clamp_u8(value: i32, min: u8, max: u8) -> u8 {
    value.clamp(i32::from(min), i32::from(max)) as u8
}

/// Clamp a signed value into a `u32` range
#[must_use]
#[allow(clippy::cast_sign_loss)] // Safe: lower bound is non-negative
pub fn clamp_u32(value: i32, min: u32, max: u32) -> u32 {
    let min = i32::try_from(min).unwrap_or(i32::MAX);
    let max = i32::try_from(max).unwrap_or(i32::MAX);
    value.clamp(min, max) as u32
}

/// Sets for entry `index` given the session's base sets
///
/// The first exercise keeps the base; later entries drop one set, never
/// below the strength minimum.
#[must_use]
pub fn sets_for_index(base_sets: u32, index: usize) -> u32 {
    if index == 0 {
        base_sets
    } else {
        base_sets
            .saturating_sub(1)
            .max(ranges::MIN_STRENGTH_SETS)
    }
}

/// Strength-day intensity: `7 + strength/3`, minus one under a penalty, in 6..=9
#[must_use]
pub fn strength_intensity(progression: &ProgressionState, penalized: bool) -> u8 {
    let value = 7 + i32::from(progression.strength_level) / 3 - i32::from(penalized);
    clamp_u8(
        value,
        ranges::MIN_STRENGTH_INTENSITY,
        ranges::MAX_INTENSITY,
    )
}

/// Whether the exercise is naturally prescribed as a timed hold or effort
#[must_use]
pub fn is_time_like(exercise: &ExerciseDefinition) -> bool {
    let token = format!(
        "{} {} {}",
        exercise.name, exercise.id, exercise.movement_pattern
    )
    .to_lowercase();
    TIME_LIKE_KEYWORDS
        .iter()
        .any(|keyword| token.contains(keyword))
}

/// Whether a strength-slot exercise should be dosed as mobility work
#[must_use]
pub fn is_mobility_like(exercise: &ExerciseDefinition) -> bool {
    exercise.category == ExerciseCategory::Mobility
        || matches!(
            exercise.movement_pattern,
            MovementPattern::Mobility | MovementPattern::Warmup | MovementPattern::Balance
        )
}
