// ABOUTME: Core data models exchanged between callers and the planning engine
// ABOUTME: Exercises, readiness signals, progression state, sessions, and weekly plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Core data models
//!
//! All models serialize with camelCase field names so persisted plan and
//! session snapshots keep a single canonical JSON shape.

/// Exercise catalog entries and their classification enums
pub mod exercise;
/// Weekly plans, day plans, and strength emphasis
pub mod plan;
/// Progression state, submitted results, and deload decisions
pub mod progression;
/// Self-reported readiness signals and trends
pub mod readiness;
/// Generated sessions and their prescribed exercises
pub mod session;

pub use exercise::{ExerciseCategory, ExerciseDefinition, MovementPattern, TrainingGoal};
pub use plan::{DayPlan, StrengthDays, StrengthEmphasis, TemplateEmphasis, WeeklyPlan};
pub use progression::{DeloadDecision, ExerciseResult, ProgressionState};
pub use readiness::{ReadinessSignal, ReadinessTrend};
pub use session::{GeneratedSession, SessionExercise};
