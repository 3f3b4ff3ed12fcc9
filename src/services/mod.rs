// ABOUTME: Caller-side services wrapped around the planning engine
// ABOUTME: Pure functions over plain data; persistence stays with the embedding application
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Services a caller runs before and after the engine
//!
//! The engine produces plans and progression deltas; these services prepare
//! its inputs (readiness trends, week ranges) and apply its outputs (deload
//! side effects, exercise swaps, snapshot validation).

/// Result submission: progression update plus deload side effect
pub mod progression;
/// Readiness entries and trailing trend aggregation
pub mod readiness;
/// Persisted session snapshot validation
pub mod snapshot;
/// Like-for-like exercise swaps inside a session
pub mod swap;
/// Monday-anchored week ranges
pub mod week;

pub use progression::{apply_session_results, ProgressionOutcome};
pub use readiness::{readiness_trend, readiness_trend_with_window, ReadinessEntry};
pub use snapshot::parse_session_snapshot;
pub use swap::{apply_exercise_swap, swap_candidates, SwapCandidate};
pub use week::{week_range, WeekRange};
