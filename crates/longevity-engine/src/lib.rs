// ABOUTME: Deterministic training planning engine for sessions, weeks, and progression
// ABOUTME: Pure synchronous functions of their explicit inputs, including the seed
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Longevity Engine
//!
//! Planning engine for the Longevity training planner. Callers supply an
//! exercise pool, progression state, readiness, goal, and an optional seed;
//! the engine returns an immutable session or weekly plan. There is no I/O,
//! no shared state, and no entropy source: every "random" choice is a hash of
//! a declared seed key, so identical inputs always produce identical output.
//!
//! ## Entry points
//!
//! - [`generate_session`]: one workout for a date
//! - [`generate_weekly_plan`]: seven day plans for a week
//! - [`update_progression`]: fold submitted results into progression state
//! - [`evaluate_deload`]: decide whether a deload is due

/// ISO date parsing and date-derived seeds
pub mod calendar;
/// Deload decision function
pub mod deload;
/// Seeded, reproducible ordering of exercises
pub mod ordering;
/// Shared prescription arithmetic (clamping, time-like detection)
pub mod prescription;
/// Progression updater over submitted results
pub mod progression;
/// Readiness scoring and adaptive exercise counts
pub mod readiness;
/// Single-session generator
pub mod session;
/// Slot template resolver for lower/push/pull strength days
pub mod templates;
/// Weekly plan generator
pub mod weekly;

pub use calendar::{date_seed, parse_iso_date};
pub use deload::evaluate_deload;
pub use ordering::{deterministic_order, hash_str};
pub use progression::{summarize_results, update_progression, ResultSummary};
pub use readiness::{resolve_adaptive_target_count, score_readiness, TargetCount};
pub use session::{generate_session, SessionRequest};
pub use templates::{resolve_slots, slot_template, Slot, SlotSelection, SlotTemplate};
pub use weekly::{generate_weekly_plan, WeeklyPlanRequest};
