// ABOUTME: Main library entry point for the Longevity training planner
// ABOUTME: Wires configuration, logging, the exercise catalog, and caller-side services around the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![recursion_limit = "256"]
#![deny(unsafe_code)]

//! # Longevity Planner
//!
//! Deterministic personal-training planning. The pure algorithms live in the
//! `longevity-engine` crate and the shared models in `longevity-core`; this
//! crate is the layer a caller talks to.
//!
//! ## Features
//!
//! - **Sessions and weekly plans**: re-exported engine entry points
//! - **Exercise catalog**: JSON/YAML loading, validation, and a built-in catalog
//! - **Progression service**: applies results and deload side effects to stored state
//! - **Readiness trends**: trailing averages over daily self-reports
//! - **Exercise swaps**: like-for-like replacements inside a generated session
//! - **Snapshots**: validation of persisted session output
//!
//! ## Example
//!
//! ```rust,no_run
//! use longevity_planner::catalog::ExerciseCatalog;
//! use longevity_planner::engine::{generate_weekly_plan, WeeklyPlanRequest};
//! use longevity_planner::models::{ProgressionState, StrengthDays, TrainingGoal};
//! use longevity_planner::services::week_range;
//! use chrono::NaiveDate;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let catalog = ExerciseCatalog::built_in();
//! let today = NaiveDate::from_ymd_opt(2026, 2, 18).ok_or("bad date")?;
//! let request = WeeklyPlanRequest {
//!     week_start: week_range(today).start,
//!     strength_days: StrengthDays::try_from(3)?,
//!     goal: TrainingGoal::Balanced,
//!     progression: ProgressionState::default(),
//!     readiness_trend: None,
//!     exercise_pool: catalog.into_exercises(),
//!     seed: None,
//! };
//! let plan = generate_weekly_plan(&request)?;
//! assert_eq!(plan.days.len(), 7);
//! # Ok(())
//! # }
//! ```

/// Exercise catalog loading and validation
pub mod catalog;

/// Configuration from environment variables
pub mod config;

/// Environment variable names and service identifiers
pub mod constants;

/// Structured logging setup
pub mod logging;

/// Caller-side services: progression, readiness trends, swaps, snapshots, weeks
pub mod services;

/// Re-export of the planning engine
pub use longevity_engine as engine;

/// Re-export of the shared error types
pub use longevity_core::errors;

/// Re-export of the domain models
pub use longevity_core::models;
