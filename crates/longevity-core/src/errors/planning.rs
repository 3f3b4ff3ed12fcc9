// ABOUTME: Planning error types returned by the engine and caller-side services
// ABOUTME: Converts into AppError with a stable error code per variant
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Planning Error Types
//!
//! Only two engine conditions are fatal: malformed dates and infeasible
//! recovery days. Missing template slots are reported as session notes
//! instead. The remaining variants belong to the caller-side services
//! (swaps, snapshots, catalogs).

use super::{AppError, ErrorCode};
use chrono::NaiveDate;
use thiserror::Error;

/// Errors produced while building or editing plans
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum PlanningError {
    /// Date string is not a valid `YYYY-MM-DD` calendar date
    #[error("Invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate {
        /// Raw value that failed to parse
        value: String,
    },

    /// Weekly strength-day count outside 2..=5
    #[error("Strength days must be between 2 and 5, got {value}")]
    StrengthDaysOutOfRange {
        /// Rejected count
        value: u8,
    },

    /// Slot template target count outside 4..=6
    #[error("Target exercise count must be 4, 5, or 6, got {value}")]
    InvalidTargetCount {
        /// Rejected count
        value: usize,
    },

    /// Recovery day cannot be built from light exercises
    #[error("Recovery day {date} requires {requirement}")]
    RecoveryInfeasible {
        /// Date of the infeasible recovery day
        date: NaiveDate,
        /// Which requirement could not be met
        requirement: &'static str,
    },

    /// Exercise id not present in the catalog
    #[error("Exercise '{exercise_id}' not found")]
    ExerciseNotFound {
        /// Missing exercise id
        exercise_id: String,
    },

    /// Exercise id not present in the session being edited
    #[error("Exercise '{exercise_id}' is not part of the session")]
    ExerciseNotInSession {
        /// Missing exercise id
        exercise_id: String,
    },

    /// Swap target does not share movement pattern and muscle group
    #[error("Cannot swap '{from}' for '{to}': movement pattern and muscle group must match")]
    InvalidSwapTarget {
        /// Exercise being replaced
        from: String,
        /// Proposed replacement
        to: String,
    },

    /// Exercise id would appear twice in one session or catalog
    #[error("Exercise '{exercise_id}' already present")]
    DuplicateExercise {
        /// Duplicated exercise id
        exercise_id: String,
    },

    /// Persisted session snapshot failed validation
    #[error("Invalid session snapshot: {reason}")]
    InvalidSnapshot {
        /// What was wrong with the snapshot
        reason: String,
    },

    /// Exercise catalog failed validation
    #[error("Invalid exercise catalog: {reason}")]
    InvalidCatalog {
        /// What was wrong with the catalog
        reason: String,
    },
}

impl PlanningError {
    /// Create a "recovery infeasible" error
    #[must_use]
    pub const fn recovery_infeasible(date: NaiveDate, requirement: &'static str) -> Self {
        Self::RecoveryInfeasible { date, requirement }
    }

    /// Create an "exercise not found" error
    #[must_use]
    pub fn exercise_not_found(exercise_id: impl Into<String>) -> Self {
        Self::ExerciseNotFound {
            exercise_id: exercise_id.into(),
        }
    }

    /// Create an "invalid snapshot" error
    #[must_use]
    pub fn invalid_snapshot(reason: impl Into<String>) -> Self {
        Self::InvalidSnapshot {
            reason: reason.into(),
        }
    }

    /// Create an "invalid catalog" error
    #[must_use]
    pub fn invalid_catalog(reason: impl Into<String>) -> Self {
        Self::InvalidCatalog {
            reason: reason.into(),
        }
    }

    /// Error code used when surfacing this error through `AppError`
    #[must_use]
    pub const fn error_code(&self) -> ErrorCode {
        match self {
            Self::InvalidDate { .. } | Self::InvalidSnapshot { .. } => ErrorCode::InvalidFormat,
            Self::StrengthDaysOutOfRange { .. } | Self::InvalidTargetCount { .. } => {
                ErrorCode::ValueOutOfRange
            }
            Self::RecoveryInfeasible { .. } => ErrorCode::PlanInfeasible,
            Self::ExerciseNotFound { .. } | Self::ExerciseNotInSession { .. } => {
                ErrorCode::ResourceNotFound
            }
            Self::DuplicateExercise { .. } => ErrorCode::ResourceAlreadyExists,
            Self::InvalidSwapTarget { .. } | Self::InvalidCatalog { .. } => ErrorCode::InvalidInput,
        }
    }
}

impl From<PlanningError> for AppError {
    fn from(error: PlanningError) -> Self {
        Self::new(error.error_code(), error.to_string())
    }
}
