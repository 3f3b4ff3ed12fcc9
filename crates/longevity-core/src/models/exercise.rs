// ABOUTME: Exercise definition model with category, movement pattern, and difficulty
// ABOUTME: Immutable reference data owned by the caller's catalog and read by the engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Broad exercise category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExerciseCategory {
    /// Multi-joint strength movement
    Compound,
    /// Single-joint or supporting strength movement
    Accessory,
    /// Mobility drill or stretch
    Mobility,
    /// Cardio modality (walk, bike, row, ...)
    Conditioning,
}

/// Movement pattern classification used by templates and session balancing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MovementPattern {
    /// Knee-dominant squat
    Squat,
    /// Hip-dominant hinge
    Hinge,
    /// Unilateral leg movement
    Lunge,
    /// Horizontal push
    Push,
    /// Vertical push
    OverheadPush,
    /// Horizontal pull
    Pull,
    /// Vertical pull
    OverheadPull,
    /// Loaded carry
    Carry,
    /// Trunk control
    Core,
    /// Calf raise family
    Calf,
    /// Balance and stability
    Balance,
    /// Mobility drill
    Mobility,
    /// Warm-up drill
    Warmup,
}

impl MovementPattern {
    /// Wire name of the pattern
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Squat => "squat",
            Self::Hinge => "hinge",
            Self::Lunge => "lunge",
            Self::Push => "push",
            Self::OverheadPush => "overhead_push",
            Self::Pull => "pull",
            Self::OverheadPull => "overhead_pull",
            Self::Carry => "carry",
            Self::Core => "core",
            Self::Calf => "calf",
            Self::Balance => "balance",
            Self::Mobility => "mobility",
            Self::Warmup => "warmup",
        }
    }
}

impl fmt::Display for MovementPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single exercise in the caller's catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseDefinition {
    /// Unique, stable identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Broad category
    pub category: ExerciseCategory,
    /// Movement pattern
    pub movement_pattern: MovementPattern,
    /// Primary muscle group (free-form catalog value, e.g. "legs")
    pub muscle_group: String,
    /// Required equipment (free-form catalog value, e.g. "dumbbell")
    pub equipment: String,
    /// Difficulty from 1 (easiest) to 3
    pub difficulty: u8,
}

impl ExerciseDefinition {
    /// Lowercased `"<name> <id>"` used for keyword heuristics
    #[must_use]
    pub fn search_token(&self) -> String {
        format!("{} {}", self.name, self.id).to_lowercase()
    }

    /// Whether the exercise is a mobility drill by category or pattern
    #[must_use]
    pub fn is_mobility_drill(&self) -> bool {
        self.category == ExerciseCategory::Mobility
            || matches!(
                self.movement_pattern,
                MovementPattern::Mobility | MovementPattern::Warmup
            )
    }
}

/// Athlete training goal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingGoal {
    /// Maximal strength focus
    Strength,
    /// Muscle growth focus
    Hypertrophy,
    /// Mobility focus
    Mobility,
    /// General balanced training
    #[default]
    Balanced,
}

impl TrainingGoal {
    /// Wire name of the goal
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Strength => "strength",
            Self::Hypertrophy => "hypertrophy",
            Self::Mobility => "mobility",
            Self::Balanced => "balanced",
        }
    }

    /// Whether strength days use the slot-based balanced template
    #[must_use]
    pub const fn uses_slot_template(self) -> bool {
        matches!(self, Self::Balanced)
    }
}

impl fmt::Display for TrainingGoal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrainingGoal {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strength" => Ok(Self::Strength),
            "hypertrophy" => Ok(Self::Hypertrophy),
            "mobility" => Ok(Self::Mobility),
            "balanced" => Ok(Self::Balanced),
            other => Err(AppError::invalid_input(format!(
                "Unknown training goal: {other}"
            ))),
        }
    }
}
