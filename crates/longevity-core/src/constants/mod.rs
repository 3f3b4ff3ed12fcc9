// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Engine version tags, value ranges, defaults, and advisory note text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single
//! large namespace. Numeric thresholds used by a single algorithm live next to
//! that algorithm in the engine; this module holds values shared across crates
//! or persisted in output.

/// Advisory and day-level note text embedded in generated plans
pub mod notes;

/// Engine version tags embedded in persisted output
pub mod engine {
    /// Version tag for single sessions and non-strength day sessions
    pub const SESSION_ENGINE_VERSION: &str = "v1";
    /// Version tag for weekly plans
    pub const WEEKLY_ENGINE_VERSION: &str = "v1-weekly";
    /// Session snapshot versions accepted when parsing persisted output
    pub const KNOWN_SESSION_VERSIONS: &[&str] = &[SESSION_ENGINE_VERSION];
}

/// Domain ranges for progression state and prescriptions
pub mod ranges {
    /// Minimum strength/volume level
    pub const MIN_LEVEL: u8 = 1;
    /// Maximum strength/volume level
    pub const MAX_LEVEL: u8 = 10;
    /// Minimum fatigue score
    pub const MIN_FATIGUE: u8 = 0;
    /// Maximum fatigue score
    pub const MAX_FATIGUE: u8 = 10;
    /// Minimum exercise difficulty in a catalog
    pub const MIN_DIFFICULTY: u8 = 1;
    /// Maximum exercise difficulty in a catalog
    pub const MAX_DIFFICULTY: u8 = 3;
    /// Minimum sets for strength prescriptions
    pub const MIN_STRENGTH_SETS: u32 = 2;
    /// Maximum sets for strength prescriptions
    pub const MAX_STRENGTH_SETS: u32 = 5;
    /// Lowest intensity on the 5-9 scale (recovery work)
    pub const MIN_INTENSITY: u8 = 5;
    /// Lowest intensity for strength work
    pub const MIN_STRENGTH_INTENSITY: u8 = 6;
    /// Highest intensity on the 5-9 scale
    pub const MAX_INTENSITY: u8 = 9;
    /// Fewest weekly strength days
    pub const MIN_STRENGTH_DAYS: u8 = 2;
    /// Most weekly strength days
    pub const MAX_STRENGTH_DAYS: u8 = 5;
    /// Days in a weekly plan
    pub const DAYS_PER_WEEK: usize = 7;
}

/// Defaults applied by callers when no stored state exists
pub mod defaults {
    /// Strength level for a new athlete
    pub const STRENGTH_LEVEL: u8 = 3;
    /// Volume level for a new athlete
    pub const VOLUME_LEVEL: u8 = 3;
    /// Fatigue score for a new athlete
    pub const FATIGUE_SCORE: u8 = 0;
    /// Weekly strength days when the athlete has no program
    pub const STRENGTH_DAYS: u8 = 3;
    /// Trailing window used to aggregate readiness entries
    pub const READINESS_TREND_DAYS: i64 = 7;
    /// Number of swap candidates offered per exercise
    pub const SWAP_CANDIDATE_LIMIT: usize = 5;
}

/// Caller-side deload side effects
pub mod deload {
    /// Fatigue removed from stored state when a deload triggers
    pub const FATIGUE_REDUCTION: u8 = 3;
}
