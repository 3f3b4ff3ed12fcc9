// ABOUTME: Weekly plan and day plan models with strength emphasis enums
// ABOUTME: DayPlan is a tagged sum type with one variant per day kind
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::session::GeneratedSession;
use crate::constants::{defaults, ranges};
use crate::errors::PlanningError;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Movement focus of a strength day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrengthEmphasis {
    /// Lower body
    Lower,
    /// Upper-body push
    Push,
    /// Upper-body pull
    Pull,
    /// Reduced-intensity full-body day
    FullBodyLight,
}

impl StrengthEmphasis {
    /// Wire name of the emphasis
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lower => "lower",
            Self::Push => "push",
            Self::Pull => "pull",
            Self::FullBodyLight => "full_body_light",
        }
    }

    /// Slot template for this emphasis, if one exists
    #[must_use]
    pub const fn template(self) -> Option<TemplateEmphasis> {
        match self {
            Self::Lower => Some(TemplateEmphasis::Lower),
            Self::Push => Some(TemplateEmphasis::Push),
            Self::Pull => Some(TemplateEmphasis::Pull),
            Self::FullBodyLight => None,
        }
    }
}

impl fmt::Display for StrengthEmphasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Emphases that have a slot template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateEmphasis {
    /// Lower body
    Lower,
    /// Upper-body push
    Push,
    /// Upper-body pull
    Pull,
}

impl TemplateEmphasis {
    /// Wire name of the emphasis
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lower => "lower",
            Self::Push => "push",
            Self::Pull => "pull",
        }
    }
}

/// Weekly strength-day count, always within 2..=5
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct StrengthDays(u8);

impl StrengthDays {
    /// Raw day count
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for StrengthDays {
    type Error = PlanningError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if (ranges::MIN_STRENGTH_DAYS..=ranges::MAX_STRENGTH_DAYS).contains(&value) {
            Ok(Self(value))
        } else {
            Err(PlanningError::StrengthDaysOutOfRange { value })
        }
    }
}

impl Default for StrengthDays {
    fn default() -> Self {
        Self(defaults::STRENGTH_DAYS)
    }
}

impl From<StrengthDays> for u8 {
    fn from(days: StrengthDays) -> Self {
        days.0
    }
}

/// Plan for a single calendar date
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DayPlan {
    /// Resistance training day
    Strength {
        /// Calendar date
        date: NaiveDate,
        /// Movement focus
        emphasis: StrengthEmphasis,
        /// Prescribed session
        session: GeneratedSession,
    },
    /// Low-intensity aerobic day
    Zone2 {
        /// Calendar date
        date: NaiveDate,
        /// Target duration in minutes
        minutes: u32,
        /// Day-level guidance
        #[serde(default, skip_serializing_if = "Option::is_none")]
        notes: Option<String>,
        /// Prescribed session, absent only when the pool has no conditioning work
        #[serde(default, skip_serializing_if = "Option::is_none")]
        session: Option<GeneratedSession>,
    },
    /// Mobility day
    Mobility {
        /// Calendar date
        date: NaiveDate,
        /// Target duration in minutes
        minutes: u32,
        /// Day-level guidance
        #[serde(default, skip_serializing_if = "Option::is_none")]
        notes: Option<String>,
        /// Prescribed session, absent only when the pool has no mobility work
        #[serde(default, skip_serializing_if = "Option::is_none")]
        session: Option<GeneratedSession>,
    },
    /// Active recovery day
    Recovery {
        /// Calendar date
        date: NaiveDate,
        /// Target duration in minutes
        minutes: u32,
        /// Day-level guidance
        #[serde(default, skip_serializing_if = "Option::is_none")]
        notes: Option<String>,
        /// Prescribed session
        session: GeneratedSession,
    },
}

impl DayPlan {
    /// Calendar date of this day
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        match self {
            Self::Strength { date, .. }
            | Self::Zone2 { date, .. }
            | Self::Mobility { date, .. }
            | Self::Recovery { date, .. } => *date,
        }
    }

    /// Wire name of the day type
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Strength { .. } => "strength",
            Self::Zone2 { .. } => "zone2",
            Self::Mobility { .. } => "mobility",
            Self::Recovery { .. } => "recovery",
        }
    }

    /// Session prescribed for the day, if any
    #[must_use]
    pub fn session(&self) -> Option<&GeneratedSession> {
        match self {
            Self::Strength { session, .. } | Self::Recovery { session, .. } => Some(session),
            Self::Zone2 { session, .. } | Self::Mobility { session, .. } => session.as_ref(),
        }
    }

    /// Whether this is a strength day
    #[must_use]
    pub const fn is_strength(&self) -> bool {
        matches!(self, Self::Strength { .. })
    }
}

/// Seven consecutive day plans starting at the requested week start
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyPlan {
    /// One entry per date, in calendar order
    pub days: Vec<DayPlan>,
    /// Engine version tag
    pub engine_version: String,
}

impl WeeklyPlan {
    /// Number of strength days in the plan
    #[must_use]
    pub fn strength_day_count(&self) -> usize {
        self.days.iter().filter(|day| day.is_strength()).count()
    }
}
