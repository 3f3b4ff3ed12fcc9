// ABOUTME: Weekly plan generator assigning strength and active day types across seven days
// ABOUTME: Strength days rotate emphases; active days rotate zone2, mobility, and recovery
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Weekly Plan Generator
//!
//! A fixed table maps the strength-day count onto weekday indices (0 is the
//! first day of the requested week). Each strength day consumes the next
//! emphasis from a seed-rotated order. Every other day is an active day whose
//! type comes from a zone2/mobility/recovery rotation.

mod active;
mod strength;

use crate::calendar::date_seed;
use chrono::{Days, NaiveDate};
use longevity_core::constants::{engine, ranges};
use longevity_core::errors::PlanningError;
use longevity_core::models::{
    ExerciseDefinition, ProgressionState, ReadinessSignal, ReadinessTrend, StrengthDays,
    StrengthEmphasis, TrainingGoal, WeeklyPlan,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Emphasis rotation for goals without a slot template
const STANDARD_EMPHASES: [StrengthEmphasis; 4] = [
    StrengthEmphasis::Lower,
    StrengthEmphasis::Push,
    StrengthEmphasis::Pull,
    StrengthEmphasis::FullBodyLight,
];

/// Emphasis rotation for the balanced slot template
const BALANCED_EMPHASES: [StrengthEmphasis; 3] = [
    StrengthEmphasis::Lower,
    StrengthEmphasis::Push,
    StrengthEmphasis::Pull,
];

/// Inputs for a seven-day plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeeklyPlanRequest {
    /// First day of the week (callers anchor this on Monday)
    pub week_start: NaiveDate,
    /// Strength days in the week
    pub strength_days: StrengthDays,
    /// Athlete training goal
    #[serde(default)]
    pub goal: TrainingGoal,
    /// Current progression state
    #[serde(default)]
    pub progression: ProgressionState,
    /// Trailing readiness averages
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub readiness_trend: Option<ReadinessTrend>,
    /// Exercises available for selection
    pub exercise_pool: Vec<ExerciseDefinition>,
    /// Seed override; defaults to the week-start date digits
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<i64>,
}

/// Shared per-week inputs handed to the day builders
struct WeekContext<'a> {
    pool: &'a [ExerciseDefinition],
    goal: TrainingGoal,
    progression: &'a ProgressionState,
    readiness_trend: Option<&'a ReadinessTrend>,
    trend_signal: Option<ReadinessSignal>,
    base_seed: i64,
}

/// Weekday indices used for strength at each strength-day count
#[must_use]
pub fn strength_weekdays(strength_days: StrengthDays) -> &'static [usize] {
    match strength_days.get() {
        2 => &[1, 4],
        3 => &[0, 2, 4],
        4 => &[0, 1, 3, 5],
        _ => &[0, 1, 2, 4, 5],
    }
}

/// Emphasis order for the goal, rotated left by `|seed| mod length`
#[must_use]
#[allow(clippy::cast_possible_truncation)] // Safe: remainder is below the rotation length
pub fn emphasis_order(goal: TrainingGoal, seed: i64) -> Vec<StrengthEmphasis> {
    let base: &[StrengthEmphasis] = if goal.uses_slot_template() {
        &BALANCED_EMPHASES
    } else {
        &STANDARD_EMPHASES
    };
    let shift = (seed.unsigned_abs() % base.len() as u64) as usize;
    let mut order = base.to_vec();
    order.rotate_left(shift);
    order
}

/// Generate the seven-day plan starting at `week_start`
///
/// # Errors
///
/// Returns `PlanningError::RecoveryInfeasible` if any recovery day lacks a
/// light conditioning, breathing/core, or mobility exercise, and
/// `PlanningError::InvalidDate` if the week runs past the calendar range.
pub fn generate_weekly_plan(request: &WeeklyPlanRequest) -> Result<WeeklyPlan, PlanningError> {
    let base_seed = request
        .seed
        .unwrap_or_else(|| date_seed(request.week_start));
    let strength_slots = strength_weekdays(request.strength_days);
    let emphases = emphasis_order(request.goal, base_seed);

    let context = WeekContext {
        pool: &request.exercise_pool,
        goal: request.goal,
        progression: &request.progression,
        readiness_trend: request.readiness_trend.as_ref(),
        trend_signal: request.readiness_trend.as_ref().map(ReadinessTrend::as_signal),
        base_seed,
    };

    let mut days = Vec::with_capacity(ranges::DAYS_PER_WEEK);
    let mut strength_index = 0;

    for day_index in 0..ranges::DAYS_PER_WEEK {
        let date = request
            .week_start
            .checked_add_days(Days::new(day_index as u64))
            .ok_or_else(|| PlanningError::InvalidDate {
                value: request.week_start.to_string(),
            })?;

        let day = if strength_slots.contains(&day_index) {
            let emphasis = emphases[strength_index % emphases.len()];
            strength_index += 1;
            strength::build_strength_day(&context, date, day_index, emphasis)
        } else {
            active::build_active_day(&context, date, day_index)?
        };

        debug!(%date, day_type = day.kind(), "planned day");
        days.push(day);
    }

    Ok(WeeklyPlan {
        days,
        engine_version: engine::WEEKLY_ENGINE_VERSION.to_owned(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strength_weekday_table() {
        for days in 2..=5_u8 {
            let slots = StrengthDays::try_from(days).map(strength_weekdays);
            assert_eq!(slots.map(<[usize]>::len), Ok(usize::from(days)));
        }
        assert_eq!(
            StrengthDays::try_from(3).map(strength_weekdays),
            Ok(&[0, 2, 4][..])
        );
    }

    #[test]
    fn test_emphasis_rotation_uses_absolute_seed() {
        assert_eq!(
            emphasis_order(TrainingGoal::Balanced, 4),
            vec![
                StrengthEmphasis::Push,
                StrengthEmphasis::Pull,
                StrengthEmphasis::Lower
            ]
        );
        assert_eq!(
            emphasis_order(TrainingGoal::Balanced, -4),
            emphasis_order(TrainingGoal::Balanced, 4)
        );
        assert_eq!(
            emphasis_order(TrainingGoal::Strength, 6),
            vec![
                StrengthEmphasis::Pull,
                StrengthEmphasis::FullBodyLight,
                StrengthEmphasis::Lower,
                StrengthEmphasis::Push
            ]
        );
    }
}
