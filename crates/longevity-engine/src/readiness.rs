// ABOUTME: Readiness scoring from sleep, energy, soreness, and stress self-reports
// ABOUTME: Maps readiness and fatigue to the adaptive 4/5/6 strength exercise count
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use longevity_core::errors::PlanningError;
use longevity_core::models::ReadinessSignal;

/// Sleep at or above this many hours scores +1
const SLEEP_HOURS_THRESHOLD: f64 = 7.0;
/// Energy at or above this level scores +1
const ENERGY_THRESHOLD: f64 = 3.0;
/// Soreness at or below this level scores +1
const SORENESS_THRESHOLD: f64 = 2.0;
/// Stress at or below this level scores +1
const STRESS_THRESHOLD: f64 = 2.0;

/// Readiness score in `-4..=4`
///
/// Each reported field contributes +1 when favourable and -1 otherwise. An
/// absent field contributes nothing, and absent readiness scores 0.
#[must_use]
pub fn score_readiness(readiness: Option<&ReadinessSignal>) -> i32 {
    let Some(readiness) = readiness else {
        return 0;
    };

    sub_score(readiness.sleep_hours, |hours| hours >= SLEEP_HOURS_THRESHOLD)
        + sub_score(readiness.energy, |energy| energy >= ENERGY_THRESHOLD)
        + sub_score(readiness.soreness, |soreness| soreness <= SORENESS_THRESHOLD)
        + sub_score(readiness.stress, |stress| stress <= STRESS_THRESHOLD)
}

fn sub_score(value: Option<f64>, favourable: impl Fn(f64) -> bool) -> i32 {
    match value {
        None => 0,
        Some(value) if favourable(value) => 1,
        Some(_) => -1,
    }
}

/// Number of exercises on a slot-template strength day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TargetCount {
    /// Reduced day (poor readiness or high fatigue)
    Four,
    /// Standard day
    Five,
    /// Extended day (good readiness and low fatigue)
    Six,
}

impl TargetCount {
    /// Exercise count as a number
    #[must_use]
    pub const fn get(self) -> usize {
        match self {
            Self::Four => 4,
            Self::Five => 5,
            Self::Six => 6,
        }
    }
}

impl TryFrom<usize> for TargetCount {
    type Error = PlanningError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        match value {
            4 => Ok(Self::Four),
            5 => Ok(Self::Five),
            6 => Ok(Self::Six),
            _ => Err(PlanningError::InvalidTargetCount { value }),
        }
    }
}

/// Adaptive exercise count from trend readiness and stored fatigue
///
/// Readiness >= 2 with fatigue <= 4 extends the day to six exercises;
/// negative readiness or fatigue >= 7 trims it to four; otherwise five.
#[must_use]
pub fn resolve_adaptive_target_count(
    readiness: Option<&ReadinessSignal>,
    fatigue_score: u8,
) -> TargetCount {
    let readiness_score = score_readiness(readiness);
    if readiness_score >= 2 && fatigue_score <= 4 {
        TargetCount::Six
    } else if readiness_score < 0 || fatigue_score >= 7 {
        TargetCount::Four
    } else {
        TargetCount::Five
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signal(sleep: f64, energy: f64, soreness: f64, stress: f64) -> ReadinessSignal {
        ReadinessSignal {
            sleep_hours: Some(sleep),
            energy: Some(energy),
            soreness: Some(soreness),
            stress: Some(stress),
        }
    }

    #[test]
    fn test_score_bounds_and_neutral_defaults() {
        assert_eq!(score_readiness(None), 0);
        assert_eq!(score_readiness(Some(&ReadinessSignal::default())), 0);
        assert_eq!(score_readiness(Some(&signal(8.0, 4.0, 1.0, 1.0))), 4);
        assert_eq!(score_readiness(Some(&signal(5.0, 1.0, 5.0, 5.0))), -4);
    }

    #[test]
    fn test_partial_signal_only_scores_reported_fields() {
        let partial = ReadinessSignal {
            sleep_hours: Some(6.0),
            energy: Some(4.0),
            ..ReadinessSignal::default()
        };
        assert_eq!(score_readiness(Some(&partial)), 0);
    }

    #[test]
    fn test_adaptive_target_count() {
        assert_eq!(
            resolve_adaptive_target_count(Some(&signal(8.0, 4.0, 1.0, 1.0)), 3),
            TargetCount::Six
        );
        assert_eq!(
            resolve_adaptive_target_count(Some(&signal(6.0, 2.0, 3.0, 3.0)), 5),
            TargetCount::Four
        );
        assert_eq!(
            resolve_adaptive_target_count(Some(&signal(7.0, 3.0, 2.0, 3.0)), 6),
            TargetCount::Five
        );
        assert_eq!(resolve_adaptive_target_count(None, 2), TargetCount::Five);
        assert_eq!(resolve_adaptive_target_count(None, 7), TargetCount::Four);
    }

    #[test]
    fn test_target_count_conversion() {
        assert_eq!(TargetCount::try_from(6).map(TargetCount::get), Ok(6));
        assert!(TargetCount::try_from(3).is_err());
    }
}
