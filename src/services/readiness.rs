// ABOUTME: Daily readiness entries and trailing-window trend aggregation
// ABOUTME: Produces the averaged trend the weekly planner consumes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Days, NaiveDate};
use longevity_core::constants::defaults;
use longevity_core::errors::{AppError, AppResult};
use longevity_core::models::{ReadinessSignal, ReadinessTrend};
use serde::{Deserialize, Serialize};

/// Most hours of sleep accepted for one night
const MAX_SLEEP_HOURS: f64 = 24.0;
/// Self-report scale bounds for energy, soreness, and stress
const SCALE_MIN: u8 = 1;
const SCALE_MAX: u8 = 5;

/// One day's readiness self-report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessEntry {
    /// Day of the report
    pub date: NaiveDate,
    /// Hours slept (0-24)
    pub sleep_hours: f64,
    /// Energy (1-5)
    pub energy: u8,
    /// Soreness (1-5)
    pub soreness: u8,
    /// Stress (1-5)
    pub stress: u8,
    /// Free-form notes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ReadinessEntry {
    /// Check every field against its scale
    ///
    /// # Errors
    ///
    /// Returns an invalid-input error naming the first out-of-range field
    pub fn validate(&self) -> AppResult<()> {
        if !(0.0..=MAX_SLEEP_HOURS).contains(&self.sleep_hours) {
            return Err(AppError::invalid_input(format!(
                "sleepHours must be between 0 and 24, got {}",
                self.sleep_hours
            )));
        }
        for (field, value) in [
            ("energy", self.energy),
            ("soreness", self.soreness),
            ("stress", self.stress),
        ] {
            if !(SCALE_MIN..=SCALE_MAX).contains(&value) {
                return Err(AppError::invalid_input(format!(
                    "{field} must be between 1 and 5, got {value}"
                )));
            }
        }
        Ok(())
    }

    /// The entry as a single-day readiness signal
    #[must_use]
    pub fn as_signal(&self) -> ReadinessSignal {
        ReadinessSignal {
            sleep_hours: Some(self.sleep_hours),
            energy: Some(f64::from(self.energy)),
            soreness: Some(f64::from(self.soreness)),
            stress: Some(f64::from(self.stress)),
        }
    }
}

/// Seven-day trailing trend ending on `as_of`
#[must_use]
pub fn readiness_trend(entries: &[ReadinessEntry], as_of: NaiveDate) -> Option<ReadinessTrend> {
    readiness_trend_with_window(entries, as_of, defaults::READINESS_TREND_DAYS)
}

/// Averages over entries dated within the `window_days` days ending on `as_of`
///
/// Returns `None` when no entry falls inside the window.
#[must_use]
#[allow(clippy::cast_precision_loss)] // Safe: entry counts are small
pub fn readiness_trend_with_window(
    entries: &[ReadinessEntry],
    as_of: NaiveDate,
    window_days: i64,
) -> Option<ReadinessTrend> {
    let span = u64::try_from(window_days.saturating_sub(1)).unwrap_or(0);
    let window_start = as_of.checked_sub_days(Days::new(span)).unwrap_or(NaiveDate::MIN);

    let in_window: Vec<&ReadinessEntry> = entries
        .iter()
        .filter(|entry| entry.date >= window_start && entry.date <= as_of)
        .collect();
    if in_window.is_empty() {
        return None;
    }

    let count = in_window.len() as f64;
    let average = |value: fn(&ReadinessEntry) -> f64| {
        Some(in_window.iter().map(|entry| value(*entry)).sum::<f64>() / count)
    };

    Some(ReadinessTrend {
        avg_sleep: average(|entry| entry.sleep_hours),
        avg_energy: average(|entry| f64::from(entry.energy)),
        avg_soreness: average(|entry| f64::from(entry.soreness)),
        avg_stress: average(|entry| f64::from(entry.stress)),
    })
}
