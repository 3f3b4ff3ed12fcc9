// ABOUTME: Monday-anchored week ranges for weekly plan requests
// ABOUTME: Sunday belongs to the week that started six days earlier
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Inclusive Monday-to-Sunday range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeekRange {
    /// Monday
    pub start: NaiveDate,
    /// Sunday
    pub end: NaiveDate,
}

impl WeekRange {
    /// Whether `date` falls inside the week
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        (self.start..=self.end).contains(&date)
    }

    /// The seven dates of the week in order
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |date| *date <= end)
    }
}

/// The Monday-anchored week containing `date`
///
/// Dates at the edge of the calendar range clamp to the representable bounds.
#[must_use]
pub fn week_range(date: NaiveDate) -> WeekRange {
    let offset = u64::from(date.weekday().num_days_from_monday());
    let start = date.checked_sub_days(Days::new(offset)).unwrap_or(date);
    let end = start.checked_add_days(Days::new(6)).unwrap_or(NaiveDate::MAX);
    WeekRange { start, end }
}
