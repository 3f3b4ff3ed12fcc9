// ABOUTME: ISO calendar date parsing and numeric date seeds
// ABOUTME: Default seeds are the YYYYMMDD digits of the requested date
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{Datelike, NaiveDate};
use longevity_core::errors::PlanningError;

/// ISO 8601 calendar date format used on the wire
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` date
///
/// # Errors
///
/// Returns `PlanningError::InvalidDate` if the value is not a valid calendar date
pub fn parse_iso_date(value: &str) -> Result<NaiveDate, PlanningError> {
    NaiveDate::parse_from_str(value.trim(), ISO_DATE_FORMAT).map_err(|_| {
        PlanningError::InvalidDate {
            value: value.to_owned(),
        }
    })
}

/// Numeric encoding of the ISO date string with separators removed
///
/// `2026-02-16` becomes `20260216`. Used as the seed whenever a caller omits
/// one, so repeated requests for the same date reproduce the same plan.
#[must_use]
pub fn date_seed(date: NaiveDate) -> i64 {
    i64::from(date.year()) * 10_000 + i64::from(date.month()) * 100 + i64::from(date.day())
}
