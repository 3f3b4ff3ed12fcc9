// ABOUTME: Readiness signal and readiness trend models from athlete self-reports
// ABOUTME: Absent fields are neutral and never penalize or reward a session
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

/// A single day's (or trend-averaged) readiness self-report
///
/// Energy, soreness, and stress use a 1-5 scale. Any field may be absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessSignal {
    /// Hours slept
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sleep_hours: Option<f64>,
    /// Energy (1-5, higher is better)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub energy: Option<f64>,
    /// Soreness (1-5, lower is better)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub soreness: Option<f64>,
    /// Stress (1-5, lower is better)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stress: Option<f64>,
}

/// Averages of recent readiness entries, computed by the caller
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadinessTrend {
    /// Average hours slept
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_sleep: Option<f64>,
    /// Average energy
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_energy: Option<f64>,
    /// Average soreness
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_soreness: Option<f64>,
    /// Average stress
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avg_stress: Option<f64>,
}

impl ReadinessTrend {
    /// View the trend as a readiness signal for scoring
    #[must_use]
    pub const fn as_signal(&self) -> ReadinessSignal {
        ReadinessSignal {
            sleep_hours: self.avg_sleep,
            energy: self.avg_energy,
            soreness: self.avg_soreness,
            stress: self.avg_stress,
        }
    }
}
