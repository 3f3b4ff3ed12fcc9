// ABOUTME: Human-readable note text embedded in generated sessions and day plans
// ABOUTME: Centralized so persisted snapshots stay stable across refactors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Session note when readiness is below neutral
pub const REDUCED_INTENSITY: &str = "Reduced intensity due to readiness.";
/// Session note when stored fatigue is high
pub const MONITOR_FATIGUE: &str = "Monitor fatigue and consider deload if trend continues.";
/// Prefix for notes about unfilled required template slots
pub const MISSING_REQUIRED_SLOT_PREFIX: &str = "Missing required slot: ";

/// Zone 2 session note
pub const ZONE2_PACE: &str = "Zone 2 conversational pace.";
/// Zone 2 day note under elevated fatigue
pub const ZONE2_FATIGUED: &str = "Keep effort conversational (nasal-breathing pace).";
/// Mobility day note when average energy is low
pub const MOBILITY_LOW_ENERGY: &str = "Focus on hips, t-spine, and controlled breathing.";
/// Recovery day note
pub const RECOVERY_DAY: &str = "Easy walk and light stretching.";
/// Recovery session note
pub const RECOVERY_SESSION: &str = "Light effort only. Move easy and focus on breathing.";

/// Deload reason when high fatigue meets near-maximal effort
pub const DELOAD_HIGH_EFFORT: &str = "High fatigue with poor recovery markers (average RPE at or above 9)";
/// Deload reason when high fatigue meets poor completion
pub const DELOAD_LOW_COMPLETION: &str = "High fatigue with poor recovery markers (completion below 80%)";
/// Deload reason when progression can continue
pub const DELOAD_NOT_NEEDED: &str = "Progression can continue";

/// Build the note recorded for a required slot with no candidate
#[must_use]
pub fn missing_required_slot(slot: &str) -> String {
    format!("{MISSING_REQUIRED_SLOT_PREFIX}{slot}")
}
