// ABOUTME: Slot template resolver filling movement-pattern slots from an exercise pool
// ABOUTME: Required slots that cannot be filled become notes, never errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Slot Template Resolver
//!
//! Each template emphasis defines an ordered list of slots. Only the first
//! `target` slots are used. Every slot takes the first unused candidate in a
//! deterministic order keyed by the slot name; if slots leave the selection
//! short, a fallback order over the emphasis's broader pattern set tops it up.

use crate::ordering::deterministic_order;
use crate::readiness::TargetCount;
use longevity_core::constants::notes;
use longevity_core::models::{
    ExerciseCategory, ExerciseDefinition, MovementPattern, TemplateEmphasis,
};
use std::collections::HashSet;
use tracing::debug;

use MovementPattern::{
    Balance, Carry, Core, Hinge, Lunge, Mobility, OverheadPull, OverheadPush, Pull, Push, Squat,
    Warmup,
};

const LOWER_FALLBACK: &[MovementPattern] =
    &[Squat, Hinge, Lunge, Core, Carry, Balance, Mobility, Warmup];
const PUSH_FALLBACK: &[MovementPattern] = &[
    Push,
    OverheadPush,
    Pull,
    OverheadPull,
    Core,
    Carry,
    Mobility,
    Warmup,
    Balance,
];
const PULL_FALLBACK: &[MovementPattern] = &[
    Pull,
    OverheadPull,
    Push,
    OverheadPush,
    Core,
    Carry,
    Mobility,
    Warmup,
    Balance,
];

const PUSH_PATTERNS: &[MovementPattern] = &[Push, OverheadPush];
const PULL_PATTERNS: &[MovementPattern] = &[Pull, OverheadPull];
const CORE_OR_MOBILITY: &[MovementPattern] = &[Core, Carry, Mobility, Warmup, Balance];

/// Extra candidate filter applied after the pattern check
pub type SlotPredicate = fn(&ExerciseDefinition) -> bool;

/// A named requirement within a template
#[derive(Debug, Clone, Copy)]
pub struct Slot {
    /// Slot name, used in seed keys and missing-slot notes
    pub name: &'static str,
    /// Acceptable movement patterns
    pub patterns: &'static [MovementPattern],
    /// Whether an unfilled slot is reported
    pub required: bool,
    /// Optional extra filter
    pub predicate: Option<SlotPredicate>,
}

impl Slot {
    const fn required(name: &'static str, patterns: &'static [MovementPattern]) -> Self {
        Self {
            name,
            patterns,
            required: true,
            predicate: None,
        }
    }

    const fn optional(name: &'static str, patterns: &'static [MovementPattern]) -> Self {
        Self {
            name,
            patterns,
            required: false,
            predicate: None,
        }
    }

    const fn with_predicate(mut self, predicate: SlotPredicate) -> Self {
        self.predicate = Some(predicate);
        self
    }

    /// Whether the exercise may fill this slot
    #[must_use]
    pub fn accepts(&self, exercise: &ExerciseDefinition) -> bool {
        self.patterns.contains(&exercise.movement_pattern)
            && self.predicate.is_none_or(|predicate| predicate(exercise))
    }
}

/// Ordered slots plus the fallback pattern set for one emphasis
#[derive(Debug, Clone)]
pub struct SlotTemplate {
    /// Slots in fill order
    pub slots: Vec<Slot>,
    /// Patterns eligible for fallback filling
    pub fallback_patterns: &'static [MovementPattern],
}

/// Exercises chosen by the resolver plus advisory notes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotSelection<'a> {
    /// Selected exercises, at most the target count, ids distinct
    pub selected: Vec<&'a ExerciseDefinition>,
    /// `Missing required slot: <name>` notes
    pub notes: Vec<String>,
}

/// Squats on a lower day must be compound and not a knee-extension isolation move
fn is_compound_squat(exercise: &ExerciseDefinition) -> bool {
    exercise.category == ExerciseCategory::Compound
        && !exercise.id.contains("leg-extension")
        && !exercise.name.to_lowercase().contains("extension")
}

/// Slot template for an emphasis at a target count
///
/// Lower days insert a required unilateral slot once the count reaches five.
#[must_use]
pub fn slot_template(emphasis: TemplateEmphasis, target: TargetCount) -> SlotTemplate {
    match emphasis {
        TemplateEmphasis::Lower => {
            let mut slots = vec![
                Slot::required("squat", &[Squat]).with_predicate(is_compound_squat),
                Slot::required("hinge", &[Hinge]),
                Slot::optional("core_or_carry", &[Core, Carry]),
                Slot::optional("stability", &[Balance, Mobility, Warmup]),
            ];
            if target >= TargetCount::Five {
                slots.insert(2, Slot::required("unilateral", &[Lunge]));
            }
            SlotTemplate {
                slots,
                fallback_patterns: LOWER_FALLBACK,
            }
        }
        TemplateEmphasis::Push => SlotTemplate {
            slots: vec![
                Slot::required("push_primary", PUSH_PATTERNS),
                Slot::required("push_secondary", PUSH_PATTERNS),
                Slot::optional("push_accessory", PUSH_PATTERNS),
                Slot::optional("pull_shoulder_health", PULL_PATTERNS),
                Slot::optional("core_or_mobility", CORE_OR_MOBILITY),
            ],
            fallback_patterns: PUSH_FALLBACK,
        },
        TemplateEmphasis::Pull => SlotTemplate {
            slots: vec![
                Slot::required("pull_primary", PULL_PATTERNS),
                Slot::required("pull_secondary", PULL_PATTERNS),
                Slot::optional("pull_accessory", PULL_PATTERNS),
                Slot::optional("push_joint_balance", PUSH_PATTERNS),
                Slot::optional("core_or_mobility", CORE_OR_MOBILITY),
            ],
            fallback_patterns: PULL_FALLBACK,
        },
    }
}

/// Fill the emphasis template from the pool
///
/// Identical pool, emphasis, target, and seed key always yield identical
/// selections and notes.
#[must_use]
pub fn resolve_slots<'a>(
    exercise_pool: &'a [ExerciseDefinition],
    emphasis: TemplateEmphasis,
    target: TargetCount,
    seed_key: &str,
) -> SlotSelection<'a> {
    let template = slot_template(emphasis, target);
    let seed_key = format!("{seed_key}:{}:{}", emphasis.as_str(), target.get());
    let target_count = target.get();

    let mut selected: Vec<&'a ExerciseDefinition> = Vec::with_capacity(target_count);
    let mut selected_ids: HashSet<&'a str> = HashSet::with_capacity(target_count);
    let mut slot_notes = Vec::new();

    for slot in template.slots.iter().take(target_count) {
        let candidates = exercise_pool
            .iter()
            .filter(|exercise| !selected_ids.contains(exercise.id.as_str()) && slot.accepts(exercise));
        let chosen = deterministic_order(candidates, &format!("{seed_key}:{}", slot.name))
            .into_iter()
            .next();

        match chosen {
            Some(exercise) => {
                selected_ids.insert(exercise.id.as_str());
                selected.push(exercise);
            }
            None if slot.required => {
                debug!(slot = slot.name, emphasis = emphasis.as_str(), "required slot unfilled");
                slot_notes.push(notes::missing_required_slot(slot.name));
            }
            None => {}
        }
    }

    if selected.len() < target_count {
        let fallback = exercise_pool.iter().filter(|exercise| {
            !selected_ids.contains(exercise.id.as_str())
                && template.fallback_patterns.contains(&exercise.movement_pattern)
        });
        let ordered = deterministic_order(fallback, &format!("{seed_key}:fallback"));
        let missing = target_count - selected.len();
        selected.extend(ordered.into_iter().take(missing));
    }

    SlotSelection {
        selected,
        notes: slot_notes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lower_template_grows_unilateral_slot() {
        let four: Vec<_> = slot_template(TemplateEmphasis::Lower, TargetCount::Four)
            .slots
            .iter()
            .map(|slot| slot.name)
            .collect();
        let five: Vec<_> = slot_template(TemplateEmphasis::Lower, TargetCount::Five)
            .slots
            .iter()
            .map(|slot| slot.name)
            .collect();

        assert_eq!(four, ["squat", "hinge", "core_or_carry", "stability"]);
        assert_eq!(
            five,
            ["squat", "hinge", "unilateral", "core_or_carry", "stability"]
        );
    }

    #[test]
    fn test_squat_slot_rejects_leg_extension() {
        let extension = ExerciseDefinition {
            id: "leg-extension-machine".to_owned(),
            name: "Leg Extension".to_owned(),
            category: ExerciseCategory::Compound,
            movement_pattern: Squat,
            muscle_group: "legs".to_owned(),
            equipment: "machine".to_owned(),
            difficulty: 1,
        };
        let squat_slot = slot_template(TemplateEmphasis::Lower, TargetCount::Four).slots[0];
        assert!(!squat_slot.accepts(&extension));

        let goblet = ExerciseDefinition {
            id: "squat-goblet".to_owned(),
            name: "Goblet Squat".to_owned(),
            ..extension
        };
        assert!(squat_slot.accepts(&goblet));
    }

    #[test]
    fn test_push_and_pull_require_two_primaries() {
        for emphasis in [TemplateEmphasis::Push, TemplateEmphasis::Pull] {
            let required = slot_template(emphasis, TargetCount::Six)
                .slots
                .iter()
                .filter(|slot| slot.required)
                .count();
            assert_eq!(required, 2);
        }
    }
}
