// ABOUTME: Active day construction for weekly plans: zone2 cardio, mobility, and recovery
// ABOUTME: Recovery days fail hard when the pool lacks light conditioning, breathing, or mobility work
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::WeekContext;
use crate::ordering::{deterministic_order, hash_str};
use crate::prescription::{clamp_u32, is_time_like};
use chrono::NaiveDate;
use longevity_core::constants::{engine, notes, ranges};
use longevity_core::errors::PlanningError;
use longevity_core::models::{
    DayPlan, ExerciseCategory, ExerciseDefinition, GeneratedSession, MovementPattern,
    SessionExercise,
};
use std::collections::HashSet;
use tracing::trace;

/// Fatigue score at which active days favour recovery
const FATIGUE_PENALTY_SCORE: u8 = 7;
/// Average soreness or stress at which active days favour recovery
const TREND_PENALTY_LEVEL: f64 = 4.0;
/// Average energy at or below which mobility days get a breathing cue
const LOW_ENERGY_LEVEL: f64 = 2.0;
/// Highest difficulty allowed on a recovery day
const RECOVERY_MAX_DIFFICULTY: u8 = 2;
/// Most conditioning entries on a zone2 day
const ZONE2_MAX_EXERCISES: usize = 2;
/// Most drills on a mobility day
const MOBILITY_MAX_EXERCISES: usize = 5;
/// Seconds for timed mobility holds
const TIMED_HOLD_SECONDS: u32 = 30;

const ZONE2_INTENSITY: u8 = 6;
const MOBILITY_INTENSITY: u8 = 6;
const RECOVERY_INTENSITY: u8 = ranges::MIN_INTENSITY;

/// Conditioning names preferred for recovery days
const STEADY_CONDITIONING_KEYWORDS: &[&str] =
    &["walk", "bike steady", "incline walk", "row steady", "swim steady"];

const CONDITIONING_REQUIREMENT: &str = "at least one conditioning exercise with difficulty <= 2";
const BREATHING_REQUIREMENT: &str =
    "at least one breathing or core control exercise with difficulty <= 2";
const MOBILITY_REQUIREMENT: &str = "at least one mobility drill with difficulty <= 2";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ActiveDayKind {
    Zone2,
    Mobility,
    Recovery,
}

const STANDARD_ROTATION: [ActiveDayKind; 3] = [
    ActiveDayKind::Zone2,
    ActiveDayKind::Mobility,
    ActiveDayKind::Recovery,
];
const FATIGUED_ROTATION: [ActiveDayKind; 3] = [
    ActiveDayKind::Mobility,
    ActiveDayKind::Recovery,
    ActiveDayKind::Zone2,
];

/// Cardio modality inferred from an exercise's name and id
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Modality {
    Bike,
    Row,
    Elliptical,
    Swim,
    Walk,
    Other,
}

impl Modality {
    fn of(exercise: &ExerciseDefinition) -> Self {
        let token = exercise.search_token();
        let has = |keyword: &str| token.contains(keyword);
        if has("bike") || has("cycle") || has("spin") {
            Self::Bike
        } else if has("row") {
            Self::Row
        } else if has("elliptical") {
            Self::Elliptical
        } else if has("swim") {
            Self::Swim
        } else if has("incline") || has("walk") || has("hike") {
            Self::Walk
        } else {
            Self::Other
        }
    }
}

impl WeekContext<'_> {
    /// High fatigue or a sore/stressed trend
    fn is_fatigued(&self) -> bool {
        self.progression.fatigue_score >= FATIGUE_PENALTY_SCORE
            || self.readiness_trend.is_some_and(|trend| {
                trend
                    .avg_soreness
                    .is_some_and(|soreness| soreness >= TREND_PENALTY_LEVEL)
                    || trend
                        .avg_stress
                        .is_some_and(|stress| stress >= TREND_PENALTY_LEVEL)
            })
    }

    fn is_low_energy(&self) -> bool {
        self.readiness_trend
            .and_then(|trend| trend.avg_energy)
            .is_some_and(|energy| energy <= LOW_ENERGY_LEVEL)
    }
}

#[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)] // Safe: day index is below seven; remainder is below three
pub(super) fn build_active_day(
    context: &WeekContext<'_>,
    date: NaiveDate,
    day_index: usize,
) -> Result<DayPlan, PlanningError> {
    let fatigued = context.is_fatigued();
    let rotation = if fatigued {
        FATIGUED_ROTATION
    } else {
        STANDARD_ROTATION
    };
    let slot = context.base_seed.saturating_add(day_index as i64).unsigned_abs() % 3;
    let kind = rotation[slot as usize];
    trace!(%date, ?kind, fatigued, "active day type");

    let progression = context.progression;
    let volume = i32::from(progression.volume_level);
    let strength = i32::from(progression.strength_level);

    let day = match kind {
        ActiveDayKind::Zone2 => {
            let minutes = clamp_u32(30 + volume * 3 - i32::from(fatigued) * 8, 20, 60);
            DayPlan::Zone2 {
                date,
                minutes,
                notes: fatigued.then(|| notes::ZONE2_FATIGUED.to_owned()),
                session: zone2_session(context, date, minutes),
            }
        }
        ActiveDayKind::Mobility => DayPlan::Mobility {
            date,
            minutes: clamp_u32(18 + (volume + strength) / 2, 15, 35),
            notes: context
                .is_low_energy()
                .then(|| notes::MOBILITY_LOW_ENERGY.to_owned()),
            session: mobility_session(context, date),
        },
        ActiveDayKind::Recovery => {
            let minutes = clamp_u32(20 - i32::from(!fatigued) * 4, 12, 24);
            DayPlan::Recovery {
                date,
                minutes,
                notes: Some(notes::RECOVERY_DAY.to_owned()),
                session: recovery_session(context, date, minutes)?,
            }
        }
    };

    Ok(day)
}

fn session_of(exercises: Vec<SessionExercise>, notes: Vec<String>) -> GeneratedSession {
    GeneratedSession {
        exercises,
        engine_version: engine::SESSION_ENGINE_VERSION.to_owned(),
        notes,
    }
}

fn entry(exercise: &ExerciseDefinition, sets: u32, reps: u32, intensity: u8) -> SessionExercise {
    SessionExercise {
        exercise_id: exercise.id.clone(),
        name: exercise.name.clone(),
        sets,
        reps,
        intensity,
    }
}

/// Up to two conditioning exercises sharing one seeded modality
#[allow(clippy::cast_possible_truncation)] // Safe: modality count fits in u32
fn zone2_session(
    context: &WeekContext<'_>,
    date: NaiveDate,
    minutes: u32,
) -> Option<GeneratedSession> {
    let seed = context.base_seed;
    let conditioning = context
        .pool
        .iter()
        .filter(|exercise| exercise.category == ExerciseCategory::Conditioning);
    let ordered = deterministic_order(conditioning, &format!("zone2:{seed}:{date}"));
    if ordered.is_empty() {
        return None;
    }

    let mut modalities: Vec<Modality> = Vec::new();
    for exercise in &ordered {
        let modality = Modality::of(exercise);
        if !modalities.contains(&modality) {
            modalities.push(modality);
        }
    }
    let pick = hash_str(&format!("{date}:{seed}:modality")) % modalities.len() as u32;
    let modality = modalities[pick as usize];

    let exercises = ordered
        .into_iter()
        .filter(|exercise| Modality::of(exercise) == modality)
        .take(ZONE2_MAX_EXERCISES)
        .map(|exercise| entry(exercise, 1, minutes, ZONE2_INTENSITY))
        .collect();

    Some(session_of(exercises, vec![notes::ZONE2_PACE.to_owned()]))
}

/// Up to five seeded mobility or warm-up drills
fn mobility_session(context: &WeekContext<'_>, date: NaiveDate) -> Option<GeneratedSession> {
    let drills = context
        .pool
        .iter()
        .filter(|exercise| exercise.is_mobility_drill());
    let ordered = deterministic_order(
        drills,
        &format!("mobility:{}:{date}", context.base_seed),
    );
    if ordered.is_empty() {
        return None;
    }

    let exercises = ordered
        .into_iter()
        .take(MOBILITY_MAX_EXERCISES)
        .map(|exercise| {
            let token_seed = hash_str(&format!("{date}:{}:mobility", exercise.id));
            let reps = if is_time_like(exercise) {
                TIMED_HOLD_SECONDS
            } else {
                10 + token_seed % 3
            };
            entry(exercise, 2 + token_seed % 2, reps, MOBILITY_INTENSITY)
        })
        .collect();

    Some(session_of(exercises, Vec::new()))
}

/// One light conditioning piece, one breathing or core drill, and one or two light mobility drills
#[allow(clippy::cast_possible_truncation)] // Safe: hash remainder is 0 or 1
fn recovery_session(
    context: &WeekContext<'_>,
    date: NaiveDate,
    minutes: u32,
) -> Result<GeneratedSession, PlanningError> {
    let seed = context.base_seed;
    let light = |exercise: &&ExerciseDefinition| exercise.difficulty <= RECOVERY_MAX_DIFFICULTY;
    let mut used: HashSet<&str> = HashSet::new();
    let mut exercises = Vec::new();

    let conditioning = deterministic_order(
        context
            .pool
            .iter()
            .filter(light)
            .filter(|exercise| exercise.category == ExerciseCategory::Conditioning),
        &format!("recovery:conditioning:{seed}:{date}"),
    );
    let steady = conditioning.iter().copied().find(|exercise| {
        let name = exercise.name.to_lowercase();
        STEADY_CONDITIONING_KEYWORDS
            .iter()
            .any(|keyword| name.contains(keyword))
    });
    let cardio = steady
        .or_else(|| conditioning.first().copied())
        .ok_or_else(|| PlanningError::recovery_infeasible(date, CONDITIONING_REQUIREMENT))?;
    used.insert(cardio.id.as_str());
    exercises.push(entry(cardio, 1, minutes, RECOVERY_INTENSITY));

    let breathing = deterministic_order(
        context.pool.iter().filter(light).filter(|exercise| {
            exercise.search_token().contains("breathing")
                || exercise.movement_pattern == MovementPattern::Core
        }),
        &format!("recovery:breathing:{seed}:{date}"),
    )
    .into_iter()
    .find(|exercise| !used.contains(exercise.id.as_str()))
    .ok_or_else(|| PlanningError::recovery_infeasible(date, BREATHING_REQUIREMENT))?;
    used.insert(breathing.id.as_str());
    let token_seed = hash_str(&format!("{date}:{}:recovery:breathing", breathing.id));
    let breathing_reps = if token_seed % 2 == 0 {
        60
    } else {
        8 + token_seed % 5
    };
    exercises.push(entry(breathing, 2, breathing_reps, RECOVERY_INTENSITY));

    let mobility_target =
        1 + (hash_str(&format!("{date}:{seed}:recovery:mobility-count")) % 2) as usize;
    let mobility = deterministic_order(
        context
            .pool
            .iter()
            .filter(light)
            .filter(|exercise| exercise.category == ExerciseCategory::Mobility),
        &format!("recovery:mobility:{seed}:{date}"),
    );
    for drill in mobility
        .into_iter()
        .filter(|exercise| !used.contains(exercise.id.as_str()))
        .take(mobility_target)
    {
        let token_seed = hash_str(&format!("{date}:{}:recovery:mobility", drill.id));
        let reps = if is_time_like(drill) {
            TIMED_HOLD_SECONDS
        } else {
            10 + token_seed % 21
        };
        let intensity = RECOVERY_INTENSITY + u8::from(token_seed % 2 == 1);
        exercises.push(entry(drill, 2 + token_seed % 2, reps, intensity));
    }

    if exercises.len() < 3 {
        return Err(PlanningError::recovery_infeasible(date, MOBILITY_REQUIREMENT));
    }

    Ok(session_of(exercises, vec![notes::RECOVERY_SESSION.to_owned()]))
}
