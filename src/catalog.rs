// ABOUTME: Exercise catalog loading, validation, and the built-in default catalog
// ABOUTME: Only validated catalogs are handed to the planning engine
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Exercise catalog
//!
//! A catalog file is either a bare list of exercise definitions or an object
//! with an `exercises` list, in JSON (`.json`) or YAML (`.yaml`, `.yml`).

use longevity_core::constants::ranges;
use longevity_core::errors::{AppError, AppResult, PlanningError};
use longevity_core::models::{ExerciseCategory, ExerciseDefinition, MovementPattern};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::Path;
use tracing::{debug, info};

use ExerciseCategory::{Accessory, Compound, Conditioning, Mobility};
use MovementPattern as P;

/// Row of the built-in catalog: id, name, category, pattern, muscle group, equipment, difficulty
type CatalogRow = (
    &'static str,
    &'static str,
    ExerciseCategory,
    MovementPattern,
    &'static str,
    &'static str,
    u8,
);

/// Built-in catalog covering every slot template and active-day requirement
const BUILT_IN_EXERCISES: &[CatalogRow] = &[
    ("squat-goblet", "Goblet Squat", Compound, P::Squat, "legs", "dumbbell", 1),
    ("squat-back", "Back Squat", Compound, P::Squat, "legs", "barbell", 3),
    ("squat-leg-extension", "Leg Extension", Accessory, P::Squat, "legs", "machine", 1),
    ("hinge-rdl", "Romanian Deadlift", Compound, P::Hinge, "posterior_chain", "dumbbell", 2),
    ("hinge-hip-thrust", "Hip Thrust", Compound, P::Hinge, "glutes", "barbell", 2),
    ("lunge-reverse", "Reverse Lunge", Compound, P::Lunge, "legs", "dumbbell", 2),
    ("lunge-split-squat", "Split Squat", Accessory, P::Lunge, "legs", "bodyweight", 1),
    ("calf-raise-standing", "Standing Calf Raise", Accessory, P::Calf, "calves", "bodyweight", 1),
    ("balance-single-leg", "Single-Leg Balance Reach", Accessory, P::Balance, "legs", "bodyweight", 1),
    ("push-db-press", "Dumbbell Bench Press", Compound, P::Push, "chest", "dumbbell", 2),
    ("push-up", "Push-Up", Compound, P::Push, "chest", "bodyweight", 1),
    ("push-incline-db", "Incline Dumbbell Press", Accessory, P::Push, "chest", "dumbbell", 2),
    ("overhead-press-db", "Seated Dumbbell Shoulder Press", Compound, P::OverheadPush, "shoulders", "dumbbell", 2),
    ("overhead-landmine-press", "Half-Kneeling Landmine Press", Accessory, P::OverheadPush, "shoulders", "barbell", 2),
    ("pull-row-cable", "Seated Cable Row", Compound, P::Pull, "back", "cable", 1),
    ("pull-row-db", "One-Arm Dumbbell Row", Compound, P::Pull, "back", "dumbbell", 2),
    ("pull-face-pull", "Face Pull", Accessory, P::Pull, "shoulders", "cable", 1),
    ("overhead-pull-lat-pulldown", "Lat Pulldown", Compound, P::OverheadPull, "back", "cable", 1),
    ("overhead-pull-chin-up", "Chin-Up", Compound, P::OverheadPull, "back", "bodyweight", 3),
    ("core-plank", "Front Plank", Accessory, P::Core, "core", "bodyweight", 1),
    ("core-dead-bug", "Dead Bug", Accessory, P::Core, "core", "bodyweight", 1),
    ("core-pallof-press", "Pallof Press", Accessory, P::Core, "core", "cable", 2),
    ("carry-farmer", "Farmer Carry", Compound, P::Carry, "full_body", "dumbbell", 2),
    ("breathing-crocodile", "Crocodile Breathing", Mobility, P::Warmup, "core", "bodyweight", 1),
    ("mobility-hip-flow", "Hip Mobility Flow", Mobility, P::Mobility, "hips", "bodyweight", 1),
    ("mobility-worlds-greatest", "World's Greatest Stretch", Mobility, P::Mobility, "full_body", "bodyweight", 1),
    ("mobility-thoracic-rotation", "Thoracic Rotation", Mobility, P::Mobility, "upper_back", "bodyweight", 1),
    ("mobility-couch-stretch", "Couch Stretch", Mobility, P::Mobility, "hips", "bodyweight", 2),
    ("warmup-cat-cow", "Cat-Cow", Mobility, P::Warmup, "spine", "bodyweight", 1),
    ("warmup-ankle-rocks", "Ankle Rocks", Mobility, P::Warmup, "ankles", "bodyweight", 1),
    ("conditioning-incline-walk", "Incline Walk", Conditioning, P::Warmup, "full_body", "machine", 1),
    ("conditioning-bike-steady", "Bike Steady", Conditioning, P::Warmup, "full_body", "machine", 1),
    ("conditioning-row-steady", "Row Steady", Conditioning, P::Warmup, "full_body", "machine", 2),
    ("conditioning-elliptical", "Elliptical", Conditioning, P::Warmup, "full_body", "machine", 1),
    ("conditioning-hill-hike", "Hill Hike", Conditioning, P::Warmup, "full_body", "bodyweight", 3),
];

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    List(Vec<ExerciseDefinition>),
    Wrapped { exercises: Vec<ExerciseDefinition> },
}

impl CatalogFile {
    fn into_exercises(self) -> Vec<ExerciseDefinition> {
        match self {
            Self::List(exercises) | Self::Wrapped { exercises } => exercises,
        }
    }
}

/// Validated exercise catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExerciseCatalog {
    exercises: Vec<ExerciseDefinition>,
}

impl ExerciseCatalog {
    /// Validate and wrap a list of exercises
    ///
    /// # Errors
    ///
    /// Returns `PlanningError::InvalidCatalog` for an empty list, a blank id or
    /// name, or a difficulty outside 1..=3, and `PlanningError::DuplicateExercise`
    /// when an id repeats
    pub fn from_exercises(exercises: Vec<ExerciseDefinition>) -> Result<Self, PlanningError> {
        validate(&exercises)?;
        Ok(Self { exercises })
    }

    /// Catalog shipped with the planner
    #[must_use]
    pub fn built_in() -> Self {
        let exercises = BUILT_IN_EXERCISES
            .iter()
            .map(
                |&(id, name, category, movement_pattern, muscle_group, equipment, difficulty)| {
                    ExerciseDefinition {
                        id: id.to_owned(),
                        name: name.to_owned(),
                        category,
                        movement_pattern,
                        muscle_group: muscle_group.to_owned(),
                        equipment: equipment.to_owned(),
                        difficulty,
                    }
                },
            )
            .collect();
        Self { exercises }
    }

    /// Load a catalog file, choosing the parser by extension
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, the extension is not
    /// JSON or YAML, the content does not parse, or validation fails
    pub fn load(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path).map_err(|error| match error.kind() {
            io::ErrorKind::NotFound => AppError::not_found(format!("Catalog {}", path.display())),
            _ => AppError::internal(format!("Failed to read catalog {}: {error}", path.display())),
        })?;

        let extension = path
            .extension()
            .and_then(|extension| extension.to_str())
            .map(str::to_lowercase);
        let file: CatalogFile = match extension.as_deref() {
            Some("json") => serde_json::from_str(&content)?,
            Some("yaml" | "yml") => serde_yaml::from_str(&content)
                .map_err(|error| AppError::serialization(error.to_string()))?,
            _ => {
                return Err(AppError::invalid_input(format!(
                    "Unsupported catalog format for {}: expected .json, .yaml, or .yml",
                    path.display()
                )))
            }
        };

        let catalog = Self::from_exercises(file.into_exercises())?;
        info!(path = %path.display(), exercises = catalog.len(), "Loaded exercise catalog");
        Ok(catalog)
    }

    /// Load from `path`, or fall back to the built-in catalog
    ///
    /// # Errors
    ///
    /// Returns an error if a path is given and loading it fails
    pub fn load_or_built_in(path: Option<&Path>) -> AppResult<Self> {
        path.map_or_else(
            || {
                debug!("Using built-in exercise catalog");
                Ok(Self::built_in())
            },
            Self::load,
        )
    }

    /// Look up an exercise by id
    #[must_use]
    pub fn get(&self, exercise_id: &str) -> Option<&ExerciseDefinition> {
        self.exercises
            .iter()
            .find(|exercise| exercise.id == exercise_id)
    }

    /// Exercises in catalog order
    #[must_use]
    pub fn exercises(&self) -> &[ExerciseDefinition] {
        &self.exercises
    }

    /// Number of exercises
    #[must_use]
    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    /// Whether the catalog is empty (never true for a validated catalog)
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    /// Take ownership of the exercise list, e.g. to build an engine request
    #[must_use]
    pub fn into_exercises(self) -> Vec<ExerciseDefinition> {
        self.exercises
    }
}

fn validate(exercises: &[ExerciseDefinition]) -> Result<(), PlanningError> {
    if exercises.is_empty() {
        return Err(PlanningError::invalid_catalog("catalog has no exercises"));
    }

    let mut seen = HashSet::with_capacity(exercises.len());
    for exercise in exercises {
        if exercise.id.trim().is_empty() {
            return Err(PlanningError::invalid_catalog("exercise id must not be blank"));
        }
        if exercise.name.trim().is_empty() {
            return Err(PlanningError::invalid_catalog(format!(
                "exercise '{}' has a blank name",
                exercise.id
            )));
        }
        if !(ranges::MIN_DIFFICULTY..=ranges::MAX_DIFFICULTY).contains(&exercise.difficulty) {
            return Err(PlanningError::invalid_catalog(format!(
                "exercise '{}' has difficulty {}, expected 1 to 3",
                exercise.id, exercise.difficulty
            )));
        }
        if !seen.insert(exercise.id.as_str()) {
            return Err(PlanningError::DuplicateExercise {
                exercise_id: exercise.id.clone(),
            });
        }
    }

    Ok(())
}
