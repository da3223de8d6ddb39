//! Program aggregate models and DTOs.
//!
//! A program owns workouts, a workout owns exercises (instances of catalog
//! entries) and an exercise owns sets. Row structs map one table each; the
//! `*Tree` structs are the nested read model; the `Incoming*` structs are the
//! nested write payload accepted by create and update.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use wrkt_core::coerce::deserialize_lenient_int;
use wrkt_core::entity_ref::EntityRef;
use wrkt_core::error::CoreError;
use wrkt_core::program::validate_program_fields;
use wrkt_core::reconcile::ensure_unique_existing;
use wrkt_core::types::{DbId, Timestamp};

/// A row from the `programs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Program {
    pub id: DbId,
    pub user_id: DbId,
    pub name: String,
    pub program_duration: i32,
    pub duration_unit: String,
    pub days_per_week: i32,
    pub main_goal: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `workouts` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Workout {
    pub id: DbId,
    pub program_id: DbId,
    pub name: String,
    #[serde(rename = "order")]
    pub sort_order: i32,
}

/// A row from the `exercises` table joined with its catalog entry.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ExerciseDetail {
    pub id: DbId,
    pub workout_id: DbId,
    pub catalog_exercise_id: DbId,
    #[serde(rename = "order")]
    pub sort_order: i32,
    pub name: String,
    pub muscle: String,
    pub muscle_group: String,
    pub subcategory: Option<String>,
    pub equipment: String,
}

/// A row from the `sets` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ExerciseSet {
    pub id: DbId,
    pub exercise_id: DbId,
    pub reps: i32,
    pub weight: i32,
    #[serde(rename = "order")]
    pub sort_order: i32,
}

/// An exercise with its sets, in `order`.
#[derive(Debug, Clone, Serialize)]
pub struct ExerciseTree {
    #[serde(flatten)]
    pub exercise: ExerciseDetail,
    pub sets: Vec<ExerciseSet>,
}

/// A workout with its exercises, in `order`.
#[derive(Debug, Clone, Serialize)]
pub struct WorkoutTree {
    #[serde(flatten)]
    pub workout: Workout,
    pub exercises: Vec<ExerciseTree>,
}

/// A program with its full owned tree.
#[derive(Debug, Clone, Serialize)]
pub struct ProgramTree {
    #[serde(flatten)]
    pub program: Program,
    pub workouts: Vec<WorkoutTree>,
}

/// Incoming set. `reps` and `weight` are read leniently: anything that is
/// not an integer becomes 0.
#[derive(Debug, Clone, Deserialize)]
pub struct IncomingSet {
    #[serde(default)]
    pub id: EntityRef,
    #[serde(default, deserialize_with = "deserialize_lenient_int")]
    pub reps: i32,
    #[serde(default, deserialize_with = "deserialize_lenient_int")]
    pub weight: i32,
    #[serde(default, rename = "order")]
    pub sort_order: i32,
}

/// Incoming exercise with its full list of sets.
#[derive(Debug, Clone, Deserialize)]
pub struct IncomingExercise {
    #[serde(default)]
    pub id: EntityRef,
    #[serde(alias = "catalogExerciseId")]
    pub catalog_exercise_id: DbId,
    #[serde(default, rename = "order")]
    pub sort_order: i32,
    #[serde(default)]
    pub sets: Vec<IncomingSet>,
}

/// Incoming workout with its full list of exercises.
#[derive(Debug, Clone, Deserialize)]
pub struct IncomingWorkout {
    #[serde(default)]
    pub id: EntityRef,
    pub name: String,
    #[serde(default, rename = "order")]
    pub sort_order: i32,
    #[serde(default)]
    pub exercises: Vec<IncomingExercise>,
}

/// DTO for creating a program together with its tree.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProgram {
    #[serde(alias = "userId")]
    pub user_id: DbId,
    pub name: String,
    #[serde(alias = "duration")]
    pub program_duration: i32,
    #[serde(alias = "durationUnit")]
    pub duration_unit: String,
    #[serde(alias = "daysPerWeek")]
    pub days_per_week: i32,
    #[serde(alias = "mainGoal")]
    pub main_goal: Option<String>,
    #[serde(default)]
    pub workouts: Vec<IncomingWorkout>,
}

/// DTO for replacing a program's scalar fields and reconciling its tree.
///
/// `workouts` is the complete desired list: persisted workouts missing from
/// it are deleted with everything beneath them. It is required so that a
/// payload without it cannot wipe the program.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProgram {
    pub name: String,
    #[serde(alias = "duration")]
    pub program_duration: i32,
    #[serde(alias = "durationUnit")]
    pub duration_unit: String,
    #[serde(alias = "daysPerWeek")]
    pub days_per_week: i32,
    #[serde(alias = "mainGoal")]
    pub main_goal: Option<String>,
    pub workouts: Vec<IncomingWorkout>,
}

impl CreateProgram {
    /// Ids are ignored on create, so only names and scalar fields are checked.
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_program_fields(
            &self.name,
            self.program_duration,
            &self.duration_unit,
            self.days_per_week,
        )?;
        validate_workout_names(&self.workouts)
    }

    /// The incoming tree with every id reset to [`EntityRef::New`].
    ///
    /// A create payload may carry ids from a tree that was read back; none
    /// of them may refer to an existing row of the new program.
    pub fn detached_workouts(&self) -> Vec<IncomingWorkout> {
        self.workouts
            .iter()
            .map(|workout| IncomingWorkout {
                id: EntityRef::New,
                exercises: workout
                    .exercises
                    .iter()
                    .map(|exercise| IncomingExercise {
                        id: EntityRef::New,
                        sets: exercise
                            .sets
                            .iter()
                            .map(|set| IncomingSet {
                                id: EntityRef::New,
                                ..set.clone()
                            })
                            .collect(),
                        ..exercise.clone()
                    })
                    .collect(),
                ..workout.clone()
            })
            .collect()
    }
}

impl UpdateProgram {
    pub fn validate(&self) -> Result<(), CoreError> {
        validate_program_fields(
            &self.name,
            self.program_duration,
            &self.duration_unit,
            self.days_per_week,
        )?;
        validate_tree(&self.workouts)
    }
}

fn validate_workout_names(workouts: &[IncomingWorkout]) -> Result<(), CoreError> {
    if workouts.iter().any(|w| w.name.trim().is_empty()) {
        return Err(CoreError::Validation(
            "Workout name must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Reject sibling lists that reference the same row twice.
fn validate_tree(workouts: &[IncomingWorkout]) -> Result<(), CoreError> {
    validate_workout_names(workouts)?;

    let refs: Vec<EntityRef> = workouts.iter().map(|w| w.id).collect();
    ensure_unique_existing(&refs)?;

    for workout in workouts {
        let refs: Vec<EntityRef> = workout.exercises.iter().map(|e| e.id).collect();
        ensure_unique_existing(&refs)?;

        for exercise in &workout.exercises {
            let refs: Vec<EntityRef> = exercise.sets.iter().map(|s| s.id).collect();
            ensure_unique_existing(&refs)?;
        }
    }
    Ok(())
}
