//! Repository for the program aggregate: `programs`, `workouts`,
//! `exercises` and `sets`.

use std::collections::HashMap;

use sqlx::{PgConnection, PgPool};
use wrkt_core::types::DbId;

use crate::models::program::{
    CreateProgram, ExerciseDetail, ExerciseSet, ExerciseTree, Program, ProgramTree,
    UpdateProgram, Workout, WorkoutTree,
};
use crate::reconcile::{reconcile_children, ReconcileError, ReconcileStats, WorkoutLevel};
use crate::settle_transaction;

/// Column list for the `programs` table.
const COLUMNS: &str = "id, user_id, name, program_duration, duration_unit, days_per_week, \
    main_goal, created_at, updated_at";

/// Column list for the `workouts` table.
const WORKOUT_COLUMNS: &str = "id, program_id, name, sort_order";

/// Column list for exercises joined with the catalog (used in JOIN queries).
const EXERCISE_DETAIL_COLUMNS: &str = "e.id, e.workout_id, e.catalog_exercise_id, e.sort_order, \
    ec.name, mg.muscle, mg.muscle_group, mg.subcategory, eq.name AS equipment";

/// Column list for the `sets` table.
const SET_COLUMNS: &str = "id, exercise_id, reps, weight, sort_order";

/// Provides create, read, reconcile-update and cascading delete for programs.
pub struct ProgramRepo;

impl ProgramRepo {
    /// Insert a program and its whole tree in one transaction.
    ///
    /// Ids in the payload are ignored: every workout, exercise and set is
    /// inserted as a new row.
    pub async fn create_tree(
        pool: &PgPool,
        input: &CreateProgram,
    ) -> Result<Program, ReconcileError> {
        input.validate()?;

        let mut tx = pool.begin().await?;
        let result = Self::create_tree_inner(&mut *tx, input).await;
        let (program, stats) = settle_transaction(tx, result).await?;

        tracing::info!(
            program_id = program.id,
            user_id = program.user_id,
            inserted = stats.inserted,
            "Program created"
        );
        Ok(program)
    }

    /// Find a program row by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Program>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM programs WHERE id = $1");
        sqlx::query_as::<_, Program>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a user's program rows, oldest first.
    pub async fn list_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Program>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM programs WHERE user_id = $1 ORDER BY id");
        sqlx::query_as::<_, Program>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Find a program with its workouts, exercises and sets.
    pub async fn find_tree(pool: &PgPool, id: DbId) -> Result<Option<ProgramTree>, sqlx::Error> {
        match Self::find_by_id(pool, id).await? {
            Some(program) => {
                let mut trees = Self::assemble_trees(pool, vec![program]).await?;
                Ok(trees.pop())
            }
            None => Ok(None),
        }
    }

    /// List every program of a user with its full tree.
    pub async fn list_trees_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<ProgramTree>, sqlx::Error> {
        let programs = Self::list_for_user(pool, user_id).await?;
        Self::assemble_trees(pool, programs).await
    }

    /// Replace the program's scalar fields and reconcile its tree against
    /// `input.workouts`, all in one transaction.
    ///
    /// On any error the transaction is rolled back and persisted state is
    /// exactly what it was before the call.
    pub async fn update_tree(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProgram,
    ) -> Result<ReconcileStats, ReconcileError> {
        input.validate()?;

        let mut tx = pool.begin().await?;
        let result = Self::update_tree_inner(&mut *tx, id, input).await;
        let stats = settle_transaction(tx, result).await?;

        tracing::info!(
            program_id = id,
            inserted = stats.inserted,
            updated = stats.updated,
            deleted = stats.deleted,
            "Program reconciled"
        );
        Ok(stats)
    }

    /// Delete a program and everything it owns, including any active-program
    /// rows pointing at it.
    ///
    /// Returns `false` if the program does not exist.
    pub async fn delete_tree(pool: &PgPool, id: DbId) -> Result<bool, ReconcileError> {
        let mut tx = pool.begin().await?;
        let result = Self::delete_tree_inner(&mut *tx, id).await;
        let deleted = settle_transaction(tx, result).await?;

        if deleted {
            tracing::info!(program_id = id, "Program deleted");
        }
        Ok(deleted)
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    async fn create_tree_inner(
        conn: &mut PgConnection,
        input: &CreateProgram,
    ) -> Result<(Program, ReconcileStats), ReconcileError> {
        let query = format!(
            "INSERT INTO programs \
                (user_id, name, program_duration, duration_unit, days_per_week, main_goal) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {COLUMNS}"
        );
        let program = sqlx::query_as::<_, Program>(&query)
            .bind(input.user_id)
            .bind(input.name.trim())
            .bind(input.program_duration)
            .bind(&input.duration_unit)
            .bind(input.days_per_week)
            .bind(&input.main_goal)
            .fetch_one(&mut *conn)
            .await?;

        let workouts = input.detached_workouts();
        let stats = reconcile_children(&WorkoutLevel, conn, program.id, &workouts).await?;
        Ok((program, stats))
    }

    async fn update_tree_inner(
        conn: &mut PgConnection,
        id: DbId,
        input: &UpdateProgram,
    ) -> Result<ReconcileStats, ReconcileError> {
        let result = sqlx::query(
            "UPDATE programs SET \
                name = $2, \
                program_duration = $3, \
                duration_unit = $4, \
                days_per_week = $5, \
                main_goal = $6 \
             WHERE id = $1",
        )
        .bind(id)
        .bind(input.name.trim())
        .bind(input.program_duration)
        .bind(&input.duration_unit)
        .bind(input.days_per_week)
        .bind(&input.main_goal)
        .execute(&mut *conn)
        .await?;

        if result.rows_affected() == 0 {
            return Err(ReconcileError::ProgramNotFound(id));
        }

        reconcile_children(&WorkoutLevel, conn, id, &input.workouts).await
    }

    async fn delete_tree_inner(conn: &mut PgConnection, id: DbId) -> Result<bool, ReconcileError> {
        let exists =
            sqlx::query_scalar::<_, DbId>("SELECT id FROM programs WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *conn)
                .await?;
        if exists.is_none() {
            return Ok(false);
        }

        sqlx::query("DELETE FROM active_programs WHERE program_id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;

        sqlx::query(
            "DELETE FROM sets WHERE exercise_id IN ( \
                SELECT e.id FROM exercises e \
                JOIN workouts w ON w.id = e.workout_id \
                WHERE w.program_id = $1)",
        )
        .bind(id)
        .execute(&mut *conn)
        .await?;

        sqlx::query(
            "DELETE FROM exercises \
             WHERE workout_id IN (SELECT id FROM workouts WHERE program_id = $1)",
        )
        .bind(id)
        .execute(&mut *conn)
        .await?;

        sqlx::query("DELETE FROM workouts WHERE program_id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;

        sqlx::query("DELETE FROM programs WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;

        Ok(true)
    }

    /// Load workouts, exercises and sets for `programs` with one query per
    /// level and stitch them into trees, preserving the input order.
    async fn assemble_trees(
        pool: &PgPool,
        programs: Vec<Program>,
    ) -> Result<Vec<ProgramTree>, sqlx::Error> {
        if programs.is_empty() {
            return Ok(Vec::new());
        }
        let program_ids: Vec<DbId> = programs.iter().map(|p| p.id).collect();

        let query = format!(
            "SELECT {WORKOUT_COLUMNS} FROM workouts \
             WHERE program_id = ANY($1) \
             ORDER BY sort_order, id"
        );
        let workouts = sqlx::query_as::<_, Workout>(&query)
            .bind(&program_ids)
            .fetch_all(pool)
            .await?;
        let workout_ids: Vec<DbId> = workouts.iter().map(|w| w.id).collect();

        let query = format!(
            "SELECT {EXERCISE_DETAIL_COLUMNS} \
             FROM exercises e \
             JOIN exercise_catalog ec ON ec.id = e.catalog_exercise_id \
             JOIN muscle_groups mg ON mg.id = ec.muscle_group_id \
             JOIN equipment_catalog eq ON eq.id = ec.equipment_id \
             WHERE e.workout_id = ANY($1) \
             ORDER BY e.sort_order, e.id"
        );
        let exercises = sqlx::query_as::<_, ExerciseDetail>(&query)
            .bind(&workout_ids)
            .fetch_all(pool)
            .await?;
        let exercise_ids: Vec<DbId> = exercises.iter().map(|e| e.id).collect();

        let query = format!(
            "SELECT {SET_COLUMNS} FROM sets \
             WHERE exercise_id = ANY($1) \
             ORDER BY sort_order, id"
        );
        let sets = sqlx::query_as::<_, ExerciseSet>(&query)
            .bind(&exercise_ids)
            .fetch_all(pool)
            .await?;

        let mut sets_by_exercise: HashMap<DbId, Vec<ExerciseSet>> = HashMap::new();
        for set in sets {
            sets_by_exercise.entry(set.exercise_id).or_default().push(set);
        }

        let mut exercises_by_workout: HashMap<DbId, Vec<ExerciseTree>> = HashMap::new();
        for exercise in exercises {
            let sets = sets_by_exercise.remove(&exercise.id).unwrap_or_default();
            exercises_by_workout
                .entry(exercise.workout_id)
                .or_default()
                .push(ExerciseTree { exercise, sets });
        }

        let mut workouts_by_program: HashMap<DbId, Vec<WorkoutTree>> = HashMap::new();
        for workout in workouts {
            let exercises = exercises_by_workout.remove(&workout.id).unwrap_or_default();
            workouts_by_program
                .entry(workout.program_id)
                .or_default()
                .push(WorkoutTree { workout, exercises });
        }

        Ok(programs
            .into_iter()
            .map(|program| {
                let workouts = workouts_by_program.remove(&program.id).unwrap_or_default();
                ProgramTree { program, workouts }
            })
            .collect())
    }
}
