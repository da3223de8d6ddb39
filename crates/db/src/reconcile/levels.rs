//! The three instantiations of [`ChildLevel`]: workouts under a program,
//! exercises under a workout, sets under an exercise.

use async_trait::async_trait;
use sqlx::PgConnection;
use wrkt_core::entity_ref::EntityRef;
use wrkt_core::types::DbId;

use super::{reconcile_children, ChildLevel, ReconcileError, ReconcileStats};
use crate::models::program::{IncomingExercise, IncomingSet, IncomingWorkout};

// ---------------------------------------------------------------------------
// Sets
// ---------------------------------------------------------------------------

/// Sets under one exercise. Leaf level.
pub struct SetLevel;

#[async_trait]
impl ChildLevel for SetLevel {
    type Item = IncomingSet;

    const ENTITY: &'static str = "Set";

    fn entity_ref(item: &IncomingSet) -> EntityRef {
        item.id
    }

    async fn existing_ids(
        &self,
        conn: &mut PgConnection,
        exercise_id: DbId,
    ) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "SELECT id FROM sets WHERE exercise_id = $1 ORDER BY sort_order, id",
        )
        .bind(exercise_id)
        .fetch_all(&mut *conn)
        .await
    }

    async fn delete_descendants(
        &self,
        _conn: &mut PgConnection,
        _id: DbId,
    ) -> Result<u64, sqlx::Error> {
        Ok(0)
    }

    async fn delete(&self, conn: &mut PgConnection, id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sets WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected())
    }

    async fn update(
        &self,
        conn: &mut PgConnection,
        exercise_id: DbId,
        id: DbId,
        item: &IncomingSet,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE sets SET reps = $1, weight = $2, sort_order = $3 \
             WHERE id = $4 AND exercise_id = $5",
        )
        .bind(item.reps)
        .bind(item.weight)
        .bind(item.sort_order)
        .bind(id)
        .bind(exercise_id)
        .execute(&mut *conn)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn insert(
        &self,
        conn: &mut PgConnection,
        exercise_id: DbId,
        item: &IncomingSet,
    ) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO sets (exercise_id, reps, weight, sort_order) \
             VALUES ($1, $2, $3, $4) \
             RETURNING id",
        )
        .bind(exercise_id)
        .bind(item.reps)
        .bind(item.weight)
        .bind(item.sort_order)
        .fetch_one(&mut *conn)
        .await
    }

    async fn reconcile_descendants(
        &self,
        _conn: &mut PgConnection,
        _id: DbId,
        _item: &IncomingSet,
    ) -> Result<ReconcileStats, ReconcileError> {
        Ok(ReconcileStats::default())
    }
}

// ---------------------------------------------------------------------------
// Exercises
// ---------------------------------------------------------------------------

/// Exercises under one workout.
pub struct ExerciseLevel;

#[async_trait]
impl ChildLevel for ExerciseLevel {
    type Item = IncomingExercise;

    const ENTITY: &'static str = "Exercise";

    fn entity_ref(item: &IncomingExercise) -> EntityRef {
        item.id
    }

    async fn existing_ids(
        &self,
        conn: &mut PgConnection,
        workout_id: DbId,
    ) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "SELECT id FROM exercises WHERE workout_id = $1 ORDER BY sort_order, id",
        )
        .bind(workout_id)
        .fetch_all(&mut *conn)
        .await
    }

    /// Bulk-delete the exercise's sets. There is no incoming list to diff
    /// against, so this bypasses the set level entirely.
    async fn delete_descendants(
        &self,
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sets WHERE exercise_id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected())
    }

    async fn delete(&self, conn: &mut PgConnection, id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM exercises WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected())
    }

    async fn update(
        &self,
        conn: &mut PgConnection,
        workout_id: DbId,
        id: DbId,
        item: &IncomingExercise,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE exercises SET catalog_exercise_id = $1, sort_order = $2 \
             WHERE id = $3 AND workout_id = $4",
        )
        .bind(item.catalog_exercise_id)
        .bind(item.sort_order)
        .bind(id)
        .bind(workout_id)
        .execute(&mut *conn)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn insert(
        &self,
        conn: &mut PgConnection,
        workout_id: DbId,
        item: &IncomingExercise,
    ) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO exercises (workout_id, catalog_exercise_id, sort_order) \
             VALUES ($1, $2, $3) \
             RETURNING id",
        )
        .bind(workout_id)
        .bind(item.catalog_exercise_id)
        .bind(item.sort_order)
        .fetch_one(&mut *conn)
        .await
    }

    async fn reconcile_descendants(
        &self,
        conn: &mut PgConnection,
        id: DbId,
        item: &IncomingExercise,
    ) -> Result<ReconcileStats, ReconcileError> {
        reconcile_children(&SetLevel, conn, id, &item.sets).await
    }
}

// ---------------------------------------------------------------------------
// Workouts
// ---------------------------------------------------------------------------

/// Workouts under one program.
pub struct WorkoutLevel;

#[async_trait]
impl ChildLevel for WorkoutLevel {
    type Item = IncomingWorkout;

    const ENTITY: &'static str = "Workout";

    fn entity_ref(item: &IncomingWorkout) -> EntityRef {
        item.id
    }

    async fn existing_ids(
        &self,
        conn: &mut PgConnection,
        program_id: DbId,
    ) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "SELECT id FROM workouts WHERE program_id = $1 ORDER BY sort_order, id",
        )
        .bind(program_id)
        .fetch_all(&mut *conn)
        .await
    }

    /// Sets of every exercise in the workout, then the exercises.
    async fn delete_descendants(
        &self,
        conn: &mut PgConnection,
        id: DbId,
    ) -> Result<u64, sqlx::Error> {
        let sets = sqlx::query(
            "DELETE FROM sets \
             WHERE exercise_id IN (SELECT id FROM exercises WHERE workout_id = $1)",
        )
        .bind(id)
        .execute(&mut *conn)
        .await?;

        let exercises = sqlx::query("DELETE FROM exercises WHERE workout_id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;

        Ok(sets.rows_affected() + exercises.rows_affected())
    }

    async fn delete(&self, conn: &mut PgConnection, id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM workouts WHERE id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await?;
        Ok(result.rows_affected())
    }

    async fn update(
        &self,
        conn: &mut PgConnection,
        program_id: DbId,
        id: DbId,
        item: &IncomingWorkout,
    ) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE workouts SET name = $1, sort_order = $2 \
             WHERE id = $3 AND program_id = $4",
        )
        .bind(&item.name)
        .bind(item.sort_order)
        .bind(id)
        .bind(program_id)
        .execute(&mut *conn)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn insert(
        &self,
        conn: &mut PgConnection,
        program_id: DbId,
        item: &IncomingWorkout,
    ) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO workouts (program_id, name, sort_order) \
             VALUES ($1, $2, $3) \
             RETURNING id",
        )
        .bind(program_id)
        .bind(&item.name)
        .bind(item.sort_order)
        .fetch_one(&mut *conn)
        .await
    }

    async fn reconcile_descendants(
        &self,
        conn: &mut PgConnection,
        id: DbId,
        item: &IncomingWorkout,
    ) -> Result<ReconcileStats, ReconcileError> {
        reconcile_children(&ExerciseLevel, conn, id, &item.exercises).await
    }
}
