//! Repository for the `active_programs` table.

use sqlx::{PgConnection, PgPool};
use wrkt_core::program::compute_end_date;
use wrkt_core::types::DbId;

use crate::models::active_program::{ActivateProgram, ActiveProgram};
use crate::reconcile::ReconcileError;
use crate::settle_transaction;

/// Column list for the `active_programs` table.
const COLUMNS: &str = "id, user_id, program_id, start_date, end_date, is_active, created_at";

/// Tracks which program each user is currently following.
pub struct ActiveProgramRepo;

impl ActiveProgramRepo {
    /// Make `input.program_id` the user's active program, replacing any
    /// current one. The end date follows from the program's duration.
    ///
    /// Concurrent activations for one user run one after the other; the
    /// last to commit wins.
    ///
    /// Returns `None` if the program does not exist.
    pub async fn activate(
        pool: &PgPool,
        input: &ActivateProgram,
    ) -> Result<Option<ActiveProgram>, ReconcileError> {
        let mut tx = pool.begin().await?;
        let result = Self::activate_inner(&mut *tx, input).await;
        let active = settle_transaction(tx, result).await?;

        if let Some(ref active) = active {
            tracing::info!(
                user_id = active.user_id,
                program_id = active.program_id,
                end_date = %active.end_date,
                "Program activated"
            );
        }
        Ok(active)
    }

    /// The user's current active program, if any.
    pub async fn find_active_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<ActiveProgram>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM active_programs \
             WHERE user_id = $1 AND is_active = true \
             ORDER BY start_date DESC \
             LIMIT 1"
        );
        sqlx::query_as::<_, ActiveProgram>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Remove the user's active program row, returning it if there was one.
    pub async fn deactivate_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Option<ActiveProgram>, sqlx::Error> {
        let query = format!(
            "DELETE FROM active_programs \
             WHERE user_id = $1 AND is_active = true \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ActiveProgram>(&query)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    async fn activate_inner(
        conn: &mut PgConnection,
        input: &ActivateProgram,
    ) -> Result<Option<ActiveProgram>, ReconcileError> {
        // Serializes activations per user so the deactivate-then-insert pair
        // never races on `uq_active_programs_user_active`. An unknown user
        // locks nothing and is rejected by the insert's foreign key.
        sqlx::query("SELECT id FROM users WHERE id = $1 FOR UPDATE")
            .bind(input.user_id)
            .fetch_optional(&mut *conn)
            .await?;

        let program = sqlx::query_as::<_, (i32, String)>(
            "SELECT program_duration, duration_unit FROM programs WHERE id = $1",
        )
        .bind(input.program_id)
        .fetch_optional(&mut *conn)
        .await?;

        let Some((program_duration, duration_unit)) = program else {
            return Ok(None);
        };

        let start_date = chrono::Utc::now();
        let end_date = compute_end_date(start_date, program_duration, &duration_unit)?;

        sqlx::query(
            "UPDATE active_programs SET is_active = false \
             WHERE user_id = $1 AND is_active = true",
        )
        .bind(input.user_id)
        .execute(&mut *conn)
        .await?;

        let query = format!(
            "INSERT INTO active_programs (user_id, program_id, start_date, end_date, is_active) \
             VALUES ($1, $2, $3, $4, true) \
             RETURNING {COLUMNS}"
        );
        let active = sqlx::query_as::<_, ActiveProgram>(&query)
            .bind(input.user_id)
            .bind(input.program_id)
            .bind(start_date)
            .bind(end_date)
            .fetch_one(&mut *conn)
            .await?;

        Ok(Some(active))
    }
}
