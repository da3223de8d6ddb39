//! Repository for the read-only `muscle_groups` reference table.

use sqlx::PgPool;
use wrkt_core::types::DbId;

use crate::models::catalog::MuscleGroup;

/// Column list for the `muscle_groups` table.
const COLUMNS: &str = "id, muscle, muscle_group, subcategory";

pub struct MuscleGroupRepo;

impl MuscleGroupRepo {
    /// List all muscle groups ordered by muscle name.
    pub async fn list(pool: &PgPool) -> Result<Vec<MuscleGroup>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM muscle_groups ORDER BY muscle, id");
        sqlx::query_as::<_, MuscleGroup>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<MuscleGroup>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM muscle_groups WHERE id = $1");
        sqlx::query_as::<_, MuscleGroup>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
