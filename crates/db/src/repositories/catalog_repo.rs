//! Repository for the read-only exercise catalog.

use sqlx::PgPool;
use wrkt_core::types::DbId;

use crate::models::catalog::CatalogExercise;

/// Column list for catalog entries joined with muscle group and equipment.
const COLUMNS: &str = "ec.id, ec.name, ec.muscle_group_id, ec.equipment_id, \
    mg.muscle, mg.muscle_group, mg.subcategory, eq.name AS equipment";

/// Shared FROM/JOIN clause.
const FROM_JOINED: &str = "FROM exercise_catalog ec \
    JOIN muscle_groups mg ON mg.id = ec.muscle_group_id \
    JOIN equipment_catalog eq ON eq.id = ec.equipment_id";

/// Read access to the exercise catalog.
pub struct CatalogRepo;

impl CatalogRepo {
    /// List all catalog exercises ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<CatalogExercise>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} {FROM_JOINED} ORDER BY ec.name, ec.id");
        sqlx::query_as::<_, CatalogExercise>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a catalog exercise by its ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<CatalogExercise>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} {FROM_JOINED} WHERE ec.id = $1");
        sqlx::query_as::<_, CatalogExercise>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List catalog exercises that train the given muscle group.
    pub async fn list_by_muscle_group(
        pool: &PgPool,
        muscle_group_id: DbId,
    ) -> Result<Vec<CatalogExercise>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} {FROM_JOINED} WHERE ec.muscle_group_id = $1 ORDER BY ec.name, ec.id"
        );
        sqlx::query_as::<_, CatalogExercise>(&query)
            .bind(muscle_group_id)
            .fetch_all(pool)
            .await
    }

    /// List catalog exercises performed with the given equipment.
    pub async fn list_by_equipment(
        pool: &PgPool,
        equipment_id: DbId,
    ) -> Result<Vec<CatalogExercise>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} {FROM_JOINED} WHERE ec.equipment_id = $1 ORDER BY ec.name, ec.id"
        );
        sqlx::query_as::<_, CatalogExercise>(&query)
            .bind(equipment_id)
            .fetch_all(pool)
            .await
    }
}
