//! Repository for the read-only `equipment_catalog` reference table.

use sqlx::PgPool;
use wrkt_core::types::DbId;

use crate::models::catalog::Equipment;

pub struct EquipmentRepo;

impl EquipmentRepo {
    /// List all equipment ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Equipment>, sqlx::Error> {
        sqlx::query_as::<_, Equipment>("SELECT id, name FROM equipment_catalog ORDER BY name, id")
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Equipment>, sqlx::Error> {
        sqlx::query_as::<_, Equipment>("SELECT id, name FROM equipment_catalog WHERE id = $1")
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
