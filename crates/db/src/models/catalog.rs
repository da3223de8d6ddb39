//! Exercise catalog model.
//!
//! The catalog is read-only reference data seeded by migrations. Program
//! exercises point at it through `catalog_exercise_id`; catalog entries in
//! turn point at a muscle group and a piece of equipment.

use serde::Serialize;
use sqlx::FromRow;
use wrkt_core::types::DbId;

/// A row from `exercise_catalog` joined with its muscle group and equipment.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct CatalogExercise {
    pub id: DbId,
    pub name: String,
    pub muscle_group_id: DbId,
    pub equipment_id: DbId,
    pub muscle: String,
    pub muscle_group: String,
    pub subcategory: Option<String>,
    pub equipment: String,
}

/// A row from `muscle_groups`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct MuscleGroup {
    pub id: DbId,
    pub muscle: String,
    pub muscle_group: String,
    pub subcategory: Option<String>,
}

/// A row from `equipment_catalog`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Equipment {
    pub id: DbId,
    pub name: String,
}
