//! Active program model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use wrkt_core::types::{DbId, Timestamp};

use super::program::ProgramTree;

/// A row from the `active_programs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ActiveProgram {
    pub id: DbId,
    pub user_id: DbId,
    pub program_id: DbId,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
    pub is_active: bool,
    pub created_at: Timestamp,
}

/// The active row together with the program tree it points at.
#[derive(Debug, Clone, Serialize)]
pub struct ActiveProgramWithTree {
    #[serde(flatten)]
    pub active: ActiveProgram,
    pub program: ProgramTree,
}

/// DTO for activating a program for a user.
#[derive(Debug, Clone, Deserialize)]
pub struct ActivateProgram {
    #[serde(alias = "userId")]
    pub user_id: DbId,
    #[serde(alias = "programId")]
    pub program_id: DbId,
}
