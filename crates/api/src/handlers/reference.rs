//! Handlers for the `/muscles` and `/equipments` reference resources.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use wrkt_core::error::CoreError;
use wrkt_core::types::DbId;
use wrkt_db::repositories::{EquipmentRepo, MuscleGroupRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/muscles
pub async fn list_muscles(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let muscles = MuscleGroupRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: muscles }))
}

/// GET /api/v1/muscles/{id}
pub async fn get_muscle(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let muscle = MuscleGroupRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "MuscleGroup",
            id,
        }))?;
    Ok(Json(DataResponse { data: muscle }))
}

/// GET /api/v1/equipments
pub async fn list_equipment(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let equipment = EquipmentRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: equipment }))
}

/// GET /api/v1/equipments/{id}
pub async fn get_equipment(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let equipment = EquipmentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Equipment",
            id,
        }))?;
    Ok(Json(DataResponse { data: equipment }))
}
