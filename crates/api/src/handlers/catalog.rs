//! Handlers for the `/exercise-catalog` resource.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use wrkt_core::error::CoreError;
use wrkt_core::types::DbId;
use wrkt_db::repositories::CatalogRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/exercise-catalog
pub async fn list(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let entries = CatalogRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: entries }))
}

/// GET /api/v1/exercise-catalog/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let entry = CatalogRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "CatalogExercise",
            id,
        }))?;
    Ok(Json(DataResponse { data: entry }))
}

/// GET /api/v1/exercise-catalog/muscles/{muscle_id}
///
/// An unknown muscle group yields an empty list.
pub async fn list_by_muscle_group(
    State(state): State<AppState>,
    Path(muscle_group_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let entries = CatalogRepo::list_by_muscle_group(&state.pool, muscle_group_id).await?;
    Ok(Json(DataResponse { data: entries }))
}

/// GET /api/v1/exercise-catalog/equipments/{equipment_id}
pub async fn list_by_equipment(
    State(state): State<AppState>,
    Path(equipment_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let entries = CatalogRepo::list_by_equipment(&state.pool, equipment_id).await?;
    Ok(Json(DataResponse { data: entries }))
}
