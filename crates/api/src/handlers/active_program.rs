//! Handlers for the program a user is currently following.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use wrkt_core::error::CoreError;
use wrkt_core::types::DbId;
use wrkt_db::models::active_program::{ActivateProgram, ActiveProgramWithTree};
use wrkt_db::repositories::{ActiveProgramRepo, ProgramRepo};

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/active-program
///
/// Activate a program for a user, replacing any current one.
pub async fn activate(
    State(state): State<AppState>,
    Json(input): Json<ActivateProgram>,
) -> AppResult<impl IntoResponse> {
    let active = ActiveProgramRepo::activate(&state.pool, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Program",
            id: input.program_id,
        }))?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: active })))
}

/// GET /api/v1/users/{user_id}/active-program
///
/// The active row with its program tree, or `{ "data": null }`.
pub async fn get_for_user(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let Some(active) = ActiveProgramRepo::find_active_for_user(&state.pool, user_id).await? else {
        return Ok(Json(DataResponse {
            data: None::<ActiveProgramWithTree>,
        }));
    };

    let data = ProgramRepo::find_tree(&state.pool, active.program_id)
        .await?
        .map(|program| ActiveProgramWithTree { active, program });
    Ok(Json(DataResponse { data }))
}

/// DELETE /api/v1/users/{user_id}/active-program
///
/// Returns the removed row, or `{ "data": null }` if there was none.
pub async fn deactivate(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let removed = ActiveProgramRepo::deactivate_for_user(&state.pool, user_id).await?;
    if let Some(ref row) = removed {
        tracing::info!(user_id, program_id = row.program_id, "Program deactivated");
    }
    Ok(Json(DataResponse { data: removed }))
}
