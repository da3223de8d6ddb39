//! Handlers for programs and their workout/exercise/set trees.
//!
//! Writes go through the reconciler in `wrkt_db`: create inserts the whole
//! tree, update makes the persisted tree match the payload exactly, delete
//! removes everything the program owns. Each runs in one transaction.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use wrkt_core::error::CoreError;
use wrkt_core::types::DbId;
use wrkt_db::models::program::{CreateProgram, UpdateProgram};
use wrkt_db::repositories::ProgramRepo;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

fn program_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Program",
        id,
    })
}

/// GET /api/v1/users/{user_id}/programs
///
/// List a user's programs, each with its full tree.
pub async fn list_for_user(
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let trees = ProgramRepo::list_trees_for_user(&state.pool, user_id).await?;
    tracing::debug!(user_id, count = trees.len(), "Listed programs");
    Ok(Json(DataResponse { data: trees }))
}

/// POST /api/v1/programs
///
/// Create a program together with its workouts, exercises and sets.
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateProgram>,
) -> AppResult<impl IntoResponse> {
    let program = ProgramRepo::create_tree(&state.pool, &input).await?;
    let tree = ProgramRepo::find_tree(&state.pool, program.id)
        .await?
        .ok_or_else(|| {
            AppError::InternalError(format!("Program {} vanished after create", program.id))
        })?;
    Ok((StatusCode::CREATED, Json(DataResponse { data: tree })))
}

/// GET /api/v1/programs/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let tree = ProgramRepo::find_tree(&state.pool, id)
        .await?
        .ok_or_else(|| program_not_found(id))?;
    Ok(Json(DataResponse { data: tree }))
}

/// PUT /api/v1/programs/{id}
///
/// Replace the program's fields and reconcile its tree against `workouts`.
/// Persisted children missing from the payload are deleted.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProgram>,
) -> AppResult<StatusCode> {
    ProgramRepo::update_tree(&state.pool, id, &input).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// DELETE /api/v1/programs/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if ProgramRepo::delete_tree(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(program_not_found(id))
    }
}
