//! Route definitions for the muscle group and equipment reference tables.

use axum::routing::get;
use axum::Router;

use crate::handlers::reference;
use crate::state::AppState;

/// Routes mounted at `/muscles`.
pub fn muscles_router() -> Router<AppState> {
    Router::new()
        .route("/", get(reference::list_muscles))
        .route("/{id}", get(reference::get_muscle))
}

/// Routes mounted at `/equipments`.
pub fn equipment_router() -> Router<AppState> {
    Router::new()
        .route("/", get(reference::list_equipment))
        .route("/{id}", get(reference::get_equipment))
}
