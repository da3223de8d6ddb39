//! Route definitions for the read-only exercise catalog.

use axum::routing::get;
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

/// Routes mounted at `/exercise-catalog`.
///
/// ```text
/// GET /                           -> list
/// GET /{id}                       -> get_by_id
/// GET /muscles/{muscle_id}        -> list_by_muscle_group
/// GET /equipments/{equipment_id}  -> list_by_equipment
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(catalog::list))
        .route("/{id}", get(catalog::get_by_id))
        .route("/muscles/{muscle_id}", get(catalog::list_by_muscle_group))
        .route(
            "/equipments/{equipment_id}",
            get(catalog::list_by_equipment),
        )
}
