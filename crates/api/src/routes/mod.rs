pub mod active_program;
pub mod catalog;
pub mod health;
pub mod programs;
pub mod reference;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /programs                                        create (POST)
/// /programs/{id}                                   get tree, reconcile (PUT), delete
///
/// /users/{user_id}/programs                        list program trees
/// /users/{user_id}/active-program                  get, deactivate (DELETE)
///
/// /exercise-catalog                                list
/// /exercise-catalog/{id}                           get
/// /exercise-catalog/muscles/{muscle_id}            list by muscle group
/// /exercise-catalog/equipments/{equipment_id}      list by equipment
///
/// /muscles                                         list
/// /muscles/{id}                                    get
/// /equipments                                      list
/// /equipments/{id}                                 get
///
/// /active-program                                  activate (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/programs", programs::router())
        .nest("/users", users::router())
        .nest("/exercise-catalog", catalog::router())
        .nest("/muscles", reference::muscles_router())
        .nest("/equipments", reference::equipment_router())
        .nest("/active-program", active_program::router())
}
