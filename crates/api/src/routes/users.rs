//! User-scoped routes.

use axum::routing::get;
use axum::Router;

use crate::handlers::{active_program, program};
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// GET    /{user_id}/programs          -> program::list_for_user
/// GET    /{user_id}/active-program    -> active_program::get_for_user
/// DELETE /{user_id}/active-program    -> active_program::deactivate
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{user_id}/programs", get(program::list_for_user))
        .route(
            "/{user_id}/active-program",
            get(active_program::get_for_user).delete(active_program::deactivate),
        )
}
