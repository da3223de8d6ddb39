//! Route definitions for programs and their nested trees.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::program;
use crate::state::AppState;

/// Routes mounted at `/programs`.
///
/// ```text
/// POST   /          -> create
/// GET    /{id}      -> get_by_id
/// PUT    /{id}      -> update
/// DELETE /{id}      -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(program::create)).route(
        "/{id}",
        get(program::get_by_id)
            .put(program::update)
            .delete(program::delete),
    )
}
