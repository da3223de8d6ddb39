use axum::routing::post;
use axum::Router;

use crate::handlers::active_program;
use crate::state::AppState;

/// Routes mounted at `/active-program`.
///
/// ```text
/// POST /    -> activate
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", post(active_program::activate))
}
