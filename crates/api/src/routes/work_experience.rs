//! Route definitions for work experience entries.

use axum::routing::get;
use axum::Router;

use crate::handlers::work_experience;
use crate::state::AppState;

/// Routes mounted at `/work`.
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{id}",
        get(work_experience::get_by_id)
            .put(work_experience::update)
            .delete(work_experience::delete),
    )
}
