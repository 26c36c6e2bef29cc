//! Route definitions for skills.

use axum::routing::get;
use axum::Router;

use crate::handlers::{search, skill};
use crate::state::AppState;

/// Routes mounted at `/skills`.
///
/// ```text
/// GET    /top                     -> top_skills
/// GET    /search                  -> search_skills
/// GET    /{id}                    -> get_by_id
/// PUT    /{id}                    -> update
/// DELETE /{id}                    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/top", get(search::top_skills))
        .route("/search", get(search::search_skills))
        .route(
            "/{id}",
            get(skill::get_by_id).put(skill::update).delete(skill::delete),
        )
}
