//! Route definitions for profile links.

use axum::routing::get;
use axum::Router;

use crate::handlers::profile_link;
use crate::state::AppState;

/// Routes mounted at `/links`.
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{id}",
        get(profile_link::get_by_id)
            .put(profile_link::update)
            .delete(profile_link::delete),
    )
}
