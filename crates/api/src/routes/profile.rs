//! Route definitions for profiles and their owned collections.

use axum::routing::get;
use axum::Router;

use crate::handlers::{profile, profile_link, project, search, skill, work_experience};
use crate::state::AppState;

/// Routes mounted at `/profiles`.
///
/// ```text
/// GET    /                        -> list
/// POST   /                        -> create
/// GET    /{id}                    -> get_by_id
/// PUT    /{id}                    -> update
/// DELETE /{id}                    -> delete
/// GET    /{id}/complete           -> complete_profile
/// GET    /{id}/skills             -> skill::list_by_profile
/// POST   /{id}/skills             -> skill::create
/// GET    /{id}/projects           -> project::list_by_profile
/// POST   /{id}/projects           -> project::create
/// GET    /{id}/work               -> work_experience::list_by_profile
/// POST   /{id}/work               -> work_experience::create
/// GET    /{id}/links              -> profile_link::list_by_profile
/// POST   /{id}/links              -> profile_link::create
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(profile::list).post(profile::create))
        .route(
            "/{id}",
            get(profile::get_by_id)
                .put(profile::update)
                .delete(profile::delete),
        )
        .route("/{id}/complete", get(search::complete_profile))
        .route(
            "/{id}/skills",
            get(skill::list_by_profile).post(skill::create),
        )
        .route(
            "/{id}/projects",
            get(project::list_by_profile).post(project::create),
        )
        .route(
            "/{id}/work",
            get(work_experience::list_by_profile).post(work_experience::create),
        )
        .route(
            "/{id}/links",
            get(profile_link::list_by_profile).post(profile_link::create),
        )
}
