pub mod health;
pub mod profile;
pub mod profile_link;
pub mod project;
pub mod skill;
pub mod work_experience;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /profiles                                        list, create
/// /profiles/{id}                                   get, update, delete (cascades)
/// /profiles/{id}/complete                          profile with every collection
/// /profiles/{id}/skills                            list, create
/// /profiles/{id}/projects                          list, create
/// /profiles/{id}/work                              list, create
/// /profiles/{id}/links                             list, create
///
/// /skills/top                                      most common skill names
/// /skills/search                                   substring + optional level
/// /skills/{id}                                     get, update, delete
///
/// /projects                                        filter by exact technology (?skill=)
/// /projects/all                                    paginated listing
/// /projects/search                                 title/description/technology search
/// /projects/{id}                                   get, update, delete
///
/// /work/{id}                                       get, update, delete
/// /links/{id}                                      get, update, delete
///
/// /search                                          global search
/// /stats                                           per-entity row counts
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/profiles", profile::router())
        .nest("/skills", skill::router())
        .nest("/projects", project::router())
        .nest("/work", work_experience::router())
        .nest("/links", profile_link::router())
        .route("/search", get(handlers::search::global_search))
        .route("/stats", get(handlers::search::stats))
}
