//! Handlers for projects.
//!
//! `/profiles/{profile_id}/projects` for create and list, `/projects/{id}`
//! for single-project access, plus the cross-profile listings
//! `/projects?skill=`, `/projects/all` and `/projects/search`.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use portfolio_core::error::CoreError;
use portfolio_core::search::{
    resolve_limit, resolve_offset, DEFAULT_LIST_LIMIT, DEFAULT_SEARCH_LIMIT, MAX_LIST_LIMIT,
    MAX_SEARCH_LIMIT,
};
use portfolio_core::types::DbId;
use portfolio_db::models::project::{CreateProject, Project, UpdateProject};
use portfolio_db::repositories::ProjectRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::handlers::ensure_profile_exists;
use crate::middleware::validated_json::ValidatedJson;
use crate::query::{required_term, PaginationParams, SearchParams, SkillFilterParams};
use crate::state::AppState;

/// Response body for the filtered project listings.
#[derive(Debug, Serialize)]
pub struct ProjectListResponse {
    pub projects: Vec<Project>,
    pub total: usize,
}

impl From<Vec<Project>> for ProjectListResponse {
    fn from(projects: Vec<Project>) -> Self {
        let total = projects.len();
        Self { projects, total }
    }
}

/// POST /api/v1/profiles/{profile_id}/projects
pub async fn create(
    State(state): State<AppState>,
    Path(profile_id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<CreateProject>,
) -> AppResult<(StatusCode, Json<Project>)> {
    ensure_profile_exists(&state.pool, profile_id).await?;
    let project = ProjectRepo::create(&state.pool, profile_id, &input).await?;
    tracing::info!(project_id = project.id, profile_id, "Project created");
    Ok((StatusCode::CREATED, Json(project)))
}

/// GET /api/v1/profiles/{profile_id}/projects
pub async fn list_by_profile(
    State(state): State<AppState>,
    Path(profile_id): Path<DbId>,
) -> AppResult<Json<Vec<Project>>> {
    ensure_profile_exists(&state.pool, profile_id).await?;
    let projects = ProjectRepo::list_by_profile(&state.pool, profile_id).await?;
    Ok(Json(projects))
}

/// GET /api/v1/projects/all?offset=&limit=
pub async fn list_all(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Vec<Project>>> {
    let offset = resolve_offset(params.offset)?;
    let limit = resolve_limit(params.limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT)?;
    let projects = ProjectRepo::list(&state.pool, offset, limit).await?;
    Ok(Json(projects))
}

/// GET /api/v1/projects?skill=
///
/// Matches projects whose technologies contain `skill` exactly, including
/// case. `?skill=Python` does not match `["python"]`.
pub async fn list_by_skill(
    State(state): State<AppState>,
    Query(params): Query<SkillFilterParams>,
) -> AppResult<Json<ProjectListResponse>> {
    let skill = required_term("skill", &params.skill)?;
    let projects = ProjectRepo::list_by_technology(&state.pool, skill).await?;
    tracing::debug!(skill, count = projects.len(), "Projects filtered by technology");
    Ok(Json(projects.into()))
}

/// GET /api/v1/projects/search?q=&limit=
pub async fn search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<ProjectListResponse>> {
    let q = required_term("q", &params.q)?;
    let limit = resolve_limit(params.limit, DEFAULT_SEARCH_LIMIT, MAX_SEARCH_LIMIT)?;
    let projects = ProjectRepo::search(&state.pool, q, limit).await?;
    tracing::debug!(query = q, count = projects.len(), "Project search");
    Ok(Json(projects.into()))
}

/// GET /api/v1/projects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    Ok(Json(project))
}

/// PUT /api/v1/projects/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateProject>,
) -> AppResult<Json<Project>> {
    let project = ProjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;
    tracing::info!(project_id = id, "Project updated");
    Ok(Json(project))
}

/// DELETE /api/v1/projects/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if ProjectRepo::delete(&state.pool, id).await? {
        tracing::info!(project_id = id, "Project deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))
    }
}
