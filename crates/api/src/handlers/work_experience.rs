//! Handlers for work experience entries.
//!
//! `/profiles/{profile_id}/work` for create and list, `/work/{id}` for the rest.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use portfolio_core::error::CoreError;
use portfolio_core::types::DbId;
use portfolio_db::models::work_experience::{
    CreateWorkExperience, UpdateWorkExperience, WorkExperience,
};
use portfolio_db::repositories::WorkExperienceRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::ensure_profile_exists;
use crate::middleware::validated_json::ValidatedJson;
use crate::state::AppState;

/// POST /api/v1/profiles/{profile_id}/work
pub async fn create(
    State(state): State<AppState>,
    Path(profile_id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<CreateWorkExperience>,
) -> AppResult<(StatusCode, Json<WorkExperience>)> {
    ensure_profile_exists(&state.pool, profile_id).await?;
    let work = WorkExperienceRepo::create(&state.pool, profile_id, &input).await?;
    tracing::info!(work_experience_id = work.id, profile_id, "Work experience created");
    Ok((StatusCode::CREATED, Json(work)))
}

/// GET /api/v1/profiles/{profile_id}/work
///
/// Most recent `start_date` first.
pub async fn list_by_profile(
    State(state): State<AppState>,
    Path(profile_id): Path<DbId>,
) -> AppResult<Json<Vec<WorkExperience>>> {
    ensure_profile_exists(&state.pool, profile_id).await?;
    let entries = WorkExperienceRepo::list_by_profile(&state.pool, profile_id).await?;
    Ok(Json(entries))
}

/// GET /api/v1/work/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<WorkExperience>> {
    let work = WorkExperienceRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "WorkExperience",
            id,
        }))?;
    Ok(Json(work))
}

/// PUT /api/v1/work/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateWorkExperience>,
) -> AppResult<Json<WorkExperience>> {
    let work = WorkExperienceRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "WorkExperience",
            id,
        }))?;
    tracing::info!(work_experience_id = id, "Work experience updated");
    Ok(Json(work))
}

/// DELETE /api/v1/work/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if WorkExperienceRepo::delete(&state.pool, id).await? {
        tracing::info!(work_experience_id = id, "Work experience deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "WorkExperience",
            id,
        }))
    }
}
