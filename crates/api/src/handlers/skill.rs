//! Handlers for skills.
//!
//! Creation and listing are nested under the owning profile:
//! `/profiles/{profile_id}/skills`. Single-skill reads and writes live at
//! `/skills/{id}`. The aggregation and search endpoints are in
//! [`crate::handlers::search`].

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use portfolio_core::error::CoreError;
use portfolio_core::types::DbId;
use portfolio_db::models::skill::{CreateSkill, Skill, UpdateSkill};
use portfolio_db::repositories::SkillRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::ensure_profile_exists;
use crate::middleware::validated_json::ValidatedJson;
use crate::state::AppState;

/// POST /api/v1/profiles/{profile_id}/skills
pub async fn create(
    State(state): State<AppState>,
    Path(profile_id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<CreateSkill>,
) -> AppResult<(StatusCode, Json<Skill>)> {
    ensure_profile_exists(&state.pool, profile_id).await?;
    let skill = SkillRepo::create(&state.pool, profile_id, &input).await?;
    tracing::info!(skill_id = skill.id, profile_id, "Skill created");
    Ok((StatusCode::CREATED, Json(skill)))
}

/// GET /api/v1/profiles/{profile_id}/skills
pub async fn list_by_profile(
    State(state): State<AppState>,
    Path(profile_id): Path<DbId>,
) -> AppResult<Json<Vec<Skill>>> {
    ensure_profile_exists(&state.pool, profile_id).await?;
    let skills = SkillRepo::list_by_profile(&state.pool, profile_id).await?;
    Ok(Json(skills))
}

/// GET /api/v1/skills/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Skill>> {
    let skill = SkillRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Skill", id }))?;
    Ok(Json(skill))
}

/// PUT /api/v1/skills/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateSkill>,
) -> AppResult<Json<Skill>> {
    let skill = SkillRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Skill", id }))?;
    tracing::info!(skill_id = id, "Skill updated");
    Ok(Json(skill))
}

/// DELETE /api/v1/skills/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if SkillRepo::delete(&state.pool, id).await? {
        tracing::info!(skill_id = id, "Skill deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Skill", id }))
    }
}
