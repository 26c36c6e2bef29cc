//! Handlers for external profile links (GitHub, LinkedIn and so on).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use portfolio_core::error::CoreError;
use portfolio_core::types::DbId;
use portfolio_db::models::profile_link::{CreateProfileLink, ProfileLink, UpdateProfileLink};
use portfolio_db::repositories::ProfileLinkRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::ensure_profile_exists;
use crate::middleware::validated_json::ValidatedJson;
use crate::state::AppState;

/// POST /api/v1/profiles/{profile_id}/links
///
/// The URL must use `http://` or `https://`.
pub async fn create(
    State(state): State<AppState>,
    Path(profile_id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<CreateProfileLink>,
) -> AppResult<(StatusCode, Json<ProfileLink>)> {
    ensure_profile_exists(&state.pool, profile_id).await?;
    let link = ProfileLinkRepo::create(&state.pool, profile_id, &input).await?;
    tracing::info!(link_id = link.id, profile_id, "Profile link created");
    Ok((StatusCode::CREATED, Json(link)))
}

/// GET /api/v1/profiles/{profile_id}/links
pub async fn list_by_profile(
    State(state): State<AppState>,
    Path(profile_id): Path<DbId>,
) -> AppResult<Json<Vec<ProfileLink>>> {
    ensure_profile_exists(&state.pool, profile_id).await?;
    let links = ProfileLinkRepo::list_by_profile(&state.pool, profile_id).await?;
    Ok(Json(links))
}

/// GET /api/v1/links/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProfileLink>> {
    let link = ProfileLinkRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ProfileLink",
            id,
        }))?;
    Ok(Json(link))
}

/// PUT /api/v1/links/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateProfileLink>,
) -> AppResult<Json<ProfileLink>> {
    let link = ProfileLinkRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ProfileLink",
            id,
        }))?;
    tracing::info!(link_id = id, "Profile link updated");
    Ok(Json(link))
}

/// DELETE /api/v1/links/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if ProfileLinkRepo::delete(&state.pool, id).await? {
        tracing::info!(link_id = id, "Profile link deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "ProfileLink",
            id,
        }))
    }
}
