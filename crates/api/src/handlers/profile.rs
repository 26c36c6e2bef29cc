//! Handlers for the `/profiles` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use portfolio_core::error::CoreError;
use portfolio_core::search::{resolve_limit, resolve_offset, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT};
use portfolio_core::types::DbId;
use portfolio_db::models::profile::{CreateProfile, Profile, UpdateProfile};
use portfolio_db::repositories::ProfileRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::validated_json::ValidatedJson;
use crate::query::PaginationParams;
use crate::state::AppState;

/// POST /api/v1/profiles
///
/// A duplicate email is rejected by `uq_profiles_email` and surfaces as 409.
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateProfile>,
) -> AppResult<(StatusCode, Json<Profile>)> {
    let profile = ProfileRepo::create(&state.pool, &input).await?;
    tracing::info!(profile_id = profile.id, "Profile created");
    Ok((StatusCode::CREATED, Json(profile)))
}

/// GET /api/v1/profiles?offset=&limit=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<Vec<Profile>>> {
    let offset = resolve_offset(params.offset)?;
    let limit = resolve_limit(params.limit, DEFAULT_LIST_LIMIT, MAX_LIST_LIMIT)?;
    let profiles = ProfileRepo::list(&state.pool, offset, limit).await?;
    Ok(Json(profiles))
}

/// GET /api/v1/profiles/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Profile>> {
    let profile = ProfileRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Profile",
            id,
        }))?;
    Ok(Json(profile))
}

/// PUT /api/v1/profiles/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    ValidatedJson(input): ValidatedJson<UpdateProfile>,
) -> AppResult<Json<Profile>> {
    let profile = ProfileRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Profile",
            id,
        }))?;
    tracing::info!(profile_id = id, "Profile updated");
    Ok(Json(profile))
}

/// DELETE /api/v1/profiles/{id}
///
/// Removes the profile together with its skills, projects, work history and
/// links.
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if ProfileRepo::delete(&state.pool, id).await? {
        tracing::info!(profile_id = id, "Profile deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Profile",
            id,
        }))
    }
}
