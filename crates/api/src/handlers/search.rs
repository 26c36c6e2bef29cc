//! Cross-entity read endpoints: skill aggregation and search, global
//! search, the assembled profile and table counts.

use axum::extract::{Path, Query, State};
use axum::Json;
use portfolio_core::error::CoreError;
use portfolio_core::search::{non_empty_query, resolve_limit, DEFAULT_SEARCH_LIMIT, MAX_SEARCH_LIMIT};
use portfolio_core::types::DbId;
use portfolio_db::models::search::{CompleteProfile, EntityCounts, SearchHit};
use portfolio_db::models::skill::{Skill, SkillCount};
use portfolio_db::repositories::{SearchRepo, SkillRepo};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::query::{required_term, LimitParams, SearchParams, SkillSearchParams};
use crate::state::AppState;

/// Response body for `GET /skills/top`.
#[derive(Debug, Serialize)]
pub struct TopSkillsResponse {
    pub skills: Vec<SkillCount>,
    pub total: usize,
}

/// Response body for `GET /search`.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub results: Vec<SearchHit>,
    pub total: usize,
    pub query: String,
}

/// GET /api/v1/skills/top?limit=
pub async fn top_skills(
    State(state): State<AppState>,
    Query(params): Query<LimitParams>,
) -> AppResult<Json<TopSkillsResponse>> {
    let limit = resolve_limit(params.limit, DEFAULT_SEARCH_LIMIT, MAX_SEARCH_LIMIT)?;
    let skills = SkillRepo::top_skills(&state.pool, limit).await?;
    let total = skills.len();
    Ok(Json(TopSkillsResponse { skills, total }))
}

/// GET /api/v1/skills/search?skill=&level=
///
/// `skill` is a case-insensitive substring; `level`, when given, must match
/// exactly. An empty `level=` is treated as absent.
pub async fn search_skills(
    State(state): State<AppState>,
    Query(params): Query<SkillSearchParams>,
) -> AppResult<Json<Vec<Skill>>> {
    let name = required_term("skill", &params.skill)?;
    let level = params.level.as_deref().and_then(non_empty_query);
    let skills = SkillRepo::search(&state.pool, name, level).await?;
    tracing::debug!(skill = name, ?level, count = skills.len(), "Skill search");
    Ok(Json(skills))
}

/// GET /api/v1/search?q=&limit=
///
/// Profiles come first, then skills, then projects, cut to `limit` overall.
pub async fn global_search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<SearchResponse>> {
    let q = required_term("q", &params.q)?;
    let limit = resolve_limit(params.limit, DEFAULT_SEARCH_LIMIT, MAX_SEARCH_LIMIT)?;
    let results = SearchRepo::global_search(&state.pool, q, limit).await?;
    let total = results.len();
    Ok(Json(SearchResponse {
        results,
        total,
        query: q.to_string(),
    }))
}

/// GET /api/v1/profiles/{id}/complete
pub async fn complete_profile(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<CompleteProfile>> {
    let complete = SearchRepo::complete_profile(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Profile",
            id,
        }))?;
    Ok(Json(complete))
}

/// GET /api/v1/stats
pub async fn stats(State(state): State<AppState>) -> AppResult<Json<EntityCounts>> {
    let counts = SearchRepo::counts(&state.pool).await?;
    Ok(Json(counts))
}
