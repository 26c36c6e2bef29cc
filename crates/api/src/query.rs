//! Shared query parameter types for API handlers.
//!
//! Limits and offsets are checked in the handlers via `resolve_limit` /
//! `resolve_offset` before they reach a repository; an out-of-range value is
//! a 400, not a silently different page.

use portfolio_core::search::non_empty_query;
use serde::Deserialize;

use crate::error::{AppError, AppResult};

/// Generic pagination parameters (`?offset=&limit=`).
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    pub offset: Option<i64>,
    pub limit: Option<i64>,
}

/// A bare `?limit=` parameter.
#[derive(Debug, Deserialize)]
pub struct LimitParams {
    pub limit: Option<i64>,
}

/// Free-text search parameters (`?q=&limit=`).
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    pub limit: Option<i64>,
}

/// Skill search parameters (`?skill=&level=`).
#[derive(Debug, Deserialize)]
pub struct SkillSearchParams {
    #[serde(default)]
    pub skill: String,
    pub level: Option<String>,
}

/// Project technology filter (`?skill=`).
#[derive(Debug, Deserialize)]
pub struct SkillFilterParams {
    #[serde(default)]
    pub skill: String,
}

/// Reject a missing or empty query-string value with `400 BAD_REQUEST`.
///
/// The value is returned exactly as sent, surrounding whitespace included.
pub fn required_term<'a>(name: &str, value: &'a str) -> AppResult<&'a str> {
    non_empty_query(value)
        .ok_or_else(|| AppError::BadRequest(format!("Query parameter '{name}' must not be empty")))
}
