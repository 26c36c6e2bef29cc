//! Project entity model and DTOs.

use portfolio_core::patch::{null_as_default, nullable};
use portfolio_core::types::{DbId, Timestamp};
use portfolio_core::validation::{validate_not_blank, PROJECT_TITLE_MAX, URL_MAX};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub profile_id: DbId,
    pub title: String,
    pub description: Option<String>,
    /// `TEXT[]`; element order is preserved as submitted.
    pub technologies: Vec<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub image_url: Option<String>,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    pub is_active: bool,
    pub created_at: Timestamp,
}

/// DTO for creating a new project. `profile_id` comes from the URL path.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProject {
    #[validate(length(min = 1, max = PROJECT_TITLE_MAX), custom(function = "validate_not_blank"))]
    pub title: String,
    pub description: Option<String>,
    /// Absent or `null` means no technologies.
    #[serde(default, deserialize_with = "null_as_default")]
    pub technologies: Vec<String>,
    #[validate(length(max = URL_MAX))]
    pub github_url: Option<String>,
    #[validate(length(max = URL_MAX))]
    pub live_url: Option<String>,
    #[validate(length(max = URL_MAX))]
    pub image_url: Option<String>,
    pub start_date: Option<Timestamp>,
    pub end_date: Option<Timestamp>,
    /// Defaults to `true` if omitted.
    pub is_active: Option<bool>,
}

/// DTO for updating an existing project. All fields are optional.
///
/// A supplied `technologies` list replaces the stored list wholesale. Nullable
/// fields sent as `null` are cleared.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProject {
    #[validate(length(min = 1, max = PROJECT_TITLE_MAX), custom(function = "validate_not_blank"))]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub description: Option<Option<String>>,
    pub technologies: Option<Vec<String>>,
    #[validate(length(max = URL_MAX))]
    #[serde(default, deserialize_with = "nullable")]
    pub github_url: Option<Option<String>>,
    #[validate(length(max = URL_MAX))]
    #[serde(default, deserialize_with = "nullable")]
    pub live_url: Option<Option<String>>,
    #[validate(length(max = URL_MAX))]
    #[serde(default, deserialize_with = "nullable")]
    pub image_url: Option<Option<String>>,
    #[serde(default, deserialize_with = "nullable")]
    pub start_date: Option<Option<Timestamp>>,
    #[serde(default, deserialize_with = "nullable")]
    pub end_date: Option<Option<Timestamp>>,
    pub is_active: Option<bool>,
}
