//! Profile link entity model and DTOs.

use portfolio_core::types::{DbId, Timestamp};
use portfolio_core::validation::{validate_http_url, validate_not_blank, PLATFORM_MAX, URL_MAX};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `profile_links` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProfileLink {
    pub id: DbId,
    pub profile_id: DbId,
    /// e.g. github, linkedin, portfolio.
    pub platform: String,
    pub url: String,
    pub created_at: Timestamp,
}

/// DTO for creating a profile link. `profile_id` comes from the URL path.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProfileLink {
    #[validate(length(min = 1, max = PLATFORM_MAX), custom(function = "validate_not_blank"))]
    pub platform: String,
    #[validate(length(max = URL_MAX), custom(function = "validate_http_url"))]
    pub url: String,
}

/// DTO for updating a profile link. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProfileLink {
    #[validate(length(min = 1, max = PLATFORM_MAX), custom(function = "validate_not_blank"))]
    pub platform: Option<String>,
    #[validate(length(max = URL_MAX), custom(function = "validate_http_url"))]
    pub url: Option<String>,
}
