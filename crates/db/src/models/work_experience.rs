//! Work experience entity model and DTOs.

use portfolio_core::patch::nullable;
use portfolio_core::types::{DbId, Timestamp};
use portfolio_core::validation::{validate_not_blank, COMPANY_MAX, LOCATION_MAX, POSITION_MAX};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `work_experiences` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct WorkExperience {
    pub id: DbId,
    pub profile_id: DbId,
    pub company: String,
    pub position: String,
    pub description: Option<String>,
    pub start_date: Timestamp,
    /// `None` while the position is ongoing.
    pub end_date: Option<Timestamp>,
    pub is_current: bool,
    pub location: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a work experience entry. `profile_id` comes from the URL path.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateWorkExperience {
    #[validate(length(min = 1, max = COMPANY_MAX), custom(function = "validate_not_blank"))]
    pub company: String,
    #[validate(length(min = 1, max = POSITION_MAX), custom(function = "validate_not_blank"))]
    pub position: String,
    pub description: Option<String>,
    pub start_date: Timestamp,
    pub end_date: Option<Timestamp>,
    /// Defaults to `false` if omitted.
    pub is_current: Option<bool>,
    #[validate(length(max = LOCATION_MAX))]
    pub location: Option<String>,
}

/// DTO for updating a work experience entry. All fields are optional;
/// nullable fields sent as `null` are cleared.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateWorkExperience {
    #[validate(length(min = 1, max = COMPANY_MAX), custom(function = "validate_not_blank"))]
    pub company: Option<String>,
    #[validate(length(min = 1, max = POSITION_MAX), custom(function = "validate_not_blank"))]
    pub position: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub description: Option<Option<String>>,
    pub start_date: Option<Timestamp>,
    #[serde(default, deserialize_with = "nullable")]
    pub end_date: Option<Option<Timestamp>>,
    pub is_current: Option<bool>,
    #[validate(length(max = LOCATION_MAX))]
    #[serde(default, deserialize_with = "nullable")]
    pub location: Option<Option<String>>,
}
