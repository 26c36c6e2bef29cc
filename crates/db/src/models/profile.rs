//! Profile entity model and DTOs.

use portfolio_core::patch::nullable;
use portfolio_core::types::{DbId, Timestamp};
use portfolio_core::validation::{
    LOCATION_MAX, PROFILE_BIO_MAX, PROFILE_NAME_MAX, PROFILE_NAME_MIN,
};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `profiles` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Profile {
    pub id: DbId,
    pub name: String,
    /// Unique across all profiles (`uq_profiles_email`).
    pub email: String,
    pub education: Option<String>,
    pub bio: Option<String>,
    pub location: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new profile.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProfile {
    #[validate(length(min = PROFILE_NAME_MIN, max = PROFILE_NAME_MAX))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub education: Option<String>,
    #[validate(length(max = PROFILE_BIO_MAX))]
    pub bio: Option<String>,
    #[validate(length(max = LOCATION_MAX))]
    pub location: Option<String>,
}

/// DTO for updating an existing profile. All fields are optional; only
/// supplied fields are written, and a nullable field sent as `null` is cleared.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProfile {
    #[validate(length(min = PROFILE_NAME_MIN, max = PROFILE_NAME_MAX))]
    pub name: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "nullable")]
    pub education: Option<Option<String>>,
    #[validate(length(max = PROFILE_BIO_MAX))]
    #[serde(default, deserialize_with = "nullable")]
    pub bio: Option<Option<String>>,
    #[validate(length(max = LOCATION_MAX))]
    #[serde(default, deserialize_with = "nullable")]
    pub location: Option<Option<String>>,
}
