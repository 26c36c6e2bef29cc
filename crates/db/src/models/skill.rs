//! Skill entity model and DTOs.

use portfolio_core::patch::nullable;
use portfolio_core::types::{DbId, Timestamp};
use portfolio_core::validation::{
    validate_not_blank, SKILL_CATEGORY_MAX, SKILL_LEVEL_MAX, SKILL_NAME_MAX,
};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `skills` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Skill {
    pub id: DbId,
    pub profile_id: DbId,
    pub name: String,
    /// Free text; conventionally beginner / intermediate / advanced / expert.
    pub level: String,
    pub category: Option<String>,
    pub created_at: Timestamp,
}

/// DTO for creating a new skill. `profile_id` comes from the URL path.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateSkill {
    #[validate(length(min = 1, max = SKILL_NAME_MAX), custom(function = "validate_not_blank"))]
    pub name: String,
    /// Defaults to `intermediate` if omitted.
    #[validate(length(min = 1, max = SKILL_LEVEL_MAX))]
    pub level: Option<String>,
    #[validate(length(max = SKILL_CATEGORY_MAX))]
    pub category: Option<String>,
}

/// DTO for updating an existing skill. All fields are optional; `category`
/// sent as `null` is cleared.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateSkill {
    #[validate(length(min = 1, max = SKILL_NAME_MAX), custom(function = "validate_not_blank"))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = SKILL_LEVEL_MAX))]
    pub level: Option<String>,
    #[validate(length(max = SKILL_CATEGORY_MAX))]
    #[serde(default, deserialize_with = "nullable")]
    pub category: Option<Option<String>>,
}

/// One group of the top-skills aggregation.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct SkillCount {
    pub name: String,
    pub count: i64,
}
