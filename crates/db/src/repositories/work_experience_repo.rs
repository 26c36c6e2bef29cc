//! Repository for the `work_experiences` table.

use portfolio_core::patch::{is_supplied, supplied_value};
use portfolio_core::types::DbId;
use sqlx::PgPool;

use crate::models::work_experience::{
    CreateWorkExperience, UpdateWorkExperience, WorkExperience,
};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, profile_id, company, position, description, start_date, end_date, \
                       is_current, location, created_at";

/// Provides CRUD operations for work experience entries.
pub struct WorkExperienceRepo;

impl WorkExperienceRepo {
    /// Insert a new entry for `profile_id`, returning the created row.
    ///
    /// If `is_current` is `None`, defaults to `false`.
    pub async fn create(
        pool: &PgPool,
        profile_id: DbId,
        input: &CreateWorkExperience,
    ) -> Result<WorkExperience, sqlx::Error> {
        let query = format!(
            "INSERT INTO work_experiences
                (profile_id, company, position, description, start_date, end_date,
                 is_current, location)
             VALUES ($1, $2, $3, $4, $5, $6, COALESCE($7, FALSE), $8)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WorkExperience>(&query)
            .bind(profile_id)
            .bind(&input.company)
            .bind(&input.position)
            .bind(&input.description)
            .bind(input.start_date)
            .bind(&input.end_date)
            .bind(input.is_current)
            .bind(&input.location)
            .fetch_one(pool)
            .await
    }

    /// Find an entry by its internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<WorkExperience>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM work_experiences WHERE id = $1");
        sqlx::query_as::<_, WorkExperience>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a profile's work history, most recent `start_date` first.
    pub async fn list_by_profile(
        pool: &PgPool,
        profile_id: DbId,
    ) -> Result<Vec<WorkExperience>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM work_experiences
             WHERE profile_id = $1
             ORDER BY start_date DESC, id ASC"
        );
        sqlx::query_as::<_, WorkExperience>(&query)
            .bind(profile_id)
            .fetch_all(pool)
            .await
    }

    /// Update an entry. Only supplied fields in `input` are applied; nullable
    /// fields supplied as `null` are cleared.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateWorkExperience,
    ) -> Result<Option<WorkExperience>, sqlx::Error> {
        let query = format!(
            "UPDATE work_experiences SET
                company = COALESCE($2, company),
                position = COALESCE($3, position),
                description = CASE WHEN $4 THEN $5 ELSE description END,
                start_date = COALESCE($6, start_date),
                end_date = CASE WHEN $7 THEN $8 ELSE end_date END,
                is_current = COALESCE($9, is_current),
                location = CASE WHEN $10 THEN $11 ELSE location END
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, WorkExperience>(&query)
            .bind(id)
            .bind(&input.company)
            .bind(&input.position)
            .bind(is_supplied(&input.description))
            .bind(supplied_value(&input.description))
            .bind(input.start_date)
            .bind(is_supplied(&input.end_date))
            .bind(supplied_value(&input.end_date))
            .bind(input.is_current)
            .bind(is_supplied(&input.location))
            .bind(supplied_value(&input.location))
            .fetch_optional(pool)
            .await
    }

    /// Delete an entry by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM work_experiences WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
