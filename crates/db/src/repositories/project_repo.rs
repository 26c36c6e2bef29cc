//! Repository for the `projects` table.
//!
//! Two different technology matches live here on purpose:
//! [`ProjectRepo::list_by_technology`] wants an exact, case-sensitive array
//! element, while [`ProjectRepo::search`] mixes case-insensitive substring
//! matching on text columns with exact element matching on `technologies`.

use portfolio_core::patch::{is_supplied, supplied_value};
use portfolio_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::{CreateProject, Project, UpdateProject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, profile_id, title, description, technologies, github_url, live_url, \
                       image_url, start_date, end_date, is_active, created_at";

/// Provides CRUD and query operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project for `profile_id`, returning the created row.
    ///
    /// If `is_active` is `None`, defaults to `true`.
    pub async fn create(
        pool: &PgPool,
        profile_id: DbId,
        input: &CreateProject,
    ) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects
                (profile_id, title, description, technologies, github_url, live_url,
                 image_url, start_date, end_date, is_active)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, COALESCE($10, TRUE))
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(profile_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(&input.technologies)
            .bind(&input.github_url)
            .bind(&input.live_url)
            .bind(&input.image_url)
            .bind(&input.start_date)
            .bind(&input.end_date)
            .bind(input.is_active)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all projects of a profile in insertion order.
    pub async fn list_by_profile(
        pool: &PgPool,
        profile_id: DbId,
    ) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects
             WHERE profile_id = $1
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(profile_id)
            .fetch_all(pool)
            .await
    }

    /// List projects across all profiles in insertion order.
    pub async fn list(pool: &PgPool, offset: i64, limit: i64) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects
             ORDER BY id ASC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Update a project. Only supplied fields in `input` are applied; nullable
    /// fields supplied as `null` are cleared.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProject,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                title = COALESCE($2, title),
                description = CASE WHEN $3 THEN $4 ELSE description END,
                technologies = COALESCE($5, technologies),
                github_url = CASE WHEN $6 THEN $7 ELSE github_url END,
                live_url = CASE WHEN $8 THEN $9 ELSE live_url END,
                image_url = CASE WHEN $10 THEN $11 ELSE image_url END,
                start_date = CASE WHEN $12 THEN $13 ELSE start_date END,
                end_date = CASE WHEN $14 THEN $15 ELSE end_date END,
                is_active = COALESCE($16, is_active)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(is_supplied(&input.description))
            .bind(supplied_value(&input.description))
            .bind(&input.technologies)
            .bind(is_supplied(&input.github_url))
            .bind(supplied_value(&input.github_url))
            .bind(is_supplied(&input.live_url))
            .bind(supplied_value(&input.live_url))
            .bind(is_supplied(&input.image_url))
            .bind(supplied_value(&input.image_url))
            .bind(is_supplied(&input.start_date))
            .bind(supplied_value(&input.start_date))
            .bind(is_supplied(&input.end_date))
            .bind(supplied_value(&input.end_date))
            .bind(input.is_active)
            .fetch_optional(pool)
            .await
    }

    /// Delete a project by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Projects whose `technologies` array holds an element exactly equal to
    /// `technology` (case-sensitive, no substring matching).
    pub async fn list_by_technology(
        pool: &PgPool,
        technology: &str,
    ) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects
             WHERE technologies @> ARRAY[$1::TEXT]
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(technology)
            .fetch_all(pool)
            .await
    }

    /// Projects whose title or description contains `query`
    /// case-insensitively, or whose technologies contain `query` exactly.
    ///
    /// `%` and `_` in `query` are not escaped.
    pub async fn search(pool: &PgPool, query: &str, limit: i64) -> Result<Vec<Project>, sqlx::Error> {
        let sql = format!(
            "SELECT {COLUMNS} FROM projects
             WHERE title ILIKE '%' || $1 || '%'
                OR description ILIKE '%' || $1 || '%'
                OR technologies @> ARRAY[$1::TEXT]
             ORDER BY id ASC
             LIMIT $2"
        );
        sqlx::query_as::<_, Project>(&sql)
            .bind(query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
