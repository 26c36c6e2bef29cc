//! Repository for the `skills` table, including the top-skills aggregation
//! and skill-name search.

use portfolio_core::patch::{is_supplied, supplied_value};
use portfolio_core::types::DbId;
use portfolio_core::validation::DEFAULT_SKILL_LEVEL;
use sqlx::PgPool;

use crate::models::skill::{CreateSkill, Skill, SkillCount, UpdateSkill};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, profile_id, name, level, category, created_at";

/// Provides CRUD and query operations for skills.
pub struct SkillRepo;

impl SkillRepo {
    /// Insert a new skill for `profile_id`, returning the created row.
    ///
    /// If `level` is `None`, defaults to `intermediate`.
    pub async fn create(
        pool: &PgPool,
        profile_id: DbId,
        input: &CreateSkill,
    ) -> Result<Skill, sqlx::Error> {
        let query = format!(
            "INSERT INTO skills (profile_id, name, level, category)
             VALUES ($1, $2, COALESCE($3, $4), $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Skill>(&query)
            .bind(profile_id)
            .bind(&input.name)
            .bind(&input.level)
            .bind(DEFAULT_SKILL_LEVEL)
            .bind(&input.category)
            .fetch_one(pool)
            .await
    }

    /// Find a skill by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Skill>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM skills WHERE id = $1");
        sqlx::query_as::<_, Skill>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all skills of a profile in insertion order.
    pub async fn list_by_profile(
        pool: &PgPool,
        profile_id: DbId,
    ) -> Result<Vec<Skill>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM skills
             WHERE profile_id = $1
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, Skill>(&query)
            .bind(profile_id)
            .fetch_all(pool)
            .await
    }

    /// Update a skill. Only supplied fields in `input` are applied; a `null`
    /// category is cleared.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSkill,
    ) -> Result<Option<Skill>, sqlx::Error> {
        let query = format!(
            "UPDATE skills SET
                name = COALESCE($2, name),
                level = COALESCE($3, level),
                category = CASE WHEN $4 THEN $5 ELSE category END
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Skill>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.level)
            .bind(is_supplied(&input.category))
            .bind(supplied_value(&input.category))
            .fetch_optional(pool)
            .await
    }

    /// Delete a skill by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM skills WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Most common skill names across all profiles.
    ///
    /// Groups by exact (case-sensitive) name, orders by count descending and
    /// then by name ascending in byte order. `limit` is expected to be clamped
    /// by the caller.
    pub async fn top_skills(pool: &PgPool, limit: i64) -> Result<Vec<SkillCount>, sqlx::Error> {
        sqlx::query_as::<_, SkillCount>(
            "SELECT name, COUNT(*) AS count
             FROM skills
             GROUP BY name
             ORDER BY count DESC, name COLLATE \"C\" ASC
             LIMIT $1",
        )
        .bind(limit)
        .fetch_all(pool)
        .await
    }

    /// Skills whose name contains `name` case-insensitively, optionally
    /// restricted to an exact `level`. Results are in insertion order.
    ///
    /// `%` and `_` in `name` are not escaped and match as wildcards.
    pub async fn search(
        pool: &PgPool,
        name: &str,
        level: Option<&str>,
    ) -> Result<Vec<Skill>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM skills
             WHERE name ILIKE '%' || $1 || '%'
               AND ($2::TEXT IS NULL OR level = $2)
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, Skill>(&query)
            .bind(name)
            .bind(level)
            .fetch_all(pool)
            .await
    }
}
