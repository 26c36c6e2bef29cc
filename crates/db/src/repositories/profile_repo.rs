//! Repository for the `profiles` table.

use portfolio_core::patch::{is_supplied, supplied_value};
use portfolio_core::types::DbId;
use sqlx::PgPool;

use crate::models::profile::{CreateProfile, Profile, UpdateProfile};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, education, bio, location, created_at, updated_at";

/// Provides CRUD operations for profiles.
pub struct ProfileRepo;

impl ProfileRepo {
    /// Insert a new profile, returning the created row.
    ///
    /// A duplicate email fails on `uq_profiles_email` and nothing is written.
    pub async fn create(pool: &PgPool, input: &CreateProfile) -> Result<Profile, sqlx::Error> {
        let query = format!(
            "INSERT INTO profiles (name, email, education, bio, location)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .bind(&input.education)
            .bind(&input.bio)
            .bind(&input.location)
            .fetch_one(pool)
            .await
    }

    /// Find a profile by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM profiles WHERE id = $1");
        sqlx::query_as::<_, Profile>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a profile by exact email.
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM profiles WHERE email = $1");
        sqlx::query_as::<_, Profile>(&query)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Return `true` if a profile with the given ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM profiles WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// List profiles in insertion order.
    pub async fn list(pool: &PgPool, offset: i64, limit: i64) -> Result<Vec<Profile>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM profiles
             ORDER BY id ASC
             LIMIT $1 OFFSET $2"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Update a profile. Only supplied fields in `input` are applied and
    /// `updated_at` is refreshed. A nullable field supplied as `null` is cleared.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProfile,
    ) -> Result<Option<Profile>, sqlx::Error> {
        let query = format!(
            "UPDATE profiles SET
                name = COALESCE($2, name),
                email = COALESCE($3, email),
                education = CASE WHEN $4 THEN $5 ELSE education END,
                bio = CASE WHEN $6 THEN $7 ELSE bio END,
                location = CASE WHEN $8 THEN $9 ELSE location END,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Profile>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.email)
            .bind(is_supplied(&input.education))
            .bind(supplied_value(&input.education))
            .bind(is_supplied(&input.bio))
            .bind(supplied_value(&input.bio))
            .bind(is_supplied(&input.location))
            .bind(supplied_value(&input.location))
            .fetch_optional(pool)
            .await
    }

    /// Delete a profile by ID. Returns `true` if a row was removed.
    ///
    /// Skills, projects, work experiences and links go with it through
    /// `ON DELETE CASCADE`, inside the same statement.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM profiles WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
