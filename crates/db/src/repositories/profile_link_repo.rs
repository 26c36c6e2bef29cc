//! Repository for the `profile_links` table.

use portfolio_core::types::DbId;
use sqlx::PgPool;

use crate::models::profile_link::{CreateProfileLink, ProfileLink, UpdateProfileLink};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, profile_id, platform, url, created_at";

/// Provides CRUD operations for profile links.
pub struct ProfileLinkRepo;

impl ProfileLinkRepo {
    /// Insert a new link for `profile_id`, returning the created row.
    ///
    /// URLs without an http(s) scheme are rejected by `ck_profile_links_url_scheme`.
    pub async fn create(
        pool: &PgPool,
        profile_id: DbId,
        input: &CreateProfileLink,
    ) -> Result<ProfileLink, sqlx::Error> {
        let query = format!(
            "INSERT INTO profile_links (profile_id, platform, url)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProfileLink>(&query)
            .bind(profile_id)
            .bind(&input.platform)
            .bind(&input.url)
            .fetch_one(pool)
            .await
    }

    /// Find a link by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ProfileLink>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM profile_links WHERE id = $1");
        sqlx::query_as::<_, ProfileLink>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all links of a profile in insertion order.
    pub async fn list_by_profile(
        pool: &PgPool,
        profile_id: DbId,
    ) -> Result<Vec<ProfileLink>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM profile_links
             WHERE profile_id = $1
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, ProfileLink>(&query)
            .bind(profile_id)
            .fetch_all(pool)
            .await
    }

    /// Update a link. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProfileLink,
    ) -> Result<Option<ProfileLink>, sqlx::Error> {
        let query = format!(
            "UPDATE profile_links SET
                platform = COALESCE($2, platform),
                url = COALESCE($3, url)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProfileLink>(&query)
            .bind(id)
            .bind(&input.platform)
            .bind(&input.url)
            .fetch_optional(pool)
            .await
    }

    /// Delete a link by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM profile_links WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
