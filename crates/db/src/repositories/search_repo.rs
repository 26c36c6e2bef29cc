//! Repository for cross-entity reads: global search, the assembled profile
//! and per-table counts.

use portfolio_core::search::concat_truncate;
use portfolio_core::types::DbId;
use sqlx::PgPool;

use crate::models::profile::Profile;
use crate::models::project::Project;
use crate::models::search::{CompleteProfile, EntityCounts, SearchHit};
use crate::models::skill::Skill;
use crate::repositories::{
    ProfileLinkRepo, ProfileRepo, ProjectRepo, SkillRepo, WorkExperienceRepo,
};

/// Provides search operations across entity tables.
pub struct SearchRepo;

impl SearchRepo {
    // -----------------------------------------------------------------------
    // Global search
    // -----------------------------------------------------------------------

    /// Search profiles, skills and projects for `query`.
    ///
    /// Each entity scan is capped at `limit` on its own, the results are
    /// concatenated as profiles, then skills, then projects, and the combined
    /// list is cut to `limit`. Profile matches can therefore crowd out every
    /// skill and project match. Each scan is ordered by id.
    ///
    /// Matching is `ILIKE '%query%'` with no escaping of `%` or `_`.
    pub async fn global_search(
        pool: &PgPool,
        query: &str,
        limit: i64,
    ) -> Result<Vec<SearchHit>, sqlx::Error> {
        let profiles = sqlx::query_as::<_, Profile>(
            "SELECT id, name, email, education, bio, location, created_at, updated_at
             FROM profiles
             WHERE name ILIKE '%' || $1 || '%'
                OR bio ILIKE '%' || $1 || '%'
                OR education ILIKE '%' || $1 || '%'
             ORDER BY id ASC
             LIMIT $2",
        )
        .bind(query)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        let skills = sqlx::query_as::<_, Skill>(
            "SELECT id, profile_id, name, level, category, created_at
             FROM skills
             WHERE name ILIKE '%' || $1 || '%'
             ORDER BY id ASC
             LIMIT $2",
        )
        .bind(query)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        let projects = sqlx::query_as::<_, Project>(
            "SELECT id, profile_id, title, description, technologies, github_url, live_url,
                    image_url, start_date, end_date, is_active, created_at
             FROM projects
             WHERE title ILIKE '%' || $1 || '%'
                OR description ILIKE '%' || $1 || '%'
             ORDER BY id ASC
             LIMIT $2",
        )
        .bind(query)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        tracing::debug!(
            profiles = profiles.len(),
            skills = skills.len(),
            projects = projects.len(),
            "Global search scans finished"
        );

        let groups: [Vec<SearchHit>; 3] = [
            profiles.into_iter().map(SearchHit::from).collect(),
            skills.into_iter().map(SearchHit::from).collect(),
            projects.into_iter().map(SearchHit::from).collect(),
        ];

        Ok(concat_truncate(groups, limit.max(0) as usize))
    }

    // -----------------------------------------------------------------------
    // Complete profile
    // -----------------------------------------------------------------------

    /// Load a profile with all of its skills, projects, work experiences and
    /// links. Returns `None` if the profile does not exist.
    pub async fn complete_profile(
        pool: &PgPool,
        profile_id: DbId,
    ) -> Result<Option<CompleteProfile>, sqlx::Error> {
        let Some(profile) = ProfileRepo::find_by_id(pool, profile_id).await? else {
            return Ok(None);
        };

        let skills = SkillRepo::list_by_profile(pool, profile_id).await?;
        let projects = ProjectRepo::list_by_profile(pool, profile_id).await?;
        let work_experiences = WorkExperienceRepo::list_by_profile(pool, profile_id).await?;
        let links = ProfileLinkRepo::list_by_profile(pool, profile_id).await?;

        Ok(Some(CompleteProfile {
            profile,
            skills,
            projects,
            work_experiences,
            links,
        }))
    }

    // -----------------------------------------------------------------------
    // Counts
    // -----------------------------------------------------------------------

    /// Row counts for every entity table.
    pub async fn counts(pool: &PgPool) -> Result<EntityCounts, sqlx::Error> {
        sqlx::query_as::<_, EntityCounts>(
            "SELECT
                (SELECT COUNT(*) FROM profiles) AS profiles,
                (SELECT COUNT(*) FROM skills) AS skills,
                (SELECT COUNT(*) FROM projects) AS projects,
                (SELECT COUNT(*) FROM work_experiences) AS work_experiences,
                (SELECT COUNT(*) FROM profile_links) AS links",
        )
        .fetch_one(pool)
        .await
    }
}
