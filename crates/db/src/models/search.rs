//! Composite read models: global search hits, the assembled profile and
//! table counts.

use portfolio_core::types::DbId;
use serde::Serialize;
use sqlx::FromRow;

use crate::models::profile::Profile;
use crate::models::profile_link::ProfileLink;
use crate::models::project::Project;
use crate::models::skill::Skill;
use crate::models::work_experience::WorkExperience;

/// One global search result, tagged with its entity type.
///
/// Serializes as `{"type": "profile", ...}` and so on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SearchHit {
    Profile {
        id: DbId,
        name: String,
        email: String,
        bio: Option<String>,
    },
    Skill {
        id: DbId,
        name: String,
        level: String,
        profile_id: DbId,
    },
    Project {
        id: DbId,
        title: String,
        description: Option<String>,
        profile_id: DbId,
    },
}

impl SearchHit {
    /// Entity type tag as it appears in the serialized form.
    pub fn kind(&self) -> &'static str {
        match self {
            SearchHit::Profile { .. } => "profile",
            SearchHit::Skill { .. } => "skill",
            SearchHit::Project { .. } => "project",
        }
    }
}

impl From<Profile> for SearchHit {
    fn from(p: Profile) -> Self {
        SearchHit::Profile {
            id: p.id,
            name: p.name,
            email: p.email,
            bio: p.bio,
        }
    }
}

impl From<Skill> for SearchHit {
    fn from(s: Skill) -> Self {
        SearchHit::Skill {
            id: s.id,
            name: s.name,
            level: s.level,
            profile_id: s.profile_id,
        }
    }
}

impl From<Project> for SearchHit {
    fn from(p: Project) -> Self {
        SearchHit::Project {
            id: p.id,
            title: p.title,
            description: p.description,
            profile_id: p.profile_id,
        }
    }
}

/// A profile together with every collection it owns.
#[derive(Debug, Clone, Serialize)]
pub struct CompleteProfile {
    #[serde(flatten)]
    pub profile: Profile,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub work_experiences: Vec<WorkExperience>,
    pub links: Vec<ProfileLink>,
}

/// Row counts per entity table.
#[derive(Debug, Clone, Default, PartialEq, Eq, FromRow, Serialize)]
pub struct EntityCounts {
    pub profiles: i64,
    pub skills: i64,
    pub projects: i64,
    pub work_experiences: i64,
    pub links: i64,
}
