//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod profile_link_repo;
pub mod profile_repo;
pub mod project_repo;
pub mod search_repo;
pub mod skill_repo;
pub mod work_experience_repo;

pub use profile_link_repo::ProfileLinkRepo;
pub use profile_repo::ProfileRepo;
pub use project_repo::ProjectRepo;
pub use search_repo::SearchRepo;
pub use skill_repo::SkillRepo;
pub use work_experience_repo::WorkExperienceRepo;
