pub mod profile;
pub mod profile_link;
pub mod project;
pub mod search;
pub mod skill;
pub mod work_experience;

use portfolio_core::error::CoreError;
use portfolio_core::types::DbId;
use portfolio_db::repositories::ProfileRepo;
use portfolio_db::DbPool;

use crate::error::{AppError, AppResult};

/// Return 404 unless a profile with `profile_id` exists.
///
/// Child creation calls this first so an unknown owner reads as `NOT_FOUND`
/// rather than a foreign key violation. The foreign key still guards the
/// window between this check and the insert.
pub(crate) async fn ensure_profile_exists(pool: &DbPool, profile_id: DbId) -> AppResult<()> {
    if ProfileRepo::exists(pool, profile_id).await? {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Profile",
            id: profile_id,
        }))
    }
}
