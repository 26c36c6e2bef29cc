//! Domain model structs and DTOs.
//!
//! Each entity submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` create DTO for inserts
//! - A `Deserialize` + `Validate` update DTO (all `Option` fields) for patches

pub mod profile;
pub mod profile_link;
pub mod project;
pub mod search;
pub mod skill;
pub mod work_experience;
