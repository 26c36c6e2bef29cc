//! Field-level validation rules for profile data.
//!
//! Length bounds are applied by `#[derive(Validate)]` on the DTOs in the db
//! crate; the constants and custom checks they reference live here.

use std::borrow::Cow;

use validator::{ValidationError, ValidationErrors};

// ---------------------------------------------------------------------------
// Field bounds
// ---------------------------------------------------------------------------

pub const PROFILE_NAME_MIN: u64 = 2;
pub const PROFILE_NAME_MAX: u64 = 100;
pub const PROFILE_BIO_MAX: u64 = 1000;
pub const LOCATION_MAX: u64 = 100;

pub const SKILL_NAME_MAX: u64 = 100;
pub const SKILL_LEVEL_MAX: u64 = 20;
pub const SKILL_CATEGORY_MAX: u64 = 50;

pub const PROJECT_TITLE_MAX: u64 = 200;
pub const URL_MAX: u64 = 500;

pub const COMPANY_MAX: u64 = 200;
pub const POSITION_MAX: u64 = 200;

pub const PLATFORM_MAX: u64 = 50;

// ---------------------------------------------------------------------------
// Skill levels
// ---------------------------------------------------------------------------

/// Level assigned when a skill is created without one. Levels are free text.
pub const DEFAULT_SKILL_LEVEL: &str = "intermediate";

// ---------------------------------------------------------------------------
// Custom checks
// ---------------------------------------------------------------------------

/// Accepted URL scheme prefixes for profile links.
const HTTP_SCHEMES: &[&str] = &["http://", "https://"];

/// Require an absolute `http://` or `https://` URL with something after the scheme.
pub fn validate_http_url(url: &str) -> Result<(), ValidationError> {
    let rest = HTTP_SCHEMES.iter().find_map(|scheme| url.strip_prefix(scheme));
    match rest {
        Some(host) if !host.trim().is_empty() => Ok(()),
        Some(_) => Err(ValidationError::new("url_host")
            .with_message(Cow::Borrowed("URL must include a host after the scheme"))),
        None => Err(ValidationError::new("url_scheme")
            .with_message(Cow::Borrowed("URL must start with http:// or https://"))),
    }
}

/// Reject strings that are empty after trimming.
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::new("blank").with_message(Cow::Borrowed("must not be blank")))
    } else {
        Ok(())
    }
}

/// Flatten validator output into a single, deterministically ordered message.
///
/// Format: `field: message; other_field: message`.
pub fn describe_errors(errors: &ValidationErrors) -> String {
    let mut parts: Vec<String> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |err| {
                let detail = err
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| err.code.to_string());
                format!("{field}: {detail}")
            })
        })
        .collect();
    parts.sort();
    parts.join("; ")
}
