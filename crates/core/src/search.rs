//! Search and listing constants and helpers.
//!
//! Substring matching itself happens in SQL (`ILIKE '%' || $1 || '%'`). The
//! query text is passed through unescaped, so `%` and `_` inside a query act
//! as wildcards. Callers must not escape them.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

/// Default number of results for search and aggregation queries.
pub const DEFAULT_SEARCH_LIMIT: i64 = 10;

/// Maximum number of results for search and aggregation queries.
pub const MAX_SEARCH_LIMIT: i64 = 100;

/// Default page size for plain listings.
pub const DEFAULT_LIST_LIMIT: i64 = 100;

/// Maximum page size for plain listings.
pub const MAX_LIST_LIMIT: i64 = 100;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Resolve a user-provided limit: `default` when absent, otherwise it must
/// lie in `1..=max`.
pub fn resolve_limit(limit: Option<i64>, default: i64, max: i64) -> Result<i64, CoreError> {
    match limit {
        None => Ok(default),
        Some(value) if (1..=max).contains(&value) => Ok(value),
        Some(value) => Err(CoreError::Validation(format!(
            "limit: must be between 1 and {max}, got {value}"
        ))),
    }
}

/// Resolve a user-provided offset: `0` when absent, never negative.
pub fn resolve_offset(offset: Option<i64>) -> Result<i64, CoreError> {
    match offset {
        None => Ok(0),
        Some(value) if value >= 0 => Ok(value),
        Some(value) => Err(CoreError::Validation(format!(
            "offset: must be zero or greater, got {value}"
        ))),
    }
}

/// Return the query unchanged unless it is empty.
///
/// Whitespace is significant: `" "` is a valid query matching any value that
/// contains a space.
pub fn non_empty_query(query: &str) -> Option<&str> {
    if query.is_empty() {
        None
    } else {
        Some(query)
    }
}

/// Concatenate result groups in the given order and keep the first `limit`
/// entries overall.
///
/// Earlier groups are never interleaved with later ones: when the first group
/// alone reaches `limit`, later groups contribute nothing.
pub fn concat_truncate<T>(groups: impl IntoIterator<Item = Vec<T>>, limit: usize) -> Vec<T> {
    groups.into_iter().flatten().take(limit).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
