//! Helpers for partial-update DTOs.
//!
//! A nullable column in an update DTO is an `Option<Option<T>>`:
//!
//! - `None`: the field was absent, keep the stored value.
//! - `Some(None)`: the field was sent as `null`, clear the column.
//! - `Some(Some(v))`: the field was sent, write `v`.

use serde::{Deserialize, Deserializer};

/// Deserialize a present field into `Some(..)`, keeping an explicit `null`
/// distinguishable from an absent field.
///
/// Pair with `#[serde(default)]` so absent fields become `None`.
pub fn nullable<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Deserialize a field where an explicit `null` means the type's default.
///
/// Pair with `#[serde(default)]` so absent fields get the default too.
pub fn null_as_default<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: Deserialize<'de> + Default,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Whether an update supplied the field at all (a value or `null`).
pub fn is_supplied<T>(field: &Option<Option<T>>) -> bool {
    field.is_some()
}

/// The value to write for a supplied field; `None` clears the column.
pub fn supplied_value<T>(field: &Option<Option<T>>) -> Option<&T> {
    field.as_ref().and_then(Option::as_ref)
}
