//! Serde helpers for partial-update DTOs.
//!
//! A plain `Option<T>` cannot tell a missing JSON key from an explicit
//! `null`. Fields declared as `Option<Option<T>>` with
//! `#[serde(default, deserialize_with = "todo_core::patch::double_option")]`
//! come out as:
//!
//! | JSON            | Value            |
//! |-----------------|------------------|
//! | key absent      | `None`           |
//! | `"key": null`   | `Some(None)`     |
//! | `"key": value`  | `Some(Some(v))`  |

use serde::{Deserialize, Deserializer};

/// Deserialize a present field into `Some(..)`, keeping `null` as `Some(None)`.
///
/// Only runs when the key exists, so `#[serde(default)]` supplies the
/// outer `None` for absent keys.
pub fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Split a tri-state patch value into `(provided, value)` for SQL binding.
///
/// Repositories bind both halves and use
/// `CASE WHEN $provided THEN $value ELSE column END`.
pub fn split<T>(field: &Option<Option<T>>) -> (bool, Option<&T>) {
    match field {
        Some(inner) => (true, inner.as_ref()),
        None => (false, None),
    }
}
