//! Shared response body types.

use serde::Serialize;

/// Serializes as `{}`. Returned by successful deletes.
#[derive(Debug, Default, Serialize)]
pub struct Empty {}
