//! Shared query parameter types for API handlers.

use serde::Deserialize;
use todo_core::pagination::Page;

/// Page-number pagination parameters (`?page=&per_page=`).
///
/// Defaults and bounds are applied by [`Page::new`]: `page` floors at 1,
/// `per_page` defaults to 10 and is capped at 100.
#[derive(Debug, Default, Deserialize)]
pub struct PaginationParams {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl PaginationParams {
    pub fn page(&self) -> Page {
        Page::new(self.page, self.per_page)
    }
}

/// Query parameters for `GET /echo`. Both are required.
#[derive(Debug, Deserialize)]
pub struct EchoParams {
    pub message: String,
    pub name: String,
}
