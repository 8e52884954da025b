//! Page-number pagination for item listings.
//!
//! Callers speak in 1-indexed `page` / `per_page`; the repository layer
//! wants `LIMIT` / `OFFSET`. [`Page::new`] clamps raw query values into a
//! valid window so the SQL never sees a negative offset or an unbounded
//! limit.

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Page used when the client does not supply one.
pub const DEFAULT_PAGE: i64 = 1;

/// Page size used when the client does not supply one.
pub const DEFAULT_PER_PAGE: i64 = 10;

/// Largest page size a client may request.
pub const MAX_PER_PAGE: i64 = 100;

// ---------------------------------------------------------------------------
// Page
// ---------------------------------------------------------------------------

/// A validated pagination window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    page: i64,
    per_page: i64,
}

impl Page {
    /// Build a window from raw query values, applying defaults and bounds.
    ///
    /// `page` floors at 1; `per_page` is clamped to `1..=MAX_PER_PAGE`.
    pub fn new(page: Option<i64>, per_page: Option<i64>) -> Self {
        Self {
            page: page.unwrap_or(DEFAULT_PAGE).max(1),
            per_page: clamp_per_page(per_page),
        }
    }

    pub fn page(&self) -> i64 {
        self.page
    }

    pub fn per_page(&self) -> i64 {
        self.per_page
    }

    /// SQL `LIMIT` value.
    pub fn limit(&self) -> i64 {
        self.per_page
    }

    /// SQL `OFFSET` value: `(page - 1) * per_page`, saturating.
    pub fn offset(&self) -> i64 {
        (self.page - 1).saturating_mul(self.per_page)
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(None, None)
    }
}

/// Clamp a user-provided page size to valid bounds.
pub fn clamp_per_page(per_page: Option<i64>) -> i64 {
    per_page.unwrap_or(DEFAULT_PER_PAGE).clamp(1, MAX_PER_PAGE)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_first_page_of_ten() {
        let page = Page::default();
        assert_eq!(page.page(), 1);
        assert_eq!(page.per_page(), 10);
        assert_eq!(page.offset(), 0);
    }

    #[test]
    fn second_page_offsets_by_page_size() {
        let page = Page::new(Some(2), Some(10));
        assert_eq!(page.limit(), 10);
        assert_eq!(page.offset(), 10);
    }

    #[test]
    fn page_floors_at_one() {
        assert_eq!(Page::new(Some(0), None).page(), 1);
        assert_eq!(Page::new(Some(-3), None).offset(), 0);
    }

    #[test]
    fn per_page_respects_max() {
        assert_eq!(clamp_per_page(Some(500)), MAX_PER_PAGE);
    }

    #[test]
    fn per_page_floors_at_one() {
        assert_eq!(clamp_per_page(Some(0)), 1);
        assert_eq!(clamp_per_page(Some(-7)), 1);
    }

    #[test]
    fn huge_page_does_not_overflow() {
        let page = Page::new(Some(i64::MAX), Some(MAX_PER_PAGE));
        assert_eq!(page.offset(), i64::MAX);
    }
}
