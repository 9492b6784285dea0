use crate::models::page::total_pages;
use crate::{CoreError, Result as CoreErrorResult, SortField};

/// Validated paging parameters (zero-based page number)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub size: i64,
    pub sort: SortField,
}

impl PageRequest {
    #[track_caller]
    pub fn new(page: i64, size: i64, sort: SortField, max_size: i64) -> CoreErrorResult<Self> {
        if page < 0 {
            return Err(CoreError::invalid_argument("Page number cannot be negative"));
        }
        if size <= 0 {
            return Err(CoreError::invalid_argument("Page size must be positive"));
        }
        if size > max_size {
            return Err(CoreError::invalid_argument(format!(
                "Page size must not exceed {}",
                max_size
            )));
        }
        if page.checked_mul(size).is_none() {
            return Err(CoreError::invalid_argument("Page number is too large"));
        }

        Ok(Self { page, size, sort })
    }

    pub fn offset(&self) -> i64 {
        self.page * self.size
    }

    /// Reject a page past the end of a non-empty result set.
    ///
    /// An empty store has zero pages and every request against it yields an empty page.
    #[track_caller]
    pub fn ensure_within(&self, total_elements: i64) -> CoreErrorResult<()> {
        let max_pages = total_pages(total_elements, self.size);
        if self.page > 0 && max_pages > 0 && self.page >= max_pages {
            return Err(CoreError::invalid_argument(format!(
                "Requested page {} exceeds the maximum available page {}",
                self.page,
                max_pages - 1
            )));
        }
        Ok(())
    }
}
