//! Pagination request and result types.
//!
//! The backend serves Spring-style pages: zero-based page index, fixed page
//! size, and a result envelope carrying the rows plus totals. A `PageResult`
//! is always replaced wholesale by a fetch - never merged.

use serde::{Deserialize, Serialize};

/// Page sizes the table widget offers.
pub const ALLOWED_PAGE_SIZES: [u32; 4] = [10, 25, 50, 100];

/// Default rows per page.
pub const DEFAULT_PAGE_SIZE: u32 = 10;

/// Default sort key sent to the backend.
pub const DEFAULT_SORT_KEY: &str = "nombre";

/// A paged query: zero-based page index, page size, and sort key.
///
/// Created by user pagination actions. The page index resets to 0 whenever
/// the committed filter set changes; plain page/size navigation preserves it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Zero-based page index.
    pub page: u32,
    /// Rows per page; one of [`ALLOWED_PAGE_SIZES`].
    pub size: u32,
    /// Server-side sort key (`sortBy` query parameter).
    pub sort_by: String,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
            sort_by: DEFAULT_SORT_KEY.to_string(),
        }
    }
}

impl PageRequest {
    /// Create a request for the first page with the given size and sort key.
    #[must_use]
    pub fn first_page(size: u32, sort_by: &str) -> Self {
        Self {
            page: 0,
            size,
            sort_by: sort_by.to_string(),
        }
    }

    /// Whether `size` is one the table widget offers.
    #[must_use]
    pub fn is_allowed_size(size: u32) -> bool {
        ALLOWED_PAGE_SIZES.contains(&size)
    }
}

/// One page of rows as returned by the backend.
///
/// Wire shape: `{ content, pageNumber, pageSize, totalElements, totalPages }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult<T> {
    /// Rows on this page, in server order.
    pub content: Vec<T>,
    /// Zero-based index of this page.
    pub page_number: u32,
    /// Rows per page used by the server.
    pub page_size: u32,
    /// Total matching rows across all pages.
    pub total_elements: u64,
    /// Total number of pages.
    pub total_pages: u32,
}

impl<T> PageResult<T> {
    /// The empty page a screen falls back to after a failed fetch:
    /// no rows, zero totals.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            content: Vec::new(),
            page_number: 0,
            page_size: 0,
            total_elements: 0,
            total_pages: 0,
        }
    }

    /// Whether this page carries no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }
}

impl<T> Default for PageResult<T> {
    fn default() -> Self {
        Self::empty()
    }
}
