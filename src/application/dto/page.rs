//! Pagination envelope.

use serde::Serialize;

/// One page of items with totals across all pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageDto<T> {
    pub items: Vec<T>,
    pub total_elements: i64,
    pub total_pages: i64,
}

impl<T> PageDto<T> {
    pub fn new(items: Vec<T>, total_elements: i64, total_pages: i64) -> Self {
        Self {
            items,
            total_elements,
            total_pages,
        }
    }
}
