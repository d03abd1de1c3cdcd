//! Page requests and page results exchanged with repositories.

/// Zero-based page request.
///
/// Constructed by the service after validation, so repositories can assume
/// `page_number >= 0` and `page_size > 0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page_number: i64,
    pub page_size: i64,
}

impl PageRequest {
    pub fn new(page_number: i64, page_size: i64) -> Self {
        Self {
            page_number,
            page_size,
        }
    }

    /// Row offset of the first item on this page.
    pub fn offset(&self) -> i64 {
        self.page_number.saturating_mul(self.page_size)
    }
}

/// One page of results plus the total element count across all pages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_elements: i64,
    pub request: PageRequest,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total_elements: i64, request: PageRequest) -> Self {
        Self {
            items,
            total_elements,
            request,
        }
    }

    /// `ceil(total_elements / page_size)`; zero for an empty store.
    pub fn total_pages(&self) -> i64 {
        if self.request.page_size <= 0 {
            return 0;
        }
        (self.total_elements + self.request.page_size - 1) / self.request.page_size
    }

    /// Maps every item, keeping the counts.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total_elements: self.total_elements,
            request: self.request,
        }
    }
}
