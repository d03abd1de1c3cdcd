//! Pagination query parameters.

use serde::Deserialize;
use serde_with::{DisplayFromStr, serde_as};

/// Pagination query parameters for `GET /api/courses`.
///
/// Values are passed to the service unchecked, so out-of-range numbers
/// (negative pages, oversized pages) surface as validation errors with the
/// standard error body.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page: Option<i64>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub page_size: Option<i64>,
}

impl PageParams {
    /// Returns `(page_number, page_size)`.
    ///
    /// # Defaults
    ///
    /// - `page`: 0
    /// - `page_size`: `default_page_size`
    pub fn resolve(&self, default_page_size: i64) -> (i64, i64) {
        (
            self.page.unwrap_or(0),
            self.page_size.unwrap_or(default_page_size),
        )
    }
}
