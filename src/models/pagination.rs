//! Pagination types shared by the list operations.

use serde::{Deserialize, Serialize};

/// Query parameters for paginated listings.
///
/// Unset fields are omitted from the query string and the API applies its
/// defaults (limit 100, offset 0).
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct PageRequest {
    /// Maximum number of results to return.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,

    /// Number of results to skip.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u32>,
}

impl PageRequest {
    /// Page with API defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cap the number of results.
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Skip the first `offset` results.
    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }
}

/// One page of results.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paginated<T> {
    /// Total number of matching records across all pages.
    pub total: i64,

    /// Limit the server applied.
    pub limit: i64,

    /// Offset the server applied.
    pub offset: i64,

    /// Records on this page.
    pub results: Vec<T>,
}
