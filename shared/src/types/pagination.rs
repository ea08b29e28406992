//! Offset pagination used by every list endpoint (`?start=0&pageSize=10`)

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_SIZE: u32 = 10;
pub const MAX_PAGE_SIZE: u32 = 100;

/// Pagination parameters for list endpoints
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Number of rows to skip
    #[serde(default)]
    pub start: u32,

    /// Number of rows per page
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            start: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl Pagination {
    /// Create a new pagination, clamping the page size to `1..=MAX_PAGE_SIZE`
    pub fn new(start: u32, page_size: u32) -> Self {
        Self {
            start,
            page_size: page_size.clamp(1, MAX_PAGE_SIZE),
        }
    }

    /// Validate and sanitize parameters coming from a query string
    pub fn validate(self) -> Self {
        Self::new(self.start, self.page_size)
    }

    /// Offset as i64 for SQL queries
    pub fn offset_i64(&self) -> i64 {
        i64::from(self.start)
    }

    /// Limit as i64 for SQL queries
    pub fn limit_i64(&self) -> i64 {
        i64::from(self.page_size)
    }

    /// Slice an in-memory collection the same way `LIMIT ? OFFSET ?` would
    pub fn apply<T: Clone>(&self, items: &[T]) -> Vec<T> {
        items
            .iter()
            .skip(self.start as usize)
            .take(self.page_size as usize)
            .cloned()
            .collect()
    }
}

/// One page of results plus the unpaginated total
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaginatedResponse<T> {
    pub rows: Vec<T>,
    pub start: u32,
    pub page_size: u32,
    pub total: u64,
}

impl<T> PaginatedResponse<T> {
    pub fn new(rows: Vec<T>, pagination: Pagination, total: u64) -> Self {
        Self {
            rows,
            start: pagination.start,
            page_size: pagination.page_size,
            total,
        }
    }

    pub fn empty(pagination: Pagination) -> Self {
        Self::new(Vec::new(), pagination, 0)
    }

    /// Transform the rows using a function
    pub fn map<U, F>(self, f: F) -> PaginatedResponse<U>
    where
        F: FnMut(T) -> U,
    {
        PaginatedResponse {
            rows: self.rows.into_iter().map(f).collect(),
            start: self.start,
            page_size: self.page_size,
            total: self.total,
        }
    }

    /// Whether rows exist beyond this page
    pub fn has_more(&self) -> bool {
        u64::from(self.start) + (self.rows.len() as u64) < self.total
    }
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}
