//! Offset pagination shared by every list operation.

use crate::model::api::{ApiResponse, PaginationDto};

/// Page size used when the caller asks for zero or a negative limit.
pub const DEFAULT_LIMIT: u64 = 10;

/// Column every list is sorted by, newest first.
pub const SORT_BY: &str = "created_at";

/// Normalized limit/offset window for a list query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: u64,
    pub offset: u64,
}

impl PageRequest {
    /// Normalizes raw query values: `limit <= 0` becomes 10, a negative offset becomes 0.
    pub fn new(limit: i64, offset: i64) -> Self {
        Self {
            limit: if limit <= 0 {
                DEFAULT_LIMIT
            } else {
                limit as u64
            },
            offset: offset.max(0) as u64,
        }
    }
}

impl Default for PageRequest {
    fn default() -> Self {
        Self::new(0, 0)
    }
}

/// Pagination metadata returned alongside a page of results.
#[derive(Debug, Clone, PartialEq)]
pub struct Pagination {
    /// 1-based page number derived from `offset / limit + 1`.
    pub current_page: u64,
    pub total_pages: u64,
    pub total_elements: u64,
    /// Number of rows on this page.
    pub current_elements: u64,
    pub limit: u64,
    pub offset: u64,
    pub sort_by: String,
}

impl Pagination {
    pub fn new(page: PageRequest, total_elements: u64, current_elements: u64) -> Self {
        Self {
            current_page: page.offset / page.limit + 1,
            total_pages: total_elements.div_ceil(page.limit),
            total_elements,
            current_elements,
            limit: page.limit,
            offset: page.offset,
            sort_by: SORT_BY.to_string(),
        }
    }

    pub fn into_dto(self) -> PaginationDto {
        PaginationDto {
            current_page: self.current_page,
            total_pages: self.total_pages,
            total_elements: self.total_elements,
            current_elements: self.current_elements,
            limit: self.limit,
            offset: self.offset,
            sort_by: self.sort_by,
        }
    }
}

/// A page of domain items with its metadata.
#[derive(Debug, Clone)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pagination: Pagination,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, page: PageRequest, total_elements: u64) -> Self {
        let pagination = Pagination::new(page, total_elements, items.len() as u64);
        Self { items, pagination }
    }

    /// Converts each item into its DTO and wraps the page in the success envelope.
    pub fn into_response<D>(self, into_dto: impl FnMut(T) -> D) -> ApiResponse<Vec<D>> {
        ApiResponse::paginated(
            self.items.into_iter().map(into_dto).collect(),
            self.pagination.into_dto(),
        )
    }
}
