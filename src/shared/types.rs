use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::core::error::{AppError, Result};
use crate::shared::constants::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub message: Option<String>,
    pub meta: Option<Meta>,
    pub errors: Option<Vec<String>>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Meta {
    pub total: i64,
}

impl<T> ApiResponse<T> {
    pub fn success(data: Option<T>, message: Option<String>, meta: Option<Meta>) -> Self {
        Self {
            success: true,
            data,
            message,
            meta,
            errors: None,
        }
    }

    pub fn error(message: Option<String>, errors: Option<Vec<String>>) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            message,
            meta: None,
            errors,
        }
    }
}

// =============================================================================
// PAGINATION
// =============================================================================

/// Pagination query parameters shared by every list endpoint.
///
/// The client-supplied `size` is honored as long as it lies within
/// `1..=MAX_PAGE_SIZE`; it is never silently replaced.
#[derive(Debug, Clone, Deserialize, IntoParams, Validate)]
#[into_params(parameter_in = Query)]
pub struct PaginationQuery {
    /// Page index (0-based, default: 0)
    #[serde(default)]
    #[param(minimum = 0)]
    #[validate(range(min = 0, message = "page must be zero or greater"))]
    pub page: i64,

    /// Number of items per page (default: 5, max: 100)
    #[serde(default = "default_page_size")]
    #[param(minimum = 1, maximum = 100)]
    #[validate(range(min = 1, max = MAX_PAGE_SIZE, message = "size must be between 1 and 100"))]
    pub size: i64,
}

fn default_page_size() -> i64 {
    DEFAULT_PAGE_SIZE
}

impl Default for PaginationQuery {
    fn default() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl PaginationQuery {
    /// Validate the raw parameters and turn them into a `PageRequest`
    pub fn into_page_request(self) -> Result<PageRequest> {
        self.validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;
        Ok(PageRequest {
            page: self.page,
            size: self.size,
        })
    }
}

/// Validated (page index, page size) pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub size: i64,
}

impl PageRequest {
    /// SQL OFFSET for this page
    pub fn offset(&self) -> i64 {
        self.page.saturating_mul(self.size)
    }

    /// SQL LIMIT for this page
    pub fn limit(&self) -> i64 {
        self.size
    }
}

/// One page of results plus the total number of matching rows
#[derive(Debug, Clone)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: i64,
    pub request: PageRequest,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, total_count: i64, request: PageRequest) -> Self {
        Self {
            items,
            total_count,
            request,
        }
    }

    pub fn map<U, F>(self, f: F) -> Page<U>
    where
        F: FnMut(T) -> U,
    {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total_count: self.total_count,
            request: self.request,
        }
    }

    pub fn total_pages(&self) -> i64 {
        if self.request.size <= 0 {
            return 0;
        }
        (self.total_count + self.request.size - 1) / self.request.size
    }
}

/// Page envelope returned by list endpoints
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PageResponse<T> {
    pub content: Vec<T>,
    pub total_elements: i64,
    /// Current page index (0-based)
    pub page: i64,
    pub size: i64,
    pub total_pages: i64,
    pub first: bool,
    pub last: bool,
}

impl<T> From<Page<T>> for PageResponse<T> {
    fn from(page: Page<T>) -> Self {
        let total_pages = page.total_pages();
        let index = page.request.page;
        Self {
            total_elements: page.total_count,
            page: index,
            size: page.request.size,
            total_pages,
            first: index == 0,
            last: index >= total_pages.saturating_sub(1),
            content: page.items,
        }
    }
}
