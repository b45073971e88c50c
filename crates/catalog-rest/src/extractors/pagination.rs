//! Search and pagination query string.

use catalog_core::{PageRequest, SearchRequest};
use serde::Deserialize;
use utoipa::IntoParams;

/// Query parameters shared by every list and detail endpoint.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PaginationQuery {
    /// Case-insensitive substring filter.
    #[serde(default)]
    pub search_term: Option<String>,
    /// 1-based page number.
    #[serde(default)]
    pub page_index: Option<usize>,
    /// Items per page.
    #[serde(default)]
    pub page_size: Option<usize>,
}

impl From<PaginationQuery> for SearchRequest {
    fn from(query: PaginationQuery) -> Self {
        SearchRequest::new(
            query.search_term,
            PageRequest::new(
                query.page_index.unwrap_or(1),
                query.page_size.unwrap_or(PageRequest::DEFAULT_SIZE),
            ),
        )
    }
}
