use crate::domain::options::{
    DEFAULT_ORDER_PARAM, DEFAULT_PAGE_PARAM, DEFAULT_SEARCH_PARAM, DEFAULT_SORT_PARAM, SortOrder,
};
use crate::domain::table::DatabasePaginatedData;
use crate::query::{parse_page, parse_page_size, parse_search, parse_sort};

/// Table state requested through the directory page's query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryQuery {
    pub page: usize,
    pub page_size: usize,
    pub sort_by: Option<String>,
    pub sort_order: SortOrder,
    /// Trimmed search term; empty when absent.
    pub search: String,
}

impl DirectoryQuery {
    pub fn parse(query_string: &str, default_page_size: usize) -> Self {
        let (sort_by, sort_order) =
            parse_sort(query_string, DEFAULT_SORT_PARAM, DEFAULT_ORDER_PARAM);
        Self {
            page: parse_page(query_string, DEFAULT_PAGE_PARAM),
            page_size: parse_page_size(query_string, default_page_size),
            sort_by,
            sort_order,
            search: parse_search(query_string, DEFAULT_SEARCH_PARAM)
                .trim()
                .to_string(),
        }
    }
}

/// Data required to render the directory page.
pub struct DirectoryPageData {
    pub title: String,
    pub table: DatabasePaginatedData,
}
