//! Navigation URLs for pagination, sorting, page size and search.
//!
//! Every link starts from the parameters already on the relevant base URL,
//! layers the current table state on top (sort column and order, page size,
//! search term), then overrides or drops only what its action changes:
//!
//! | action          | overrides                     | resets          |
//! |-----------------|-------------------------------|-----------------|
//! | go to page N    | `page=N`                      |                 |
//! | sort on column  | `sort_by`, `sort_order`       | `page=1`        |
//! | change page size| `page_size=S`, `page=1`       |                 |
//! | search / clear  | `search` (form field / drop)  | `page` dropped  |

use serde::Serialize;

use crate::domain::options::{
    DEFAULT_PAGE_PARAM, DEFAULT_PAGE_SIZE_PARAM, SearchConfig, SortOrder, TableOptions,
};
use crate::pagination::PaginationState;
use crate::query::{QueryParams, encode_search, split_url};

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct PageLink {
    pub page: usize,
    pub href: String,
    pub current: bool,
}

/// Previous/next links are `None` on the first/last page.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct PaginationLinks {
    pub previous: Option<String>,
    pub pages: Vec<PageLink>,
    pub next: Option<String>,
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct SortLink {
    pub column: String,
    pub href: String,
    /// Direction the column is currently sorted in, if it is the active one.
    pub active: Option<SortOrder>,
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct PageSizeLink {
    pub size: usize,
    pub href: String,
    pub selected: bool,
}

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct HiddenField {
    pub name: String,
    pub value: String,
}

/// Target and carried state for the search form.
#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct SearchLinks {
    pub action: String,
    pub hidden: Vec<HiddenField>,
    /// Only present while a term is active.
    pub clear: Option<String>,
}

/// Order the sort link for `column` should request.
///
/// Only the active ascending column flips to descending; every other case
/// asks for ascending.
pub fn toggled_order(column: &str, active: Option<(&str, SortOrder)>) -> SortOrder {
    match active {
        Some((sorted, SortOrder::Asc)) if sorted == column => SortOrder::Desc,
        _ => SortOrder::Asc,
    }
}

/// Builds links for one render from immutable options and derived state.
#[derive(Clone, Copy, Debug)]
pub struct LinkBuilder<'a> {
    options: &'a TableOptions,
    state: &'a PaginationState,
}

impl<'a> LinkBuilder<'a> {
    pub fn new(options: &'a TableOptions, state: &'a PaginationState) -> Self {
        Self { options, state }
    }

    fn page_param(&self) -> &'a str {
        self.options
            .pagination
            .as_ref()
            .map_or(DEFAULT_PAGE_PARAM, |p| p.page_param())
    }

    fn page_size_param(&self) -> &'a str {
        self.options
            .pagination
            .as_ref()
            .map_or(DEFAULT_PAGE_SIZE_PARAM, |p| p.page_size_param())
    }

    fn preserve_query(&self) -> bool {
        self.options
            .pagination
            .as_ref()
            .is_none_or(|p| p.preserve_query)
    }

    /// Splits `base_url` into its path and the parameters it already carries.
    fn base(base_url: &str, preserve: bool) -> (&str, QueryParams) {
        let (path, query) = split_url(base_url);
        let params = if preserve {
            QueryParams::parse(query)
        } else {
            QueryParams::new()
        };
        (path, params)
    }

    fn with_sort(&self, params: &mut QueryParams) {
        if let Some(sorting) = self.options.enabled_sorting()
            && let Some((column, order)) = sorting.active()
        {
            params.set(sorting.sort_param(), column);
            params.set(sorting.order_param(), order.as_str());
        }
    }

    fn with_page_size(&self, params: &mut QueryParams) {
        let active = self
            .options
            .pagination
            .as_ref()
            .is_some_and(|p| p.is_active());
        if active && self.state.page_size > 0 {
            params.set(self.page_size_param(), self.state.page_size.to_string());
        }
    }

    fn with_search(&self, params: &mut QueryParams) {
        if let Some(search) = self.options.enabled_search()
            && let Some(term) = search.active_term()
        {
            params.set(search.search_param(), encode_search(term));
        }
    }

    /// Link to page `page`, keeping sort, page size and search.
    pub fn page_href(&self, page: usize) -> String {
        let base_url = self
            .options
            .pagination
            .as_ref()
            .map_or("", |p| p.base_url.as_str());
        let (path, mut params) = Self::base(base_url, self.preserve_query());
        self.with_sort(&mut params);
        self.with_page_size(&mut params);
        self.with_search(&mut params);

        let page_param = self.page_param();
        params.set(page_param, page.to_string());
        params.serialize(path, &[page_param])
    }

    pub fn pagination(&self) -> PaginationLinks {
        let state = self.state;
        PaginationLinks {
            previous: state
                .has_previous()
                .then(|| self.page_href(state.current_page - 1)),
            pages: state
                .window()
                .map(|page| PageLink {
                    page,
                    href: self.page_href(page),
                    current: page == state.current_page,
                })
                .collect(),
            next: state
                .has_next()
                .then(|| self.page_href(state.current_page + 1)),
        }
    }

    /// Link that sorts on `column`, toggling the order if it is already the
    /// ascending column, and sends the user back to the first page.
    pub fn sort_href(&self, column: &str) -> String {
        let Some(sorting) = self.options.sorting.as_ref() else {
            return String::new();
        };
        let (path, mut params) = Self::base(&sorting.base_url, true);
        self.with_page_size(&mut params);
        self.with_search(&mut params);

        let sort_param = sorting.sort_param();
        let order_param = sorting.order_param();
        let order = toggled_order(column, sorting.active());
        params.set(sort_param, column);
        params.set(order_param, order.as_str());

        let page_param = self.page_param();
        if self.options.enabled_pagination().is_some() {
            params.set(page_param, "1");
            params.serialize(path, &[sort_param, order_param, page_param])
        } else {
            params.remove(page_param);
            params.serialize(path, &[sort_param, order_param])
        }
    }

    /// One link per header; empty when sorting is off.
    pub fn sort_links(&self, headers: &[String]) -> Vec<SortLink> {
        let Some(sorting) = self.options.enabled_sorting() else {
            return Vec::new();
        };
        let active = sorting.active();
        headers
            .iter()
            .map(|column| SortLink {
                column: column.clone(),
                href: self.sort_href(column),
                active: active
                    .filter(|(sorted, _)| *sorted == column.as_str())
                    .map(|(_, order)| order),
            })
            .collect()
    }

    /// Link that switches to `size` rows per page, starting from page 1.
    pub fn page_size_href(&self, size: usize) -> String {
        let base_url = self
            .options
            .pagination
            .as_ref()
            .map_or("", |p| p.base_url.as_str());
        let (path, mut params) = Self::base(base_url, self.preserve_query());
        self.with_sort(&mut params);
        self.with_search(&mut params);

        let page_size_param = self.page_size_param();
        let page_param = self.page_param();
        params.set(page_size_param, size.to_string());
        params.set(page_param, "1");
        params.serialize(path, &[page_size_param, page_param])
    }

    pub fn page_size_links(&self) -> Vec<PageSizeLink> {
        let Some(pagination) = self.options.enabled_pagination() else {
            return Vec::new();
        };
        pagination
            .page_size_options()
            .iter()
            .map(|&size| PageSizeLink {
                size,
                href: self.page_size_href(size),
                selected: size == pagination.page_size,
            })
            .collect()
    }

    /// State the search form carries besides the term itself. The page is
    /// dropped so a new search starts on the first page.
    fn search_params<'s>(&self, search: &'s SearchConfig) -> (&'s str, QueryParams) {
        let (path, mut params) = Self::base(&search.base_url, true);
        self.with_sort(&mut params);
        self.with_page_size(&mut params);
        params.remove(search.search_param());
        params.remove(self.page_param());
        (path, params)
    }

    /// Form action, hidden fields and the clear-search link.
    pub fn search(&self, search: &SearchConfig) -> SearchLinks {
        let (path, params) = self.search_params(search);

        let action = params.serialize(path, &[]);
        let hidden = params
            .iter()
            .map(|(name, value)| HiddenField {
                name: name.to_string(),
                value: value.to_string(),
            })
            .collect();
        let clear = search.active_term().map(|_| {
            if action.is_empty() {
                "/".to_string()
            } else {
                action.clone()
            }
        });

        SearchLinks {
            action,
            hidden,
            clear,
        }
    }
}
