//! Rendering options for a single table.
//!
//! Every struct here is request-scoped value data: built per request, read
//! during one render call, then dropped. Empty parameter names fall back to the
//! `DEFAULT_*` constants when links are generated.

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

pub const DEFAULT_PAGE_PARAM: &str = "page";
pub const DEFAULT_PAGE_SIZE_PARAM: &str = "page_size";
pub const DEFAULT_SORT_PARAM: &str = "sort_by";
pub const DEFAULT_ORDER_PARAM: &str = "sort_order";
pub const DEFAULT_SEARCH_PARAM: &str = "search";
pub const DEFAULT_SEARCH_PLACEHOLDER: &str = "Search all columns...";
pub const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 4] = [10, 25, 50, 100];

/// Returns `value` unless it is empty, in which case `default` is used.
pub(crate) fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.is_empty() { default } else { value }
}

/// Direction of a server-side sort.
#[derive(Clone, Copy, Debug, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    /// Lenient parse: only the literal `desc` yields [`SortOrder::Desc`].
    pub fn parse(value: &str) -> Self {
        if value == "desc" {
            SortOrder::Desc
        } else {
            SortOrder::Asc
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    pub fn toggle(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

impl Display for SortOrder {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Pagination settings. `page_size == 0` means "one page with every row".
pub struct PaginationConfig {
    pub enabled: bool,
    pub page_size: usize,
    /// Requested page, 1-indexed. Zero is treated as the first page.
    pub current_page: usize,
    /// Authoritative row count for database-paginated rendering.
    pub total_count: usize,
    pub show_controls: bool,
    pub show_info: bool,
    pub show_page_sizer: bool,
    /// Empty means [`DEFAULT_PAGE_SIZE_OPTIONS`].
    pub page_size_options: Vec<usize>,
    pub base_url: String,
    pub query_param: String,
    pub page_size_param: String,
    /// Carry parameters already present on `base_url` into generated links.
    pub preserve_query: bool,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            page_size: 0,
            current_page: 1,
            total_count: 0,
            show_controls: true,
            show_info: true,
            show_page_sizer: false,
            page_size_options: Vec::new(),
            base_url: String::new(),
            query_param: DEFAULT_PAGE_PARAM.to_string(),
            page_size_param: DEFAULT_PAGE_SIZE_PARAM.to_string(),
            preserve_query: true,
        }
    }
}

impl PaginationConfig {
    /// Enabled pagination with controls and the info line.
    pub fn new(page_size: usize, current_page: usize) -> Self {
        Self {
            enabled: true,
            page_size,
            current_page,
            ..Self::default()
        }
    }

    /// Pagination only applies when enabled with a positive page size.
    pub fn is_active(&self) -> bool {
        self.enabled && self.page_size > 0
    }

    pub fn page_param(&self) -> &str {
        or_default(&self.query_param, DEFAULT_PAGE_PARAM)
    }

    pub fn page_size_param(&self) -> &str {
        or_default(&self.page_size_param, DEFAULT_PAGE_SIZE_PARAM)
    }

    pub fn page_size_options(&self) -> &[usize] {
        if self.page_size_options.is_empty() {
            &DEFAULT_PAGE_SIZE_OPTIONS
        } else {
            &self.page_size_options
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Server-side sorting state reflected into header links.
pub struct SortConfig {
    pub enabled: bool,
    /// Column currently sorted on, matched against header labels.
    pub sort_by: Option<String>,
    pub sort_order: SortOrder,
    pub base_url: String,
    pub query_param: String,
    pub order_param: String,
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            sort_by: None,
            sort_order: SortOrder::Asc,
            base_url: String::new(),
            query_param: DEFAULT_SORT_PARAM.to_string(),
            order_param: DEFAULT_ORDER_PARAM.to_string(),
        }
    }
}

impl SortConfig {
    pub fn new(sort_by: Option<String>, sort_order: SortOrder) -> Self {
        Self {
            enabled: true,
            sort_by,
            sort_order,
            ..Self::default()
        }
    }

    /// The active column and direction, if sorting is on and a column is set.
    pub fn active(&self) -> Option<(&str, SortOrder)> {
        if !self.enabled {
            return None;
        }
        self.sort_by
            .as_deref()
            .filter(|column| !column.is_empty())
            .map(|column| (column, self.sort_order))
    }

    pub fn sort_param(&self) -> &str {
        or_default(&self.query_param, DEFAULT_SORT_PARAM)
    }

    pub fn order_param(&self) -> &str {
        or_default(&self.order_param, DEFAULT_ORDER_PARAM)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Search box state.
///
/// `search_columns`, `case_sensitive` and `min_length` describe how the
/// caller's storage layer filters; the renderer never filters rows itself.
pub struct SearchConfig {
    pub enabled: bool,
    pub search_term: String,
    pub placeholder: String,
    pub search_columns: Vec<String>,
    pub case_sensitive: bool,
    pub base_url: String,
    pub query_param: String,
    pub min_length: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            search_term: String::new(),
            placeholder: DEFAULT_SEARCH_PLACEHOLDER.to_string(),
            search_columns: Vec::new(),
            case_sensitive: false,
            base_url: String::new(),
            query_param: DEFAULT_SEARCH_PARAM.to_string(),
            min_length: 1,
        }
    }
}

impl SearchConfig {
    pub fn new(search_term: impl Into<String>) -> Self {
        Self {
            enabled: true,
            search_term: search_term.into(),
            ..Self::default()
        }
    }

    /// The current term when search is enabled and the term is non-empty.
    pub fn active_term(&self) -> Option<&str> {
        if self.enabled && !self.search_term.is_empty() {
            Some(&self.search_term)
        } else {
            None
        }
    }

    /// Whether `term` is long enough for the caller to run a search with.
    pub fn accepts(&self, term: &str) -> bool {
        term.chars().count() >= self.min_length.max(1)
    }

    pub fn search_param(&self) -> &str {
        or_default(&self.query_param, DEFAULT_SEARCH_PARAM)
    }

    pub fn placeholder(&self) -> &str {
        or_default(&self.placeholder, DEFAULT_SEARCH_PLACEHOLDER)
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
/// Presentation flags plus the optional pagination, sorting and search
/// sub-configurations.
pub struct TableOptions {
    pub css_class: String,
    pub id: String,
    pub striped: bool,
    pub bordered: bool,
    pub responsive: bool,
    pub style: String,
    pub pagination: Option<PaginationConfig>,
    pub sorting: Option<SortConfig>,
    pub search: Option<SearchConfig>,
}

impl TableOptions {
    /// Bootstrap class list: `table`, the custom class, then the flags.
    pub fn css_classes(&self) -> String {
        let mut classes = vec!["table"];
        if !self.css_class.is_empty() {
            classes.push(self.css_class.as_str());
        }
        if self.striped {
            classes.push("table-striped");
        }
        if self.bordered {
            classes.push("table-bordered");
        }
        classes.join(" ")
    }

    /// Pagination config when it is enabled (page size may still be zero).
    pub fn enabled_pagination(&self) -> Option<&PaginationConfig> {
        self.pagination.as_ref().filter(|p| p.enabled)
    }

    pub fn enabled_sorting(&self) -> Option<&SortConfig> {
        self.sorting.as_ref().filter(|s| s.enabled)
    }

    pub fn enabled_search(&self) -> Option<&SearchConfig> {
        self.search.as_ref().filter(|s| s.enabled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_order_parses_leniently() {
        assert_eq!(SortOrder::parse("desc"), SortOrder::Desc);
        assert_eq!(SortOrder::parse("asc"), SortOrder::Asc);
        assert_eq!(SortOrder::parse("DESC"), SortOrder::Asc);
        assert_eq!(SortOrder::parse(""), SortOrder::Asc);
    }

    #[test]
    fn css_classes_follow_flag_order() {
        let options = TableOptions {
            css_class: "user-table".to_string(),
            striped: true,
            bordered: true,
            ..TableOptions::default()
        };
        assert_eq!(
            options.css_classes(),
            "table user-table table-striped table-bordered"
        );
        assert_eq!(TableOptions::default().css_classes(), "table");
    }

    #[test]
    fn empty_param_names_fall_back_to_defaults() {
        let pagination = PaginationConfig {
            query_param: String::new(),
            page_size_param: String::new(),
            ..PaginationConfig::default()
        };
        assert_eq!(pagination.page_param(), "page");
        assert_eq!(pagination.page_size_param(), "page_size");

        let sorting = SortConfig {
            query_param: String::new(),
            order_param: String::new(),
            ..SortConfig::default()
        };
        assert_eq!(sorting.sort_param(), "sort_by");
        assert_eq!(sorting.order_param(), "sort_order");

        let search = SearchConfig {
            placeholder: String::new(),
            query_param: String::new(),
            ..SearchConfig::default()
        };
        assert_eq!(search.search_param(), "search");
        assert_eq!(search.placeholder(), "Search all columns...");
    }

    #[test]
    fn sort_is_only_active_with_a_column() {
        let mut sorting = SortConfig::new(None, SortOrder::Desc);
        assert!(sorting.active().is_none());

        sorting.sort_by = Some("Name".to_string());
        assert_eq!(sorting.active(), Some(("Name", SortOrder::Desc)));

        sorting.enabled = false;
        assert!(sorting.active().is_none());
    }

    #[test]
    fn options_deserialize_with_defaults() {
        let options: TableOptions = serde_json::from_str(
            r#"{"striped": true, "pagination": {"enabled": true, "page_size": 25}}"#,
        )
        .expect("valid options");

        let pagination = options.pagination.expect("pagination present");
        assert!(options.striped);
        assert!(pagination.is_active());
        assert_eq!(pagination.current_page, 1);
        assert_eq!(pagination.page_param(), "page");
        assert_eq!(pagination.page_size_options(), &[10, 25, 50, 100]);
    }

    #[test]
    fn search_min_length_is_counted_in_chars() {
        let search = SearchConfig {
            min_length: 3,
            ..SearchConfig::new("")
        };
        assert!(!search.accepts("ab"));
        assert!(search.accepts("äöü"));
    }
}
