//! Ready-made option sets for the common database-paginated layouts.

use serde::Serialize;

use crate::domain::options::{
    DEFAULT_PAGE_PARAM, DEFAULT_PAGE_SIZE_OPTIONS, PaginationConfig, SearchConfig, SortConfig,
    TableOptions,
};
use crate::domain::table::{DatabasePaginatedData, TableData};
use crate::errors::TableResult;
use crate::query::{parse_page, parse_sort};

impl DatabasePaginatedData {
    /// Responsive, striped, bordered table with pagination controls and the
    /// info line. The current page is read from `query_string`.
    pub fn paginated<T: Serialize + ?Sized>(
        records: &T,
        total_count: usize,
        base_url: &str,
        query_string: &str,
        page_size: usize,
    ) -> TableResult<Self> {
        let pagination = PaginationConfig {
            total_count,
            base_url: base_url.to_string(),
            ..PaginationConfig::new(page_size, parse_page(query_string, DEFAULT_PAGE_PARAM))
        };
        let options = TableOptions {
            responsive: true,
            striped: true,
            bordered: true,
            pagination: Some(pagination),
            ..TableOptions::default()
        };
        let table = TableData::from_records(records)?.with_options(options);
        Ok(Self::new(table, total_count))
    }

    /// [`Self::paginated`] plus the page-size selector and, when
    /// `enable_sorting` is set, sort state read from `query_string`.
    pub fn paginated_sorted<T: Serialize + ?Sized>(
        records: &T,
        total_count: usize,
        base_url: &str,
        query_string: &str,
        page_size: usize,
        enable_sorting: bool,
    ) -> TableResult<Self> {
        let mut data = Self::paginated(records, total_count, base_url, query_string, page_size)?;
        let options = data.options_mut();

        if let Some(pagination) = options.pagination.as_mut() {
            pagination.show_page_sizer = true;
            pagination.page_size_options = DEFAULT_PAGE_SIZE_OPTIONS.to_vec();
        }

        if enable_sorting {
            let defaults = SortConfig::default();
            let (sort_by, sort_order) =
                parse_sort(query_string, &defaults.query_param, &defaults.order_param);
            options.sorting = Some(SortConfig {
                base_url: base_url.to_string(),
                ..SortConfig::new(sort_by, sort_order)
            });
        }

        Ok(data)
    }

    /// [`Self::paginated_sorted`] plus, when `enable_search` is set, a search
    /// box holding `search_term`.
    #[allow(clippy::too_many_arguments)]
    pub fn paginated_sorted_searchable<T: Serialize + ?Sized>(
        records: &T,
        total_count: usize,
        base_url: &str,
        query_string: &str,
        page_size: usize,
        enable_sorting: bool,
        enable_search: bool,
        search_term: &str,
    ) -> TableResult<Self> {
        let mut data = Self::paginated_sorted(
            records,
            total_count,
            base_url,
            query_string,
            page_size,
            enable_sorting,
        )?;

        if enable_search {
            data.options_mut().search = Some(SearchConfig {
                base_url: base_url.to_string(),
                min_length: 1,
                ..SearchConfig::new(search_term)
            });
        }

        Ok(data)
    }
}
