//! Markup for pagination, the info line, the page-size selector and search.
//!
//! Nothing here decides URLs; every href comes from [`LinkBuilder`].

use serde::Serialize;
use tera::{Context, Tera};

use crate::domain::options::{SearchConfig, TableOptions};
use crate::dto::table::ControlFragments;
use crate::errors::TableResult;
use crate::links::{LinkBuilder, PageSizeLink, PaginationLinks, SearchLinks};
use crate::pagination::PaginationState;
use crate::templates;

pub struct ControlRenderer<'a> {
    tera: &'a Tera,
}

impl<'a> ControlRenderer<'a> {
    pub fn new(tera: &'a Tera) -> Self {
        Self { tera }
    }

    fn render(&self, template: &str, context: &Context) -> TableResult<String> {
        self.tera.render(template, context).map_err(|err| {
            log::error!("Failed to render {template}: {err}");
            err.into()
        })
    }

    fn render_with<T: Serialize + ?Sized>(
        &self,
        template: &str,
        key: &str,
        value: &T,
    ) -> TableResult<String> {
        let mut context = Context::new();
        context.insert(key, value);
        self.render(template, &context)
    }

    /// Previous/number/next navigation; empty for a single page.
    pub fn pagination_nav(
        &self,
        state: &PaginationState,
        links: &PaginationLinks,
    ) -> TableResult<String> {
        if state.total_pages <= 1 {
            return Ok(String::new());
        }
        self.render_with(templates::PAGINATION, "links", links)
    }

    /// "Showing X to Y of Z entries" or "No records found".
    pub fn info(&self, state: &PaginationState) -> TableResult<String> {
        self.render_with(templates::INFO, "state", state)
    }

    pub fn page_sizer(&self, options: &[PageSizeLink]) -> TableResult<String> {
        self.render_with(templates::PAGE_SIZE, "options", options)
    }

    pub fn search_box(&self, search: &SearchConfig, links: &SearchLinks) -> TableResult<String> {
        let mut context = Context::new();
        context.insert("links", links);
        context.insert("param", search.search_param());
        context.insert("placeholder", search.placeholder());
        context.insert("term", &search.search_term);
        self.render(templates::SEARCH, &context)
    }

    /// Renders whichever controls the options switch on.
    pub fn fragments(
        &self,
        options: &TableOptions,
        state: &PaginationState,
        links: &LinkBuilder<'_>,
    ) -> TableResult<ControlFragments> {
        let mut fragments = ControlFragments::default();

        if let Some(pagination) = options.enabled_pagination() {
            if pagination.show_controls {
                let nav = self.pagination_nav(state, &links.pagination())?;
                fragments.nav = Some(nav).filter(|nav| !nav.is_empty());
            }
            if pagination.show_info {
                fragments.info = Some(self.info(state)?);
            }
            if pagination.show_page_sizer {
                fragments.page_sizer = Some(self.page_sizer(&links.page_size_links())?);
            }
        }

        if let Some(search) = options.enabled_search() {
            fragments.search = Some(self.search_box(search, &links.search(search))?);
        }

        Ok(fragments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::options::{PaginationConfig, SortConfig, SortOrder};

    fn tera() -> Tera {
        templates::load().expect("templates load")
    }

    fn paged(page_size: usize, current_page: usize) -> TableOptions {
        TableOptions {
            pagination: Some(PaginationConfig::new(page_size, current_page)),
            ..TableOptions::default()
        }
    }

    #[test]
    fn info_line_shows_range() {
        let tera = tera();
        let state = PaginationState::in_memory(47, paged(10, 3).pagination.as_ref());
        let html = ControlRenderer::new(&tera).info(&state).expect("renders");
        assert_eq!(
            html.trim(),
            r#"<div class="pagination-info">Showing 21 to 30 of 47 entries</div>"#
        );
    }

    #[test]
    fn info_line_reports_empty_results() {
        let tera = tera();
        let state = PaginationState::in_memory(0, paged(10, 1).pagination.as_ref());
        let html = ControlRenderer::new(&tera).info(&state).expect("renders");
        assert!(html.contains("No records found"));
    }

    #[test]
    fn nav_is_empty_for_a_single_page() {
        let tera = tera();
        let options = paged(10, 1);
        let state = PaginationState::in_memory(8, options.pagination.as_ref());
        let links = LinkBuilder::new(&options, &state).pagination();
        let html = ControlRenderer::new(&tera)
            .pagination_nav(&state, &links)
            .expect("renders");
        assert!(html.is_empty());
    }

    #[test]
    fn nav_marks_current_page_and_disables_previous() {
        let tera = tera();
        let options = paged(10, 1);
        let state = PaginationState::in_memory(120, options.pagination.as_ref());
        let links = LinkBuilder::new(&options, &state).pagination();
        let html = ControlRenderer::new(&tera)
            .pagination_nav(&state, &links)
            .expect("renders");

        assert!(html.contains(
            r#"<li class="page-item disabled"><span class="page-link">Previous</span></li>"#
        ));
        assert!(html.contains(
            r#"<li class="page-item active"><span class="page-link">1</span></li>"#
        ));
        assert!(html.contains(
            r#"<a class="page-link" href="?page=2&amp;page_size=10">2</a>"#
        ));
        assert!(html.contains(r#"href="?page=5&amp;page_size=10">5</a>"#));
        assert!(!html.contains(">6</a>"));
        assert!(html.contains(r#"href="?page=2&amp;page_size=10">Next</a>"#));
    }

    #[test]
    fn page_sizer_selects_current_size() {
        let tera = tera();
        let options = paged(25, 1);
        let state = PaginationState::in_memory(100, options.pagination.as_ref());
        let links = LinkBuilder::new(&options, &state).page_size_links();
        let html = ControlRenderer::new(&tera)
            .page_sizer(&links)
            .expect("renders");

        assert!(html.contains(r#"<option value="?page_size=25&amp;page=1" selected>25 entries</option>"#));
        assert!(html.contains(r#"<option value="?page_size=10&amp;page=1">10 entries</option>"#));
    }

    #[test]
    fn search_box_escapes_term_and_carries_state() {
        let tera = tera();
        let options = TableOptions {
            sorting: Some(SortConfig::new(Some("Name".to_string()), SortOrder::Desc)),
            search: Some(SearchConfig::new(r#"<b>"x"</b>"#)),
            ..TableOptions::default()
        };
        let state = PaginationState::single_page(0);
        let search = options.search.as_ref().expect("search configured");
        let links = LinkBuilder::new(&options, &state).search(search);
        let html = ControlRenderer::new(&tera)
            .search_box(search, &links)
            .expect("renders");

        assert!(html.contains(r#"value="&lt;b&gt;&quot;x&quot;&lt;&#x2F;b&gt;""#));
        assert!(html.contains(r#"<input type="hidden" name="sort_by" value="Name">"#));
        assert!(html.contains(r#"<input type="hidden" name="sort_order" value="desc">"#));
        assert!(html.contains(r#"placeholder="Search all columns...""#));
        assert!(html.contains(r#"title="Clear search""#));
    }

    #[test]
    fn search_box_hides_clear_without_term() {
        let tera = tera();
        let options = TableOptions {
            search: Some(SearchConfig::new("")),
            ..TableOptions::default()
        };
        let state = PaginationState::single_page(0);
        let search = options.search.as_ref().expect("search configured");
        let links = LinkBuilder::new(&options, &state).search(search);
        let html = ControlRenderer::new(&tera)
            .search_box(search, &links)
            .expect("renders");
        assert!(!html.contains("Clear search"));
    }

    #[test]
    fn fragments_follow_option_flags() {
        let tera = tera();
        let mut options = paged(10, 2);
        if let Some(pagination) = options.pagination.as_mut() {
            pagination.show_info = false;
            pagination.show_page_sizer = true;
        }
        let state = PaginationState::in_memory(30, options.pagination.as_ref());
        let links = LinkBuilder::new(&options, &state);
        let fragments = ControlRenderer::new(&tera)
            .fragments(&options, &state, &links)
            .expect("renders");

        assert!(fragments.nav.is_some());
        assert!(fragments.info.is_none());
        assert!(fragments.page_sizer.is_some());
        assert!(fragments.search.is_none());
    }

    #[test]
    fn fragments_are_empty_without_pagination_or_search() {
        let tera = tera();
        let options = TableOptions::default();
        let state = PaginationState::single_page(3);
        let links = LinkBuilder::new(&options, &state);
        let fragments = ControlRenderer::new(&tera)
            .fragments(&options, &state, &links)
            .expect("renders");
        assert_eq!(fragments, ControlFragments::default());
    }
}
