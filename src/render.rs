//! Entry points that turn table data into HTML.

use tera::{Context, Tera};

use crate::controls::ControlRenderer;
use crate::domain::options::TableOptions;
use crate::domain::table::{DatabasePaginatedData, ResolvedTable, TableData, cell_text};
use crate::dto::table::{HeaderView, TableView};
use crate::errors::TableResult;
use crate::links::LinkBuilder;
use crate::pagination::PaginationState;
use crate::templates;

/// Renders tables with the built-in templates.
///
/// Rendering never mutates its inputs, so one `Renderer` can be shared across
/// threads and requests.
#[derive(Clone, Debug)]
pub struct Renderer {
    tera: Tera,
}

impl Renderer {
    pub fn new() -> TableResult<Self> {
        Ok(Self {
            tera: templates::load()?,
        })
    }

    /// Renders a table that holds every row; the current page is sliced out
    /// here.
    pub fn render_table(&self, data: &TableData) -> TableResult<String> {
        let resolved = resolve(data)?;
        let state = PaginationState::in_memory(resolved.rows.len(), data.options.pagination.as_ref());
        let rows = state.slice(&resolved.rows);
        self.assemble(&data.options, &state, &resolved.headers, rows)
    }

    /// Renders one page that was already fetched by the storage layer. The
    /// rows are shown as supplied.
    pub fn render_paginated(&self, data: &DatabasePaginatedData) -> TableResult<String> {
        let resolved = resolve(&data.table)?;
        let options = effective_options(data);
        let state = PaginationState::database(resolved.rows.len(), options.pagination.as_ref());
        self.assemble(&options, &state, &resolved.headers, &resolved.rows)
    }

    /// [`Self::render_paginated`] wrapped in a standalone HTML document.
    pub fn render_page(&self, title: &str, data: &DatabasePaginatedData) -> TableResult<String> {
        let table = self.render_paginated(data)?;
        let mut context = Context::new();
        context.insert("title", title);
        context.insert("table", &table);
        self.render_template(templates::PAGE, &context)
    }

    fn assemble(
        &self,
        options: &TableOptions,
        state: &PaginationState,
        headers: &[String],
        rows: &[Vec<serde_json::Value>],
    ) -> TableResult<String> {
        let links = LinkBuilder::new(options, state);
        let fragments = ControlRenderer::new(&self.tera).fragments(options, state, &links)?;

        let headers = if options.enabled_sorting().is_some() {
            links
                .sort_links(headers)
                .into_iter()
                .map(|link| HeaderView {
                    label: link.column,
                    href: Some(link.href),
                    active: link.active,
                })
                .collect()
        } else {
            headers
                .iter()
                .map(|label| HeaderView {
                    label: label.clone(),
                    href: None,
                    active: None,
                })
                .collect()
        };

        let view = TableView {
            css_classes: options.css_classes(),
            id: options.id.clone(),
            style: options.style.clone(),
            responsive: options.responsive,
            headers,
            rows: rows
                .iter()
                .map(|row| row.iter().map(cell_text).collect())
                .collect(),
            search: fragments.search,
            page_sizer: fragments.page_sizer,
            info: fragments.info,
            nav: fragments.nav,
        };

        let mut context = Context::new();
        context.insert("table", &view);
        self.render_template(templates::TABLE, &context)
    }

    fn render_template(&self, template: &str, context: &Context) -> TableResult<String> {
        self.tera.render(template, context).map_err(|err| {
            log::error!("Failed to render {template}: {err}");
            err.into()
        })
    }
}

fn resolve(data: &TableData) -> TableResult<ResolvedTable> {
    data.resolve().inspect_err(|err| {
        if err.is_data_shape() {
            log::warn!("Rejected table records: {err}");
        }
    })
}

/// Options with the authoritative total applied to the pagination config.
fn effective_options(data: &DatabasePaginatedData) -> TableOptions {
    let mut options = data.options().clone();
    if data.total_count > 0
        && let Some(pagination) = options.pagination.as_mut()
    {
        pagination.total_count = data.total_count;
    }
    options
}
