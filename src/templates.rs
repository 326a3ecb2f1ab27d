//! Built-in templates, compiled into the binary and auto-escaped by Tera.

use tera::Tera;

use crate::errors::TableResult;

pub const TABLE: &str = "table/table.html";
pub const PAGE: &str = "table/page.html";
pub const PAGINATION: &str = "table/pagination.html";
pub const INFO: &str = "table/info.html";
pub const PAGE_SIZE: &str = "table/page_size.html";
pub const SEARCH: &str = "table/search.html";

/// Builds a Tera instance holding every table template.
pub fn load() -> TableResult<Tera> {
    let mut tera = Tera::default();
    tera.add_raw_templates(vec![
        (TABLE, include_str!("../templates/table/table.html")),
        (PAGE, include_str!("../templates/table/page.html")),
        (PAGINATION, include_str!("../templates/table/pagination.html")),
        (INFO, include_str!("../templates/table/info.html")),
        (PAGE_SIZE, include_str!("../templates/table/page_size.html")),
        (SEARCH, include_str!("../templates/table/search.html")),
    ])?;
    Ok(tera)
}
