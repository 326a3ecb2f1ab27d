//! View models handed to the table templates.

use serde::Serialize;

use crate::domain::options::SortOrder;

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct HeaderView {
    pub label: String,
    /// Sort-toggle link; `None` when sorting is off.
    pub href: Option<String>,
    pub active: Option<SortOrder>,
}

/// Markup fragments produced by the control renderer. A `None` fragment is
/// left out of the table.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ControlFragments {
    pub search: Option<String>,
    pub page_sizer: Option<String>,
    pub info: Option<String>,
    pub nav: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TableView {
    pub css_classes: String,
    pub id: String,
    pub style: String,
    pub responsive: bool,
    pub headers: Vec<HeaderView>,
    pub rows: Vec<Vec<String>>,
    pub search: Option<String>,
    pub page_sizer: Option<String>,
    pub info: Option<String>,
    pub nav: Option<String>,
}
