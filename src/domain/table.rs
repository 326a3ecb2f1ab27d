//! Table contents: explicit headers and rows, or typed records.
//!
//! Typed records are introspected through `serde`: each record is serialized
//! to a JSON object, headers come from its keys (so `#[serde(rename = "...")]`
//! names a column) and cells from its values in declaration order.

use serde::Serialize;
use serde_json::Value;

use crate::domain::options::TableOptions;
use crate::errors::{TableError, TableResult};

/// Headers and rows ready for rendering.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ResolvedTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Value>>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TableData {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<Value>>,
    /// Serialized typed records; when set, rows come from here and headers
    /// too unless `headers` is non-empty.
    pub records: Option<Value>,
    pub options: TableOptions,
}

impl TableData {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        Self {
            headers,
            rows,
            ..Self::default()
        }
    }

    /// Table built from a collection of typed records.
    pub fn from_records<T: Serialize + ?Sized>(records: &T) -> TableResult<Self> {
        Ok(Self {
            records: Some(serde_json::to_value(records)?),
            ..Self::default()
        })
    }

    pub fn with_headers<S: Into<String>>(mut self, headers: impl IntoIterator<Item = S>) -> Self {
        self.headers = headers.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_options(mut self, options: TableOptions) -> Self {
        self.options = options;
        self
    }

    /// Resolves the rows to render, validating typed records.
    pub fn resolve(&self) -> TableResult<ResolvedTable> {
        match &self.records {
            Some(records) => {
                let mut resolved = resolve_records(records)?;
                if !self.headers.is_empty() {
                    resolved.headers = self.headers.clone();
                }
                Ok(resolved)
            }
            None => Ok(ResolvedTable {
                headers: self.headers.clone(),
                rows: self.rows.clone(),
            }),
        }
    }
}

/// One page of rows plus the total row count known to the storage layer.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DatabasePaginatedData {
    pub table: TableData,
    /// Takes precedence over `PaginationConfig::total_count` when non-zero.
    pub total_count: usize,
}

impl DatabasePaginatedData {
    pub fn new(table: TableData, total_count: usize) -> Self {
        Self { table, total_count }
    }

    pub fn options(&self) -> &TableOptions {
        &self.table.options
    }

    pub fn options_mut(&mut self) -> &mut TableOptions {
        &mut self.table.options
    }
}

/// Turns a serialized record collection into headers and rows.
///
/// The collection must be a sequence of objects that all share the first
/// object's keys in the same order.
pub fn resolve_records(records: &Value) -> TableResult<ResolvedTable> {
    let Value::Array(items) = records else {
        return Err(TableError::InvalidDataShape(
            "records must be a sequence".to_string(),
        ));
    };

    let Some(first) = items.first() else {
        return Ok(ResolvedTable::default());
    };
    let Value::Object(first) = first else {
        return Err(TableError::InvalidDataShape(
            "records must be structured values with named fields".to_string(),
        ));
    };
    let headers: Vec<String> = first.keys().cloned().collect();

    let mut rows = Vec::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let Value::Object(fields) = item else {
            return Err(TableError::InvalidDataShape(format!(
                "record {index} is not a structured value"
            )));
        };
        if fields.len() != headers.len() || !fields.keys().eq(headers.iter()) {
            return Err(TableError::InvalidDataShape(format!(
                "record {index} does not have the same fields as record 0"
            )));
        }
        rows.push(fields.values().cloned().collect());
    }

    Ok(ResolvedTable { headers, rows })
}

/// Display text for a cell.
pub fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
