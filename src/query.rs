//! Query-string parsing and serialization.
//!
//! Values are kept raw: nothing is percent-decoded or percent-encoded. The one
//! exception is [`parse_search`], which turns `+` into a space. A value that
//! contains `&` or `=` will corrupt the generated URL; callers that need such
//! values must encode them before handing them over.

use std::collections::BTreeMap;

use crate::domain::options::{
    DEFAULT_ORDER_PARAM, DEFAULT_PAGE_PARAM, DEFAULT_PAGE_SIZE_PARAM, DEFAULT_SEARCH_PARAM,
    DEFAULT_SORT_PARAM, SortOrder, or_default,
};

/// Unique parameter names mapped to raw values.
///
/// Keys are kept sorted so that serializing the same state twice yields the
/// same URL.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QueryParams(BTreeMap<String, String>);

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a full URL or a bare query string.
    ///
    /// Everything up to and including the first `?` is dropped. Pairs without
    /// `=` are skipped and the last occurrence of a key wins.
    pub fn parse(url_or_query: &str) -> Self {
        let mut params = Self::new();
        for (key, value) in pairs(url_or_query) {
            params.set(key, value);
        }
        params
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.0.insert(key.into(), value.into());
        self
    }

    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Joins the parameters as `key=value` pairs.
    ///
    /// Keys listed in `leading` come first, in that order; the rest follow in
    /// key order.
    pub fn to_query_string(&self, leading: &[&str]) -> String {
        let mut parts = Vec::with_capacity(self.0.len());
        for key in leading {
            if let Some(value) = self.0.get(*key) {
                parts.push(format!("{key}={value}"));
            }
        }
        for (key, value) in &self.0 {
            if !leading.contains(&key.as_str()) {
                parts.push(format!("{key}={value}"));
            }
        }
        parts.join("&")
    }

    /// Composes the parameters onto `base_url`.
    ///
    /// An empty base yields `?query`, a base that already has a query string
    /// is extended with `&`, anything else gets `?`. With no parameters the
    /// base is returned untouched.
    pub fn serialize(&self, base_url: &str, leading: &[&str]) -> String {
        let query = self.to_query_string(leading);
        if query.is_empty() {
            return base_url.to_string();
        }
        if base_url.is_empty() {
            format!("?{query}")
        } else if base_url.contains('?') {
            format!("{base_url}&{query}")
        } else {
            format!("{base_url}?{query}")
        }
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Self::new();
        for (key, value) in iter {
            params.set(key, value);
        }
        params
    }
}

/// Splits a URL into its path and query parts at the first `?`.
pub fn split_url(url: &str) -> (&str, &str) {
    url.split_once('?').unwrap_or((url, ""))
}

fn query_part(url_or_query: &str) -> &str {
    match url_or_query.split_once('?') {
        Some((_, query)) => query,
        None => url_or_query,
    }
}

fn pairs(url_or_query: &str) -> impl Iterator<Item = (&str, &str)> {
    query_part(url_or_query)
        .trim_start_matches('?')
        .split('&')
        .filter_map(|pair| pair.split_once('='))
}

fn first_positive(query: &str, param: &str) -> Option<usize> {
    pairs(query)
        .filter(|(key, _)| *key == param)
        .find_map(|(_, value)| value.parse::<usize>().ok().filter(|n| *n > 0))
}

/// Requested page from a query string; 1 when absent or not a positive number.
pub fn parse_page(query: &str, param: &str) -> usize {
    first_positive(query, or_default(param, DEFAULT_PAGE_PARAM)).unwrap_or(1)
}

/// Requested page size from a query string, or `default`.
pub fn parse_page_size(query: &str, default: usize) -> usize {
    first_positive(query, DEFAULT_PAGE_SIZE_PARAM).unwrap_or(default)
}

/// Sort column and direction; the direction is descending only for `desc`.
pub fn parse_sort(
    query: &str,
    sort_param: &str,
    order_param: &str,
) -> (Option<String>, SortOrder) {
    let sort_param = or_default(sort_param, DEFAULT_SORT_PARAM);
    let order_param = or_default(order_param, DEFAULT_ORDER_PARAM);

    let mut sort_by = None;
    let mut order = SortOrder::Asc;
    for (key, value) in pairs(query) {
        if key == sort_param {
            sort_by = Some(value.to_string()).filter(|v| !v.is_empty());
        } else if key == order_param && value == "desc" {
            order = SortOrder::Desc;
        }
    }
    (sort_by, order)
}

/// Search term from a query string with `+` read as a space.
pub fn parse_search(query: &str, param: &str) -> String {
    let param = or_default(param, DEFAULT_SEARCH_PARAM);
    pairs(query)
        .find(|(key, _)| *key == param)
        .map(|(_, value)| value.replace('+', " "))
        .unwrap_or_default()
}

/// Inverse of the `+` substitution in [`parse_search`], used when a term is
/// written back into a link.
pub(crate) fn encode_search(term: &str) -> String {
    term.replace(' ', "+")
}
