//! People directory served by the demo application.
//!
//! The in-memory list stands in for a database: the service filters, sorts and
//! pages it the way a query would, then hands one page and the total count to
//! the renderer.

use std::cmp::Ordering;

use serde::Serialize;

use crate::domain::options::{SearchConfig, SortOrder};
use crate::domain::table::DatabasePaginatedData;
use crate::dto::main::{DirectoryPageData, DirectoryQuery};
use crate::errors::TableResult;
use crate::models::config::ServerConfig;
use crate::pagination::{limit, offset};

pub const DIRECTORY_URL: &str = "/";

pub const DIRECTORY_HEADERS: [&str; 4] = ["ID", "Name", "Email", "Age"];

#[derive(Clone, Debug, Serialize, PartialEq, Eq)]
pub struct Person {
    #[serde(rename = "ID")]
    pub id: u32,
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Email")]
    pub email: String,
    #[serde(rename = "Age")]
    pub age: u32,
}

impl Person {
    fn matches(&self, needle: &str) -> bool {
        self.id.to_string().contains(needle)
            || self.name.to_lowercase().contains(needle)
            || self.email.to_lowercase().contains(needle)
            || self.age.to_string().contains(needle)
    }

    fn compare(&self, other: &Self, column: &str) -> Option<Ordering> {
        match column {
            "ID" => Some(self.id.cmp(&other.id)),
            "Name" => Some(self.name.cmp(&other.name)),
            "Email" => Some(self.email.cmp(&other.email)),
            "Age" => Some(self.age.cmp(&other.age).then(self.id.cmp(&other.id))),
            _ => None,
        }
    }
}

const FIRST_NAMES: [&str; 12] = [
    "Alice", "Bob", "Carol", "Dave", "Eve", "Frank", "Grace", "Heidi", "Ivan", "Judy", "Mallory",
    "Oscar",
];

const LAST_NAMES: [&str; 8] = [
    "Smith", "Johnson", "Brown", "Garcia", "Miller", "Davis", "Wilson", "Moore",
];

/// Number of people in [`sample_people`].
pub const SAMPLE_SIZE: u32 = 47;

/// Deterministic sample data for the demo.
pub fn sample_people() -> Vec<Person> {
    (1..=SAMPLE_SIZE)
        .map(|id| {
            let index = id as usize - 1;
            let first = FIRST_NAMES[index % FIRST_NAMES.len()];
            let last = LAST_NAMES[(index * 3) % LAST_NAMES.len()];
            Person {
                id,
                name: format!("{first} {last}"),
                email: format!(
                    "{}.{}{id}@example.com",
                    first.to_lowercase(),
                    last.to_lowercase()
                ),
                age: 20 + (id * 13) % 45,
            }
        })
        .collect()
}

/// Loads one page of the directory for `query_string`.
pub fn load_directory_page(
    people: &[Person],
    query_string: &str,
    config: &ServerConfig,
) -> TableResult<DirectoryPageData> {
    let query = DirectoryQuery::parse(query_string, config.default_page_size);

    let needle = query.search.to_lowercase();
    let searching = SearchConfig::default().accepts(&needle);
    let mut matched: Vec<&Person> = people
        .iter()
        .filter(|person| !searching || person.matches(&needle))
        .collect();

    if let Some(column) = query.sort_by.as_deref() {
        if DIRECTORY_HEADERS.contains(&column) {
            matched.sort_by(|a, b| {
                let ordering = a.compare(b, column).unwrap_or(Ordering::Equal);
                match query.sort_order {
                    SortOrder::Asc => ordering,
                    SortOrder::Desc => ordering.reverse(),
                }
            });
        } else {
            log::debug!("Ignoring sort on unknown column {column}");
        }
    }

    let total = matched.len();
    let page_size = limit(query.page_size);
    let total_pages = total.div_ceil(page_size).max(1);
    let page = query.page.min(total_pages);

    let rows: Vec<&Person> = matched
        .into_iter()
        .skip(offset(page, page_size))
        .take(page_size)
        .collect();

    let mut table = DatabasePaginatedData::paginated_sorted_searchable(
        &rows,
        total,
        DIRECTORY_URL,
        query_string,
        page_size,
        true,
        true,
        &query.search,
    )?;
    table.table.headers = DIRECTORY_HEADERS.iter().map(|h| h.to_string()).collect();
    if let Some(pagination) = table.options_mut().pagination.as_mut() {
        pagination.page_size_options = config.page_size_options.clone();
    }

    Ok(DirectoryPageData {
        title: config.title.clone(),
        table,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(query_string: &str) -> DirectoryPageData {
        load_directory_page(&sample_people(), query_string, &ServerConfig::default())
            .expect("page loads")
    }

    fn ids(data: &DirectoryPageData) -> Vec<u64> {
        let resolved = data.table.table.resolve().expect("rows resolve");
        resolved
            .rows
            .iter()
            .filter_map(|row| row[0].as_u64())
            .collect()
    }

    #[test]
    fn sample_is_stable() {
        let people = sample_people();
        assert_eq!(people.len(), SAMPLE_SIZE as usize);
        assert_eq!(people[0].name, "Alice Smith");
        assert_eq!(people[0].email, "alice.smith1@example.com");
        assert_eq!(people, sample_people());
    }

    #[test]
    fn first_page_by_default() {
        let data = page("");
        assert_eq!(ids(&data), (1..=10).collect::<Vec<_>>());
        assert_eq!(data.table.total_count, 47);
        assert_eq!(data.title, "Directory");
    }

    #[test]
    fn page_and_size_select_rows() {
        let data = page("page=3&page_size=20");
        assert_eq!(ids(&data), (41..=47).collect::<Vec<_>>());
    }

    #[test]
    fn out_of_range_page_is_clamped() {
        let data = page("page=99");
        assert_eq!(ids(&data), (41..=47).collect::<Vec<_>>());
    }

    #[test]
    fn sort_descending_by_id() {
        let data = page("sort_by=ID&sort_order=desc");
        assert_eq!(ids(&data), (38..=47).rev().collect::<Vec<_>>());
    }

    #[test]
    fn search_is_case_insensitive() {
        let data = page("search=ALICE");
        assert_eq!(data.table.total_count, 4);
        assert_eq!(ids(&data), vec![1, 13, 25, 37]);
    }

    #[test]
    fn empty_search_result_keeps_headers() {
        let data = page("search=nobody");
        let resolved = data.table.table.resolve().expect("rows resolve");
        assert_eq!(data.table.total_count, 0);
        assert!(resolved.rows.is_empty());
        assert_eq!(resolved.headers, DIRECTORY_HEADERS);
    }

    #[test]
    fn unknown_sort_column_keeps_natural_order() {
        let data = page("sort_by=Nope");
        assert_eq!(ids(&data), (1..=10).collect::<Vec<_>>());
    }
}
