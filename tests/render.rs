use serde::Serialize;
use serde_json::json;
use table_renderer::{
    DatabasePaginatedData, PaginationConfig, Renderer, SortConfig, SortOrder, TableData,
    TableOptions,
};

#[derive(Serialize)]
struct User {
    #[serde(rename = "ID")]
    id: u32,
    #[serde(rename = "Name")]
    name: String,
}

fn users(ids: std::ops::RangeInclusive<u32>) -> Vec<User> {
    ids.map(|id| User {
        id,
        name: format!("User {id}"),
    })
    .collect()
}

fn numbers(count: usize) -> TableData {
    TableData::new(
        vec!["N".to_string()],
        (1..=count).map(|n| vec![json!(n)]).collect(),
    )
}

#[test]
fn test_database_preset_links_carry_full_state() {
    let data = DatabasePaginatedData::paginated_sorted_searchable(
        &users(11..=20),
        47,
        "/users",
        "page=2&page_size=10&sort_by=Name&sort_order=asc&search=al",
        10,
        true,
        true,
        "al",
    )
    .unwrap();
    let html = Renderer::new().unwrap().render_paginated(&data).unwrap();

    assert!(html.contains("Showing 11 to 20 of 47 entries"));
    assert!(html.contains("<td>User 11</td>"));
    assert!(html.contains(
        r#"href="&#x2F;users?page=3&amp;page_size=10&amp;search=al&amp;sort_by=Name&amp;sort_order=asc""#
    ));
    assert!(html.contains(
        r#"href="&#x2F;users?sort_by=Name&amp;sort_order=desc&amp;page=1&amp;page_size=10&amp;search=al""#
    ));
    assert!(html.contains(
        r#"value="&#x2F;users?page_size=25&amp;page=1&amp;search=al&amp;sort_by=Name&amp;sort_order=asc""#
    ));
    assert!(html.contains(
        r#"action="&#x2F;users?page_size=10&amp;sort_by=Name&amp;sort_order=asc""#
    ));
    assert!(html.contains(r#"<input type="hidden" name="page_size" value="10">"#));
    assert!(html.contains(r#"name="search" class="form-control""#));
    assert!(html.contains(r#"value="al""#));
}

#[test]
fn test_sort_link_resets_page_and_keeps_page_size() {
    let data = numbers(60)
        .with_headers(["Name"])
        .with_options(TableOptions {
            pagination: Some(PaginationConfig::new(25, 2)),
            sorting: Some(SortConfig::new(None, SortOrder::Asc)),
            ..TableOptions::default()
        });
    let html = Renderer::new().unwrap().render_table(&data).unwrap();

    assert!(html.contains(
        r#"href="?sort_by=Name&amp;sort_order=asc&amp;page=1&amp;page_size=25""#
    ));
}

#[test]
fn test_empty_result_shows_no_records() {
    let data = numbers(0).with_options(TableOptions {
        pagination: Some(PaginationConfig::new(10, 4)),
        ..TableOptions::default()
    });
    let html = Renderer::new().unwrap().render_table(&data).unwrap();

    assert!(html.contains("No records found"));
    assert!(!html.contains("<nav"));
    assert!(!html.contains("<td>"));
}

#[test]
fn test_window_is_clamped_at_the_left_edge() {
    let data = numbers(120).with_options(TableOptions {
        pagination: Some(PaginationConfig::new(10, 1)),
        ..TableOptions::default()
    });
    let html = Renderer::new().unwrap().render_table(&data).unwrap();

    for page in 2..=5 {
        assert!(html.contains(&format!(">{page}</a>")), "missing page {page}");
    }
    assert!(!html.contains(">6</a>"));
    assert!(!html.contains(">12</a>"));
}

#[test]
fn test_presentation_flags() {
    let data = numbers(1).with_options(TableOptions {
        css_class: "users".to_string(),
        id: "user-table".to_string(),
        style: "width: 100%".to_string(),
        striped: true,
        bordered: true,
        responsive: true,
        ..TableOptions::default()
    });
    let html = Renderer::new().unwrap().render_table(&data).unwrap();

    assert!(html.starts_with(r#"<div class="table-responsive">"#));
    assert!(html.contains(
        r#"<table class="table users table-striped table-bordered" id="user-table" style="width: 100%">"#
    ));
}

#[test]
fn test_typed_records_must_be_uniform() {
    let data = DatabasePaginatedData::new(TableData::from_records(&[1, 2, 3]).unwrap(), 3);
    let err = Renderer::new().unwrap().render_paginated(&data).unwrap_err();
    assert!(err.is_data_shape());
}

#[test]
fn test_render_is_repeatable() {
    let data =
        DatabasePaginatedData::paginated_sorted(&users(1..=10), 30, "/users", "", 10, true)
            .unwrap();
    let renderer = Renderer::new().unwrap();
    assert_eq!(
        renderer.render_paginated(&data).unwrap(),
        renderer.render_paginated(&data).unwrap()
    );
}
