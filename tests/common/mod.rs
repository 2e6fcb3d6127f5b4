//! Shared test fixtures for integration tests.

use chrono::NaiveDate;

use routeboard::table::columns::ColumnSet;
use routeboard::table::types::{Column, FieldValue, Row, ViewSpec};

/// Fixed evaluation date (Tuesday 2024-01-16, even day of month).
pub fn fixed_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 16).expect("valid date")
}

/// Three-column set: `a` visible, `b` hidden, `c` visible and locked.
pub fn abc_columns() -> ColumnSet {
    ColumnSet::new(vec![
        Column::new("a", "A", 1),
        Column {
            visible: false,
            ..Column::new("b", "B", 2)
        },
        Column {
            locked: true,
            ..Column::new("c", "C", 3)
        },
    ])
}

/// Three rows with a `score` field where rows 1 and 3 tie.
pub fn scored_rows() -> Vec<Row> {
    vec![
        Row::new(1).with_field("score", FieldValue::Int(10)),
        Row::new(2).with_field("score", FieldValue::Int(5)),
        Row::new(3).with_field("score", FieldValue::Int(10)),
    ]
}

/// Spec with custom order `[3, 1, 2]`, score sort, and two rows per page.
pub fn score_spec() -> ViewSpec {
    ViewSpec {
        custom_order: vec![3, 1, 2],
        sort_by: "score".to_string(),
        page_size: 2,
        ..ViewSpec::default()
    }
}
