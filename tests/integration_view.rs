//! Integration tests for the table customization pipeline.

mod common;

use routeboard::config::BoardConfig;
use routeboard::schedule::apply_schedule;
use routeboard::table::rows::derive_visible_rows;
use routeboard::table::types::{Direction, FieldValue, Row, SortOrder, ViewSpec};
use routeboard::table::view::{TableView, ViewSummary};

#[test]
fn visible_projection_skips_hidden_columns() {
    let columns = common::abc_columns();
    assert_eq!(columns.ordered_ids(), vec!["a", "b", "c"]);
    let visible: Vec<&str> = columns
        .visible_columns()
        .iter()
        .map(|c| c.id.as_str())
        .collect();
    assert_eq!(visible, vec!["a", "c"]);
}

#[test]
fn locked_column_cannot_be_hidden_or_moved() {
    let mut columns = common::abc_columns();
    columns.set_visibility("c", false);
    assert!(columns.column("c").is_some_and(|c| c.visible));

    // b sits next to the locked c; the swap must be rejected.
    columns.move_column("b", Direction::Down);
    assert_eq!(columns.ordered_ids(), vec!["a", "b", "c"]);
}

#[test]
fn hidden_column_keeps_its_order_slot() {
    let mut columns = common::abc_columns();
    // Moving a down swaps with the hidden b, not with c.
    columns.move_column("a", Direction::Down);
    assert_eq!(columns.ordered_ids(), vec!["b", "a", "c"]);
    let visible: Vec<&str> = columns
        .visible_columns()
        .iter()
        .map(|c| c.id.as_str())
        .collect();
    assert_eq!(visible, vec!["a", "c"]);
}

#[test]
fn custom_order_breaks_sort_ties_and_page_truncates() {
    // Rows 1 and 3 tie on score; custom order [3, 1, 2] decides, and the
    // two-row page keeps only [3, 1].
    let rows = common::scored_rows();
    let spec = common::score_spec();
    let ids: Vec<i64> = derive_visible_rows(&rows, &spec).iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![3, 1]);
}

#[test]
fn derivation_is_idempotent_and_leaves_inputs_unchanged() {
    let rows = common::scored_rows();
    let spec = common::score_spec();

    let first: Vec<i64> = derive_visible_rows(&rows, &spec).iter().map(|r| r.id).collect();
    let second: Vec<i64> = derive_visible_rows(&rows, &spec).iter().map(|r| r.id).collect();
    assert_eq!(first, second);

    // Source data keeps its insertion order.
    let source_ids: Vec<i64> = rows.iter().map(|r| r.id).collect();
    assert_eq!(source_ids, vec![1, 2, 3]);
    assert_eq!(spec.custom_order, vec![3, 1, 2]);
}

#[test]
fn row_move_boundaries_are_no_ops() {
    let mut spec = common::score_spec();
    spec.move_row(3, Direction::Up);
    assert_eq!(spec.custom_order, vec![3, 1, 2]);
    spec.move_row(2, Direction::Down);
    assert_eq!(spec.custom_order, vec![3, 1, 2]);
    spec.move_row(99, Direction::Up);
    assert_eq!(spec.custom_order, vec![3, 1, 2]);
}

#[test]
fn missing_sort_field_sorts_last_in_both_directions() {
    let rows = vec![
        Row::new(1),
        Row::new(2).with_field("score", FieldValue::Int(5)),
    ];
    let mut spec = ViewSpec {
        sort_by: "score".to_string(),
        ..ViewSpec::default()
    };

    let asc: Vec<i64> = derive_visible_rows(&rows, &spec).iter().map(|r| r.id).collect();
    assert_eq!(asc, vec![2, 1]);

    spec.sort_order = SortOrder::Desc;
    let desc: Vec<i64> = derive_visible_rows(&rows, &spec).iter().map(|r| r.id).collect();
    assert_eq!(desc, vec![2, 1]);
}

#[test]
fn partition_puts_on_rows_first() {
    let (columns, mut rows, spec) = BoardConfig::routes_by_status().build();
    apply_schedule(&mut rows, common::fixed_date());
    let view = TableView::derive(&columns, &rows, &spec);

    let first_off = view.rows.iter().position(|r| !r.status);
    let last_on = view.rows.iter().rposition(|r| r.status);
    if let (Some(off), Some(on)) = (first_off, last_on) {
        assert!(on < off, "every ON row should precede the first OFF row");
    }
}

#[test]
fn routes_preset_full_pipeline() {
    let (columns, mut rows, spec) = BoardConfig::routes().build();
    apply_schedule(&mut rows, common::fixed_date());

    let view = TableView::derive(&columns, &rows, &spec);
    assert_eq!(
        view.headers,
        vec!["No", "Code", "Location", "Delivery", "Longitude", "Latitude", "Route", "Status"]
    );
    assert_eq!(view.rows.len(), 6);

    // Status cells agree with the evaluated flag on every row.
    let status_idx = view
        .column_ids
        .iter()
        .position(|id| id == "status")
        .unwrap_or(usize::MAX);
    for row in &view.rows {
        let expected = if row.status { "ON" } else { "OFF" };
        assert_eq!(row.cells[status_idx], expected);
    }

    let summary = ViewSummary::compute(&columns, &rows, &spec);
    assert_eq!(summary.rows_shown, 6);
    assert_eq!(summary.rows_total, 6);
    assert_eq!(summary.on_count + summary.off_count, 6);
}

#[test]
fn hiding_a_column_shrinks_the_view_not_the_dataset() {
    let (mut columns, mut rows, spec) = BoardConfig::routes().build();
    apply_schedule(&mut rows, common::fixed_date());

    columns.set_visibility("longitude", false);
    columns.set_visibility("latitude", false);

    let view = TableView::derive(&columns, &rows, &spec);
    assert_eq!(view.headers.len(), 6);
    for row in &view.rows {
        assert_eq!(row.cells.len(), 6);
    }

    let summary = ViewSummary::compute(&columns, &rows, &spec);
    assert_eq!(summary.columns_visible, 6);
    assert_eq!(summary.columns_total, 8);
}
