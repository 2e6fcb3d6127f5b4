//! Row ordering operations and the view derivation pipeline.

use std::cmp::Ordering;

use super::types::{Direction, FieldValue, Row, RowId, SortOrder, ViewSpec};

impl ViewSpec {
    /// Replaces the custom order list wholesale, e.g. after a drag-and-drop.
    pub fn set_row_order(&mut self, ids: Vec<RowId>) {
        self.custom_order = ids;
    }

    /// Swaps a row with its immediate neighbor in the custom order list.
    ///
    /// No-op at either boundary and for ids absent from the list.
    pub fn move_row(&mut self, id: RowId, direction: Direction) {
        let Some(pos) = self.custom_order.iter().position(|&r| r == id) else {
            return;
        };
        match direction {
            Direction::Up if pos > 0 => self.custom_order.swap(pos, pos - 1),
            Direction::Down if pos + 1 < self.custom_order.len() => {
                self.custom_order.swap(pos, pos + 1);
            }
            _ => {}
        }
    }
}

/// Derives the ordered, truncated row sequence for rendering.
///
/// Pure function of `(rows, spec)`; repeated calls with unchanged inputs
/// yield identical output. Sort keys in priority order:
///
/// 1. status partition (ON first) when `spec.partition_by_status` is set;
/// 2. position in `spec.custom_order` — rows absent from the list compare
///    before listed rows and equal to one another;
/// 3. the `spec.sort_by` field comparison in the configured direction,
///    missing values last;
/// 4. source order (the sort is stable).
///
/// The result is truncated to `spec.page_size` entries; a page size of `0`
/// yields an empty view.
pub fn derive_visible_rows<'a>(rows: &'a [Row], spec: &ViewSpec) -> Vec<&'a Row> {
    if spec.page_size == 0 {
        return Vec::new();
    }

    let mut view: Vec<&Row> = rows.iter().collect();
    view.sort_by(|a, b| {
        let partition = if spec.partition_by_status {
            b.status.cmp(&a.status)
        } else {
            Ordering::Equal
        };
        partition
            .then_with(|| cmp_custom_positions(custom_position(spec, a), custom_position(spec, b)))
            .then_with(|| cmp_sort_field(a, b, &spec.sort_by, spec.sort_order))
    });
    view.truncate(spec.page_size);
    view
}

/// Rows whose evaluated status matches `on`, in source order.
pub fn rows_with_status(rows: &[Row], on: bool) -> Vec<&Row> {
    rows.iter().filter(|r| r.status == on).collect()
}

/// Rows whose named field equals the given value, in source order.
pub fn rows_with_field<'a>(rows: &'a [Row], id: &str, value: &FieldValue) -> Vec<&'a Row> {
    rows.iter().filter(|r| r.field(id) == Some(value)).collect()
}

/// Position of a row in the custom order list, if present.
fn custom_position(spec: &ViewSpec, row: &Row) -> Option<usize> {
    spec.custom_order.iter().position(|&id| id == row.id)
}

/// Compares custom order positions with absent rows first.
fn cmp_custom_positions(a: Option<usize>, b: Option<usize>) -> Ordering {
    match (a, b) {
        (Some(x), Some(y)) => x.cmp(&y),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

/// Compares the named field on two rows.
///
/// A missing field sorts after any present value in both directions; the
/// direction only reverses present-vs-present comparisons.
fn cmp_sort_field(a: &Row, b: &Row, sort_by: &str, order: SortOrder) -> Ordering {
    match (a.field(sort_by), b.field(sort_by)) {
        (Some(x), Some(y)) => {
            let cmp = x.compare(y);
            match order {
                SortOrder::Asc => cmp,
                SortOrder::Desc => cmp.reverse(),
            }
        }
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
