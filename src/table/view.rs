//! Rendered view assembly and the post-hoc view summary.

use std::fmt;

use serde::Serialize;

use super::columns::ColumnSet;
use super::rows::{derive_visible_rows, rows_with_status};
use super::types::{Row, RowId, ViewSpec};
use crate::schedule::PowerMode;

/// One derived row with its cells rendered to strings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedRow {
    /// Stable row identifier.
    pub id: RowId,
    /// Evaluated ON/OFF flag.
    pub status: bool,
    /// Schedule rule for this row, if any.
    pub power_mode: Option<PowerMode>,
    /// Cell text in visible-column order.
    pub cells: Vec<String>,
}

/// A fully derived table: visible headers plus rendered rows.
///
/// Snapshot of `(columns, rows, spec)` at derivation time; rebuilding from
/// unchanged inputs produces a structurally identical view.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableView {
    /// Labels of the visible columns, in render order.
    pub headers: Vec<String>,
    /// Column ids matching `headers`.
    pub column_ids: Vec<String>,
    /// Derived rows in render order.
    pub rows: Vec<RenderedRow>,
}

impl TableView {
    /// Derives the rendered view from a column set, row data, and view spec.
    pub fn derive(columns: &ColumnSet, rows: &[Row], spec: &ViewSpec) -> Self {
        let visible = columns.visible_columns();
        let headers: Vec<String> = visible.iter().map(|c| c.label.clone()).collect();
        let column_ids: Vec<String> = visible.iter().map(|c| c.id.clone()).collect();

        let rendered = derive_visible_rows(rows, spec)
            .into_iter()
            .map(|row| RenderedRow {
                id: row.id,
                status: row.status,
                power_mode: row.power_mode,
                cells: column_ids.iter().map(|id| cell_text(row, id)).collect(),
            })
            .collect();

        Self {
            headers,
            column_ids,
            rows: rendered,
        }
    }
}

/// Cell text for one row and column id.
///
/// Columns without a backing field render empty, except the well-known
/// `status` id, which renders the row's evaluated flag as `ON`/`OFF`.
fn cell_text(row: &Row, column_id: &str) -> String {
    match row.field(column_id) {
        Some(value) => value.to_string(),
        None if column_id == "status" => {
            if row.status { "ON" } else { "OFF" }.to_string()
        }
        None => String::new(),
    }
}

impl fmt::Display for TableView {
    /// Renders the view as an aligned text table.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut widths: Vec<usize> = self.headers.iter().map(String::len).collect();
        for row in &self.rows {
            for (i, cell) in row.cells.iter().enumerate() {
                if i < widths.len() {
                    widths[i] = widths[i].max(cell.len());
                }
            }
        }

        for (i, header) in self.headers.iter().enumerate() {
            if i > 0 {
                write!(f, "  ")?;
            }
            write!(f, "{header:<width$}", width = widths[i])?;
        }
        writeln!(f)?;
        for row in &self.rows {
            for (i, cell) in row.cells.iter().enumerate() {
                if i > 0 {
                    write!(f, "  ")?;
                }
                write!(f, "{cell:<width$}", width = widths[i])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Aggregate counts derived from a complete view derivation.
///
/// Computed post-hoc from the same inputs as [`TableView`] so report and
/// rendered table always agree.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewSummary {
    /// Visible column count.
    pub columns_visible: usize,
    /// Total configured columns.
    pub columns_total: usize,
    /// Rows in the derived view after truncation.
    pub rows_shown: usize,
    /// Total rows in the dataset.
    pub rows_total: usize,
    /// Dataset rows currently ON.
    pub on_count: usize,
    /// Dataset rows currently OFF.
    pub off_count: usize,
}

impl ViewSummary {
    /// Computes summary counts from the configuration and dataset.
    pub fn compute(columns: &ColumnSet, rows: &[Row], spec: &ViewSpec) -> Self {
        let shown = derive_visible_rows(rows, spec).len();
        let on_count = rows_with_status(rows, true).len();
        Self {
            columns_visible: columns.visible_columns().len(),
            columns_total: columns.len(),
            rows_shown: shown,
            rows_total: rows.len(),
            on_count,
            off_count: rows.len() - on_count,
        }
    }
}

impl fmt::Display for ViewSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "--- View Summary ---")?;
        writeln!(
            f,
            "Columns visible:  {} of {}",
            self.columns_visible, self.columns_total
        )?;
        writeln!(
            f,
            "Rows shown:       {} of {}",
            self.rows_shown, self.rows_total
        )?;
        writeln!(f, "Power ON:         {}", self.on_count)?;
        write!(f, "Power OFF:        {}", self.off_count)
    }
}
