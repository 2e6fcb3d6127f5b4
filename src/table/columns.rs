//! Column visibility and ordering operations.

use super::types::{Column, Direction};

/// The column configuration for one table.
///
/// Owns the column list and applies the mutation operations the UI feeds in;
/// the derived render sequence is recomputed on every query. All operations
/// degrade to no-ops on invalid input rather than failing.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnSet {
    columns: Vec<Column>,
}

impl ColumnSet {
    /// Creates a column set, assigning list-position orders to any column
    /// whose `order` is the unset `0` value.
    pub fn new(mut columns: Vec<Column>) -> Self {
        for (i, col) in columns.iter_mut().enumerate() {
            if col.order == 0 {
                col.order = i as u32 + 1;
            }
        }
        Self { columns }
    }

    /// All columns in seed order, regardless of visibility.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Looks up a column by id.
    pub fn column(&self, id: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.id == id)
    }

    /// Number of configured columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the set holds no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Sets a column's visibility.
    ///
    /// Hiding a locked column is a silent no-op, as is an unknown id.
    pub fn set_visibility(&mut self, id: &str, visible: bool) {
        if let Some(col) = self.columns.iter_mut().find(|c| c.id == id) {
            if col.locked && !visible {
                return;
            }
            col.visible = visible;
        }
    }

    /// Flips a column's visibility, honoring the locked guard.
    pub fn toggle_visibility(&mut self, id: &str) {
        if let Some(col) = self.column(id) {
            let next = !col.visible;
            self.set_visibility(id, next);
        }
    }

    /// Swaps a column's `order` with its neighbor in the current sequence.
    ///
    /// No-op at the sequence boundaries, for unknown ids, and when either
    /// participant is locked — locked columns stay anchored in place.
    pub fn move_column(&mut self, id: &str, direction: Direction) {
        let sequence = self.ordered_ids();
        let Some(pos) = sequence.iter().position(|c| c == id) else {
            return;
        };
        let neighbor = match direction {
            Direction::Up if pos > 0 => pos - 1,
            Direction::Down if pos + 1 < sequence.len() => pos + 1,
            _ => return,
        };

        let a = sequence[pos].clone();
        let b = sequence[neighbor].clone();
        let locked = |cid: &str| self.column(cid).is_some_and(|c| c.locked);
        if locked(&a) || locked(&b) {
            return;
        }

        let order_a = self.column(&a).map(|c| c.order).unwrap_or(0);
        let order_b = self.column(&b).map(|c| c.order).unwrap_or(0);
        for col in &mut self.columns {
            if col.id == a {
                col.order = order_b;
            } else if col.id == b {
                col.order = order_a;
            }
        }
    }

    /// Visible columns sorted ascending by `order`, ties broken by id.
    pub fn visible_columns(&self) -> Vec<&Column> {
        let mut visible: Vec<&Column> = self.columns.iter().filter(|c| c.visible).collect();
        visible.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.id.cmp(&b.id)));
        visible
    }

    /// All column ids in the current order sequence, hidden ones included.
    pub fn ordered_ids(&self) -> Vec<String> {
        let mut all: Vec<&Column> = self.columns.iter().collect();
        all.sort_by(|a, b| a.order.cmp(&b.order).then_with(|| a.id.cmp(&b.id)));
        all.into_iter().map(|c| c.id.clone()).collect()
    }
}
