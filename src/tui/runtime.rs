//! TUI application state and mutation wiring.

use chrono::NaiveDate;

use crate::config::BoardConfig;
use crate::schedule::apply_schedule;
use crate::table::columns::ColumnSet;
use crate::table::types::{Direction, Row, SortOrder, ViewSpec};
use crate::table::view::{TableView, ViewSummary};

/// Which list the cursor operates on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Column customization list.
    Columns,
    /// Custom row order list.
    Rows,
}

/// TUI application state.
///
/// Owns the board configuration the same way a page component would: the
/// engine itself stays stateless and the view is re-derived every frame.
pub struct App {
    /// Column configuration.
    pub columns: ColumnSet,
    /// Row dataset with evaluated statuses.
    pub rows: Vec<Row>,
    /// Row-level view specification.
    pub spec: ViewSpec,
    /// Name of the active preset.
    pub preset_name: String,
    /// Evaluation date for the power schedule.
    pub today: NaiveDate,
    /// Focused customization list.
    pub focus: Focus,
    /// Cursor index within the focused list.
    pub cursor: usize,
    /// Whether the user has requested quit.
    pub quit: bool,
    /// Configuration of the active board, used by restart.
    seed: BoardConfig,
}

impl App {
    /// Builds the app from a preset name, falling back to `routes`.
    pub fn new(preset: &str, today: NaiveDate) -> Self {
        let config = BoardConfig::from_preset(preset).unwrap_or_else(|_| BoardConfig::routes());
        Self::from_board(config, preset, today)
    }

    /// Builds the app from an already-loaded board configuration.
    pub fn from_board(config: BoardConfig, name: &str, today: NaiveDate) -> Self {
        let (columns, mut rows, spec) = config.build();
        apply_schedule(&mut rows, today);
        Self {
            columns,
            rows,
            spec,
            preset_name: name.to_string(),
            today,
            focus: Focus::Columns,
            cursor: 0,
            quit: false,
            seed: config,
        }
    }

    /// Derives the current table view.
    pub fn view(&self) -> TableView {
        TableView::derive(&self.columns, &self.rows, &self.spec)
    }

    /// Computes the current summary counts.
    pub fn summary(&self) -> ViewSummary {
        ViewSummary::compute(&self.columns, &self.rows, &self.spec)
    }

    /// Length of the focused list, for cursor clamping.
    fn focus_len(&self) -> usize {
        match self.focus {
            Focus::Columns => self.columns.len(),
            Focus::Rows => self.spec.custom_order.len(),
        }
    }

    /// Switches the cursor between the column and row lists.
    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Columns => Focus::Rows,
            Focus::Rows => Focus::Columns,
        };
        self.cursor = 0;
    }

    /// Moves the cursor one step without wrapping.
    pub fn move_cursor(&mut self, direction: Direction) {
        match direction {
            Direction::Up => self.cursor = self.cursor.saturating_sub(1),
            Direction::Down => {
                if self.cursor + 1 < self.focus_len() {
                    self.cursor += 1;
                }
            }
        }
    }

    /// Id of the column under the cursor, in the current order sequence.
    pub fn cursor_column(&self) -> Option<String> {
        self.columns.ordered_ids().get(self.cursor).cloned()
    }

    /// Toggles visibility of the column under the cursor.
    pub fn toggle_cursor_column(&mut self) {
        if self.focus == Focus::Columns {
            if let Some(id) = self.cursor_column() {
                self.columns.toggle_visibility(&id);
            }
        }
    }

    /// Moves the focused entry (column or row) one position.
    ///
    /// The cursor follows the entry only when the engine accepted the move.
    pub fn move_focused(&mut self, direction: Direction) {
        match self.focus {
            Focus::Columns => {
                let before = self.columns.ordered_ids();
                if let Some(id) = self.cursor_column() {
                    self.columns.move_column(&id, direction);
                    if self.columns.ordered_ids() != before {
                        self.move_cursor(direction);
                    }
                }
            }
            Focus::Rows => {
                let before = self.spec.custom_order.clone();
                if let Some(&id) = self.spec.custom_order.get(self.cursor) {
                    self.spec.move_row(id, direction);
                    if self.spec.custom_order != before {
                        self.move_cursor(direction);
                    }
                }
            }
        }
    }

    /// Cycles the sort field through the current order sequence.
    pub fn cycle_sort_field(&mut self) {
        let ids = self.columns.ordered_ids();
        if ids.is_empty() {
            return;
        }
        let next = match ids.iter().position(|id| *id == self.spec.sort_by) {
            Some(i) => (i + 1) % ids.len(),
            None => 0,
        };
        self.spec.sort_by = ids[next].clone();
    }

    /// Flips the sort direction.
    pub fn toggle_sort_order(&mut self) {
        self.spec.sort_order = match self.spec.sort_order {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        };
    }

    /// Flips the status partition rule.
    pub fn toggle_partition(&mut self) {
        self.spec.partition_by_status = !self.spec.partition_by_status;
    }

    /// Adjusts the page size, keeping it non-negative.
    pub fn adjust_page_size(&mut self, delta: i64) {
        let next = self.spec.page_size as i64 + delta;
        self.spec.page_size = next.max(0) as usize;
    }

    /// Replaces the board with a named preset.
    pub fn switch_preset(&mut self, preset: &str) {
        *self = Self::new(preset, self.today);
    }

    /// Reloads the active board's configuration, discarding all customization.
    pub fn restart(&mut self) {
        let seed = self.seed.clone();
        let name = self.preset_name.clone();
        *self = Self::from_board(seed, &name, self.today);
    }
}
