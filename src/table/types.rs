//! Core table types: columns, rows, field values, and the view specification.

use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDate;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::schedule::PowerMode;

/// Stable row identifier.
pub type RowId = i64;

/// A single table cell value.
///
/// Rows carry an ordered map of these keyed by column id, so a row can hold
/// any mix of numeric, string, and boolean fields without per-dataset types.
///
/// # Examples
///
/// ```
/// use routeboard::table::types::FieldValue;
///
/// let a = FieldValue::Int(3);
/// let b = FieldValue::Float(3.5);
/// assert!(a.compare(&b).is_lt());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Boolean field.
    Bool(bool),
    /// Integer field.
    Int(i64),
    /// Floating-point field.
    Float(f64),
    /// String field.
    Str(String),
}

impl FieldValue {
    /// Numeric view of the value, if it is a number.
    fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Rank used to order values of different kinds: bool < number < string.
    fn kind_rank(&self) -> u8 {
        match self {
            Self::Bool(_) => 0,
            Self::Int(_) | Self::Float(_) => 1,
            Self::Str(_) => 2,
        }
    }

    /// Total, deterministic ordering between any two field values.
    ///
    /// Numbers compare numerically regardless of int/float representation,
    /// strings compare by code point, booleans as `false < true`. Values of
    /// different kinds order by [`kind_rank`](Self::kind_rank).
    pub fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Bool(a), Self::Bool(b)) => a.cmp(b),
            (Self::Str(a), Self::Str(b)) => a.cmp(b),
            (a, b) => match (a.as_f64(), b.as_f64()) {
                (Some(x), Some(y)) => x.total_cmp(&y),
                _ => a.kind_rank().cmp(&b.kind_rank()),
            },
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Str(s) => write!(f, "{s}"),
        }
    }
}

/// A named table column.
///
/// `order` is 1-based and defines the left-to-right render position among
/// visible columns; `0` means "assign from list position" and is normalized
/// by [`ColumnSet::new`](super::columns::ColumnSet::new). Locked columns
/// cannot be hidden and do not participate in order swaps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Column {
    /// Unique column key, also the row field name it renders.
    pub id: String,
    /// Display name.
    pub label: String,
    /// Whether the column is currently rendered.
    #[serde(default = "default_true")]
    pub visible: bool,
    /// 1-based render position among visible columns.
    #[serde(default)]
    pub order: u32,
    /// Locked columns cannot be hidden or reordered.
    #[serde(default)]
    pub locked: bool,
}

impl Column {
    /// Creates a visible, unlocked column with an explicit order.
    pub fn new(id: &str, label: &str, order: u32) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            visible: true,
            order,
            locked: false,
        }
    }
}

fn default_true() -> bool {
    true
}

/// A generic table row: a stable id plus an ordered field map.
///
/// Rows representing schedulable entities additionally carry a power mode
/// (with an optional reference date for `Custom`) and the evaluated ON/OFF
/// `status` flag. Rows without a power mode keep whatever `status` they were
/// seeded with.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Row {
    /// Stable row identifier.
    pub id: RowId,
    /// ON/OFF flag, driven by the power schedule for schedulable rows.
    #[serde(default = "default_true")]
    pub status: bool,
    /// Schedule rule for this row, if any.
    #[serde(default)]
    pub power_mode: Option<PowerMode>,
    /// Reference date for the `Custom` power mode.
    #[serde(default)]
    pub active_date: Option<NaiveDate>,
    /// Field values keyed by column id, in insertion order.
    #[serde(default)]
    pub fields: IndexMap<String, FieldValue>,
}

impl Row {
    /// Creates a row with the given id and no fields.
    pub fn new(id: RowId) -> Self {
        Self {
            id,
            status: true,
            power_mode: None,
            active_date: None,
            fields: IndexMap::new(),
        }
    }

    /// Builder-style field insertion, used by seed data and tests.
    #[must_use]
    pub fn with_field(mut self, id: &str, value: FieldValue) -> Self {
        self.fields.insert(id.to_string(), value);
        self
    }

    /// Looks up a field by column id.
    pub fn field(&self, id: &str) -> Option<&FieldValue> {
        self.fields.get(id)
    }
}

/// Sort direction for the view's field comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Smallest first.
    Asc,
    /// Largest first.
    Desc,
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOrder::Asc => f.write_str("asc"),
            SortOrder::Desc => f.write_str("desc"),
        }
    }
}

/// Direction for adjacent-swap reordering of columns and rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Toward the front of the sequence.
    Up,
    /// Toward the back of the sequence.
    Down,
}

/// Row-level view configuration: custom order, sort, and truncation.
///
/// Owned by the calling layer and passed into the pure derivation functions;
/// the engine keeps no state of its own.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewSpec {
    /// Manually curated row id sequence from drag/up-down reordering.
    pub custom_order: Vec<RowId>,
    /// Field name compared when custom order ties.
    pub sort_by: String,
    /// Direction for the field comparison.
    pub sort_order: SortOrder,
    /// Maximum number of rows in the derived view; `0` yields an empty view.
    pub page_size: usize,
    /// When set, rows with `status == true` sort before rows with
    /// `status == false` ahead of all other keys.
    pub partition_by_status: bool,
}

impl Default for ViewSpec {
    fn default() -> Self {
        Self {
            custom_order: Vec::new(),
            sort_by: "id".to_string(),
            sort_order: SortOrder::Asc,
            page_size: 10,
            partition_by_status: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_compare_across_representations() {
        assert!(FieldValue::Int(2).compare(&FieldValue::Float(2.5)).is_lt());
        assert!(FieldValue::Float(3.0).compare(&FieldValue::Int(3)).is_eq());
        assert!(FieldValue::Int(10).compare(&FieldValue::Int(2)).is_gt());
    }

    #[test]
    fn strings_compare_by_code_point() {
        let a = FieldValue::Str("KL 7".to_string());
        let b = FieldValue::Str("SG 5".to_string());
        assert!(a.compare(&b).is_lt());
        // Uppercase sorts before lowercase, no locale rules.
        let upper = FieldValue::Str("Z".to_string());
        let lower = FieldValue::Str("a".to_string());
        assert!(upper.compare(&lower).is_lt());
    }

    #[test]
    fn mixed_kinds_order_by_rank() {
        let b = FieldValue::Bool(true);
        let n = FieldValue::Int(0);
        let s = FieldValue::Str(String::new());
        assert!(b.compare(&n).is_lt());
        assert!(n.compare(&s).is_lt());
    }

    #[test]
    fn field_value_display() {
        assert_eq!(FieldValue::Str("KLCC Tower".into()).to_string(), "KLCC Tower");
        assert_eq!(FieldValue::Float(101.7068).to_string(), "101.7068");
        assert_eq!(FieldValue::Int(54).to_string(), "54");
        assert_eq!(FieldValue::Bool(false).to_string(), "false");
    }

    #[test]
    fn row_field_lookup() {
        let row = Row::new(1)
            .with_field("code", FieldValue::Str("54".into()))
            .with_field("no", FieldValue::Int(1));
        assert_eq!(row.field("no"), Some(&FieldValue::Int(1)));
        assert!(row.field("missing").is_none());
    }

    #[test]
    fn view_spec_defaults() {
        let spec = ViewSpec::default();
        assert_eq!(spec.page_size, 10);
        assert_eq!(spec.sort_order, SortOrder::Asc);
        assert!(!spec.partition_by_status);
        assert!(spec.custom_order.is_empty());
    }
}
