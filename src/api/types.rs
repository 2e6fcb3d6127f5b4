//! API response and query types.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::table::types::{FieldValue, Row, RowId};
use crate::table::view::{TableView, ViewSummary};

/// Combined view response: derived table plus summary counts.
#[derive(Debug, Serialize)]
pub struct ViewResponse {
    /// Derived table (headers, column ids, rendered rows).
    pub view: TableView,
    /// Aggregate view summary.
    pub summary: ViewSummary,
}

/// Single dataset row with its schedule detail spelled out.
///
/// Maps the internal [`Row`] onto the public API contract: the power mode is
/// exposed by name together with its human-readable schedule description.
#[derive(Debug, Serialize)]
pub struct RowRecord {
    /// Stable row identifier.
    pub id: RowId,
    /// Evaluated ON/OFF status.
    pub status: bool,
    /// Power mode name, if the row is schedulable.
    pub power_mode: Option<String>,
    /// Schedule rule description for the mode.
    pub schedule: Option<String>,
    /// Reference date for the `Custom` mode, ISO formatted.
    pub active_date: Option<String>,
    /// Raw field values keyed by column id.
    pub fields: IndexMap<String, FieldValue>,
}

impl From<&Row> for RowRecord {
    fn from(row: &Row) -> Self {
        Self {
            id: row.id,
            status: row.status,
            power_mode: row.power_mode.map(|m| m.name().to_string()),
            schedule: row.power_mode.map(|m| m.description().to_string()),
            active_date: row.active_date.map(|d| d.to_string()),
            fields: row.fields.clone(),
        }
    }
}

/// Optional filter parameters for the rows endpoint.
#[derive(Debug, Deserialize)]
pub struct RowsQuery {
    /// Status filter: `"on"` or `"off"`.
    pub status: Option<String>,
    /// Exact-match filter on the `route` field.
    pub route: Option<String>,
}

/// Error response body for 400-class errors.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}
