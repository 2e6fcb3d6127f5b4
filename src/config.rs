//! TOML-based board configuration and preset definitions.

use std::fmt;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::schedule::PowerMode;
use crate::table::columns::ColumnSet;
use crate::table::types::{Column, FieldValue, Row, RowId, SortOrder, ViewSpec};

/// Top-level board configuration parsed from TOML.
///
/// Holds the column list, the row dataset, and the view defaults for one
/// table. Load from TOML with [`BoardConfig::from_toml_file`] or use a
/// built-in preset via [`BoardConfig::from_preset`].
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoardConfig {
    /// Row-level view defaults.
    #[serde(default)]
    pub view: ViewConfig,
    /// Column configuration.
    #[serde(default)]
    pub columns: Vec<Column>,
    /// Seed row dataset.
    #[serde(default)]
    pub rows: Vec<Row>,
}

/// Row-level view defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewConfig {
    /// Maximum rows in the derived view; values <= 0 yield an empty view.
    pub rows_per_page: i64,
    /// Field name compared when the custom order ties.
    pub sort_by: String,
    /// Sort direction: `"asc"` or `"desc"`.
    pub sort_order: String,
    /// Whether rows with status ON sort ahead of OFF rows.
    pub partition_by_status: bool,
    /// Initial custom row order.
    pub row_order: Vec<RowId>,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            rows_per_page: 10,
            sort_by: "no".to_string(),
            sort_order: "asc".to_string(),
            partition_by_status: false,
            row_order: Vec::new(),
        }
    }
}

/// Configuration error with field path and constraint description.
#[derive(Debug)]
pub struct ConfigError {
    /// Dotted field path (e.g., `"view.sort_order"`).
    pub field: String,
    /// Human-readable constraint description.
    pub message: String,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "config error: {}: {}", self.field, self.message)
    }
}

impl BoardConfig {
    /// Returns the routes preset: the delivery-location dataset with all
    /// columns visible and the serial-number column locked.
    pub fn routes() -> Self {
        Self {
            view: ViewConfig {
                row_order: vec![1, 2, 3, 4, 5, 6],
                ..ViewConfig::default()
            },
            columns: route_columns(),
            rows: route_rows(),
        }
    }

    /// Returns the routes-by-status preset: the same dataset with rows
    /// partitioned so ON entries sort ahead of OFF entries.
    pub fn routes_by_status() -> Self {
        Self {
            view: ViewConfig {
                partition_by_status: true,
                row_order: vec![1, 2, 3, 4, 5, 6],
                ..ViewConfig::default()
            },
            columns: route_columns(),
            rows: route_rows(),
        }
    }

    /// Returns the directory preset: a small people directory with a locked
    /// id column and several hidden columns.
    pub fn directory() -> Self {
        let columns = vec![
            Column {
                locked: true,
                ..Column::new("id", "ID", 1)
            },
            Column::new("name", "Name", 2),
            Column::new("email", "Email", 3),
            Column::new("role", "Role", 4),
            Column {
                visible: false,
                ..Column::new("department", "Department", 5)
            },
            Column::new("status", "Status", 6),
            Column {
                visible: false,
                ..Column::new("join_date", "Join Date", 7)
            },
            Column {
                visible: false,
                ..Column::new("last_active", "Last Active", 8)
            },
        ];
        let rows = vec![
            person_row(1, "001", "John Doe", "john@example.com", "Developer",
                "Engineering", "Active", "2023-01-15", "2 hours ago"),
            person_row(2, "002", "Jane Smith", "jane@example.com", "Designer",
                "Design", "Active", "2023-03-20", "1 day ago"),
            person_row(3, "003", "Bob Johnson", "bob@example.com", "Manager",
                "Operations", "Away", "2022-11-10", "3 days ago"),
        ];
        Self {
            view: ViewConfig {
                sort_by: "name".to_string(),
                ..ViewConfig::default()
            },
            columns,
            rows,
        }
    }

    /// Available preset names.
    pub const PRESETS: &[&str] = &["routes", "routes_by_status", "directory"];

    /// Loads a board from a named preset.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the preset name is unknown.
    pub fn from_preset(name: &str) -> Result<Self, ConfigError> {
        match name {
            "routes" => Ok(Self::routes()),
            "routes_by_status" => Ok(Self::routes_by_status()),
            "directory" => Ok(Self::directory()),
            _ => Err(ConfigError {
                field: "preset".to_string(),
                message: format!(
                    "unknown preset \"{name}\", available: {}",
                    Self::PRESETS.join(", ")
                ),
            }),
        }
    }

    /// Parses a board from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the file cannot be read or the TOML is invalid.
    pub fn from_toml_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError {
            field: "board".to_string(),
            message: format!("cannot read \"{}\": {e}", path.display()),
        })?;
        Self::from_toml_str(&content)
    }

    /// Parses a board from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` if the TOML is invalid or contains unknown fields.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError {
            field: "toml".to_string(),
            message: e.to_string(),
        })
    }

    /// Validates all fields and returns a list of errors.
    ///
    /// Returns an empty vector if the configuration is valid.
    pub fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        let v = &self.view;
        if v.sort_order != "asc" && v.sort_order != "desc" {
            errors.push(ConfigError {
                field: "view.sort_order".into(),
                message: format!("must be \"asc\" or \"desc\", got \"{}\"", v.sort_order),
            });
        }
        if v.sort_by.is_empty() {
            errors.push(ConfigError {
                field: "view.sort_by".into(),
                message: "must not be empty".into(),
            });
        }
        for (i, id) in v.row_order.iter().enumerate() {
            if v.row_order[..i].contains(id) {
                errors.push(ConfigError {
                    field: "view.row_order".into(),
                    message: format!("row id {id} listed more than once"),
                });
            }
        }

        if self.columns.is_empty() {
            errors.push(ConfigError {
                field: "columns".into(),
                message: "at least one column is required".into(),
            });
        }
        for (i, col) in self.columns.iter().enumerate() {
            if col.id.is_empty() {
                errors.push(ConfigError {
                    field: format!("columns[{i}].id"),
                    message: "must not be empty".into(),
                });
            }
            if self.columns[..i].iter().any(|c| c.id == col.id) {
                errors.push(ConfigError {
                    field: format!("columns[{i}].id"),
                    message: format!("duplicate column id \"{}\"", col.id),
                });
            }
        }

        for (i, row) in self.rows.iter().enumerate() {
            if self.rows[..i].iter().any(|r| r.id == row.id) {
                errors.push(ConfigError {
                    field: format!("rows[{i}].id"),
                    message: format!("duplicate row id {}", row.id),
                });
            }
        }

        errors
    }

    /// Builds the engine types from a validated configuration.
    ///
    /// Returns `(columns, rows, spec)`. Negative `rows_per_page` values
    /// clamp to 0 (an empty view); the string sort order maps onto
    /// [`SortOrder`], defaulting unexpected values to ascending.
    pub fn build(&self) -> (ColumnSet, Vec<Row>, ViewSpec) {
        let columns = ColumnSet::new(self.columns.clone());
        let spec = ViewSpec {
            custom_order: self.view.row_order.clone(),
            sort_by: self.view.sort_by.clone(),
            sort_order: match self.view.sort_order.as_str() {
                "desc" => SortOrder::Desc,
                _ => SortOrder::Asc,
            },
            page_size: self.view.rows_per_page.max(0) as usize,
            partition_by_status: self.view.partition_by_status,
        };
        (columns, self.rows.clone(), spec)
    }
}

fn route_columns() -> Vec<Column> {
    vec![
        Column {
            locked: true,
            ..Column::new("no", "No", 1)
        },
        Column::new("code", "Code", 2),
        Column::new("location", "Location", 3),
        Column::new("delivery", "Delivery", 4),
        Column::new("longitude", "Longitude", 5),
        Column::new("latitude", "Latitude", 6),
        Column::new("route", "Route", 7),
        Column::new("status", "Status", 8),
    ]
}

fn route_rows() -> Vec<Row> {
    vec![
        location_row(1, "54", "RHB Complex", "Daily", 101.7068, 3.1390, "KL 7",
            true, PowerMode::Daily),
        location_row(2, "78", "KLCC Tower", "Express", 101.7115, 3.1578, "KL 7",
            true, PowerMode::Alt1),
        location_row(3, "92", "Pavilion Mall", "Standard", 101.7137, 3.1494, "KL 8",
            false, PowerMode::Alt2),
        location_row(4, "45", "Mid Valley", "Daily", 101.6776, 3.1178, "KL 8",
            true, PowerMode::Weekday),
        location_row(5, "67", "Sunway Pyramid", "Express", 101.6069, 3.0738, "KL 9",
            false, PowerMode::Daily),
        location_row(6, "89", "IOI City Mall", "Standard", 101.7288, 2.9955, "SG 5",
            true, PowerMode::Alt1),
    ]
}

#[expect(clippy::too_many_arguments)]
fn location_row(
    id: RowId,
    code: &str,
    location: &str,
    delivery: &str,
    longitude: f64,
    latitude: f64,
    route: &str,
    status: bool,
    power_mode: PowerMode,
) -> Row {
    let mut row = Row::new(id)
        .with_field("no", FieldValue::Int(id))
        .with_field("code", FieldValue::Str(code.to_string()))
        .with_field("location", FieldValue::Str(location.to_string()))
        .with_field("delivery", FieldValue::Str(delivery.to_string()))
        .with_field("longitude", FieldValue::Float(longitude))
        .with_field("latitude", FieldValue::Float(latitude))
        .with_field("route", FieldValue::Str(route.to_string()));
    row.status = status;
    row.power_mode = Some(power_mode);
    row
}

#[expect(clippy::too_many_arguments)]
fn person_row(
    id: RowId,
    code: &str,
    name: &str,
    email: &str,
    role: &str,
    department: &str,
    status: &str,
    join_date: &str,
    last_active: &str,
) -> Row {
    Row::new(id)
        .with_field("id", FieldValue::Str(code.to_string()))
        .with_field("name", FieldValue::Str(name.to_string()))
        .with_field("email", FieldValue::Str(email.to_string()))
        .with_field("role", FieldValue::Str(role.to_string()))
        .with_field("department", FieldValue::Str(department.to_string()))
        .with_field("status", FieldValue::Str(status.to_string()))
        .with_field("join_date", FieldValue::Str(join_date.to_string()))
        .with_field("last_active", FieldValue::Str(last_active.to_string()))
}
