//! Table customization engine: columns, rows, and pure view derivation.

/// Column visibility and ordering operations.
pub mod columns;
pub mod rows;
pub mod types;
/// Rendered view assembly and summary reporting.
pub mod view;
