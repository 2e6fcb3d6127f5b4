//! Customizable route board: table view derivation and power scheduling.

#[cfg(feature = "api")]
pub mod api;
pub mod config;
pub mod io;
pub mod schedule;
/// Column sets, view specs, and view derivation modules.
pub mod table;
#[cfg(feature = "tui")]
pub mod tui;
