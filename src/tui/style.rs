//! Color constants for the TUI.

use ratatui::style::Color;

/// ON status cell color.
pub const STATUS_ON: Color = Color::Green;
/// OFF status cell color.
pub const STATUS_OFF: Color = Color::Red;
/// Locked column marker color.
pub const LOCKED_FG: Color = Color::Yellow;
/// Hidden column entry color.
pub const HIDDEN_FG: Color = Color::DarkGray;
/// Cursor row/entry highlight background.
pub const CURSOR_BG: Color = Color::Blue;
/// Table header row color.
pub const TABLE_HEADER_FG: Color = Color::Cyan;
/// Header bar foreground.
pub const HEADER_FG: Color = Color::White;
/// Header bar background.
pub const HEADER_BG: Color = Color::DarkGray;
/// Footer help text color.
pub const FOOTER_FG: Color = Color::DarkGray;

/// Returns the cell color for an evaluated status.
pub fn status_color(on: bool) -> Color {
    if on { STATUS_ON } else { STATUS_OFF }
}
