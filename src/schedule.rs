//! Date-based power schedule evaluation.
//!
//! Each schedulable row carries a [`PowerMode`]; evaluating the mode against
//! a calendar date yields exactly one ON/OFF boolean. All rules use the
//! caller-supplied local date as-is — no timezone normalization.

use std::fmt;

use chrono::{Datelike, NaiveDate, Weekday};
use serde::de::{Deserializer, Error as _};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

use crate::table::types::Row;

/// Enumerated schedule rule for a row's ON/OFF status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PowerMode {
    /// Always ON.
    Daily,
    /// ON when the day-of-month is odd.
    Alt1,
    /// ON when the day-of-month is even.
    Alt2,
    /// OFF on Friday and Saturday, ON otherwise.
    Weekday,
    /// OFF on Saturday and Sunday, ON otherwise.
    Weekend,
    /// ON only on the configured reference date; ON when no date is set.
    Custom,
}

impl PowerMode {
    /// All modes in menu order.
    pub const ALL: &[PowerMode] = &[
        Self::Daily,
        Self::Alt1,
        Self::Alt2,
        Self::Weekday,
        Self::Weekend,
        Self::Custom,
    ];

    /// Canonical mode name as stored in configuration.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Daily => "Daily",
            Self::Alt1 => "Alt 1",
            Self::Alt2 => "Alt 2",
            Self::Weekday => "Weekday",
            Self::Weekend => "Weekend",
            Self::Custom => "Custom",
        }
    }

    /// Human-readable schedule description for UI surfaces.
    pub fn description(&self) -> &'static str {
        match self {
            Self::Daily => "Active every day",
            Self::Alt1 => "Active on odd days",
            Self::Alt2 => "Active on even days",
            Self::Weekday => "Off Friday and Saturday",
            Self::Weekend => "Off Saturday and Sunday",
            Self::Custom => "Custom schedule",
        }
    }

    /// Parses a mode name, degrading unknown strings to `Daily`.
    ///
    /// An unknown value indicates a data bug upstream; the schedule contract
    /// is to stay ON rather than fail.
    pub fn parse(s: &str) -> Self {
        match s {
            "Daily" => Self::Daily,
            "Alt 1" => Self::Alt1,
            "Alt 2" => Self::Alt2,
            "Weekday" => Self::Weekday,
            "Weekend" => Self::Weekend,
            "Custom" => Self::Custom,
            _ => Self::Daily,
        }
    }
}

impl fmt::Display for PowerMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for PowerMode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for PowerMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Unknown names degrade to Daily instead of rejecting the document.
        String::deserialize(deserializer)
            .map(|s| Self::parse(&s))
            .map_err(D::Error::custom)
    }
}

/// Evaluates a power mode against a calendar date.
///
/// Pure function of its inputs; `reference` is only consulted for
/// [`PowerMode::Custom`], where equality is on the calendar day.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use routeboard::schedule::{PowerMode, evaluate};
///
/// let odd = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
/// assert!(evaluate(PowerMode::Alt1, odd, None));
/// assert!(!evaluate(PowerMode::Alt2, odd, None));
/// ```
pub fn evaluate(mode: PowerMode, today: NaiveDate, reference: Option<NaiveDate>) -> bool {
    match mode {
        PowerMode::Daily => true,
        PowerMode::Alt1 => today.day() % 2 != 0,
        PowerMode::Alt2 => today.day() % 2 == 0,
        PowerMode::Weekday => {
            let wd = today.weekday();
            wd != Weekday::Fri && wd != Weekday::Sat
        }
        PowerMode::Weekend => {
            let wd = today.weekday();
            wd != Weekday::Sat && wd != Weekday::Sun
        }
        PowerMode::Custom => reference.is_none_or(|d| d == today),
    }
}

/// Propagates evaluated schedule status into each schedulable row.
///
/// Rows without a power mode are left untouched.
pub fn apply_schedule(rows: &mut [Row], today: NaiveDate) {
    for row in rows {
        if let Some(mode) = row.power_mode {
            row.status = evaluate(mode, today, row.active_date);
        }
    }
}
