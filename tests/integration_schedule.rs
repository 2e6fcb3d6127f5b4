//! Integration tests for power schedule evaluation across the dataset.

use chrono::NaiveDate;

use routeboard::config::BoardConfig;
use routeboard::schedule::{PowerMode, apply_schedule, evaluate};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

#[test]
fn every_mode_agrees_with_its_rule_over_a_full_month() {
    for day in 1..=31 {
        let today = date(2024, 1, day);
        let weekday = today.format("%a").to_string();

        assert!(evaluate(PowerMode::Daily, today, None));
        assert_eq!(evaluate(PowerMode::Alt1, today, None), day % 2 == 1);
        assert_eq!(evaluate(PowerMode::Alt2, today, None), day % 2 == 0);
        assert_eq!(
            evaluate(PowerMode::Weekday, today, None),
            weekday != "Fri" && weekday != "Sat"
        );
        assert_eq!(
            evaluate(PowerMode::Weekend, today, None),
            weekday != "Sat" && weekday != "Sun"
        );
    }
}

#[test]
fn custom_mode_is_on_only_on_its_reference_date() {
    let reference = date(2024, 3, 10);
    assert!(evaluate(PowerMode::Custom, reference, Some(reference)));
    assert!(!evaluate(
        PowerMode::Custom,
        date(2024, 3, 11),
        Some(reference)
    ));
    // No reference date means always ON.
    assert!(evaluate(PowerMode::Custom, reference, None));
}

#[test]
fn unknown_mode_name_degrades_to_daily() {
    assert_eq!(PowerMode::parse("Turbo"), PowerMode::Daily);
    assert_eq!(PowerMode::parse("Alt 1"), PowerMode::Alt1);
    assert_eq!(PowerMode::parse("Weekend"), PowerMode::Weekend);
}

#[test]
fn apply_schedule_rewrites_statuses_for_the_date() {
    let (_, mut rows, _) = BoardConfig::routes().build();

    // Friday 2024-01-19, odd day: Alt 1 ON, Alt 2 OFF, Weekday OFF.
    apply_schedule(&mut rows, date(2024, 1, 19));
    let status_of = |id: i64| rows.iter().find(|r| r.id == id).map(|r| r.status);
    assert_eq!(status_of(1), Some(true)); // Daily
    assert_eq!(status_of(2), Some(true)); // Alt 1
    assert_eq!(status_of(3), Some(false)); // Alt 2
    assert_eq!(status_of(4), Some(false)); // Weekday, Friday is off
    assert_eq!(status_of(5), Some(true)); // Daily
    assert_eq!(status_of(6), Some(true)); // Alt 1

    // The next day flips the alternating rows.
    apply_schedule(&mut rows, date(2024, 1, 20));
    let status_of = |id: i64| rows.iter().find(|r| r.id == id).map(|r| r.status);
    assert_eq!(status_of(2), Some(false));
    assert_eq!(status_of(3), Some(true));
}

#[test]
fn apply_schedule_is_stable_for_the_same_date() {
    let (_, mut rows, _) = BoardConfig::routes().build();
    let today = date(2024, 1, 16);
    apply_schedule(&mut rows, today);
    let first: Vec<bool> = rows.iter().map(|r| r.status).collect();
    apply_schedule(&mut rows, today);
    let second: Vec<bool> = rows.iter().map(|r| r.status).collect();
    assert_eq!(first, second);
}

#[test]
fn rows_without_a_mode_keep_their_configured_status() {
    let (_, mut rows, _) = BoardConfig::directory().build();
    let before: Vec<bool> = rows.iter().map(|r| r.status).collect();
    apply_schedule(&mut rows, date(2024, 1, 19));
    let after: Vec<bool> = rows.iter().map(|r| r.status).collect();
    assert_eq!(before, after);
}
