// Tests for week keys and ranges over a whole year.
//
// Responsibilities
// - Every date maps to the Sunday that starts its week.
// - Dates in the same seven day window share a key; a date seven days later does not.

use chrono::{Datelike, NaiveDate, Weekday};
use rstest::rstest;
use weekly_income::core::week::navigator::{shift_weeks, week_key_of, week_range_of};

#[rstest]
fn it_should_start_every_week_on_a_sunday() {
    let first = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    for day in first.iter_days().take(366) {
        let range = week_range_of(day).unwrap();
        assert_eq!(range.start.weekday(), Weekday::Sun);
        assert_eq!(range.end.weekday(), Weekday::Sat);
        assert_eq!((range.end - range.start).num_days(), 6);
        assert!(range.contains(day));
        assert_eq!(week_key_of(day).unwrap().start(), range.start);
    }
}

#[rstest]
fn it_should_share_a_key_within_a_week_and_change_it_a_week_later() {
    let first = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    for day in first.iter_days().take(366) {
        let key = week_key_of(day).unwrap();
        for other in week_range_of(day).unwrap().days() {
            assert_eq!(week_key_of(other), Some(key));
        }
        let later = shift_weeks(day, 1).unwrap();
        assert_ne!(week_key_of(later), Some(key));
        assert_eq!(week_key_of(key.start()), Some(key));
    }
}

#[rstest]
#[case("2024-02-29", "2024-02-25")]
#[case("2024-03-03", "2024-03-03")]
#[case("2024-03-09", "2024-03-03")]
#[case("2025-01-01", "2024-12-29")]
fn it_should_format_the_key_as_the_start_date(#[case] day: &str, #[case] key: &str) {
    let day = NaiveDate::parse_from_str(day, "%Y-%m-%d").unwrap();
    assert_eq!(week_key_of(day).unwrap().to_string(), key);
}
