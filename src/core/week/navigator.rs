// Week navigation: canonical keys and display ranges for any date.
//
// Purpose
// - Map any calendar date to the week it belongs to.
//
// Responsibilities
// - A week starts on the most recent Sunday on or before the date and ends six days later.
// - The key is the start date as "YYYY-MM-DD". It is the persistence key and the
//   equality key for "same week".
//
// Boundaries
// - Pure and deterministic. No clock access; callers pass the date.
// - Weeks that cross the first or last representable date have no key.

use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDate, TimeDelta, Weekday};

use crate::core::shift::input::{InputError, parse_date};

pub const FIRST_WEEKDAY: Weekday = Weekday::Sun;
pub const STORAGE_PREFIX: &str = "week_";

const KEY_FORMAT: &str = "%Y-%m-%d";
const LABEL_FORMAT: &str = "%d/%m/%Y";

/// Only built from a whole week inside the calendar, so its range is always known.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WeekKey(WeekRange);

impl WeekKey {
    pub fn of(date: NaiveDate) -> Option<Self> {
        WeekRange::of(date).map(Self)
    }

    pub fn start(&self) -> NaiveDate {
        self.0.start
    }

    pub fn range(&self) -> WeekRange {
        self.0
    }

    /// Name of the storage slot holding this week's records, e.g. `week_2024-03-03`.
    pub fn storage_key(&self) -> String {
        format!("{STORAGE_PREFIX}{self}")
    }
}

impl fmt::Display for WeekKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.start.format(KEY_FORMAT))
    }
}

/// Parses any date and normalizes it to its week.
impl FromStr for WeekKey {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        WeekKey::of(parse_date(s)?).ok_or_else(|| InputError::InvalidDate(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WeekRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl WeekRange {
    pub fn of(date: NaiveDate) -> Option<Self> {
        let week = date.week(FIRST_WEEKDAY);
        Some(Self {
            start: week.checked_first_day()?,
            end: week.checked_last_day()?,
        })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + use<> {
        self.start.iter_days().take(7)
    }

    /// "DD/MM/YYYY - DD/MM/YYYY"
    pub fn label(&self) -> String {
        format!(
            "{} - {}",
            self.start.format(LABEL_FORMAT),
            self.end.format(LABEL_FORMAT)
        )
    }
}

pub fn week_key_of(date: NaiveDate) -> Option<WeekKey> {
    WeekKey::of(date)
}

pub fn week_range_of(date: NaiveDate) -> Option<WeekRange> {
    WeekRange::of(date)
}

/// Moves a date by whole weeks; `None` past the calendar bounds.
pub fn shift_weeks(date: NaiveDate, weeks: i64) -> Option<NaiveDate> {
    date.checked_add_signed(TimeDelta::try_weeks(weeks)?)
}
