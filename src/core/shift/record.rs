// Accepted shift record for one calendar date.
//
// Purpose
// - Represent a worked shift with its derived earnings, as shown and as persisted.
//
// Responsibilities
// - Build records only from a ShiftInput and a set of pay rules, so earnings are never user supplied.
// - Recompute earnings whenever the start or end time changes.
// - Serialize with camelCase keys and "HH:MM" times, the shape stored per week.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::core::shift::{earnings::PayRules, input::ShiftInput, time_of_day};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShiftRecord {
    date: NaiveDate,
    #[serde(with = "time_of_day::serde_format")]
    start_time: NaiveTime,
    #[serde(with = "time_of_day::serde_format")]
    end_time: NaiveTime,
    discounts: f64,
    extras: f64,
    earnings: f64,
}

impl ShiftRecord {
    pub fn from_input(input: ShiftInput, rules: &PayRules) -> Self {
        Self {
            date: input.date,
            start_time: input.start_time,
            end_time: input.end_time,
            discounts: input.discounts,
            extras: input.extras,
            earnings: rules.earnings(input.start_time, input.end_time),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn start_time(&self) -> NaiveTime {
        self.start_time
    }

    pub fn end_time(&self) -> NaiveTime {
        self.end_time
    }

    pub fn discounts(&self) -> f64 {
        self.discounts
    }

    pub fn extras(&self) -> f64 {
        self.extras
    }

    pub fn earnings(&self) -> f64 {
        self.earnings
    }

    pub fn set_times(&mut self, start_time: NaiveTime, end_time: NaiveTime, rules: &PayRules) {
        self.start_time = start_time;
        self.end_time = end_time;
        self.earnings = rules.earnings(start_time, end_time);
    }
}
