// Pure earnings calculation for a single shift.
//
// Purpose
// - Turn a start and end time of day into an amount earned.
//
// Responsibilities
// - Deduct a fixed lunch break once, only when the worked time is strictly above the threshold.
// - Multiply billable hours by the hourly rate.
//
// Boundaries
// - end > start is guaranteed by the validator and is not checked again here.
// - No input or output.

use chrono::{NaiveTime, TimeDelta};

pub const HOURLY_RATE: f64 = 1.75;
pub const LUNCH_BREAK_THRESHOLD_HOURS: i64 = 8;
pub const LUNCH_BREAK_DEDUCTION_HOURS: i64 = 1;

const SECONDS_PER_HOUR: f64 = 3600.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PayRules {
    pub hourly_rate: f64,
    pub lunch_break_threshold: TimeDelta,
    pub lunch_break_deduction: TimeDelta,
}

impl Default for PayRules {
    fn default() -> Self {
        Self {
            hourly_rate: HOURLY_RATE,
            lunch_break_threshold: TimeDelta::hours(LUNCH_BREAK_THRESHOLD_HOURS),
            lunch_break_deduction: TimeDelta::hours(LUNCH_BREAK_DEDUCTION_HOURS),
        }
    }
}

impl PayRules {
    pub fn with_hourly_rate(mut self, hourly_rate: f64) -> Self {
        self.hourly_rate = hourly_rate;
        self
    }

    /// Worked time minus the lunch break when the shift is longer than the threshold.
    pub fn billable(&self, start_time: NaiveTime, end_time: NaiveTime) -> TimeDelta {
        let worked = end_time - start_time;
        if worked > self.lunch_break_threshold {
            worked - self.lunch_break_deduction
        } else {
            worked
        }
    }

    pub fn billable_hours(&self, start_time: NaiveTime, end_time: NaiveTime) -> f64 {
        self.billable(start_time, end_time).num_seconds() as f64 / SECONDS_PER_HOUR
    }

    pub fn earnings(&self, start_time: NaiveTime, end_time: NaiveTime) -> f64 {
        self.billable_hours(start_time, end_time) * self.hourly_rate
    }
}

/// Earnings under the fixed rules: 1.75 per hour, one hour off above eight hours.
pub fn compute(start_time: NaiveTime, end_time: NaiveTime) -> f64 {
    PayRules::default().earnings(start_time, end_time)
}

#[cfg(test)]
mod earnings_tests {
    use super::*;
    use rstest::rstest;

    fn at(hour: u32, minute: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
    }

    fn assert_amount(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[rstest]
    #[case(at(9, 0), at(13, 30), 4.5 * 1.75)]
    #[case(at(9, 0), at(17, 0), 14.0)]
    #[case(at(9, 0), at(18, 0), 14.0)]
    #[case(at(6, 0), at(20, 0), 13.0 * 1.75)]
    #[case(at(9, 0), at(17, 1), (8.0 + 1.0 / 60.0 - 1.0) * 1.75)]
    fn it_should_compute_the_earnings(
        #[case] start: NaiveTime,
        #[case] end: NaiveTime,
        #[case] expected: f64,
    ) {
        assert_amount(compute(start, end), expected);
    }

    #[rstest]
    fn it_should_not_deduct_the_lunch_break_at_exactly_eight_hours() {
        assert_eq!(
            PayRules::default().billable(at(8, 0), at(16, 0)),
            TimeDelta::hours(8)
        );
    }

    #[rstest]
    fn it_should_deduct_the_lunch_break_one_minute_past_eight_hours() {
        assert_eq!(
            PayRules::default().billable(at(8, 0), at(16, 1)),
            TimeDelta::hours(7) + TimeDelta::minutes(1)
        );
    }

    #[rstest]
    fn it_should_pay_every_duration_by_the_fixed_rule() {
        let start = at(0, 0);
        for minutes in 1..(24 * 60) {
            let end = start + TimeDelta::minutes(minutes);
            let hours = minutes as f64 / 60.0;
            let billable = if hours > 8.0 { hours - 1.0 } else { hours };
            assert_amount(compute(start, end), billable * HOURLY_RATE);
        }
    }

    #[rstest]
    fn it_should_apply_a_custom_hourly_rate() {
        let rules = PayRules::default().with_hourly_rate(2.0);
        assert_amount(rules.earnings(at(9, 0), at(18, 0)), 16.0);
        assert_amount(rules.billable_hours(at(9, 0), at(18, 0)), 8.0);
    }
}
