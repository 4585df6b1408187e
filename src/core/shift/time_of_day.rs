// Time of day handling for shift start and end times.
//
// Purpose
// - Parse the "HH:MM" values a time input produces, and accept "HH:MM:SS" as well.
// - Keep the stored representation identical to what the form submits.
//
// Boundaries
// - No dates here. Combining with a calendar date happens in the validator.

use chrono::{NaiveTime, Timelike};

const SHORT_FORMAT: &str = "%H:%M";
const LONG_FORMAT: &str = "%H:%M:%S";

pub fn parse(value: &str) -> Option<NaiveTime> {
    let value = value.trim();
    NaiveTime::parse_from_str(value, SHORT_FORMAT)
        .or_else(|_| NaiveTime::parse_from_str(value, LONG_FORMAT))
        .ok()
}

/// Formats as "HH:MM", falling back to "HH:MM:SS" when seconds would be lost.
pub fn format(time: &NaiveTime) -> String {
    if time.second() == 0 {
        time.format(SHORT_FORMAT).to_string()
    } else {
        time.format(LONG_FORMAT).to_string()
    }
}

/// Serde adapter, use with `#[serde(with = "time_of_day::serde_format")]`.
pub mod serde_format {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format(time))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        super::parse(&raw).ok_or_else(|| de::Error::custom(format!("invalid time of day: {raw}")))
    }
}

#[cfg(test)]
mod time_of_day_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("09:00", 9, 0, 0)]
    #[case("17:45", 17, 45, 0)]
    #[case("08:30:15", 8, 30, 15)]
    #[case(" 23:59 ", 23, 59, 0)]
    fn it_should_parse_valid_times(
        #[case] raw: &str,
        #[case] hour: u32,
        #[case] minute: u32,
        #[case] second: u32,
    ) {
        assert_eq!(parse(raw), NaiveTime::from_hms_opt(hour, minute, second));
    }

    #[rstest]
    #[case("")]
    #[case("25:00")]
    #[case("noon")]
    #[case("12:61")]
    fn it_should_reject_malformed_times(#[case] raw: &str) {
        assert_eq!(parse(raw), None);
    }

    #[rstest]
    fn it_should_format_without_seconds_when_they_are_zero() {
        let time = NaiveTime::from_hms_opt(9, 5, 0).unwrap();
        assert_eq!(format(&time), "09:05");
    }

    #[rstest]
    fn it_should_keep_seconds_when_present() {
        let time = NaiveTime::from_hms_opt(9, 5, 7).unwrap();
        assert_eq!(format(&time), "09:05:07");
    }
}
