// Candidate shift as entered by the user.
//
// Purpose
// - Carry the form data (date, start and end time, discounts, extras) to the validator.
// - Convert raw form strings into typed values, rejecting malformed input up front.
//
// Responsibilities
// - Blank discount or extra fields count as zero.
// - Amounts must be finite and non-negative.
// - Earnings are never part of the input; they are derived when the record is built.

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

use crate::core::shift::time_of_day;

pub const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("invalid date: {0:?} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("invalid time of day: {0:?} (expected HH:MM)")]
    InvalidTime(String),

    #[error("invalid amount: {0:?}")]
    InvalidAmount(String),

    #[error("amount must be zero or positive: {0:?}")]
    NegativeAmount(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ShiftInput {
    pub date: NaiveDate,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
    pub discounts: f64,
    pub extras: f64,
}

impl ShiftInput {
    pub fn parse(
        date: &str,
        start_time: &str,
        end_time: &str,
        discounts: &str,
        extras: &str,
    ) -> Result<Self, InputError> {
        Ok(Self {
            date: parse_date(date)?,
            start_time: parse_time(start_time)?,
            end_time: parse_time(end_time)?,
            discounts: parse_amount(discounts)?,
            extras: parse_amount(extras)?,
        })
    }
}

pub fn parse_date(value: &str) -> Result<NaiveDate, InputError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| InputError::InvalidDate(value.to_string()))
}

fn parse_time(value: &str) -> Result<NaiveTime, InputError> {
    time_of_day::parse(value).ok_or_else(|| InputError::InvalidTime(value.to_string()))
}

fn parse_amount(value: &str) -> Result<f64, InputError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    let amount: f64 = trimmed
        .parse()
        .map_err(|_| InputError::InvalidAmount(value.to_string()))?;
    if !amount.is_finite() || amount < 0.0 {
        return Err(InputError::NegativeAmount(value.to_string()));
    }
    Ok(amount)
}
