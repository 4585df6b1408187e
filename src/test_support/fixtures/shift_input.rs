// Shared test fixture for the ShiftInput candidate.
// Compiled only during tests, exposed under `crate::test_support::fixtures`.

use crate::core::shift::{
    earnings::PayRules,
    input::{ShiftInput, parse_date},
    record::ShiftRecord,
    time_of_day,
};
use serde::Deserialize;
use std::fs;

// JSON -> DTO (form shape)
#[derive(Debug, Clone, Deserialize)]
pub struct ShiftInputDto {
    pub date: String,
    pub start_time: String,
    pub end_time: String,
    pub discounts: String,
    pub extras: String,
}

pub struct ShiftInputBuilder {
    inner: ShiftInput,
}

impl Default for ShiftInputBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl ShiftInputBuilder {
    pub fn new() -> Self {
        let json_str =
            fs::read_to_string("./src/test_support/fixtures/json/shift_input.json").unwrap();
        let dto: ShiftInputDto = serde_json::from_str(&json_str).unwrap();

        Self {
            inner: ShiftInput::parse(
                &dto.date,
                &dto.start_time,
                &dto.end_time,
                &dto.discounts,
                &dto.extras,
            )
            .unwrap(),
        }
    }

    pub fn date(mut self, v: &str) -> Self {
        self.inner.date = parse_date(v).unwrap();
        self
    }

    pub fn start_time(mut self, v: &str) -> Self {
        self.inner.start_time = time_of_day::parse(v).unwrap();
        self
    }

    pub fn end_time(mut self, v: &str) -> Self {
        self.inner.end_time = time_of_day::parse(v).unwrap();
        self
    }

    pub fn discounts(mut self, v: f64) -> Self {
        self.inner.discounts = v;
        self
    }

    pub fn extras(mut self, v: f64) -> Self {
        self.inner.extras = v;
        self
    }

    pub fn build(self) -> ShiftInput {
        self.inner
    }

    pub fn record(self) -> ShiftRecord {
        ShiftRecord::from_input(self.inner, &PayRules::default())
    }
}
