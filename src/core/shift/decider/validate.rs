// Pure decision function for adding a shift to a week.
//
// Purpose
// - Validate a candidate shift against the records already held for the week.
//
// Responsibilities
// - Enforce rules: the end instant must be after the start instant on the shift date,
//   and a date may hold at most one record.
// - Build the record, with derived earnings, once the candidate is accepted.
// - Never perform input or output. Callers must not mutate state on rejection.

use chrono::NaiveDate;

use crate::core::shift::{earnings::PayRules, input::ShiftInput, record::ShiftRecord};

#[derive(Debug, Clone, Copy, thiserror::Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("end time must be after start time")]
    InvalidTimeRange,

    #[error("a record already exists for {0}")]
    DuplicateDate(NaiveDate),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Accepted,
    Rejected { reason: ValidationError },
}

impl Decision {
    pub fn into_result(self) -> Result<(), ValidationError> {
        match self {
            Decision::Accepted => Ok(()),
            Decision::Rejected { reason } => Err(reason),
        }
    }
}

pub fn validate(candidate: &ShiftInput, existing: &[ShiftRecord]) -> Decision {
    let start = candidate.date.and_time(candidate.start_time);
    let end = candidate.date.and_time(candidate.end_time);
    if end <= start {
        return Decision::Rejected {
            reason: ValidationError::InvalidTimeRange,
        };
    }

    if existing.iter().any(|record| record.date() == candidate.date) {
        return Decision::Rejected {
            reason: ValidationError::DuplicateDate(candidate.date),
        };
    }

    Decision::Accepted
}

pub fn decide_add(
    candidate: ShiftInput,
    existing: &[ShiftRecord],
    rules: &PayRules,
) -> Result<ShiftRecord, ValidationError> {
    validate(&candidate, existing).into_result()?;
    Ok(ShiftRecord::from_input(candidate, rules))
}
