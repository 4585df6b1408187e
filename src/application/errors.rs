use thiserror::Error;

use crate::core::ports::StoreError;
use crate::core::shift::{decider::validate::ValidationError, input::InputError};

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error("record rejected: {0}")]
    Rejected(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("no record at position {0}")]
    NoRecordAt(usize),

    #[error("week is outside the supported calendar range")]
    OutOfCalendar,
}
