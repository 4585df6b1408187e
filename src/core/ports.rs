// Ports define what the core needs from the outside world, without implementing it.
//
// Purpose
// - Describe the week persistence capability as a trait (WeekStore).
//
// Responsibilities
// - Keep the core independent of where records are stored by coding against the trait.
// - A week is read and written as a whole: put replaces the entire record list for the key.
//
// Boundaries
// - No concrete input or output here. Adapters implement this trait in the adapters layer.
//
// Testing guidance
// - Provide an in memory implementation for tests and local development.

use thiserror::Error;

use crate::core::shift::record::ShiftRecord;
use crate::core::week::navigator::WeekKey;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("backend error: {0}")]
    Backend(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub trait WeekStore: Send + Sync {
    /// `None` when nothing was ever stored for the week.
    fn get(&self, key: &WeekKey) -> Result<Option<Vec<ShiftRecord>>, StoreError>;
    fn put(&self, key: &WeekKey, records: &[ShiftRecord]) -> Result<(), StoreError>;
}
