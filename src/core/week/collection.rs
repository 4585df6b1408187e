// In-memory record repository for the currently viewed week.
//
// Purpose
// - Hold one week's shift records in ascending date order.
//
// Responsibilities
// - Re-sort after every add (stable; one record per date means no ties in practice).
// - Remove by position in the sorted order; an out-of-range position changes nothing.
// - Compute the week summary.
//
// Boundaries
// - Validation happens before add, persistence after each mutation; both belong to the caller.

use crate::core::shift::record::ShiftRecord;
use crate::core::week::{navigator::WeekKey, summary::WeekSummary};

#[derive(Debug, Clone, PartialEq)]
pub struct WeekCollection {
    key: WeekKey,
    records: Vec<ShiftRecord>,
}

impl WeekCollection {
    pub fn empty(key: WeekKey) -> Self {
        Self {
            key,
            records: Vec::new(),
        }
    }

    pub fn from_records(key: WeekKey, mut records: Vec<ShiftRecord>) -> Self {
        records.sort_by_key(ShiftRecord::date);
        Self { key, records }
    }

    pub fn key(&self) -> WeekKey {
        self.key
    }

    pub fn add(&mut self, record: ShiftRecord) {
        self.records.push(record);
        self.records.sort_by_key(ShiftRecord::date);
    }

    pub fn remove_at(&mut self, position: usize) -> Option<ShiftRecord> {
        if position < self.records.len() {
            Some(self.records.remove(position))
        } else {
            None
        }
    }

    pub fn list(&self) -> &[ShiftRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn summary(&self) -> WeekSummary {
        WeekSummary::of(&self.records)
    }
}
