use std::ops;

use crate::core::shift::record::ShiftRecord;

/// Totals over one week's records. An empty week sums to zero everywhere.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct WeekSummary {
    pub total_earned: f64,
    pub total_discounts: f64,
    pub total_extras: f64,
}

impl WeekSummary {
    pub fn of<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a ShiftRecord>,
    {
        let mut summary = Self::default();
        for record in records {
            summary += record;
        }
        summary
    }

    /// Earned minus discounts plus extras.
    pub fn final_amount(&self) -> f64 {
        self.total_earned - self.total_discounts + self.total_extras
    }
}

impl ops::AddAssign<&ShiftRecord> for WeekSummary {
    fn add_assign(&mut self, record: &ShiftRecord) {
        self.total_earned += record.earnings();
        self.total_discounts += record.discounts();
        self.total_extras += record.extras();
    }
}
