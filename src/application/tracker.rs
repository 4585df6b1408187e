// Weekly tracker orchestrates navigation, submissions and deletions for one user.
//
// Responsibilities
// - Own the viewed date, the loaded week collection and the week store. Nothing is global.
// - Reload the whole collection whenever the viewed week changes.
// - Validate with the decider, then persist the mutated week before committing it in memory,
//   so a rejected submission or a failed write leaves the tracker unchanged.
// - Records go to the currently viewed week.

use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::application::errors::TrackerError;
use crate::application::view::WeekView;
use crate::core::ports::WeekStore;
use crate::core::shift::{
    decider::validate::decide_add, earnings::PayRules, input::ShiftInput, record::ShiftRecord,
};
use crate::core::week::{
    collection::WeekCollection,
    navigator::{WeekKey, WeekRange, shift_weeks},
    summary::WeekSummary,
};

pub struct WeeklyTracker<S>
where
    S: WeekStore,
{
    store: S,
    rules: PayRules,
    viewed_date: NaiveDate,
    collection: WeekCollection,
}

impl<S> WeeklyTracker<S>
where
    S: WeekStore,
{
    pub fn open(store: S, date: NaiveDate) -> Result<Self, TrackerError> {
        let collection = load_week(&store, date)?;
        Ok(Self {
            store,
            rules: PayRules::default(),
            viewed_date: date,
            collection,
        })
    }

    pub fn with_rules(mut self, rules: PayRules) -> Self {
        self.rules = rules;
        self
    }

    pub fn rules(&self) -> &PayRules {
        &self.rules
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    pub fn viewed_date(&self) -> NaiveDate {
        self.viewed_date
    }

    pub fn week_key(&self) -> WeekKey {
        self.collection.key()
    }

    pub fn week_range(&self) -> WeekRange {
        self.week_key().range()
    }

    pub fn records(&self) -> &[ShiftRecord] {
        self.collection.list()
    }

    pub fn summary(&self) -> WeekSummary {
        self.collection.summary()
    }

    pub fn view(&self) -> WeekView {
        WeekView::from_collection(self.week_range(), &self.collection)
    }

    pub fn go_to(&mut self, date: NaiveDate) -> Result<(), TrackerError> {
        let collection = load_week(&self.store, date)?;
        self.viewed_date = date;
        self.collection = collection;
        Ok(())
    }

    pub fn previous_week(&mut self) -> Result<(), TrackerError> {
        self.move_by(-1)
    }

    pub fn next_week(&mut self) -> Result<(), TrackerError> {
        self.move_by(1)
    }

    fn move_by(&mut self, weeks: i64) -> Result<(), TrackerError> {
        let date = shift_weeks(self.viewed_date, weeks).ok_or(TrackerError::OutOfCalendar)?;
        self.go_to(date)
    }

    pub fn submit(&mut self, input: ShiftInput) -> Result<ShiftRecord, TrackerError> {
        let record = match decide_add(input, self.collection.list(), &self.rules) {
            Ok(record) => record,
            Err(reason) => {
                warn!(week = %self.week_key(), %reason, "shift rejected");
                return Err(reason.into());
            }
        };

        let mut next = self.collection.clone();
        next.add(record.clone());
        self.persist(&next)?;
        self.collection = next;

        info!(
            week = %self.week_key(),
            date = %record.date(),
            earnings = record.earnings(),
            "shift recorded"
        );
        Ok(record)
    }

    /// Parses raw form values, then submits them.
    pub fn submit_form(
        &mut self,
        date: &str,
        start_time: &str,
        end_time: &str,
        discounts: &str,
        extras: &str,
    ) -> Result<ShiftRecord, TrackerError> {
        let input = ShiftInput::parse(date, start_time, end_time, discounts, extras)
            .inspect_err(|e| warn!(week = %self.week_key(), error = %e, "malformed shift input"))?;
        self.submit(input)
    }

    /// Deletes the record at `position` in date order. Confirmation is the caller's concern.
    pub fn delete_at(&mut self, position: usize) -> Result<ShiftRecord, TrackerError> {
        let mut next = self.collection.clone();
        let Some(removed) = next.remove_at(position) else {
            warn!(week = %self.week_key(), position, "no record to delete");
            return Err(TrackerError::NoRecordAt(position));
        };
        self.persist(&next)?;
        self.collection = next;

        info!(week = %self.week_key(), date = %removed.date(), "shift deleted");
        Ok(removed)
    }

    fn persist(&self, collection: &WeekCollection) -> Result<(), TrackerError> {
        self.store.put(&collection.key(), collection.list())?;
        Ok(())
    }
}

fn load_week<S: WeekStore>(store: &S, date: NaiveDate) -> Result<WeekCollection, TrackerError> {
    let key = WeekKey::of(date).ok_or(TrackerError::OutOfCalendar)?;
    let records = store.get(&key)?.unwrap_or_default();
    debug!(week = %key, records = records.len(), "loaded week");
    Ok(WeekCollection::from_records(key, records))
}
