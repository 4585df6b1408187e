// In memory implementation of the WeekStore port.
//
// Purpose
// - Support tracker tests and local development without touching the filesystem.
//
// Responsibilities
// - Store one record list per week key, replacing it on every put.
// - Simulate an unavailable backend with toggle_offline.

use crate::core::ports::{StoreError, WeekStore};
use crate::core::shift::record::ShiftRecord;
use crate::core::week::navigator::WeekKey;
use std::collections::HashMap;
use std::sync::RwLock;

#[derive(Default)]
pub struct InMemoryWeekStore {
    inner: RwLock<HashMap<WeekKey, Vec<ShiftRecord>>>,
    is_offline: bool,
}

impl InMemoryWeekStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub fn week_count(&self) -> Result<usize, StoreError> {
        let guard = self
            .inner
            .read()
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        Ok(guard.len())
    }

    fn check_online(&self) -> Result<(), StoreError> {
        if self.is_offline {
            return Err(StoreError::Backend("Week store offline".into()));
        }
        Ok(())
    }
}

impl WeekStore for InMemoryWeekStore {
    fn get(&self, key: &WeekKey) -> Result<Option<Vec<ShiftRecord>>, StoreError> {
        self.check_online()?;
        let guard = self
            .inner
            .read()
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }

    fn put(&self, key: &WeekKey, records: &[ShiftRecord]) -> Result<(), StoreError> {
        self.check_online()?;
        let mut guard = self
            .inner
            .write()
            .map_err(|e| StoreError::Backend(e.to_string()))?;
        guard.insert(*key, records.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod in_memory_week_store_tests {
    use super::*;
    use crate::test_support::fixtures::shift_input::ShiftInputBuilder;
    use rstest::{fixture, rstest};

    type BeforeEachReturn = (WeekKey, Vec<ShiftRecord>, InMemoryWeekStore);

    #[fixture]
    fn before_each() -> BeforeEachReturn {
        let record = ShiftInputBuilder::new().record();
        let key = WeekKey::of(record.date()).unwrap();
        (key, vec![record], InMemoryWeekStore::new())
    }

    #[rstest]
    fn it_should_put_and_get_a_week(before_each: BeforeEachReturn) {
        let (key, records, store) = before_each;
        store
            .put(&key, &records)
            .expect("expected to put into the week store");
        let loaded = store
            .get(&key)
            .expect("expected to get from the week store");
        assert_eq!(loaded, Some(records));
        assert_eq!(store.week_count().unwrap(), 1);
    }

    #[rstest]
    fn it_should_return_none_for_an_unknown_week(before_each: BeforeEachReturn) {
        let (key, _, store) = before_each;
        assert_eq!(store.get(&key).unwrap(), None);
    }

    #[rstest]
    fn it_should_replace_the_whole_week_on_put(before_each: BeforeEachReturn) {
        let (key, records, store) = before_each;
        store.put(&key, &records).unwrap();
        store.put(&key, &[]).unwrap();
        assert_eq!(store.get(&key).unwrap(), Some(vec![]));
    }

    #[rstest]
    fn it_should_fail_if_the_week_store_is_offline(before_each: BeforeEachReturn) {
        let (key, records, mut store) = before_each;
        store.toggle_offline();
        let put = store.put(&key, &records);
        assert!(put.unwrap_err().to_string().contains("Week store offline"));
        let get = store.get(&key);
        assert!(matches!(get, Err(StoreError::Backend(_))));
    }

    #[rstest]
    fn it_should_report_a_poisoned_lock(before_each: BeforeEachReturn) {
        let (key, records, store) = before_each;
        std::thread::scope(|scope| {
            let writer = scope.spawn(|| {
                let _guard = store.inner.write().unwrap();
                panic!("writer died holding the lock");
            });
            assert!(writer.join().is_err());
        });
        assert!(matches!(store.week_count(), Err(StoreError::Backend(_))));
        assert!(matches!(store.get(&key), Err(StoreError::Backend(_))));
        assert!(matches!(store.put(&key, &records), Err(StoreError::Backend(_))));
    }
}
