// File backed implementation of the WeekStore port.
//
// Purpose
// - Keep each week's records on disk, one JSON document per week, named after the storage key
//   (for example `week_2024-03-03.json`).
//
// Responsibilities
// - A missing file means the week has no records yet.
// - Writes go to a temporary sibling file that is then renamed over the target, so a reader
//   never sees a half-written week.

use crate::core::ports::{StoreError, WeekStore};
use crate::core::shift::record::ShiftRecord;
use crate::core::week::navigator::WeekKey;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

pub struct JsonFileWeekStore {
    dir: PathBuf,
}

impl JsonFileWeekStore {
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path_for(&self, key: &WeekKey) -> PathBuf {
        self.dir.join(format!("{}.json", key.storage_key()))
    }
}

impl WeekStore for JsonFileWeekStore {
    fn get(&self, key: &WeekKey) -> Result<Option<Vec<ShiftRecord>>, StoreError> {
        let path = self.path_for(key);
        let raw = match fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(week = %key, "no stored records");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };
        let records: Vec<ShiftRecord> = serde_json::from_str(&raw)?;
        debug!(week = %key, records = records.len(), path = %path.display(), "read week");
        Ok(Some(records))
    }

    fn put(&self, key: &WeekKey, records: &[ShiftRecord]) -> Result<(), StoreError> {
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        let json = serde_json::to_string_pretty(records)?;
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &path)?;
        debug!(week = %key, records = records.len(), path = %path.display(), "wrote week");
        Ok(())
    }
}
