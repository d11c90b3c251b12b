use anyhow::{Context, Result};
use log::warn;
use serde::{Serialize, de::DeserializeOwned};
use std::{
    fs::{self, File},
    path::PathBuf,
};

use crate::{history::History, schedule::Schedule};

const SCHEDULE_RECORD: &str = "meds.json";
const HISTORY_RECORD: &str = "history.json";

/// Passive persistence mirror for the two in-memory lists. Each record is
/// rewritten wholesale after every mutation.
pub struct Store {
    dir: PathBuf,
}

impl Store {
    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create store directory {}", dir.display()))?;
        Ok(Self { dir })
    }

    pub fn load_schedule(&self) -> Schedule {
        Schedule::new(self.load_record(SCHEDULE_RECORD))
    }

    pub fn load_history(&self) -> History {
        History::new(self.load_record(HISTORY_RECORD))
    }

    pub fn save_schedule(&self, schedule: &Schedule) -> Result<()> {
        self.save_record(SCHEDULE_RECORD, schedule.entries())
    }

    pub fn save_history(&self, history: &History) -> Result<()> {
        self.save_record(HISTORY_RECORD, history.events())
    }

    // Missing and corrupt records both come back as an empty list.
    fn load_record<T: DeserializeOwned>(&self, name: &str) -> Vec<T> {
        let path = self.dir.join(name);
        let handle = match File::open(&path) {
            Ok(handle) => handle,
            Err(_) => return Vec::new(),
        };
        match serde_json::from_reader(handle) {
            Ok(list) => list,
            Err(err) => {
                warn!("discarding unreadable record {}: {err}", path.display());
                Vec::new()
            }
        }
    }

    fn save_record<T: Serialize>(&self, name: &str, list: &[T]) -> Result<()> {
        let staged = self.dir.join(format!("{name}.new"));
        let handle = File::create(&staged)
            .with_context(|| format!("Failed to create {}", staged.display()))?;
        serde_json::to_writer(handle, list)
            .with_context(|| format!("Failed to write {}", staged.display()))?;
        fs::rename(&staged, self.dir.join(name))
            .with_context(|| format!("Failed to replace record {name}"))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::Action;
    use crate::schedule::Medicine;
    use time::macros::datetime;

    #[test]
    fn missing_records_load_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path()).unwrap();

        assert!(store.load_schedule().is_empty());
        assert!(store.load_history().is_empty());
    }

    #[test]
    fn corrupt_record_loads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path()).unwrap();
        fs::write(dir.path().join(SCHEDULE_RECORD), "{not json").unwrap();
        fs::write(dir.path().join(HISTORY_RECORD), "[{\"action\":42}]").unwrap();

        assert!(store.load_schedule().is_empty());
        assert!(store.load_history().is_empty());
    }

    #[test]
    fn saved_records_survive_reload() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path()).unwrap();

        let mut schedule = store.load_schedule();
        schedule.add(
            Medicine::new("Aspirin", "500mg", "08:00", false, datetime!(2026-08-26 07:00 UTC))
                .unwrap(),
        );
        store.save_schedule(&schedule).unwrap();

        let mut history = store.load_history();
        history.record(Action::Taken, "Aspirin", datetime!(2026-08-26 08:01 UTC));
        store.save_history(&history).unwrap();

        let reloaded = Store::open(dir.path()).unwrap();
        assert_eq!(reloaded.load_schedule().entries(), schedule.entries());
        assert_eq!(reloaded.load_history().events(), history.events());
    }

    #[test]
    fn save_replaces_the_whole_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path()).unwrap();

        let mut schedule = store.load_schedule();
        schedule.add(
            Medicine::new("Aspirin", "", "08:00", false, datetime!(2026-08-26 07:00 UTC)).unwrap(),
        );
        schedule.add(
            Medicine::new("Vitamin", "", "09:00", true, datetime!(2026-08-26 07:01 UTC)).unwrap(),
        );
        store.save_schedule(&schedule).unwrap();

        schedule.clear();
        store.save_schedule(&schedule).unwrap();

        assert!(store.load_schedule().is_empty());
    }
}
