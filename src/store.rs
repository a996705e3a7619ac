//! The record store: the canonical in-memory record list, mirrored
//! write-through to a single JSON slot file.

use crate::model::Record;
use crate::{fs, Result};
use anyhow::Context;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::debug;

/// Owns the ordered record list (newest first) and keeps it synchronized with
/// the slot file after every mutation.
///
/// Loading fails soft: a missing or unparseable slot yields an empty store and
/// never an error. Writes are whole-list rewrites; at the manual-entry volume
/// of a small business this is well within budget.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct RecordStore {
    records: Vec<Record>,
    path: PathBuf,
}

impl RecordStore {
    /// Loads the store from the slot file at `path`.
    pub fn load(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let records = match std::fs::read_to_string(&path) {
            Ok(text) => match serde_json::from_str::<Vec<Record>>(&text) {
                Ok(records) => records,
                Err(e) => {
                    debug!("Ignoring unparseable slot {}: {e}", path.display());
                    Vec::new()
                }
            },
            Err(e) => {
                debug!("No readable slot at {}: {e}", path.display());
                Vec::new()
            }
        };
        Self { records, path }
    }

    /// Prepends `record` and rewrites the slot file.
    ///
    /// The store trusts its caller: validation happens at the CLI boundary
    /// before a record is constructed. Returns a reference to the stored
    /// record so the caller can render or notify.
    pub fn append(&mut self, record: Record) -> Result<&Record> {
        self.records.insert(0, record);
        self.save()?;
        Ok(&self.records[0])
    }

    /// The current ordered record sequence, newest first.
    pub fn snapshot(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The id for the next record: the wall clock in milliseconds, bumped past
    /// the highest existing id so rapid additions within one clock tick never
    /// collide.
    pub fn next_id(&self) -> u64 {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or_default();
        let highest = self.records.iter().map(Record::id).max().unwrap_or(0);
        now.max(highest + 1)
    }

    fn save(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.records)
            .context("Failed to serialize records")?;
        fs::write(&self.path, json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Amount, Category};
    use std::str::FromStr;
    use tempfile::TempDir;

    fn record(id: u64, category: Category, amount: &str) -> Record {
        Record::new(
            id,
            category,
            Amount::from_str(amount).unwrap(),
            "",
            "",
            "1/1/2024",
        )
    }

    #[test]
    fn test_load_missing_slot_is_empty() {
        let dir = TempDir::new().unwrap();
        let store = RecordStore::load(dir.path().join("big7-records.json"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_load_corrupt_slot_is_empty() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("big7-records.json");
        std::fs::write(&path, "{not json").unwrap();
        let store = RecordStore::load(&path);
        assert!(store.is_empty());
    }

    #[test]
    fn test_append_prepends_and_grows_by_one() {
        let dir = TempDir::new().unwrap();
        let mut store = RecordStore::load(dir.path().join("big7-records.json"));

        store.append(record(1, Category::Savings, "50")).unwrap();
        assert_eq!(store.len(), 1);

        store
            .append(record(2, Category::WeeklySales, "75"))
            .unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.snapshot()[0].id(), 2);
        assert_eq!(store.snapshot()[1].id(), 1);
    }

    #[test]
    fn test_write_through_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("big7-records.json");

        let mut store = RecordStore::load(&path);
        store.append(record(1, Category::Susu, "10")).unwrap();
        store
            .append(record(2, Category::WorkerPayment, "200"))
            .unwrap();

        let reloaded = RecordStore::load(&path);
        assert_eq!(reloaded.snapshot(), store.snapshot());
    }

    #[test]
    fn test_load_original_slot_shape() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("big7-records.json");
        // Numeric amounts and ids, as the original implementation wrote them.
        std::fs::write(
            &path,
            r#"[
                {"type":"Worker Payment","amount":200,"person":"Ama","note":"","id":1756500000001,"date":"8/30/2026"},
                {"type":"Savings","amount":50,"person":"","note":"","id":1756500000000,"date":"8/29/2026"}
            ]"#,
        )
        .unwrap();

        let store = RecordStore::load(&path);
        assert_eq!(store.len(), 2);
        assert_eq!(store.snapshot()[0].category(), Category::WorkerPayment);
        assert_eq!(store.snapshot()[0].person(), "Ama");
    }

    #[test]
    fn test_next_id_is_strictly_increasing() {
        let dir = TempDir::new().unwrap();
        let mut store = RecordStore::load(dir.path().join("big7-records.json"));

        let first = store.next_id();
        store
            .append(record(first, Category::Savings, "1"))
            .unwrap();
        let second = store.next_id();
        assert!(second > first);
    }

    #[test]
    fn test_next_id_clears_a_future_clock() {
        let dir = TempDir::new().unwrap();
        let mut store = RecordStore::load(dir.path().join("big7-records.json"));

        // A record stamped far ahead of the wall clock must still not collide.
        let future = u64::MAX - 1;
        store
            .append(record(future, Category::Savings, "1"))
            .unwrap();
        assert_eq!(store.next_id(), future + 1);
    }
}
