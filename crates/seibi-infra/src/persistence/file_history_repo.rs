//! File-based maintenance history repository implementation

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use seibi_domain::model::MaintenanceRecord;
use seibi_domain::repository::MaintenanceHistoryRepository;
use seibi_types::{Error, Result};

/// File-based implementation of MaintenanceHistoryRepository
///
/// Stores per-vehicle maintenance history in a JSON file on disk.
/// `fetch_history` always returns records ascending by mileage, which the
/// cycle calculator relies on.
#[derive(Debug)]
pub struct FileHistoryRepository {
    store_path: PathBuf,
    entries: HashMap<String, Vec<MaintenanceRecord>>,
}

impl FileHistoryRepository {
    /// Create or load a history repository in a store directory
    pub fn open(store_dir: PathBuf) -> Result<Self> {
        fs::create_dir_all(&store_dir)?;
        let store_path = store_dir.join("history.json");

        let entries = if store_path.exists() {
            let file = File::open(&store_path)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).map_err(|e| {
                Error::StoreCorrupted(format!("{}: {}", store_path.display(), e))
            })?
        } else {
            HashMap::new()
        };

        Ok(Self {
            store_path,
            entries,
        })
    }

    /// Save store to disk
    fn persist(&self) -> Result<()> {
        let file = File::create(&self.store_path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &self.entries)?;
        Ok(())
    }

    /// Vehicle numbers with at least one record
    pub fn vehicle_numbers(&self) -> Vec<String> {
        let mut numbers: Vec<String> = self.entries.keys().cloned().collect();
        numbers.sort();
        numbers
    }

    /// Total number of records across all vehicles
    pub fn record_count(&self) -> usize {
        self.entries.values().map(Vec::len).sum()
    }
}

impl MaintenanceHistoryRepository for FileHistoryRepository {
    fn fetch_history(&self, vehicle_number: &str) -> Result<Vec<MaintenanceRecord>> {
        let mut records = self
            .entries
            .get(vehicle_number)
            .cloned()
            .unwrap_or_default();
        records.sort_by_key(|r| r.mileage_at_service);
        Ok(records)
    }

    fn append(&mut self, vehicle_number: &str, record: MaintenanceRecord) -> Result<()> {
        self.entries
            .entry(vehicle_number.to_string())
            .or_default()
            .push(record);
        self.persist()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seibi_types::MaintenanceKind;
    use tempfile::tempdir;

    #[test]
    fn test_fetch_unknown_vehicle_is_empty() {
        let dir = tempdir().unwrap();
        let repo = FileHistoryRepository::open(dir.path().to_path_buf()).unwrap();
        let history = repo.fetch_history("9999").unwrap();
        assert!(history.is_empty());
    }

    #[test]
    fn test_append_persists_across_reopen() {
        let dir = tempdir().unwrap();
        {
            let mut repo = FileHistoryRepository::open(dir.path().to_path_buf()).unwrap();
            repo.append("1122", MaintenanceRecord::new(MaintenanceKind::Minor, 4000))
                .unwrap();
            repo.append("1122", MaintenanceRecord::new(MaintenanceKind::Major, 8000))
                .unwrap();
        }
        let repo = FileHistoryRepository::open(dir.path().to_path_buf()).unwrap();
        let history = repo.fetch_history("1122").unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0].kind, MaintenanceKind::Minor);
        assert_eq!(history[1].kind, MaintenanceKind::Major);
    }

    #[test]
    fn test_fetch_sorts_out_of_order_appends() {
        let dir = tempdir().unwrap();
        let mut repo = FileHistoryRepository::open(dir.path().to_path_buf()).unwrap();
        repo.append("1111", MaintenanceRecord::new(MaintenanceKind::Major, 8000))
            .unwrap();
        repo.append("1111", MaintenanceRecord::new(MaintenanceKind::Minor, 4000))
            .unwrap();

        let history = repo.fetch_history("1111").unwrap();
        assert_eq!(
            history
                .iter()
                .map(|r| r.mileage_at_service)
                .collect::<Vec<_>>(),
            vec![4000, 8000]
        );
    }

    #[test]
    fn test_corrupted_store_is_reported() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("history.json"), "{not json").unwrap();
        let err = FileHistoryRepository::open(dir.path().to_path_buf()).unwrap_err();
        assert!(matches!(err, Error::StoreCorrupted(_)));
    }
}
