//! Append-only record store for sensor readings.
//!
//! Ingestion only ever calls [`RecordStore::append`]; analysis only ever
//! calls [`RecordStore::read_all`] (via [`load_dataset`]). Scoring code never
//! sees the storage format, so the CSV file can be swapped for another
//! backend by implementing the trait.

pub mod csv_store;
pub mod error;
pub mod memory;
pub mod parse;

use envmon_core::reading::Reading;

pub use csv_store::CsvRecordStore;
pub use error::StoreError;
pub use memory::MemoryRecordStore;

/// Storage backend for readings.
pub trait RecordStore: Send + Sync {
    /// Append one reading at the end of the store.
    fn append(&self, reading: &Reading) -> Result<(), StoreError>;

    /// All readings in insertion order, with unparseable rows removed.
    fn read_all(&self) -> Result<Vec<Reading>, StoreError>;
}

/// Load the cleaned readings for analysis.
///
/// Fails with [`StoreError::EmptyDataset`] when no row survives cleaning, in
/// addition to whatever the backend reports (missing file, missing column).
pub fn load_dataset(store: &dyn RecordStore) -> Result<Vec<Reading>, StoreError> {
    let readings = store.read_all()?;
    if readings.is_empty() {
        return Err(StoreError::EmptyDataset);
    }
    tracing::info!(rows = readings.len(), "Loaded sensor dataset");
    Ok(readings)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use envmon_core::types::now_local;

    use super::*;

    #[test]
    fn header_only_store_is_empty_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let store = CsvRecordStore::open(dir.path().join("sensor_data.csv")).unwrap();
        assert_matches!(load_dataset(&store), Err(StoreError::EmptyDataset));
    }

    #[test]
    fn only_bad_timestamps_is_empty_dataset() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sensor_data.csv");
        std::fs::write(&path, "Temperature,Humidity,Sound,Timestamp\n20,30,40,garbage\n").unwrap();
        assert_matches!(
            load_dataset(&CsvRecordStore::new(&path)),
            Err(StoreError::EmptyDataset)
        );
    }

    #[test]
    fn memory_store_round_trips() {
        let store = MemoryRecordStore::new();
        assert_matches!(load_dataset(&store), Err(StoreError::EmptyDataset));

        let reading = Reading::empty(now_local());
        store.append(&reading).unwrap();
        assert_eq!(load_dataset(&store).unwrap(), vec![reading]);
    }
}
