use std::sync::Mutex;

use envmon_core::reading::Reading;

use crate::error::StoreError;
use crate::RecordStore;

/// In-memory record store. Contents are lost when the value is dropped.
#[derive(Debug, Default)]
pub struct MemoryRecordStore {
    readings: Mutex<Vec<Reading>>,
}

impl MemoryRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with `readings`, in order.
    pub fn with_readings(readings: Vec<Reading>) -> Self {
        Self {
            readings: Mutex::new(readings),
        }
    }
}

impl RecordStore for MemoryRecordStore {
    fn append(&self, reading: &Reading) -> Result<(), StoreError> {
        self.readings
            .lock()
            .map_err(|_| StoreError::Poisoned)?
            .push(reading.clone());
        Ok(())
    }

    fn read_all(&self) -> Result<Vec<Reading>, StoreError> {
        Ok(self
            .readings
            .lock()
            .map_err(|_| StoreError::Poisoned)?
            .clone())
    }
}
