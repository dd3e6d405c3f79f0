//! CSV-backed record store (`Temperature,Humidity,Sound,Timestamp`).

use std::fs::{File, OpenOptions};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use envmon_core::reading::Reading;
use envmon_core::sensor::{Sensor, COLUMN_TIMESTAMP, STORE_HEADER};
use envmon_core::types::format_timestamp;

use crate::error::StoreError;
use crate::parse::{format_value, parse_timestamp, parse_value};
use crate::RecordStore;

/// Append-only store persisted as a delimited text file with a fixed header.
///
/// Appends from one process are serialized by an internal mutex. Separate
/// processes writing the same file are not coordinated.
#[derive(Debug)]
pub struct CsvRecordStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

/// Column positions resolved from the header row.
struct ColumnIndex {
    timestamp: usize,
    sensors: [(Sensor, usize); 3],
}

impl ColumnIndex {
    fn resolve(headers: &csv::StringRecord) -> Result<Self, StoreError> {
        let find = |column: &'static str| {
            headers
                .iter()
                .position(|h| h.trim() == column)
                .ok_or(StoreError::MissingColumn { column })
        };

        let timestamp = find(COLUMN_TIMESTAMP)?;
        let mut sensors = [(Sensor::Temperature, 0); 3];
        for (slot, sensor) in sensors.iter_mut().zip(Sensor::ALL) {
            *slot = (sensor, find(sensor.column())?);
        }

        Ok(Self { timestamp, sensors })
    }
}

impl CsvRecordStore {
    /// Handle to the store at `path`. Nothing is touched on disk.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Handle to the store at `path`, creating the file with its header row
    /// if it does not exist yet.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let store = Self::new(path);
        if store.ensure_header()? {
            tracing::info!(path = %store.path.display(), "Created record store");
        }
        Ok(store)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create the file with its header if absent. Returns `true` if created.
    fn ensure_header(&self) -> Result<bool, StoreError> {
        let file = match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
        {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(false),
            Err(e) => return Err(e.into()),
        };

        let mut writer = csv::Writer::from_writer(file);
        writer.write_record(STORE_HEADER)?;
        writer.flush()?;
        Ok(true)
    }
}

impl RecordStore for CsvRecordStore {
    fn append(&self, reading: &Reading) -> Result<(), StoreError> {
        let _guard = self.write_lock.lock().map_err(|_| StoreError::Poisoned)?;

        self.ensure_header()?;

        let file = OpenOptions::new().append(true).open(&self.path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer.write_record([
            format_value(reading.temperature),
            format_value(reading.humidity),
            format_value(reading.sound),
            format_timestamp(&reading.timestamp),
        ])?;
        writer.flush()?;
        Ok(())
    }

    fn read_all(&self) -> Result<Vec<Reading>, StoreError> {
        let file = match File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                return Err(StoreError::NotFound {
                    path: self.path.clone(),
                })
            }
            Err(e) => return Err(e.into()),
        };

        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(file);
        let columns = ColumnIndex::resolve(reader.headers()?)?;

        let mut readings = Vec::new();
        let mut dropped = 0usize;

        for record in reader.records() {
            let record = record?;
            let Some(timestamp) = record.get(columns.timestamp).and_then(parse_timestamp) else {
                dropped += 1;
                continue;
            };

            let mut reading = Reading::empty(timestamp);
            for (sensor, index) in columns.sensors {
                reading.set_value(sensor, record.get(index).and_then(parse_value));
            }
            readings.push(reading);
        }

        if dropped > 0 {
            tracing::warn!(dropped, "Dropped rows with unparseable timestamps");
        }
        tracing::debug!(rows = readings.len(), path = %self.path.display(), "Read record store");

        Ok(readings)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
