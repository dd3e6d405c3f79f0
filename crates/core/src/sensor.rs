//! Sensor identities and the record store column names derived from them.

use serde::{Deserialize, Serialize};

/// Column holding the ingestion timestamp.
pub const COLUMN_TIMESTAMP: &str = "Timestamp";

/// Record store header, in on-disk column order.
pub const STORE_HEADER: [&str; 4] = ["Temperature", "Humidity", "Sound", COLUMN_TIMESTAMP];

/// One of the three environmental sensors.
///
/// Declaration order is the canonical reporting order; `Ord` follows it so
/// ordered maps keyed by `Sensor` iterate temperature, humidity, sound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sensor {
    Temperature,
    Humidity,
    Sound,
}

impl Sensor {
    pub const ALL: [Sensor; 3] = [Sensor::Temperature, Sensor::Humidity, Sensor::Sound];

    /// Record store column name (`Temperature`, `Humidity`, `Sound`).
    pub fn column(self) -> &'static str {
        match self {
            Self::Temperature => "Temperature",
            Self::Humidity => "Humidity",
            Self::Sound => "Sound",
        }
    }

    /// Lowercase key used in JSON payloads.
    pub fn key(self) -> &'static str {
        match self {
            Self::Temperature => "temperature",
            Self::Humidity => "humidity",
            Self::Sound => "sound",
        }
    }
}

impl std::fmt::Display for Sensor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.column())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_header_matches_sensor_columns() {
        let columns: Vec<&str> = Sensor::ALL.iter().map(|s| s.column()).collect();
        assert_eq!(&STORE_HEADER[..3], columns.as_slice());
        assert_eq!(STORE_HEADER[3], "Timestamp");
    }

    #[test]
    fn sensor_serializes_as_lowercase_key() {
        for sensor in Sensor::ALL {
            let json = serde_json::to_string(&sensor).unwrap();
            assert_eq!(json, format!("\"{}\"", sensor.key()));
        }
    }
}
