use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::sensor::Sensor;
use crate::types::Timestamp;

/// A single sensor sample as persisted in the record store.
///
/// Every field except the timestamp is optional: sensors may omit any of
/// them and the ingestion endpoint records the gap rather than rejecting it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub timestamp: Timestamp,
    pub temperature: Option<f64>,
    pub humidity: Option<f64>,
    pub sound: Option<f64>,
}

impl Reading {
    /// A reading with no sensor values.
    pub fn empty(timestamp: Timestamp) -> Self {
        Self {
            timestamp,
            temperature: None,
            humidity: None,
            sound: None,
        }
    }

    /// Value recorded for `sensor`, if any.
    pub fn value(&self, sensor: Sensor) -> Option<f64> {
        match sensor {
            Sensor::Temperature => self.temperature,
            Sensor::Humidity => self.humidity,
            Sensor::Sound => self.sound,
        }
    }

    /// Set the value for `sensor`.
    pub fn set_value(&mut self, sensor: Sensor, value: Option<f64>) {
        match sensor {
            Sensor::Temperature => self.temperature = value,
            Sensor::Humidity => self.humidity = value,
            Sensor::Sound => self.sound = value,
        }
    }

    /// Calendar day of the timestamp, used for per-day grouping.
    pub fn date(&self) -> NaiveDate {
        self.timestamp.date()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(s: &str) -> Timestamp {
        Timestamp::parse_from_str(s, crate::types::TIMESTAMP_FORMAT).unwrap()
    }

    #[test]
    fn value_and_set_value_address_the_same_field() {
        let mut reading = Reading::empty(ts("2024-03-01 08:00:00"));
        for (i, sensor) in Sensor::ALL.into_iter().enumerate() {
            assert_eq!(reading.value(sensor), None);
            reading.set_value(sensor, Some(i as f64));
            assert_eq!(reading.value(sensor), Some(i as f64));
        }
        assert_eq!(reading.temperature, Some(0.0));
        assert_eq!(reading.humidity, Some(1.0));
        assert_eq!(reading.sound, Some(2.0));
    }

    #[test]
    fn date_drops_time_of_day() {
        let reading = Reading::empty(ts("2024-03-01 23:59:59"));
        assert_eq!(reading.date(), NaiveDate::from_ymd_opt(2024, 3, 1).unwrap());
    }
}
