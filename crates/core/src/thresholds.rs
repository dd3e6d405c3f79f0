//! Per-sensor bounds, units and score weights.
//!
//! A [`ThresholdConfig`] is built once at startup and passed explicitly to
//! the scoring and chart functions. It is immutable after construction and
//! only obtainable through [`ThresholdConfig::new`], so every instance has
//! already been validated.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::sensor::Sensor;

/// Allowed deviation of the summed weights from 1.0.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Reference level a sensor is scored against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Bound {
    /// Upper comfort bound. The score rises linearly towards 100 as the value
    /// approaches the bound and saturates beyond it.
    Comfort(f64),
    /// Warning level. The score falls linearly to 0 as the value approaches
    /// the level and stays at 0 beyond it.
    Warning(f64),
}

impl Bound {
    /// The raw bound value.
    pub fn value(self) -> f64 {
        match self {
            Self::Comfort(v) | Self::Warning(v) => v,
        }
    }

    /// Score a single reading against this bound, in `[0, 100]`.
    ///
    /// Comfort scoring rewards higher values up to the bound.
    pub fn score(self, value: f64) -> f64 {
        let ratio = match self {
            Self::Comfort(max) => value / max,
            Self::Warning(level) => (level - value) / level,
        };
        100.0 * ratio.clamp(0.0, 1.0)
    }
}

/// Threshold entry for one sensor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorThreshold {
    pub sensor: Sensor,
    pub bound: Bound,
    /// Display unit (`°C`, `%`, `dB`).
    pub unit: String,
    /// Contribution of this sensor to the overall score.
    pub weight: f64,
}

impl SensorThreshold {
    pub fn new(sensor: Sensor, bound: Bound, unit: impl Into<String>, weight: f64) -> Self {
        Self {
            sensor,
            bound,
            unit: unit.into(),
            weight,
        }
    }
}

/// Ordered, validated set of sensor thresholds.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ThresholdConfig {
    entries: Vec<SensorThreshold>,
}

impl ThresholdConfig {
    /// Validate and build a config.
    ///
    /// Rejects duplicate sensors, non-finite or non-positive bounds, negative
    /// or non-finite weights, and weights that do not sum to 1.0.
    pub fn new(entries: Vec<SensorThreshold>) -> Result<Self, CoreError> {
        if entries.is_empty() {
            return Err(CoreError::Validation(
                "threshold config must contain at least one sensor".to_string(),
            ));
        }

        for (i, entry) in entries.iter().enumerate() {
            if entries[..i].iter().any(|e| e.sensor == entry.sensor) {
                return Err(CoreError::Validation(format!(
                    "duplicate threshold for sensor {}",
                    entry.sensor
                )));
            }
            let bound = entry.bound.value();
            if !bound.is_finite() || bound <= 0.0 {
                return Err(CoreError::Validation(format!(
                    "bound for {} must be a positive number, got {bound}",
                    entry.sensor
                )));
            }
            if !entry.weight.is_finite() || entry.weight < 0.0 {
                return Err(CoreError::Validation(format!(
                    "weight for {} must be a non-negative number, got {}",
                    entry.sensor, entry.weight
                )));
            }
        }

        let total: f64 = entries.iter().map(|e| e.weight).sum();
        if (total - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(CoreError::Validation(format!(
                "threshold weights must sum to 1.0, got {total}"
            )));
        }

        Ok(Self { entries })
    }

    /// Parse a JSON array of [`SensorThreshold`] entries and validate it.
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let entries: Vec<SensorThreshold> = serde_json::from_str(json)
            .map_err(|e| CoreError::Validation(format!("invalid threshold config: {e}")))?;
        Self::new(entries)
    }

    /// Entries in configuration order.
    pub fn entries(&self) -> &[SensorThreshold] {
        &self.entries
    }

    /// Threshold for `sensor`, if configured.
    pub fn get(&self, sensor: Sensor) -> Option<&SensorThreshold> {
        self.entries.iter().find(|e| e.sensor == sensor)
    }

    /// Display unit for `sensor`, or an empty string if unconfigured.
    pub fn unit(&self, sensor: Sensor) -> &str {
        self.get(sensor).map(|t| t.unit.as_str()).unwrap_or("")
    }
}

impl Default for ThresholdConfig {
    fn default() -> Self {
        Self {
            entries: vec![
                SensorThreshold::new(Sensor::Temperature, Bound::Comfort(25.6), "°C", 0.4),
                SensorThreshold::new(Sensor::Humidity, Bound::Comfort(40.0), "%", 0.3),
                SensorThreshold::new(Sensor::Sound, Bound::Warning(85.0), "dB", 0.3),
            ],
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
