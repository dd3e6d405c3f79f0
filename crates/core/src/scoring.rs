//! Environmental health score: weighted composite of per-sensor scores.
//!
//! Pure logic. The caller loads readings from the record store and passes
//! them in together with the threshold config.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::reading::Reading;
use crate::sensor::Sensor;
use crate::thresholds::{SensorThreshold, ThresholdConfig};

// ---------------------------------------------------------------------------
// Status breakpoints
// ---------------------------------------------------------------------------

/// Overall score at or above which the status is "Excellent".
pub const EXCELLENT_SCORE: f64 = 80.0;
/// Overall score at or above which the status is "Good" (below Excellent).
pub const GOOD_SCORE: f64 = 60.0;
/// Overall score at or above which the status is "Fair" (below Good).
pub const FAIR_SCORE: f64 = 40.0;

// ---------------------------------------------------------------------------
// Health status
// ---------------------------------------------------------------------------

/// Qualitative label derived from the overall score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HealthStatus {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl HealthStatus {
    /// Derive the status from an overall score. Each breakpoint is inclusive.
    pub fn from_score(score: f64) -> Self {
        if score >= EXCELLENT_SCORE {
            Self::Excellent
        } else if score >= GOOD_SCORE {
            Self::Good
        } else if score >= FAIR_SCORE {
            Self::Fair
        } else {
            Self::Poor
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Fair => "Fair",
            Self::Poor => "Poor",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Excellent => "The environment is very healthy and comfortable.",
            Self::Good => {
                "The environment is generally comfortable with some areas for improvement."
            }
            Self::Fair => "Several environmental factors need attention.",
            Self::Poor => "Immediate attention required for multiple environmental factors.",
        }
    }
}

/// Status for an overall score.
pub fn get_health_status(score: f64) -> HealthStatus {
    HealthStatus::from_score(score)
}

// ---------------------------------------------------------------------------
// Score computation
// ---------------------------------------------------------------------------

/// Result of scoring a set of readings.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HealthScore {
    /// Weighted sum of the per-sensor scores, in `[0, 100]`.
    pub overall_score: f64,
    /// Mean per-reading score for every configured sensor, in `[0, 100]`.
    pub sensor_scores: BTreeMap<Sensor, f64>,
    pub health_status: HealthStatus,
}

impl HealthScore {
    /// Score for `sensor`, treating an unscored sensor as 0.
    pub fn sensor_score(&self, sensor: Sensor) -> f64 {
        self.sensor_scores.get(&sensor).copied().unwrap_or(0.0)
    }
}

/// Mean per-reading score for one sensor.
///
/// Only readings carrying a value for the sensor participate. Returns 0 when
/// no reading has a value.
pub fn sensor_score(readings: &[Reading], threshold: &SensorThreshold) -> f64 {
    let (sum, count) = readings
        .iter()
        .filter_map(|r| r.value(threshold.sensor))
        .fold((0.0, 0usize), |(sum, count), value| {
            (sum + threshold.bound.score(value), count + 1)
        });

    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}

/// Compute the composite health score for `readings`.
///
/// Sensors are visited in config order. A sensor with no values scores 0 and
/// contributes nothing to the overall score; its weight is not redistributed.
pub fn calculate_environmental_health_score(
    readings: &[Reading],
    config: &ThresholdConfig,
) -> HealthScore {
    let mut sensor_scores = BTreeMap::new();
    let mut overall_score = 0.0;

    for threshold in config.entries() {
        let score = sensor_score(readings, threshold);
        sensor_scores.insert(threshold.sensor, score);
        overall_score += score * threshold.weight;
    }

    HealthScore {
        overall_score,
        sensor_scores,
        health_status: get_health_status(overall_score),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
