//! Handler for sensor reading ingestion.
//!
//! Payloads are never rejected: absent, `null` or unusable fields are stored
//! as empty values and the client always receives the same acknowledgement.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use envmon_core::reading::Reading;
use envmon_core::sensor::Sensor;
use envmon_core::types::{now_local, Timestamp};
use envmon_store::parse::parse_value;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Acknowledgement message returned for every stored reading.
pub const SUCCESS_MESSAGE: &str = "Data received and saved to CSV";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /data`.
///
/// Fields are kept as raw JSON so that a sensor sending an unexpected type
/// still gets its other fields stored. Only a JSON object is accepted; an
/// array or scalar body is rejected before anything is written.
#[derive(Debug, Default, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct SensorPayload {
    pub temperature: Option<Value>,
    pub humidity: Option<Value>,
    pub sound: Option<Value>,
}

impl From<Map<String, Value>> for SensorPayload {
    fn from(mut fields: Map<String, Value>) -> Self {
        Self {
            temperature: fields.remove(Sensor::Temperature.key()),
            humidity: fields.remove(Sensor::Humidity.key()),
            sound: fields.remove(Sensor::Sound.key()),
        }
    }
}

impl SensorPayload {
    fn field(&self, sensor: Sensor) -> Option<&Value> {
        match sensor {
            Sensor::Temperature => self.temperature.as_ref(),
            Sensor::Humidity => self.humidity.as_ref(),
            Sensor::Sound => self.sound.as_ref(),
        }
    }

    /// Convert into a reading stamped with `timestamp`.
    pub fn into_reading(self, timestamp: Timestamp) -> Reading {
        let mut reading = Reading::empty(timestamp);
        for sensor in Sensor::ALL {
            reading.set_value(sensor, coerce_value(sensor, self.field(sensor)));
        }
        reading
    }
}

/// Interpret a raw JSON field as a sensor value.
///
/// Numbers and numeric strings are kept. Anything else is logged and stored
/// as missing.
pub fn coerce_value(sensor: Sensor, raw: Option<&Value>) -> Option<f64> {
    let value = match raw? {
        Value::Null => return None,
        Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
        Value::String(s) => parse_value(s),
        _ => None,
    };

    if value.is_none() {
        tracing::warn!(sensor = %sensor, raw = ?raw, "Storing non-numeric sensor value as empty");
    }
    value
}

/// Response body for `POST /data`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct IngestResponse {
    pub status: String,
    pub message: String,
}

impl IngestResponse {
    pub fn success() -> Self {
        Self {
            status: "success".to_string(),
            message: SUCCESS_MESSAGE.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /data
///
/// Stamp the payload with the current local time and append it to the
/// record store.
pub async fn receive_data(
    State(state): State<AppState>,
    Json(payload): Json<SensorPayload>,
) -> AppResult<Json<IngestResponse>> {
    tracing::info!(?payload, "Received data");

    let reading = payload.into_reading(now_local());
    let store = Arc::clone(&state.store);

    tokio::task::spawn_blocking(move || store.append(&reading))
        .await
        .map_err(|e| AppError::InternalError(format!("append task failed: {e}")))??;

    Ok(Json(IngestResponse::success()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
