//! The dashboard model: score, status, recommendations and charts.
//!
//! [`build_report`] is the whole analysis pipeline after loading:
//! score → recommend → chart. It is pure; the handlers load readings and
//! render the result.

use std::collections::BTreeMap;

use envmon_core::chart::Figure;
use envmon_core::figures::{create_humidity_vs_temperature_figure, create_threshold_figure};
use envmon_core::reading::Reading;
use envmon_core::recommendations::generate_recommendations;
use envmon_core::scoring::{calculate_environmental_health_score, HealthStatus};
use envmon_core::sensor::Sensor;
use envmon_core::thresholds::ThresholdConfig;
use serde::Serialize;

/// DOM id of the correlation chart.
pub const CORRELATION_CHART_ID: &str = "humidity-temperature-chart";

/// Status label and description, as shown under the score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusSummary {
    pub label: &'static str,
    pub description: &'static str,
}

impl From<HealthStatus> for StatusSummary {
    fn from(status: HealthStatus) -> Self {
        Self {
            label: status.label(),
            description: status.description(),
        }
    }
}

/// A chart together with the element id it is drawn into.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub id: String,
    pub figure: Figure,
}

/// Everything the dashboard page displays.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub overall_score: f64,
    pub sensor_scores: BTreeMap<Sensor, f64>,
    pub status: StatusSummary,
    pub recommendations: Vec<&'static str>,
    /// Temperature, humidity and sound over time, then humidity vs temperature.
    pub charts: Vec<Chart>,
    /// Number of readings the report was computed from.
    pub reading_count: usize,
}

/// DOM id of a sensor's over-time chart.
pub fn sensor_chart_id(sensor: Sensor) -> String {
    format!("{}-chart", sensor.key())
}

/// Run the analysis pipeline over cleaned readings.
pub fn build_report(readings: &[Reading], thresholds: &ThresholdConfig) -> Report {
    let health = calculate_environmental_health_score(readings, thresholds);
    let recommendations = generate_recommendations(&health);

    let mut charts: Vec<Chart> = Sensor::ALL
        .into_iter()
        .map(|sensor| Chart {
            id: sensor_chart_id(sensor),
            figure: create_threshold_figure(readings, sensor, thresholds),
        })
        .collect();
    charts.push(Chart {
        id: CORRELATION_CHART_ID.to_string(),
        figure: create_humidity_vs_temperature_figure(readings, thresholds),
    });

    tracing::debug!(
        overall_score = health.overall_score,
        status = health.health_status.label(),
        recommendations = recommendations.len(),
        "Built dashboard report",
    );

    Report {
        overall_score: health.overall_score,
        sensor_scores: health.sensor_scores,
        status: health.health_status.into(),
        recommendations,
        charts,
        reading_count: readings.len(),
    }
}

#[cfg(test)]
mod tests {
    use envmon_core::recommendations::{HUMIDITY_ADVICE, SOUND_ADVICE};
    use envmon_core::types::{Timestamp, TIMESTAMP_FORMAT};

    use super::*;

    fn reading(ts: &str, t: f64, h: f64, s: f64) -> Reading {
        Reading {
            timestamp: Timestamp::parse_from_str(ts, TIMESTAMP_FORMAT).unwrap(),
            temperature: Some(t),
            humidity: Some(h),
            sound: Some(s),
        }
    }

    #[test]
    fn report_combines_score_recommendations_and_charts() {
        let readings = vec![
            reading("2024-06-01 09:00:00", 25.6, 20.0, 85.0),
            reading("2024-06-01 12:00:00", 25.6, 20.0, 85.0),
        ];
        let report = build_report(&readings, &ThresholdConfig::default());

        // temperature 100 * 0.4 + humidity 50 * 0.3 + sound 0 * 0.3
        assert!((report.overall_score - 55.0).abs() < 1e-9);
        assert_eq!(report.status.label, "Fair");
        assert_eq!(report.reading_count, 2);
        assert_eq!(
            report.recommendations,
            vec![
                envmon_core::recommendations::VENTILATION_ADVICE,
                HUMIDITY_ADVICE,
                SOUND_ADVICE
            ]
        );

        let ids: Vec<&str> = report.charts.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(
            ids,
            vec![
                "temperature-chart",
                "humidity-chart",
                "sound-chart",
                CORRELATION_CHART_ID
            ]
        );
    }

    #[test]
    fn report_serializes_sensor_scores_by_key() {
        let readings = vec![reading("2024-06-01 09:00:00", 12.8, 40.0, 42.5)];
        let report = build_report(&readings, &ThresholdConfig::default());
        let json = serde_json::to_value(report).unwrap();

        assert_eq!(json["sensor_scores"]["temperature"], 50.0);
        assert_eq!(json["sensor_scores"]["humidity"], 100.0);
        assert_eq!(json["sensor_scores"]["sound"], 50.0);
        assert_eq!(json["status"]["label"], "Good");
        assert_eq!(json["charts"][0]["figure"]["layout"]["title"]["text"], "Temperature Over Time");
    }
}
