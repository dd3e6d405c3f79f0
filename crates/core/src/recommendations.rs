//! Fixed advisory strings derived from a [`HealthScore`].

use crate::scoring::HealthScore;
use crate::sensor::Sensor;

/// Any score below this triggers the corresponding advisory.
pub const RECOMMENDATION_THRESHOLD: f64 = 60.0;

pub const VENTILATION_ADVICE: &str = "Consider improving ventilation to enhance air quality.";
pub const TEMPERATURE_ADVICE: &str =
    "Adjust the heating/cooling system to maintain a comfortable temperature.";
pub const HUMIDITY_ADVICE: &str = "Use a dehumidifier or humidifier to maintain optimal levels.";
pub const SOUND_ADVICE: &str = "Implement noise reduction measures.";

/// Advisory for a sensor whose score is low.
pub fn sensor_advice(sensor: Sensor) -> &'static str {
    match sensor {
        Sensor::Temperature => TEMPERATURE_ADVICE,
        Sensor::Humidity => HUMIDITY_ADVICE,
        Sensor::Sound => SOUND_ADVICE,
    }
}

/// Build the recommendation list for a health score.
///
/// Order is fixed: overall, then temperature, humidity, sound. A sensor
/// missing from the score counts as 0 and always yields its advisory.
pub fn generate_recommendations(health: &HealthScore) -> Vec<&'static str> {
    let mut recommendations = Vec::new();

    if health.overall_score < RECOMMENDATION_THRESHOLD {
        recommendations.push(VENTILATION_ADVICE);
    }
    for sensor in Sensor::ALL {
        if health.sensor_score(sensor) < RECOMMENDATION_THRESHOLD {
            recommendations.push(sensor_advice(sensor));
        }
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;
    use crate::scoring::get_health_status;

    fn health(overall: f64, scores: &[(Sensor, f64)]) -> HealthScore {
        HealthScore {
            overall_score: overall,
            sensor_scores: scores.iter().copied().collect::<BTreeMap<_, _>>(),
            health_status: get_health_status(overall),
        }
    }

    #[test]
    fn healthy_environment_has_no_recommendations() {
        let h = health(
            90.0,
            &[
                (Sensor::Temperature, 90.0),
                (Sensor::Humidity, 60.0),
                (Sensor::Sound, 100.0),
            ],
        );
        assert!(generate_recommendations(&h).is_empty());
    }

    #[test]
    fn all_low_yields_every_advisory_in_fixed_order() {
        let h = health(
            10.0,
            &[
                (Sensor::Sound, 5.0),
                (Sensor::Humidity, 5.0),
                (Sensor::Temperature, 5.0),
            ],
        );
        assert_eq!(
            generate_recommendations(&h),
            vec![VENTILATION_ADVICE, TEMPERATURE_ADVICE, HUMIDITY_ADVICE, SOUND_ADVICE]
        );
    }

    #[test]
    fn low_sensor_with_good_overall() {
        let h = health(
            70.0,
            &[
                (Sensor::Temperature, 100.0),
                (Sensor::Humidity, 100.0),
                (Sensor::Sound, 59.9),
            ],
        );
        assert_eq!(generate_recommendations(&h), vec![SOUND_ADVICE]);
    }

    #[test]
    fn missing_sensor_counts_as_zero() {
        let h = health(
            65.0,
            &[(Sensor::Temperature, 100.0), (Sensor::Sound, 100.0)],
        );
        assert_eq!(generate_recommendations(&h), vec![HUMIDITY_ADVICE]);
    }
}
