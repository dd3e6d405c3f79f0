//! Chart builders for the dashboard.
//!
//! Two kinds of chart are produced: a per-sensor value-over-time chart with
//! the comfort bound overlaid, and a per-day humidity vs temperature scatter
//! with a least-squares line for each day that has enough spread.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::chart::{
    Annotation, AxisValue, Figure, Font, HoverMode, Layout, Line, Marker, Mode, Shape, Trace,
};
use crate::reading::Reading;
use crate::regression::linear_regression;
use crate::sensor::Sensor;
use crate::thresholds::{Bound, ThresholdConfig};

/// Colour of the raw sensor trace.
pub const DATA_COLOR: &str = "#2ecc71";
/// Colour of the comfort bound line and its label.
pub const THRESHOLD_COLOR: &str = "red";
/// Colour of the per-day regression lines.
pub const FIT_COLOR: &str = "black";

pub const CORRELATION_TITLE: &str = "Humidity vs Temperature with Correlation Lines";

// ---------------------------------------------------------------------------
// Threshold-over-time chart
// ---------------------------------------------------------------------------

/// Plot `sensor` against time, in store order.
///
/// Sensors with a [`Bound::Comfort`] get a dashed horizontal line at the bound
/// spanning the time range, labelled at the middle reading. Warning-bound
/// sensors are plotted without an overlay.
pub fn create_threshold_figure(
    readings: &[Reading],
    sensor: Sensor,
    config: &ThresholdConfig,
) -> Figure {
    let unit = config.unit(sensor);

    let x = readings
        .iter()
        .map(|r| AxisValue::time(&r.timestamp))
        .collect();
    let y = readings.iter().map(|r| r.value(sensor)).collect();

    let mut trace = Trace::scatter(sensor.column(), x, y);
    trace.line = Some(Line::solid(DATA_COLOR));
    trace.hoverinfo = Some("text".to_string());
    trace.hovertemplate = Some(format!("%{{x}}<br>%{{y:.2f}} {unit}<extra></extra>"));

    let mut layout = Layout::new(
        &format!("{sensor} Over Time"),
        "Time",
        &format!("{sensor} ({unit})"),
        HoverMode::XUnified,
    );

    let comfort = config.get(sensor).and_then(|t| match t.bound {
        Bound::Comfort(max) => Some(max),
        Bound::Warning(_) => None,
    });
    let first = readings.iter().map(|r| r.timestamp).min();
    let last = readings.iter().map(|r| r.timestamp).max();

    if let (Some(max), Some(first), Some(last)) = (comfort, first, last) {
        layout.shapes.push(Shape::line(
            AxisValue::time(&first),
            AxisValue::time(&last),
            max,
            max,
            Line::dashed(THRESHOLD_COLOR),
        ));

        let middle = &readings[readings.len() / 2];
        let mut label = Annotation::label(
            AxisValue::time(&middle.timestamp),
            max,
            format!("Max Comfort ({max}{unit})"),
        );
        label.font = Some(Font {
            size: None,
            color: THRESHOLD_COLOR.to_string(),
        });
        layout.annotations.push(label);
    }

    Figure {
        data: vec![trace],
        layout,
    }
}

// ---------------------------------------------------------------------------
// Humidity vs temperature chart
// ---------------------------------------------------------------------------

/// Humidity/temperature pairs per calendar day, days ascending.
///
/// Readings lacking either value are left out of the pairs but still
/// register their day.
pub fn group_pairs_by_day(readings: &[Reading]) -> BTreeMap<NaiveDate, Vec<(f64, f64)>> {
    let mut days: BTreeMap<NaiveDate, Vec<(f64, f64)>> = BTreeMap::new();
    for reading in readings {
        let pairs = days.entry(reading.date()).or_default();
        if let (Some(h), Some(t)) = (reading.humidity, reading.temperature) {
            pairs.push((h, t));
        }
    }
    days
}

/// Scatter humidity (x) against temperature (y), one trace per day.
///
/// Each day with at least two distinct humidity values also gets a dashed
/// least-squares line from its minimum to maximum humidity and an equation
/// label at the line's right end.
pub fn create_humidity_vs_temperature_figure(
    readings: &[Reading],
    config: &ThresholdConfig,
) -> Figure {
    let mut data = Vec::new();
    let mut layout = Layout::new(
        CORRELATION_TITLE,
        &format!("Humidity ({})", config.unit(Sensor::Humidity)),
        &format!("Temperature ({})", config.unit(Sensor::Temperature)),
        HoverMode::Closest,
    );

    for (date, pairs) in group_pairs_by_day(readings) {
        let mut points = Trace::scatter(
            date.to_string(),
            pairs.iter().map(|&(h, _)| AxisValue::Number(h)).collect(),
            pairs.iter().map(|&(_, t)| Some(t)).collect(),
        );
        points.mode = Some(Mode::Markers);
        points.marker = Some(Marker {
            size: 8,
            opacity: 0.7,
        });
        data.push(points);

        let Some(fit) = linear_regression(&pairs) else {
            continue;
        };

        let min_h = pairs.iter().map(|&(h, _)| h).fold(f64::INFINITY, f64::min);
        let max_h = pairs
            .iter()
            .map(|&(h, _)| h)
            .fold(f64::NEG_INFINITY, f64::max);

        let mut line = Trace::scatter(
            format!("Correlation Line - {date}"),
            vec![AxisValue::Number(min_h), AxisValue::Number(max_h)],
            vec![Some(fit.predict(min_h)), Some(fit.predict(max_h))],
        );
        line.mode = Some(Mode::Lines);
        line.line = Some(Line::dashed(FIT_COLOR));
        line.showlegend = Some(false);
        data.push(line);

        layout.annotations.push(Annotation {
            x: AxisValue::Number(max_h),
            y: fit.predict(max_h),
            text: fit.equation(),
            showarrow: true,
            arrowhead: Some(2),
            arrowsize: Some(1.0),
            arrowwidth: Some(1.0),
            ax: Some(-50.0),
            ay: Some(0.0),
            font: Some(Font {
                size: Some(10),
                color: FIT_COLOR.to_string(),
            }),
        });
    }

    Figure { data, layout }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
