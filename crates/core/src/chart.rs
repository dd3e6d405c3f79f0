//! Serializable chart specifications.
//!
//! The types mirror the subset of the plotly.js figure schema the dashboard
//! uses (`{"data": [...], "layout": {...}}`), so a [`Figure`] serialized with
//! `serde_json` can be handed directly to `Plotly.newPlot`.

use serde::Serialize;

use crate::types::{format_timestamp, Timestamp};

/// A value on the x axis: either a timestamp or a plain number.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum AxisValue {
    Time(String),
    Number(f64),
}

impl AxisValue {
    pub fn time(ts: &Timestamp) -> Self {
        Self::Time(format_timestamp(ts))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash: Option<String>,
}

impl Line {
    pub fn solid(color: &str) -> Self {
        Self {
            color: Some(color.to_string()),
            dash: None,
        }
    }

    pub fn dashed(color: &str) -> Self {
        Self {
            color: Some(color.to_string()),
            dash: Some("dash".to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub size: u32,
    pub opacity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Font {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
    pub color: String,
}

/// Trace rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    Lines,
    Markers,
}

/// A scatter trace (line or markers).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trace {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub name: String,
    pub x: Vec<AxisValue>,
    /// Missing samples serialize as `null` so plotly leaves a gap.
    pub y: Vec<Option<f64>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<Line>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hoverinfo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hovertemplate: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showlegend: Option<bool>,
}

impl Trace {
    pub fn scatter(name: impl Into<String>, x: Vec<AxisValue>, y: Vec<Option<f64>>) -> Self {
        Self {
            kind: "scatter",
            name: name.into(),
            x,
            y,
            mode: None,
            line: None,
            marker: None,
            hoverinfo: None,
            hovertemplate: None,
            showlegend: None,
        }
    }
}

/// A straight line drawn in data coordinates.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Shape {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub x0: AxisValue,
    pub x1: AxisValue,
    pub y0: f64,
    pub y1: f64,
    pub line: Line,
}

impl Shape {
    pub fn line(x0: AxisValue, x1: AxisValue, y0: f64, y1: f64, line: Line) -> Self {
        Self {
            kind: "line",
            x0,
            x1,
            y0,
            y1,
            line,
        }
    }
}

/// A text label anchored at a data point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Annotation {
    pub x: AxisValue,
    pub y: f64,
    pub text: String,
    pub showarrow: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrowhead: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrowsize: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrowwidth: Option<f64>,
    /// Arrow tail offset in pixels, relative to the anchor.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ax: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ay: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font: Option<Font>,
}

impl Annotation {
    pub fn label(x: AxisValue, y: f64, text: impl Into<String>) -> Self {
        Self {
            x,
            y,
            text: text.into(),
            showarrow: false,
            arrowhead: None,
            arrowsize: None,
            arrowwidth: None,
            ax: None,
            ay: None,
            font: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
}

impl Title {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Axis {
    pub title: Title,
}

/// How hover labels are grouped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum HoverMode {
    #[serde(rename = "x unified")]
    XUnified,
    #[serde(rename = "closest")]
    Closest,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub title: Title,
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub hovermode: HoverMode,
    pub showlegend: bool,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub shapes: Vec<Shape>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<Annotation>,
}

impl Layout {
    pub fn new(title: &str, x_title: &str, y_title: &str, hovermode: HoverMode) -> Self {
        Self {
            title: Title::new(title),
            xaxis: Axis {
                title: Title::new(x_title),
            },
            yaxis: Axis {
                title: Title::new(y_title),
            },
            hovermode,
            showlegend: true,
            shapes: Vec::new(),
            annotations: Vec::new(),
        }
    }
}

/// A complete chart: traces plus layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}
