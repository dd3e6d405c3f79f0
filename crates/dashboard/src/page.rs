//! HTML rendering for the dashboard page.
//!
//! The page is a single self-contained document. Charts are embedded as
//! plotly figure JSON and drawn client-side by plotly.js.

use crate::report::Report;

/// plotly.js bundle loaded by the page.
pub const PLOTLY_JS_URL: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

pub const PAGE_TITLE: &str = "Environment Monitoring Dashboard";

/// Escape text for inclusion in HTML element content or attribute values.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Serialize `value` for a `<script>` block. `</` is escaped so the payload
/// can never close the script element.
fn script_json<T: serde::Serialize>(value: &T) -> Result<String, serde_json::Error> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

/// Render the full dashboard document for `report`.
pub fn render_dashboard(report: &Report) -> Result<String, serde_json::Error> {
    let charts_json = script_json(&report.charts)?;

    let recommendations: String = report
        .recommendations
        .iter()
        .map(|rec| format!("      <li>{}</li>\n", escape_html(rec)))
        .collect();

    let chart_divs: String = report
        .charts
        .iter()
        .map(|chart| format!("    <div id=\"{}\"></div>\n", escape_html(&chart.id)))
        .collect();

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>{title}</title>
  <script src="{plotly}" charset="utf-8"></script>
</head>
<body>
  <h1 style="text-align: center">{title}</h1>
  <div style="margin-bottom: 30px">
    <h2 style="text-align: center; color: green">Overall Environmental Health Score: {score:.2}/100</h2>
    <p style="text-align: center; font-weight: bold">Status: {label}</p>
    <p style="text-align: center; margin-bottom: 20px">{description}</p>
  </div>
  <div style="background-color: #f9f9f9; padding: 10px; border-radius: 5px; border: 1px solid #ccc">
    <h4 style="font-weight: bold">Recommendations</h4>
    <ul>
{recommendations}    </ul>
  </div>
  <div>
{chart_divs}  </div>
  <script>
    const charts = {charts_json};
    for (const chart of charts) {{
      Plotly.newPlot(chart.id, chart.figure.data, chart.figure.layout, {{responsive: true}});
    }}
  </script>
</body>
</html>
"#,
        title = PAGE_TITLE,
        plotly = PLOTLY_JS_URL,
        score = report.overall_score,
        label = escape_html(report.status.label),
        description = escape_html(report.status.description),
    ))
}

/// Minimal page shown when the report cannot be built.
pub fn render_error_page(message: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>{title}</title>
</head>
<body>
  <h1 style="text-align: center">{title}</h1>
  <p style="text-align: center; color: red">{message}</p>
</body>
</html>
"#,
        title = PAGE_TITLE,
        message = escape_html(message),
    )
}
