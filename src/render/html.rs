//! Self-contained HTML artifact: the chart records are embedded as JSON and
//! drawn by Plotly.js as horizontal bars on a date axis.

use super::colors::ColorMap;
use super::{ChartOptions, ChartRecord};
use crate::errors::{AppError, AppResult};

const TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>__TITLE_TEXT__</title>
<script src="https://cdn.plot.ly/plotly-2.35.2.min.js"></script>
</head>
<body>
<div id="gantt"></div>
<script>
const records = __RECORDS__;
const colors = __COLORS__;

const byResource = {};
records.forEach(function (r) {
    (byResource[r.Resource] = byResource[r.Resource] || []).push(r);
});

const data = Object.keys(byResource).map(function (resource) {
    const rs = byResource[resource];
    return {
        type: 'bar',
        orientation: 'h',
        name: resource,
        marker: { color: colors[resource] },
        y: rs.map(function (r) { return r.Task; }),
        base: rs.map(function (r) { return r.Start; }),
        x: rs.map(function (r) { return new Date(r.Finish) - new Date(r.Start); }),
        text: rs.map(function (r) { return r.Description; }),
        hoverinfo: 'text+name'
    };
});

const layout = {
    title: __TITLE__,
    height: __HEIGHT__,
    barmode: 'overlay',
    showlegend: true,
    xaxis: { type: 'date', title: 'Date', showgrid: true },
    yaxis: { autorange: 'reversed', showgrid: true },
    font: { size: 10 }
};

Plotly.newPlot('gantt', data, layout);
</script>
</body>
</html>
"#;

/// Build the artifact. Pure string-in, string-out; the caller decides where
/// it is persisted.
pub fn render(
    records: &[ChartRecord],
    colors: &ColorMap,
    options: &ChartOptions,
) -> AppResult<String> {
    let records_json =
        serde_json::to_string(records).map_err(|e| AppError::Render(e.to_string()))?;
    let colors_json =
        serde_json::to_string(colors.as_map()).map_err(|e| AppError::Render(e.to_string()))?;
    let title_json =
        serde_json::to_string(&options.title).map_err(|e| AppError::Render(e.to_string()))?;

    Ok(TEMPLATE
        .replace("__TITLE_TEXT__", &escape_html(&options.title))
        .replace("__RECORDS__", &records_json)
        .replace("__COLORS__", &colors_json)
        .replace("__TITLE__", &title_json)
        .replace("__HEIGHT__", &options.height(records.len()).to_string()))
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
