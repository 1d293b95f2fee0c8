// File: crates/chart-core/src/chart.rs
// Summary: Chart struct and SVG rendering pipeline.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ChartResult, ReportError};
use crate::geometry::Point;
use crate::scale::{map_points, DegeneratePolicy};
use crate::series::{Series, ValueRange};
use crate::svg::emit_svg;
use crate::theme::Theme;
use crate::types::CanvasGeometry;

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    pub canvas: CanvasGeometry,
    pub theme: Theme,
    pub degenerate: DegeneratePolicy,
}

/// One signal's chart: its series, a title and the polyline stroke color.
#[derive(Clone, Debug)]
pub struct Chart {
    pub series: Series,
    pub title: String,
    pub color: String,
}

impl Chart {
    pub fn new(series: Series, title: impl Into<String>, color: impl Into<String>) -> Self {
        Self { series, title: title.into(), color: color.into() }
    }

    /// Normalize and map the series to pixel coordinates.
    pub fn layout(&self, opts: &RenderOptions) -> ChartResult<(ValueRange, Vec<Point>)> {
        let values = self.series.value_range()?;
        let points = map_points(&self.series, &opts.canvas, &values, opts.degenerate)?;
        Ok((values, points))
    }

    /// Render the chart to a standalone SVG document.
    pub fn render_svg(&self, opts: &RenderOptions) -> ChartResult<String> {
        let (values, points) = self.layout(opts)?;
        tracing::debug!(
            title = %self.title,
            points = points.len(),
            min = values.min,
            max = values.max,
            "rendered chart"
        );
        emit_svg(&points, &self.color, &self.title, &opts.canvas, &opts.theme)
    }

    /// Render the chart and write it to `path`, creating parent directories.
    pub fn render_to_svg(&self, opts: &RenderOptions, path: impl AsRef<Path>) -> Result<(), ReportError> {
        let path = path.as_ref();
        let svg = self.render_svg(opts)?;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .map_err(|source| ReportError::Io { path: parent.to_path_buf(), source })?;
        }
        std::fs::write(path, svg).map_err(|source| ReportError::Io { path: path.to_path_buf(), source })?;
        Ok(())
    }
}
