// File: crates/chart-core/src/scale.rs
// Summary: Index (X) and value (Y) scales mapping samples into the plot rectangle.

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::geometry::{PlotRect, Point};
use crate::series::{Series, ValueRange};
use crate::types::CanvasGeometry;

/// What to do with a series that has one point or a flat value range.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DegeneratePolicy {
    /// Place the affected axis at the center of the plot area.
    #[default]
    Center,
    /// Fail with `ChartError::DegenerateSeries`.
    Reject,
}

/// Horizontal scale: sample index spread linearly across the plot width.
#[derive(Clone, Copy, Debug)]
pub struct IndexScale {
    left_px: f64,
    width_px: f64,
    count: usize,
}

impl IndexScale {
    pub fn new(rect: &PlotRect, count: usize) -> Self {
        Self { left_px: rect.left, width_px: rect.width(), count }
    }

    #[inline]
    pub fn to_px(&self, i: usize) -> f64 {
        if self.count < 2 {
            return self.left_px + self.width_px / 2.0;
        }
        self.left_px + (i as f64 / (self.count - 1) as f64) * self.width_px
    }
}

/// Vertical scale: larger values map to smaller y (screen y grows downward).
#[derive(Clone, Copy, Debug)]
pub struct ValueScale {
    top_px: f64,
    height_px: f64,
    half_max: f64,
    half_span: f64,
}

impl ValueScale {
    // Halves keep `max - min` from overflowing for finite values of opposite sign near f64::MAX.
    pub fn new(rect: &PlotRect, values: &ValueRange) -> Self {
        Self {
            top_px: rect.top,
            height_px: rect.height(),
            half_max: values.max / 2.0,
            half_span: values.half_span(),
        }
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f64 {
        if self.half_span == 0.0 {
            return self.top_px + self.height_px / 2.0;
        }
        self.top_px + ((self.half_max - v / 2.0) / self.half_span) * self.height_px
    }
}

/// Map every sample to its pixel position, in input order.
pub fn map_points(
    series: &Series,
    canvas: &CanvasGeometry,
    values: &ValueRange,
    policy: DegeneratePolicy,
) -> ChartResult<Vec<Point>> {
    let rect = canvas.validate()?;
    if series.is_empty() {
        return Err(ChartError::InvalidInput(format!("series '{}' is empty", series.name)));
    }
    if policy == DegeneratePolicy::Reject {
        if series.len() < 2 {
            return Err(ChartError::DegenerateSeries {
                name: series.name.clone(),
                reason: "a single sample has no horizontal extent".into(),
            });
        }
        if values.is_flat() {
            return Err(ChartError::DegenerateSeries {
                name: series.name.clone(),
                reason: format!("all {} values equal {}", series.len(), values.max),
            });
        }
    }

    let xs = IndexScale::new(&rect, series.len());
    let ys = ValueScale::new(&rect, values);
    Ok(series
        .samples
        .iter()
        .enumerate()
        .map(|(i, s)| Point::new(xs.to_px(i), ys.to_px(s.value)))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_scale_spans_rect() {
        let rect = PlotRect::from_ltrb(40.0, 20.0, 380.0, 160.0);
        let vs = ValueScale::new(&rect, &ValueRange { min: -1.0, max: 3.0, range: 4.0 });
        assert_eq!(vs.to_px(3.0), 20.0);
        assert_eq!(vs.to_px(-1.0), 160.0);
        assert_eq!(vs.to_px(1.0), 90.0);
    }

    #[test]
    fn single_index_is_centered() {
        let rect = PlotRect::from_ltrb(40.0, 20.0, 380.0, 160.0);
        assert_eq!(IndexScale::new(&rect, 1).to_px(0), 210.0);
    }
}
