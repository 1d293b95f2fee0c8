// File: crates/chart-core/src/types.rs
// Summary: Canvas geometry (size + margins) and its validation.

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::geometry::PlotRect;

/// Default canvas width in pixels.
pub const WIDTH: f64 = 400.0;
/// Default canvas height in pixels.
pub const HEIGHT: f64 = 200.0;

/// Screen margins, in pixels.
/// Contract: all fields are finite and non-negative (checked by `CanvasGeometry::validate`).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Insets {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Insets {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self { top, right, bottom, left }
    }
    /// Total horizontal inset (left + right).
    pub fn hsum(&self) -> f64 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub fn vsum(&self) -> f64 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(20.0, 20.0, 40.0, 40.0)
    }
}

/// Fixed pixel dimensions and margins of one chart.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasGeometry {
    pub width: f64,
    pub height: f64,
    pub margin: Insets,
}

impl Default for CanvasGeometry {
    fn default() -> Self {
        Self { width: WIDTH, height: HEIGHT, margin: Insets::default() }
    }
}

impl CanvasGeometry {
    pub fn new(width: f64, height: f64, margin: Insets) -> Self {
        Self { width, height, margin }
    }

    pub fn inner_width(&self) -> f64 { self.width - self.margin.hsum() }
    pub fn inner_height(&self) -> f64 { self.height - self.margin.vsum() }

    /// Check the margin constraints and return the drawable plot rectangle.
    pub fn validate(&self) -> ChartResult<PlotRect> {
        let m = &self.margin;
        let all = [self.width, self.height, m.top, m.right, m.bottom, m.left];
        if all.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(ChartError::InvalidConfiguration(format!(
                "canvas dimensions and margins must be finite and non-negative: {self:?}"
            )));
        }
        if self.inner_width() <= 0.0 {
            return Err(ChartError::InvalidConfiguration(format!(
                "inner width is {} (width {} with left+right margins {})",
                self.inner_width(),
                self.width,
                m.hsum()
            )));
        }
        if self.inner_height() <= 0.0 {
            return Err(ChartError::InvalidConfiguration(format!(
                "inner height is {} (height {} with top+bottom margins {})",
                self.inner_height(),
                self.height,
                m.vsum()
            )));
        }
        Ok(PlotRect::from_ltrb(m.left, m.top, self.width - m.right, self.height - m.bottom))
    }
}
