// File: crates/chart-core/src/series.rs
// Summary: Time-labeled sample series and the value-range normalizer.

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// One time-series point. `label` is a display tick such as "00:03".
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub label: String,
    pub value: f64,
}

impl Sample {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self { label: label.into(), value }
    }
}

/// Ordered samples; order is the time axis and is never changed.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub name: String,
    pub samples: Vec<Sample>,
}

impl Series {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), samples: Vec::new() }
    }

    /// Build from `(label, value)` pairs.
    pub fn from_pairs<L: Into<String>>(name: impl Into<String>, pairs: impl IntoIterator<Item = (L, f64)>) -> Self {
        Self {
            name: name.into(),
            samples: pairs.into_iter().map(|(l, v)| Sample::new(l, v)).collect(),
        }
    }

    pub fn push(&mut self, label: impl Into<String>, value: f64) {
        self.samples.push(Sample::new(label, value));
    }

    pub fn len(&self) -> usize { self.samples.len() }
    pub fn is_empty(&self) -> bool { self.samples.is_empty() }
    pub fn last(&self) -> Option<&Sample> { self.samples.last() }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.value)
    }

    /// Compute the vertical scaling range of this series.
    pub fn value_range(&self) -> ChartResult<ValueRange> {
        ValueRange::of(self)
    }

    /// Reduce the series to at most `max_points` samples using LTTB; labels travel with their values.
    pub fn downsample(&self, max_points: usize) -> Self {
        use crate::downsample::lttb_indices;
        if self.samples.len() <= max_points || max_points < 3 {
            return self.clone();
        }
        let keep = lttb_indices(&self.samples.iter().map(|s| s.value).collect::<Vec<_>>(), max_points);
        Series {
            name: self.name.clone(),
            samples: keep.into_iter().map(|i| self.samples[i].clone()).collect(),
        }
    }
}

/// Output of the series normalizer.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
    /// `max - min`; may be infinite when the values straddle zero near f64::MAX. Scales use `half_span`.
    pub range: f64,
}

impl ValueRange {
    /// Min/max over all values. Fails on an empty series or a non-finite value.
    pub fn of(series: &Series) -> ChartResult<Self> {
        if series.is_empty() {
            return Err(ChartError::InvalidInput(format!("series '{}' is empty", series.name)));
        }
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for (i, s) in series.samples.iter().enumerate() {
            if !s.value.is_finite() {
                return Err(ChartError::InvalidInput(format!(
                    "series '{}' has non-finite value {} at index {i} ({})",
                    series.name, s.value, s.label
                )));
            }
            min = min.min(s.value);
            max = max.max(s.value);
        }
        Ok(Self { min, max, range: max - min })
    }

    /// `(max - min) / 2`, computed without overflowing; stays finite for any finite min and max.
    pub fn half_span(&self) -> f64 {
        self.max / 2.0 - self.min / 2.0
    }

    /// A zero range cannot be scaled vertically.
    pub fn is_flat(&self) -> bool {
        self.half_span() == 0.0
    }
}
