// File: crates/chart-core/src/provider.rs
// Summary: Data-provider interface for signal series, plus the built-in dashboard sample data.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};
use crate::series::Series;
use crate::theme::{ECG_COLOR, EMG_COLOR};

/// A monitored signal and the stroke color its chart uses.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signal {
    pub name: String,
    pub color: String,
}

impl Signal {
    pub fn new(name: impl Into<String>, color: impl Into<String>) -> Self {
        Self { name: name.into(), color: color.into() }
    }

    pub fn ecg() -> Self { Self::new("ECG", ECG_COLOR) }
    pub fn emg() -> Self { Self::new("EMG", EMG_COLOR) }
}

/// Inclusive label window. Labels are zero-padded clock ticks ("00:03"), so string order is time order.
/// `None` on either side leaves that side open.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LabelRange {
    pub start: Option<String>,
    pub end: Option<String>,
}

impl LabelRange {
    pub fn all() -> Self { Self::default() }

    pub fn new(start: Option<String>, end: Option<String>) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, label: &str) -> bool {
        self.start.as_deref().map_or(true, |s| label >= s) && self.end.as_deref().map_or(true, |e| label <= e)
    }

    /// Keep only samples whose label falls inside the window, preserving order.
    pub fn apply(&self, series: &Series) -> Series {
        Series {
            name: series.name.clone(),
            samples: series.samples.iter().filter(|s| self.contains(&s.label)).cloned().collect(),
        }
    }
}

/// Source of signal series. Implementations decide where samples come from.
pub trait SeriesProvider {
    fn fetch_series(&self, signal: &str, range: &LabelRange) -> ChartResult<Series>;
}

/// In-memory provider keyed by signal name (case-insensitive lookup).
#[derive(Clone, Debug, Default)]
pub struct StaticProvider {
    series: BTreeMap<String, Series>,
}

impl StaticProvider {
    pub fn new() -> Self { Self::default() }

    pub fn insert(&mut self, series: Series) {
        self.series.insert(series.name.to_ascii_uppercase(), series);
    }

    pub fn with_series(mut self, series: Series) -> Self {
        self.insert(series);
        self
    }

    /// The ECG and EMG traces shown on the weekly records page.
    pub fn dashboard_samples() -> Self {
        Self::new().with_series(sample_ecg()).with_series(sample_emg())
    }

    pub fn signals(&self) -> impl Iterator<Item = &str> {
        self.series.values().map(|s| s.name.as_str())
    }
}

impl SeriesProvider for StaticProvider {
    fn fetch_series(&self, signal: &str, range: &LabelRange) -> ChartResult<Series> {
        let series = self
            .series
            .get(&signal.to_ascii_uppercase())
            .ok_or_else(|| ChartError::InvalidInput(format!("unknown signal '{signal}'")))?;
        Ok(range.apply(series))
    }
}

pub fn sample_ecg() -> Series {
    Series::from_pairs(
        "ECG",
        [
            ("00:00", 0.0), ("00:01", 0.5), ("00:02", 1.2), ("00:03", 0.8),
            ("00:04", -0.2), ("00:05", -0.8), ("00:06", 0.1), ("00:07", 0.7),
            ("00:08", 1.1), ("00:09", 0.6), ("00:10", 0.0),
        ],
    )
}

pub fn sample_emg() -> Series {
    Series::from_pairs(
        "EMG",
        [
            ("00:00", 0.1), ("00:01", 0.3), ("00:02", 0.8), ("00:03", 1.2),
            ("00:04", 0.9), ("00:05", 0.4), ("00:06", 0.2), ("00:07", 0.6),
            ("00:08", 1.0), ("00:09", 0.7), ("00:10", 0.3),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_range_is_inclusive() {
        let r = LabelRange::new(Some("00:02".into()), Some("00:04".into()));
        let s = r.apply(&sample_ecg());
        let labels: Vec<_> = s.samples.iter().map(|s| s.label.as_str()).collect();
        assert_eq!(labels, ["00:02", "00:03", "00:04"]);
    }

    #[test]
    fn lookup_ignores_case() {
        let p = StaticProvider::dashboard_samples();
        assert_eq!(p.fetch_series("emg", &LabelRange::all()).unwrap().len(), 11);
        assert!(matches!(p.fetch_series("EEG", &LabelRange::all()), Err(ChartError::InvalidInput(_))));
    }
}
