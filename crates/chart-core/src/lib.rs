// File: crates/chart-core/src/lib.rs
// Summary: Core library entry point; exports the chart pipeline and report export API.

pub mod chart;
pub mod config;
pub mod downsample;
pub mod error;
pub mod geometry;
pub mod provider;
pub mod report;
pub mod scale;
pub mod series;
pub mod sink;
pub mod svg;
pub mod theme;
pub mod types;

pub use chart::{Chart, RenderOptions};
pub use config::ReportConfig;
pub use downsample::lttb_indices;
pub use error::{ChartError, ChartResult, ConfigError, ReportError};
pub use geometry::{PlotRect, Point};
pub use provider::{LabelRange, SeriesProvider, Signal, StaticProvider};
pub use report::{ReportBuilder, ReportFile, ReportFormat, VitalReadings};
pub use scale::{map_points, DegeneratePolicy};
pub use series::{Sample, Series, ValueRange};
pub use sink::{export, FileSink, MemorySink, ReportSink};
pub use theme::Theme;
pub use types::{CanvasGeometry, Insets};
