// File: crates/chart-core/src/report.rs
// Summary: Weekly health report builder (plain text and HTML variants).

use std::fmt::Write as _;
use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::chart::{Chart, RenderOptions};
use crate::error::{ChartError, ReportError};
use crate::provider::{LabelRange, SeriesProvider, Signal};
use crate::svg::escape_xml;

pub const REPORT_TITLE: &str = "MedConnect Weekly Health Report";
const GENERATED_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    Text,
    #[default]
    Html,
}

impl ReportFormat {
    pub fn file_name(&self) -> &'static str {
        match self {
            ReportFormat::Text => "weekly-health-report.txt",
            ReportFormat::Html => "weekly-health-report.html",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            ReportFormat::Text => "text/plain",
            ReportFormat::Html => "text/html",
        }
    }
}

impl FromStr for ReportFormat {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(ReportFormat::Text),
            "html" | "htm" => Ok(ReportFormat::Html),
            other => Err(ChartError::InvalidConfiguration(format!("unknown report format '{other}'"))),
        }
    }
}

/// Latest vital-sign readings shown in the report preamble. Values are display strings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VitalReadings {
    pub recorded_date: String,
    pub recorded_time: String,
    pub temperature: String,
    pub blood_pressure: String,
    pub spo2: String,
    pub heart_rate: String,
}

impl Default for VitalReadings {
    fn default() -> Self {
        Self {
            recorded_date: "2025-06-05".into(),
            recorded_time: "14:30".into(),
            temperature: "98.6°F".into(),
            blood_pressure: "120/80 mmHg".into(),
            spo2: "98%".into(),
            heart_rate: "72 bpm".into(),
        }
    }
}

impl VitalReadings {
    fn rows(&self) -> [(&'static str, &str); 6] {
        [
            ("Date", self.recorded_date.as_str()),
            ("Time", self.recorded_time.as_str()),
            ("Temperature", self.temperature.as_str()),
            ("Blood Pressure", self.blood_pressure.as_str()),
            ("SpO2", self.spo2.as_str()),
            ("Heart Rate", self.heart_rate.as_str()),
        ]
    }
}

/// A finished report: a named byte buffer with its MIME type.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReportFile {
    pub file_name: String,
    pub mime_type: &'static str,
    pub bytes: Vec<u8>,
}

/// Per-signal numbers for the text report.
#[derive(Clone, Debug, PartialEq)]
pub struct SignalSummary {
    pub name: String,
    pub points: usize,
    pub min: f64,
    pub max: f64,
    pub latest_label: String,
    pub latest_value: f64,
}

/// Rendered material for one signal.
struct SignalSection {
    summary: SignalSummary,
    svg: String,
}

pub struct ReportBuilder {
    opts: RenderOptions,
    vitals: VitalReadings,
    signals: Vec<Signal>,
    range: LabelRange,
    max_points: Option<usize>,
}

impl ReportBuilder {
    pub fn new(opts: RenderOptions) -> Self {
        Self {
            opts,
            vitals: VitalReadings::default(),
            signals: vec![Signal::ecg(), Signal::emg()],
            range: LabelRange::all(),
            max_points: None,
        }
    }

    pub fn vitals(mut self, vitals: VitalReadings) -> Self {
        self.vitals = vitals;
        self
    }

    pub fn signals(mut self, signals: Vec<Signal>) -> Self {
        self.signals = signals;
        self
    }

    pub fn range(mut self, range: LabelRange) -> Self {
        self.range = range;
        self
    }

    /// Downsample series longer than `max` before charting.
    pub fn max_points(mut self, max: Option<usize>) -> Self {
        self.max_points = max;
        self
    }

    /// Fetch every signal, chart it and assemble the report in `format`.
    pub fn build(
        &self,
        provider: &dyn SeriesProvider,
        format: ReportFormat,
        generated_at: NaiveDateTime,
    ) -> Result<ReportFile, ReportError> {
        if self.signals.is_empty() {
            return Err(ReportError::NoSignals);
        }

        let mut sections = Vec::with_capacity(self.signals.len());
        for signal in &self.signals {
            let mut series = provider.fetch_series(&signal.name, &self.range)?;
            if let Some(max) = self.max_points {
                if series.len() > max {
                    tracing::debug!(signal = %signal.name, from = series.len(), to = max, "downsampling series");
                    series = series.downsample(max);
                }
            }
            let chart = Chart::new(series, format!("{} Data", signal.name), signal.color.clone());
            let svg = chart.render_svg(&self.opts)?;
            let values = chart.series.value_range()?;
            let latest = chart
                .series
                .last()
                .ok_or_else(|| ChartError::InvalidInput(format!("series '{}' is empty", signal.name)))?;
            sections.push(SignalSection {
                summary: SignalSummary {
                    name: signal.name.clone(),
                    points: chart.series.len(),
                    min: values.min,
                    max: values.max,
                    latest_label: latest.label.clone(),
                    latest_value: latest.value,
                },
                svg,
            });
        }

        let generated = generated_at.format(GENERATED_FORMAT).to_string();
        let body = match format {
            ReportFormat::Text => self.text_body(&generated, &sections),
            ReportFormat::Html => self.html_body(&generated, &sections),
        };
        tracing::info!(format = ?format, signals = sections.len(), bytes = body.len(), "built report");

        Ok(ReportFile {
            file_name: format.file_name().to_string(),
            mime_type: format.mime_type(),
            bytes: body.into_bytes(),
        })
    }

    fn text_body(&self, generated: &str, sections: &[SignalSection]) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "{REPORT_TITLE}");
        let _ = writeln!(out, "Generated: {generated}");
        let _ = writeln!(out);
        let _ = writeln!(out, "Last Recorded Data:");
        for (k, v) in self.vitals.rows() {
            let _ = writeln!(out, "{k}: {v}");
        }
        let _ = writeln!(out);
        for s in sections {
            let s = &s.summary;
            let _ = writeln!(
                out,
                "{}: {} points, min {}, max {}, latest {} at {}",
                s.name, s.points, s.min, s.max, s.latest_value, s.latest_label
            );
        }
        let _ = writeln!(out);
        let names: Vec<&str> = sections.iter().map(|s| s.summary.name.as_str()).collect();
        let _ = writeln!(out, "{} data charts included in visual report.", join_names(&names));
        out
    }

    fn html_body(&self, generated: &str, sections: &[SignalSection]) -> String {
        let mut out = String::new();
        out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
        let _ = writeln!(out, "<title>{REPORT_TITLE}</title>");
        out.push_str(
            "<style>body{font-family:sans-serif;margin:2em;color:#111827}\
             table{border-collapse:collapse}th,td{border:1px solid #d1d5db;padding:4px 10px;text-align:left}\
             .chart{margin:1em 0}</style>\n",
        );
        out.push_str("</head>\n<body>\n");
        let _ = writeln!(out, "<h1>{REPORT_TITLE}</h1>");
        let _ = writeln!(out, "<p>Generated: {}</p>", escape_xml(generated));
        out.push_str("<h2>Last Recorded Data</h2>\n<table>\n");
        for (k, v) in self.vitals.rows() {
            let _ = writeln!(out, "<tr><th>{k}</th><td>{}</td></tr>", escape_xml(v));
        }
        out.push_str("</table>\n");
        for s in sections {
            let _ = writeln!(out, "<h2>{}</h2>", escape_xml(&s.summary.name));
            let _ = writeln!(out, "<div class=\"chart\">\n{}\n</div>", s.svg);
        }
        out.push_str("</body>\n</html>\n");
        out
    }
}

/// "ECG", "ECG and EMG", "A, B and C".
fn join_names(names: &[&str]) -> String {
    match names {
        [] => String::new(),
        [one] => (*one).to_string(),
        [init @ .., last] => format!("{} and {}", init.join(", "), last),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_signal_names() {
        assert_eq!(join_names(&["ECG"]), "ECG");
        assert_eq!(join_names(&["ECG", "EMG"]), "ECG and EMG");
        assert_eq!(join_names(&["A", "B", "C"]), "A, B and C");
    }

    #[test]
    fn format_parses_aliases() {
        assert_eq!("TXT".parse::<ReportFormat>().unwrap(), ReportFormat::Text);
        assert_eq!("html".parse::<ReportFormat>().unwrap(), ReportFormat::Html);
        assert!("pdf".parse::<ReportFormat>().is_err());
    }
}
