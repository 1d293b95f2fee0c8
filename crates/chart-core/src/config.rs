// File: crates/chart-core/src/config.rs
// Summary: TOML configuration for report export, with environment overrides.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::chart::RenderOptions;
use crate::error::ConfigError;
use crate::provider::Signal;
use crate::report::{ReportFormat, VitalReadings};

/// Top-level configuration file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default)]
    pub render: RenderOptions,

    #[serde(default)]
    pub format: ReportFormat,

    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    #[serde(default = "default_signals")]
    pub signals: Vec<Signal>,

    /// Series longer than this are downsampled before charting.
    #[serde(default)]
    pub max_points_per_chart: Option<usize>,

    #[serde(default)]
    pub vitals: VitalReadings,
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("target/out")
}

fn default_signals() -> Vec<Signal> {
    vec![Signal::ecg(), Signal::emg()]
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            render: RenderOptions::default(),
            format: ReportFormat::default(),
            output_dir: default_output_dir(),
            signals: default_signals(),
            max_points_per_chart: None,
            vitals: VitalReadings::default(),
        }
    }
}

impl ReportConfig {
    /// Parse configuration text and validate the canvas geometry.
    pub fn from_toml_str(content: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: ReportConfig = toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
        config.render.canvas.validate()?;
        Ok(config)
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
        Self::from_toml_str(&content, path)
    }

    /// Load from file (if given) then apply environment overrides.
    pub fn load_with_env(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) => Self::load(p)?,
            None => Self::default(),
        };
        config.apply_env_overrides()?;
        Ok(config)
    }

    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply `MEDCONNECT_REPORT_DIR` and `MEDCONNECT_REPORT_FORMAT` as resolved by `lookup`.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<(), ConfigError> {
        if let Some(dir) = lookup("MEDCONNECT_REPORT_DIR") {
            self.output_dir = PathBuf::from(dir);
        }
        if let Some(format) = lookup("MEDCONNECT_REPORT_FORMAT") {
            self.format = format.parse()?;
        }
        Ok(())
    }
}

/// Commented default configuration, suitable for writing to disk.
pub fn generate_default_config() -> String {
    r##"# MedConnect report export configuration

format = "html"          # "text" or "html"
output_dir = "target/out"
# max_points_per_chart = 500

[render]
degenerate = "center"    # "center" or "reject"

[render.canvas]
width = 400.0
height = 200.0

[render.canvas.margin]
top = 20.0
right = 20.0
bottom = 40.0
left = 40.0

[render.theme]
background = "white"
axis_line = "#666"
title = "#111827"

[[signals]]
name = "ECG"
color = "#3b82f6"

[[signals]]
name = "EMG"
color = "#10b981"
"##
    .to_string()
}
