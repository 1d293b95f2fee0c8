// File: crates/chart-core/src/theme.rs
// Summary: Fixed colors for chart markup and the default signal palette.

use serde::{Deserialize, Serialize};

/// Colors used by the SVG emitter. Values are CSS color strings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Theme {
    pub background: String,
    pub axis_line: String,
    pub title: String,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            background: "white".into(),
            axis_line: "#666".into(),
            title: "#111827".into(),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

pub const ECG_COLOR: &str = "#3b82f6";
pub const EMG_COLOR: &str = "#10b981";
