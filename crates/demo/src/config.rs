// File: crates/demo/src/config.rs
// Summary: TOML configuration for the demo; every field has a default.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct DemoConfig {
    pub chart: ChartConfig,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(default)]
pub struct ChartConfig {
    pub width: i32,
    pub height: i32,
    pub theme: String,
    pub x_label_count: usize,
    pub y_label_count: usize,
    pub progress: f64,
    pub stroke_width: f32,
    pub out: PathBuf,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: stockline_core::types::WIDTH,
            height: stockline_core::types::HEIGHT,
            theme: "light".to_string(),
            x_label_count: 6,
            y_label_count: 5,
            progress: 1.0,
            stroke_width: 4.0,
            out: PathBuf::from("target/out/weather_chart.png"),
        }
    }
}

impl DemoConfig {
    /// Load from `path`, or defaults when no path is given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::from_toml(&raw).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn from_toml(raw: &str) -> Result<Self> {
        Ok(toml::from_str(raw)?)
    }
}
