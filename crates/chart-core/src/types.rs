// File: crates/chart-core/src/types.rs
// Summary: Chart data model (points, series, datasets, viewport, colour token) and shared constants.

use serde::{Deserialize, Serialize};

/// Default surface width in pixels.
pub const WIDTH: i32 = 720;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 400;

/// Opaque display colour carried by a series. The projector never reads it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::opaque(0, 0, 0);
    pub const WHITE: Rgba = Rgba::opaque(255, 255, 255);
    pub const BLUE: Rgba = Rgba::opaque(0, 0, 255);
    pub const RED: Rgba = Rgba::opaque(255, 0, 0);
    pub const GREEN: Rgba = Rgba::opaque(0, 255, 0);

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Build from a packed `0xAARRGGBB` value.
    pub const fn from_argb_u32(argb: u32) -> Self {
        Self {
            a: (argb >> 24) as u8,
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        }
    }

    /// Same colour with alpha scaled to `alpha` in [0, 1].
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self { a: (alpha.clamp(0.0, 1.0) * 255.0).round() as u8, ..self }
    }
}

/// One sample: epoch milliseconds (UTC) and a value.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub timestamp_ms: i64,
    pub value: f64,
}

impl Point {
    pub const fn new(timestamp_ms: i64, value: f64) -> Self {
        Self { timestamp_ms, value }
    }
}

/// A named, coloured line. Points are expected in non-decreasing time order
/// for drawing, but range and nearest-point queries do not depend on order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub points: Vec<Point>,
    pub color: Rgba,
    pub label: String,
}

impl Series {
    pub fn new(label: impl Into<String>, color: Rgba, points: Vec<Point>) -> Self {
        Self { points, color, label: label.into() }
    }
}

/// All series rendered together in one chart.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    pub series: Vec<Series>,
    pub label: String,
}

impl Dataset {
    pub fn new(label: impl Into<String>) -> Self {
        Self { series: Vec::new(), label: label.into() }
    }

    pub fn with_series(mut self, series: Series) -> Self {
        self.series.push(series);
        self
    }

    pub fn add_series(&mut self, series: Series) {
        self.series.push(series);
    }

    /// Iterate every point of every series.
    pub fn points(&self) -> impl Iterator<Item = &Point> {
        self.series.iter().flat_map(|s| s.points.iter())
    }

    /// Short accessible description of the chart.
    pub fn content_description(&self) -> String {
        format!("Line chart with {} lines", self.series.len())
    }
}

/// Drawing area size, supplied fresh for every render/query.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width_px: f64,
    pub height_px: f64,
}

impl Viewport {
    pub const fn new(width_px: f64, height_px: f64) -> Self {
        Self { width_px, height_px }
    }
}

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(56, 16, 16, 40)
    }
}
