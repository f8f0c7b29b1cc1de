// File: crates/chart-core/src/indicator.rs
// Summary: Pointer-tracking indicator and the tooltip built from it.
// Notes:
// - The indicator position is owned by the host UI and passed in on every
//   query; nothing here is retained between frames.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::axis::format_day_month_time;
use crate::error::ChartError;
use crate::geometry::clamp;
use crate::nearest::nearest_point;
use crate::projection::{pixel_to_timestamp, Projection};
use crate::types::{Dataset, Point, Rgba, Viewport};

/// Width the tooltip overlay reserves at the right edge, in pixels.
pub const TOOLTIP_BOX_WIDTH: f64 = 50.0;

/// Vertical indicator line position. `None` means hidden.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Indicator {
    pub x_px: Option<f64>,
}

impl Indicator {
    pub const fn hidden() -> Self { Self { x_px: None } }

    /// Place the indicator at a tap/drag position, clamped into the viewport.
    pub fn at(x_px: f64, viewport: Viewport) -> Self {
        if !x_px.is_finite() {
            return Self::hidden();
        }
        Self { x_px: Some(clamp(x_px, 0.0, viewport.width_px.max(0.0))) }
    }

    pub fn is_visible(&self) -> bool { self.x_px.is_some() }
}

/// One tooltip line: the nearest point of a series.
#[derive(Clone, Debug, PartialEq)]
pub struct TooltipEntry {
    pub label: String,
    pub color: Rgba,
    pub point: Point,
}

impl TooltipEntry {
    pub fn text(&self) -> String {
        format!("{}: {}", self.label, self.point.value.round() as i64)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Tooltip {
    pub x_px: f64,
    pub timestamp_ms: i64,
    pub entries: Vec<TooltipEntry>,
}

impl Tooltip {
    /// Build the tooltip for a visible indicator; `None` when hidden.
    pub fn build(dataset: &Dataset, projection: &Projection, indicator: Indicator) -> Option<Self> {
        let x_px = indicator.x_px?;
        let timestamp_ms = pixel_to_timestamp(x_px, projection);

        let mut entries = Vec::with_capacity(dataset.series.len());
        for series in &dataset.series {
            match nearest_point(series, timestamp_ms) {
                Ok(point) => entries.push(TooltipEntry {
                    label: series.label.clone(),
                    color: series.color,
                    point,
                }),
                Err(ChartError::EmptySeries { label }) => {
                    debug!(%label, "skipping empty series in tooltip");
                }
                Err(other) => debug!(error = %other, "nearest lookup failed"),
            }
        }
        Some(Self { x_px, timestamp_ms, entries })
    }

    pub fn time_text(&self) -> String {
        format!("Time: {}", format_day_month_time(self.timestamp_ms))
    }

    /// Every text line of the tooltip, header first.
    pub fn lines(&self) -> Vec<String> {
        std::iter::once(self.time_text())
            .chain(self.entries.iter().map(TooltipEntry::text))
            .collect()
    }

    /// Left edge of the tooltip box, kept inside the viewport.
    pub fn anchor_x(&self, viewport: Viewport, box_width: f64) -> f64 {
        let hi = (viewport.width_px - box_width).max(0.0);
        clamp(self.x_px, 0.0, hi)
    }
}
