// File: crates/chart-core/src/geometry.rs
// Summary: Lightweight geometry helpers for pixel math.

use crate::projection::{project_with_progress, Projection};
use crate::types::{Series, Viewport};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RectI32 {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl RectI32 {
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self { left, top, right, bottom }
    }
    pub const fn width(&self) -> i32 { self.right - self.left }
    pub const fn height(&self) -> i32 { self.bottom - self.top }

    /// Size of the rect as a projection viewport.
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width().max(0) as f64, self.height().max(0) as f64)
    }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}

/// Viewport-relative vertices of one series, in the caller's point order.
pub fn line_path(series: &Series, projection: &Projection, viewport: Viewport, progress: f64) -> Vec<(f64, f64)> {
    series
        .points
        .iter()
        .map(|p| project_with_progress(p, projection, viewport, progress))
        .collect()
}
