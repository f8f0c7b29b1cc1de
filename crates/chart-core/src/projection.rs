// File: crates/chart-core/src/projection.rs
// Summary: Axis range computation and the value <-> pixel transform for one render pass.
// Notes:
// - Everything here is a pure function of its arguments. A `Projection` is
//   derived per frame and never cached by the library.

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::types::{Dataset, Point, Viewport};

/// Data extents over a whole dataset.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ranges {
    pub min_value: f64,
    pub max_value: f64,
    pub min_timestamp: i64,
    pub max_timestamp: i64,
}

impl Default for Ranges {
    fn default() -> Self {
        Self { min_value: 0.0, max_value: 1.0, min_timestamp: 0, max_timestamp: 1 }
    }
}

impl Ranges {
    /// Value span used for scaling; a zero span counts as 1.
    pub fn value_span(&self) -> f64 {
        let span = self.max_value - self.min_value;
        if span.is_finite() && span > 0.0 { span } else { 1.0 }
    }

    /// Timestamp span used for scaling; a zero span counts as 1 ms.
    pub fn timestamp_span(&self) -> f64 {
        let span = self.max_timestamp as f64 - self.min_timestamp as f64;
        if span > 0.0 { span } else { 1.0 }
    }

    /// Derive the pixel scales for `viewport`.
    pub fn project_onto(&self, viewport: Viewport) -> Projection {
        Projection {
            min_value: self.min_value,
            max_value: self.max_value,
            min_timestamp: self.min_timestamp,
            max_timestamp: self.max_timestamp,
            x_scale: viewport.width_px / self.timestamp_span(),
            y_scale: viewport.height_px / self.value_span(),
        }
    }
}

/// Ranges plus pixel scales for one viewport.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Projection {
    pub min_value: f64,
    pub max_value: f64,
    pub min_timestamp: i64,
    pub max_timestamp: i64,
    /// Pixels per millisecond.
    pub x_scale: f64,
    /// Pixels per value unit.
    pub y_scale: f64,
}

impl Projection {
    pub fn compute(dataset: &Dataset, viewport: Viewport) -> Self {
        compute_ranges(dataset).project_onto(viewport)
    }

    pub fn ranges(&self) -> Ranges {
        Ranges {
            min_value: self.min_value,
            max_value: self.max_value,
            min_timestamp: self.min_timestamp,
            max_timestamp: self.max_timestamp,
        }
    }
}

/// Scan every point once and return value/timestamp extents.
///
/// A dimension with no points (no series, or only empty series) falls back to
/// `0..1`. Empty series contribute nothing to the extents of the others.
pub fn compute_ranges(dataset: &Dataset) -> Ranges {
    let mut min_value = f64::INFINITY;
    let mut max_value = f64::NEG_INFINITY;
    let mut min_ts = i64::MAX;
    let mut max_ts = i64::MIN;
    let mut any = false;

    for p in dataset.points() {
        any = true;
        min_value = min_value.min(p.value);
        max_value = max_value.max(p.value);
        min_ts = min_ts.min(p.timestamp_ms);
        max_ts = max_ts.max(p.timestamp_ms);
    }

    let defaults = Ranges::default();
    let (min_value, max_value) = if min_value.is_finite() && max_value.is_finite() {
        (min_value, max_value)
    } else {
        (defaults.min_value, defaults.max_value)
    };
    let (min_timestamp, max_timestamp) = if any {
        (min_ts, max_ts)
    } else {
        (defaults.min_timestamp, defaults.max_timestamp)
    };

    let ranges = Ranges { min_value, max_value, min_timestamp, max_timestamp };
    trace!(?ranges, series = dataset.series.len(), "computed ranges");
    ranges
}

/// Map a point to pixel coordinates. Larger values sit higher (smaller y).
#[inline]
pub fn project(point: &Point, projection: &Projection, viewport: Viewport) -> (f64, f64) {
    project_with_progress(point, projection, viewport, 1.0)
}

/// Like [`project`], with the value offset scaled by a reveal `progress` in
/// `[0, 1]`. Only y animates; x is always final.
#[inline]
pub fn project_with_progress(
    point: &Point,
    projection: &Projection,
    viewport: Viewport,
    progress: f64,
) -> (f64, f64) {
    let progress = if progress.is_nan() { 1.0 } else { progress.clamp(0.0, 1.0) };
    let x = (point.timestamp_ms as f64 - projection.min_timestamp as f64) * projection.x_scale;
    let y = viewport.height_px - (point.value - projection.min_value) * projection.y_scale * progress;
    (x, y)
}

/// Inverse of the x half of [`project`], rounded to the nearest millisecond.
pub fn pixel_to_timestamp(x_px: f64, projection: &Projection) -> i64 {
    if !(projection.x_scale.is_finite() && projection.x_scale > 0.0) || !x_px.is_finite() {
        return projection.min_timestamp;
    }
    let offset = (x_px / projection.x_scale).round() as i64;
    projection.min_timestamp.saturating_add(offset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Rgba, Series};

    #[test]
    fn zero_spans_fall_back_to_one() {
        let ds = Dataset::new("single")
            .with_series(Series::new("s", Rgba::BLUE, vec![Point::new(42, 7.0)]));
        let p = Projection::compute(&ds, Viewport::new(100.0, 50.0));
        assert_eq!(p.min_timestamp, 42);
        assert_eq!(p.max_timestamp, 42);
        assert_eq!(p.x_scale, 100.0);
        assert_eq!(p.y_scale, 50.0);
        assert_eq!(project(&Point::new(42, 7.0), &p, Viewport::new(100.0, 50.0)), (0.0, 50.0));
    }

    #[test]
    fn empty_series_do_not_widen_ranges() {
        let ds = Dataset::new("mixed")
            .with_series(Series::new("a", Rgba::RED, vec![Point::new(10, 5.0), Point::new(20, 8.0)]))
            .with_series(Series::new("b", Rgba::BLUE, vec![]));
        let r = compute_ranges(&ds);
        assert_eq!(r, Ranges { min_value: 5.0, max_value: 8.0, min_timestamp: 10, max_timestamp: 20 });
    }

    #[test]
    fn progress_is_clamped() {
        let ds = Dataset::new("d")
            .with_series(Series::new("a", Rgba::RED, vec![Point::new(0, 0.0), Point::new(10, 10.0)]));
        let vp = Viewport::new(100.0, 100.0);
        let p = Projection::compute(&ds, vp);
        let top = Point::new(10, 10.0);
        assert_eq!(project_with_progress(&top, &p, vp, 2.0), project(&top, &p, vp));
        assert_eq!(project_with_progress(&top, &p, vp, -1.0), (100.0, 100.0));
        assert_eq!(project_with_progress(&top, &p, vp, 0.5), (100.0, 50.0));
    }

    #[test]
    fn zero_width_viewport_maps_to_min_timestamp() {
        let r = Ranges { min_value: 0.0, max_value: 1.0, min_timestamp: 500, max_timestamp: 900 };
        let p = r.project_onto(Viewport::new(0.0, 10.0));
        assert_eq!(pixel_to_timestamp(30.0, &p), 500);
    }
}
