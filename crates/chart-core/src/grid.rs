// File: crates/chart-core/src/grid.rs
// Summary: Simple grid/tick layout helpers.

use crate::projection::Projection;
use crate::types::Viewport;

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Evenly spaced values from `min_value` across the value span, `count` of them.
pub fn value_steps(projection: &Projection, count: usize) -> Vec<f64> {
    let span = projection.ranges().value_span();
    linspace(projection.min_value, projection.min_value + span, count.max(2))
}

/// Pixel y of each horizontal grid line, bottom line first.
pub fn value_grid_ys(projection: &Projection, viewport: Viewport, count: usize) -> Vec<f64> {
    value_steps(projection, count)
        .into_iter()
        .map(|v| viewport.height_px - (v - projection.min_value) * projection.y_scale)
        .collect()
}
