// File: crates/chart-core/src/nearest.rs
// Summary: Nearest-point lookup by timestamp, used to drive the indicator tooltip.

use crate::error::{ChartError, ChartResult};
use crate::types::{Point, Series};

/// Return the point of `series` whose timestamp is closest to `target_ms`.
///
/// Ties resolve to the earliest point in iteration order. An empty series is an
/// error; callers decide whether to skip the series or drop the tooltip.
pub fn nearest_point(series: &Series, target_ms: i64) -> ChartResult<Point> {
    let mut best: Option<(u64, Point)> = None;
    for p in &series.points {
        let dist = p.timestamp_ms.abs_diff(target_ms);
        match best {
            Some((d, _)) if d <= dist => {}
            _ => best = Some((dist, *p)),
        }
    }
    best.map(|(_, p)| p)
        .ok_or_else(|| ChartError::EmptySeries { label: series.label.clone() })
}
