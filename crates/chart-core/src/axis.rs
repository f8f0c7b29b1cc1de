// File: crates/chart-core/src/axis.rs
// Summary: Axis tick labels for the value (Y) and time (X) axes.

use chrono::{DateTime, Utc};

use crate::grid::value_steps;
use crate::projection::{project, Projection};
use crate::types::{Point, Viewport};

/// A labelled tick. `px` is y for value ticks and x for time ticks.
#[derive(Clone, Debug, PartialEq)]
pub struct AxisTick {
    pub px: f64,
    pub text: String,
}

/// `count` value labels from min upward, each rounded to an integer.
pub fn value_labels(projection: &Projection, viewport: Viewport, count: usize) -> Vec<AxisTick> {
    value_steps(projection, count)
        .into_iter()
        .map(|v| AxisTick {
            px: viewport.height_px - (v - projection.min_value) * projection.y_scale,
            text: format!("{}", v.round() as i64),
        })
        .collect()
}

/// `count` evenly spaced timestamps (integer millisecond step) labelled `d/m`.
pub fn time_labels(projection: &Projection, viewport: Viewport, count: usize) -> Vec<AxisTick> {
    let count = count.max(2);
    let span = projection.max_timestamp.saturating_sub(projection.min_timestamp);
    let step = span / (count as i64 - 1);
    (0..count as i64)
        .map(|i| {
            let ts = projection.min_timestamp.saturating_add(i * step);
            let (x, _) = project(&Point::new(ts, projection.min_value), projection, viewport);
            AxisTick { px: x, text: format_day_month(ts) }
        })
        .collect()
}

fn to_utc(ts_ms: i64) -> Option<DateTime<Utc>> {
    DateTime::<Utc>::from_timestamp_millis(ts_ms)
}

/// `d/m`, e.g. `7/3` for 7 March.
pub fn format_day_month(ts_ms: i64) -> String {
    match to_utc(ts_ms) {
        Some(dt) => dt.format("%-d/%-m").to_string(),
        None => ts_ms.to_string(),
    }
}

/// `d/m h:mm`, e.g. `7/3 6:05`.
pub fn format_day_month_time(ts_ms: i64) -> String {
    match to_utc(ts_ms) {
        Some(dt) => dt.format("%-d/%-m %-H:%M").to_string(),
        None => ts_ms.to_string(),
    }
}
