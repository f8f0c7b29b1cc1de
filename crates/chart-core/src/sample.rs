// File: crates/chart-core/src/sample.rs
// Summary: Deterministic sample dataset (30 days of weather readings every 6 hours).

use crate::types::{Dataset, Point, Rgba, Series};

pub const DAY_MS: i64 = 24 * 60 * 60 * 1000;
pub const SIX_HOURS_MS: i64 = 6 * 60 * 60 * 1000;
pub const DAYS: i64 = 30;
/// Four readings per day.
pub const POINTS_PER_LINE: usize = (DAYS * 4) as usize;

/// Timestamps ending roughly at `now_ms`, oldest first.
pub fn timestamps(now_ms: i64) -> Vec<i64> {
    let start = now_ms - (DAYS - 1) * DAY_MS;
    (0..POINTS_PER_LINE as i64).map(|i| start + i * SIX_HOURS_MS).collect()
}

fn line(label: &str, color: Rgba, ts: &[i64], f: impl Fn(f64, i64) -> f64) -> Series {
    let points = ts
        .iter()
        .enumerate()
        .map(|(i, &t)| Point::new(t, f(i as f64, i as i64)))
        .collect();
    Series::new(label, color, points)
}

/// Temperature, humidity and pressure lines over the 30 days before `now_ms`.
pub fn weather_dataset(now_ms: i64) -> Dataset {
    let ts = timestamps(now_ms);
    Dataset::new("Weather Data (30 Days)")
        .with_series(line("Temperature (°C)", Rgba::BLUE, &ts, |x, i| {
            15.0 + 10.0 * (x * 0.2).sin() + 5.0 * (i % 4) as f64
        }))
        .with_series(line("Humidity (%)", Rgba::RED, &ts, |x, i| {
            40.0 + 20.0 * (x * 0.15).cos() + 10.0 * (i % 3) as f64
        }))
        .with_series(line("Pressure (hPa)", Rgba::GREEN, &ts, |x, i| {
            900.0 + 100.0 * (x * 0.1).sin() + 50.0 * (i % 5) as f64
        }))
}
