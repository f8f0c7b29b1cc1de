// File: crates/chart-core/tests/tooltip.rs
// Purpose: Indicator drag -> tooltip entries across several series.

use stockline_core::indicator::TOOLTIP_BOX_WIDTH;
use stockline_core::sample::{weather_dataset, DAY_MS, SIX_HOURS_MS};
use stockline_core::{Dataset, Indicator, Point, Projection, Rgba, Series, Tooltip, Viewport};

const NOW: i64 = 1_709_791_500_000; // 7/3/2024 6:05 UTC

#[test]
fn drag_to_left_edge_selects_first_points() {
    let ds = weather_dataset(NOW);
    let vp = Viewport::new(600.0, 200.0);
    let p = Projection::compute(&ds, vp);

    let tip = Tooltip::build(&ds, &p, Indicator::at(-40.0, vp)).expect("visible");
    assert_eq!(tip.x_px, 0.0);
    assert_eq!(tip.timestamp_ms, NOW - 29 * DAY_MS);
    assert_eq!(tip.entries.len(), 3);
    assert_eq!(tip.entries[0].text(), "Temperature (°C): 15");
    assert_eq!(tip.entries[1].text(), "Humidity (%): 60");
    assert_eq!(tip.entries[2].text(), "Pressure (hPa): 900");
    assert_eq!(tip.time_text(), "Time: 7/2 6:05");
}

#[test]
fn drag_to_right_edge_selects_last_points() {
    let ds = weather_dataset(NOW);
    let vp = Viewport::new(600.0, 200.0);
    let p = Projection::compute(&ds, vp);

    let tip = Tooltip::build(&ds, &p, Indicator::at(10_000.0, vp)).expect("visible");
    let last = NOW - 29 * DAY_MS + 119 * SIX_HOURS_MS;
    assert_eq!(tip.timestamp_ms, last);
    assert!(tip.entries.iter().all(|e| e.point.timestamp_ms == last));
    assert_eq!(tip.anchor_x(vp, TOOLTIP_BOX_WIDTH), 550.0);
}

#[test]
fn empty_series_are_skipped() {
    let ds = Dataset::new("partial")
        .with_series(Series::new("a", Rgba::RED, vec![Point::new(0, 1.0), Point::new(10, 3.0)]))
        .with_series(Series::new("b", Rgba::BLUE, vec![]));
    let vp = Viewport::new(100.0, 100.0);
    let p = Projection::compute(&ds, vp);

    let tip = Tooltip::build(&ds, &p, Indicator::at(80.0, vp)).expect("visible");
    assert_eq!(tip.timestamp_ms, 8);
    assert_eq!(tip.entries.len(), 1);
    assert_eq!(tip.entries[0].label, "a");
    assert_eq!(tip.entries[0].point, Point::new(10, 3.0));
    assert_eq!(tip.lines().len(), 2);
}
