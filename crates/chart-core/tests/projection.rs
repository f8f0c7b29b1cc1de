// File: crates/chart-core/tests/projection.rs
// Purpose: Range, transform and nearest-point behaviour of the chart projector.

use approx::assert_relative_eq;
use proptest::prelude::*;
use stockline_core::{
    compute_ranges, nearest_point, pixel_to_timestamp, project, ChartError, Dataset, Point, Projection, Ranges,
    Rgba, Series, Viewport,
};

fn series(label: &str, points: &[(i64, f64)]) -> Series {
    Series::new(label, Rgba::BLUE, points.iter().map(|&(t, v)| Point::new(t, v)).collect())
}

#[test]
fn empty_dataset_uses_default_ranges() {
    let r = compute_ranges(&Dataset::new("empty"));
    assert_eq!(r, Ranges { min_value: 0.0, max_value: 1.0, min_timestamp: 0, max_timestamp: 1 });

    let only_empty = Dataset::new("blank").with_series(series("a", &[]));
    assert_eq!(compute_ranges(&only_empty), Ranges::default());
}

#[test]
fn end_to_end_three_points() {
    let ds = Dataset::new("e2e").with_series(series("s", &[(0, 10.0), (5, 20.0), (10, 15.0)]));
    let vp = Viewport::new(100.0, 100.0);
    let p = Projection::compute(&ds, vp);
    assert_eq!(p.ranges(), Ranges { min_value: 10.0, max_value: 20.0, min_timestamp: 0, max_timestamp: 10 });

    let (x, y) = project(&Point::new(5, 20.0), &p, vp);
    assert_relative_eq!(x, 50.0);
    assert_relative_eq!(y, 0.0);

    let (x, y) = project(&Point::new(0, 10.0), &p, vp);
    assert_relative_eq!(x, 0.0);
    assert_relative_eq!(y, 100.0);
}

#[test]
fn nearest_point_exact_and_tie() {
    let s = series("s", &[(0, 1.0), (10, 2.0), (20, 3.0)]);
    assert_eq!(nearest_point(&s, 7).unwrap(), Point::new(10, 2.0));
    assert_eq!(nearest_point(&s, 5).unwrap(), Point::new(0, 1.0));
    assert_eq!(nearest_point(&s, 99).unwrap(), Point::new(20, 3.0));
}

#[test]
fn nearest_point_empty_series_is_error() {
    let s = series("Pressure", &[]);
    assert_eq!(nearest_point(&s, 0), Err(ChartError::EmptySeries { label: "Pressure".into() }));
}

#[test]
fn pixel_to_timestamp_rounds() {
    let r = Ranges { min_value: 0.0, max_value: 1.0, min_timestamp: 1_000, max_timestamp: 2_000 };
    let p = r.project_onto(Viewport::new(100.0, 10.0));
    assert_eq!(pixel_to_timestamp(0.0, &p), 1_000);
    assert_eq!(pixel_to_timestamp(100.0, &p), 2_000);
    assert_eq!(pixel_to_timestamp(33.34, &p), 1_333);
    assert_eq!(pixel_to_timestamp(33.36, &p), 1_334);
}

fn points_strategy() -> impl Strategy<Value = Vec<(i64, f64)>> {
    prop::collection::vec((-1_000_000i64..1_000_000, -1.0e6f64..1.0e6), 1..64)
}

proptest! {
    #[test]
    fn ranges_match_point_extents(a in points_strategy(), b in points_strategy()) {
        let ds = Dataset::new("p").with_series(series("a", &a)).with_series(series("b", &b));
        let r = compute_ranges(&ds);
        let all: Vec<_> = a.iter().chain(b.iter()).collect();
        prop_assert_eq!(r.min_timestamp, all.iter().map(|p| p.0).min().unwrap());
        prop_assert_eq!(r.max_timestamp, all.iter().map(|p| p.0).max().unwrap());
        prop_assert_eq!(r.min_value, all.iter().map(|p| p.1).fold(f64::INFINITY, f64::min));
        prop_assert_eq!(r.max_value, all.iter().map(|p| p.1).fold(f64::NEG_INFINITY, f64::max));
    }

    #[test]
    fn projection_is_monotonic_in_time(
        pts in points_strategy(),
        t1 in -1_000_000i64..1_000_000,
        dt in 0i64..1_000_000,
        w in 1.0f64..4_000.0,
    ) {
        let ds = Dataset::new("p").with_series(series("a", &pts));
        let vp = Viewport::new(w, 300.0);
        let p = Projection::compute(&ds, vp);
        let (x1, _) = project(&Point::new(t1, 0.0), &p, vp);
        let (x2, _) = project(&Point::new(t1 + dt, 0.0), &p, vp);
        prop_assert!(x1 <= x2);
    }

    #[test]
    fn pixel_round_trip_within_one_pixel(
        pts in points_strategy(),
        idx in 0usize..64,
        w in 50.0f64..4_000.0,
    ) {
        let ds = Dataset::new("p").with_series(series("a", &pts));
        let vp = Viewport::new(w, 300.0);
        let p = Projection::compute(&ds, vp);
        let point = Point::new(pts[idx % pts.len()].0, 0.0);
        let (x, _) = project(&point, &p, vp);
        let back = pixel_to_timestamp(x, &p);
        let one_px_ms = (1.0 / p.x_scale).ceil() as i64;
        prop_assert!((back - point.timestamp_ms).abs() <= one_px_ms.max(1));
    }

    #[test]
    fn nearest_point_minimises_distance(pts in points_strategy(), target in -2_000_000i64..2_000_000) {
        let s = series("a", &pts);
        let got = nearest_point(&s, target).unwrap();
        let best = pts.iter().map(|p| (p.0 - target).abs()).min().unwrap();
        prop_assert_eq!((got.timestamp_ms - target).abs(), best);
        let first = pts.iter().find(|p| (p.0 - target).abs() == best).unwrap();
        prop_assert_eq!(got, Point::new(first.0, first.1));
    }
}
