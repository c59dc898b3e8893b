// File: crates/wallet-chart-core/tests/hover.rs
// Purpose: Hover locator threshold/tie rules and tooltip payloads.

use chrono::{Duration, TimeZone, Utc};
use wallet_chart_core::{
    build_grid, locate, tooltip_at, PointF, RenderLayout, SeriesPoint,
};

fn layout_with(points: Vec<PointF>) -> RenderLayout {
    RenderLayout {
        origin_x: 40.0,
        origin_y: 40.0,
        plot_width: 720.0,
        plot_height: 120.0,
        points,
    }
}

#[test]
fn hit_within_threshold() {
    let layout = layout_with(vec![PointF::new(100.0, 50.0), PointF::new(200.0, 50.0)]);
    // Distance 10 < 15.
    assert_eq!(locate(110.0, 50.0, &layout), Some(0));
}

#[test]
fn miss_beyond_threshold() {
    let layout = layout_with(vec![PointF::new(100.0, 50.0)]);
    // Distance 20 >= 15.
    assert_eq!(locate(120.0, 50.0, &layout), None);
}

#[test]
fn exact_threshold_distance_is_a_miss() {
    let layout = layout_with(vec![PointF::new(100.0, 50.0)]);
    assert_eq!(locate(115.0, 50.0, &layout), None);
}

#[test]
fn nearest_point_wins() {
    let layout = layout_with(vec![
        PointF::new(100.0, 50.0),
        PointF::new(110.0, 50.0),
        PointF::new(120.0, 50.0),
    ]);
    assert_eq!(locate(111.0, 50.0, &layout), Some(1));
}

#[test]
fn ties_break_to_the_lowest_index() {
    let layout = layout_with(vec![PointF::new(100.0, 50.0), PointF::new(110.0, 50.0)]);
    // Equidistant (5px) from both; the scan keeps the first.
    assert_eq!(locate(105.0, 50.0, &layout), Some(0));
}

#[test]
fn empty_layout_always_misses() {
    assert_eq!(locate(100.0, 50.0, &RenderLayout::default()), None);
}

#[test]
fn tooltip_uses_the_bucket_label_when_present() {
    let now = Utc.with_ymd_and_hms(2024, 3, 15, 14, 0, 0).unwrap();
    let grid = build_grid(now, 24, Duration::hours(1));
    let series: Vec<SeriesPoint> = grid
        .into_iter()
        .map(|bucket| SeriesPoint { bucket, value: 12.3 })
        .collect();

    let tip = tooltip_at(&series, 23, Some("CW")).expect("index in range");
    assert_eq!(tip.bucket_label, "14:00");
    assert_eq!(tip.formatted_value, "12.30 CW");
}

#[test]
fn tooltip_falls_back_to_a_date_for_unlabeled_buckets() {
    let now = Utc.with_ymd_and_hms(2024, 3, 15, 14, 0, 0).unwrap();
    let grid = build_grid(now, 30, Duration::days(1));
    let series: Vec<SeriesPoint> = grid
        .into_iter()
        .map(|bucket| SeriesPoint { bucket, value: 7.0 })
        .collect();

    // Bucket 27 (2 days back, Mar 13) has an empty axis label.
    assert!(series[27].bucket.label.is_empty());
    let tip = tooltip_at(&series, 27, None).expect("index in range");
    assert_eq!(tip.bucket_label, "Mar 13");
    assert_eq!(tip.formatted_value, "7.00");
}

#[test]
fn tooltip_rejects_out_of_range_indices() {
    assert_eq!(tooltip_at(&[], 0, None), None);
}
