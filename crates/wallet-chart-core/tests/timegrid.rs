// File: crates/wallet-chart-core/tests/timegrid.rs
// Purpose: Grid shape, ordering, spacing and label policy.

use chrono::{Duration, TimeZone, Utc};
use wallet_chart_core::{build_grid, TimeWindow};

fn now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 15, 14, 0, 0).unwrap()
}

#[test]
fn hourly_grid_is_uniform_and_ends_now() {
    let grid = TimeWindow::Hours24.grid(now());
    assert_eq!(grid.len(), 24);
    assert_eq!(grid.last().unwrap().start, now());
    for pair in grid.windows(2) {
        assert_eq!(pair[1].start - pair[0].start, Duration::hours(1));
    }
}

#[test]
fn hourly_buckets_are_all_labeled_with_their_hour() {
    let grid = TimeWindow::Hours24.grid(now());
    assert_eq!(grid[23].label, "14:00");
    // 23 hours back from 14:00 is 15:00 the previous day.
    assert_eq!(grid[0].label, "15:00");
    assert!(grid.iter().all(|b| !b.label.is_empty()));
}

#[test]
fn daily_grid_labels_today_and_week_offsets_only() {
    let grid = TimeWindow::Days30.grid(now());
    assert_eq!(grid.len(), 30);
    assert_eq!(grid[29].label, "Today");
    assert_eq!(grid[22].label, "1w ago");
    assert_eq!(grid[15].label, "2w ago");
    assert_eq!(grid[8].label, "3w ago");
    assert_eq!(grid[1].label, "4w ago");

    let labeled = grid.iter().filter(|b| !b.label.is_empty()).count();
    assert_eq!(labeled, 5);
}

#[test]
fn long_windows_keep_the_same_sparse_policy() {
    for window in [TimeWindow::Days90, TimeWindow::Days365] {
        let grid = window.grid(now());
        assert_eq!(grid.len(), window.bucket_count());
        let labeled = grid.iter().filter(|b| !b.label.is_empty()).count();
        assert_eq!(labeled, 5, "{} should label Today + 4 week marks", window.name());
        assert_eq!(grid.last().unwrap().label, "Today");
    }
}

#[test]
fn build_grid_is_a_pure_function_of_its_inputs() {
    let a = build_grid(now(), 3, Duration::hours(1));
    let b = build_grid(now(), 3, Duration::hours(1));
    assert_eq!(a, b);
    assert_eq!(a.len(), 3);
    assert_eq!(a[0].start, now() - Duration::hours(2));
}

#[test]
fn window_presets_parse_and_report_shape() {
    assert_eq!("24h".parse::<TimeWindow>().unwrap(), TimeWindow::Hours24);
    assert_eq!("365d".parse::<TimeWindow>().unwrap(), TimeWindow::Days365);
    assert_eq!(TimeWindow::Hours24.bucket_span(), Duration::hours(1));
    assert_eq!(TimeWindow::Days90.bucket_span(), Duration::days(1));
    assert_eq!(TimeWindow::Hours24.grid_lines(), 5);
    assert_eq!(TimeWindow::Days30.grid_lines(), 4);

    let err = "1y".parse::<TimeWindow>().unwrap_err();
    assert!(err.to_string().contains("unknown time window '1y'"));
}
