// File: crates/wallet-chart-core/src/timegrid.rs
// Summary: Fixed time grids (hourly/daily buckets) with sparse label policy.

use chrono::{DateTime, Duration, Timelike, Utc};
use std::str::FromStr;
use thiserror::Error;

/// One slot of a fixed time grid. Immutable once built; grids are ordered
/// oldest first with uniform spacing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimeBucket {
    /// Boundary end-time of the bucket; the newest bucket starts at "now".
    pub start: DateTime<Utc>,
    /// Axis label; empty labels are skipped by the renderer.
    pub label: String,
}

/// Build `bucket_count` buckets ending at `now`, each `bucket_span` apart,
/// oldest first. Pure function of its inputs; no failure modes.
///
/// Label policy: hourly grids label every bucket with its hour ("H:00");
/// day-granularity grids label only the final bucket ("Today") and the
/// 7/14/21/28-bucket offsets from the end ("Nw ago").
pub fn build_grid(now: DateTime<Utc>, bucket_count: usize, bucket_span: Duration) -> Vec<TimeBucket> {
    let hourly = bucket_span < Duration::days(1);
    (0..bucket_count)
        .map(|i| {
            let back = (bucket_count - 1 - i) as i32;
            let start = now - bucket_span * back;
            let label = if hourly {
                format!("{}:00", start.hour())
            } else {
                day_label(back)
            };
            TimeBucket { start, label }
        })
        .collect()
}

fn day_label(buckets_from_end: i32) -> String {
    match buckets_from_end {
        0 => "Today".to_string(),
        7 | 14 | 21 | 28 => format!("{}w ago", buckets_from_end / 7),
        _ => String::new(),
    }
}

/// The fixed look-back windows offered by the dashboard and reports views.
/// Bucket counts and spans are per-view constants, never derived from data.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeWindow {
    /// Dashboard: 24 hourly buckets.
    Hours24,
    /// Reports: 30 daily buckets.
    Days30,
    /// Reports: 90 daily buckets.
    Days90,
    /// Reports: 365 daily buckets.
    Days365,
}

impl TimeWindow {
    pub const fn bucket_count(&self) -> usize {
        match self {
            TimeWindow::Hours24 => 24,
            TimeWindow::Days30 => 30,
            TimeWindow::Days90 => 90,
            TimeWindow::Days365 => 365,
        }
    }

    pub fn bucket_span(&self) -> Duration {
        match self {
            TimeWindow::Hours24 => Duration::hours(1),
            _ => Duration::days(1),
        }
    }

    /// Horizontal grid lines drawn for this view.
    pub const fn grid_lines(&self) -> usize {
        match self {
            TimeWindow::Hours24 => 5,
            _ => 4,
        }
    }

    /// Build this window's grid ending at `now`.
    pub fn grid(&self, now: DateTime<Utc>) -> Vec<TimeBucket> {
        build_grid(now, self.bucket_count(), self.bucket_span())
    }

    pub const fn name(&self) -> &'static str {
        match self {
            TimeWindow::Hours24 => "24h",
            TimeWindow::Days30 => "30d",
            TimeWindow::Days90 => "90d",
            TimeWindow::Days365 => "365d",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown time window '{0}' (expected 24h, 30d, 90d or 365d)")]
pub struct UnknownWindow(pub String);

impl FromStr for TimeWindow {
    type Err = UnknownWindow;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "24h" => Ok(TimeWindow::Hours24),
            "30d" => Ok(TimeWindow::Days30),
            "90d" => Ok(TimeWindow::Days90),
            "365d" => Ok(TimeWindow::Days365),
            other => Err(UnknownWindow(other.to_string())),
        }
    }
}
