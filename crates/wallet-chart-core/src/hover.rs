// File: crates/wallet-chart-core/src/hover.rs
// Summary: Pointer-to-point hover lookup and the tooltip payload it keys.

use crate::format::format_value;
use crate::geometry::PointF;
use crate::render::RenderLayout;
use crate::series::SeriesPoint;
use crate::types::HOVER_RADIUS;

/// Index of the plotted point nearest to the cursor, if any lies strictly
/// within [`HOVER_RADIUS`] logical pixels.
///
/// Pure query over the layout snapshot; re-run on every pointer move with
/// the most recent render's layout (a stale layout gives stale answers, so
/// callers re-render and re-locate together). Ties break to the lowest
/// index: the scan only replaces the best candidate on a strict distance
/// improvement.
pub fn locate(cursor_x: f32, cursor_y: f32, layout: &RenderLayout) -> Option<usize> {
    let cursor = PointF::new(cursor_x, cursor_y);
    let mut best: Option<(usize, f32)> = None;
    for (i, point) in layout.points.iter().enumerate() {
        let d2 = cursor.dist2(*point);
        if best.is_none_or(|(_, best_d2)| d2 < best_d2) {
            best = Some((i, d2));
        }
    }
    best.and_then(|(i, d2)| (d2 < HOVER_RADIUS * HOVER_RADIUS).then_some(i))
}

/// What the tooltip shows for a located point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TooltipPayload {
    pub bucket_label: String,
    pub formatted_value: String,
}

/// Tooltip content for the series point at `index`, or `None` when the index
/// is out of range. Buckets the sparse axis policy left unlabeled get a full
/// date label so the tooltip is never blank.
pub fn tooltip_at(series: &[SeriesPoint], index: usize, currency: Option<&str>) -> Option<TooltipPayload> {
    let point = series.get(index)?;
    let bucket_label = if point.bucket.label.is_empty() {
        point.bucket.start.format("%b %-d").to_string()
    } else {
        point.bucket.label.clone()
    };
    Some(TooltipPayload {
        bucket_label,
        formatted_value: format_value(point.value, currency),
    })
}
