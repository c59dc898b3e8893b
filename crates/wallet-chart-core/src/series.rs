// File: crates/wallet-chart-core/src/series.rs
// Summary: Balance-history reconstruction over a fixed time grid.

use crate::timegrid::TimeBucket;
use crate::transaction::TransactionRecord;

/// One reconstructed balance sample, aligned to its grid bucket. Produced
/// fresh on every reconstruction; no identity beyond its index.
#[derive(Clone, Debug, PartialEq)]
pub struct SeriesPoint {
    pub bucket: TimeBucket,
    /// Reconstructed balance at the bucket boundary, clamped to >= 0.
    pub value: f64,
}

/// Reconstruct the historical balance at each bucket boundary by "undoing"
/// every transaction that happened at or after it: the current balance
/// already reflects those, so each bucket's value is
/// `current_balance - sum(effect(tx) for tx.timestamp >= bucket.start)`.
///
/// Records without a parseable timestamp are excluded entirely. Negative
/// reconstructed values (possible with partial or pending data) clamp to
/// zero. O(buckets x transactions); bucket counts are bounded (<= 365), so
/// the full recompute per call is fine.
pub fn reconstruct(
    transactions: &[TransactionRecord],
    current_balance: f64,
    grid: &[TimeBucket],
) -> Vec<SeriesPoint> {
    grid.iter()
        .map(|bucket| {
            let undone: f64 = transactions
                .iter()
                .filter(|tx| tx.timestamp.is_some_and(|ts| ts >= bucket.start))
                .map(TransactionRecord::effect)
                .sum();
            SeriesPoint {
                bucket: bucket.clone(),
                value: (current_balance - undone).max(0.0),
            }
        })
        .collect()
}

/// Largest series value with a floor of 1.0, so the vertical scale
/// denominator is never zero.
pub fn max_value(series: &[SeriesPoint]) -> f64 {
    series.iter().fold(1.0_f64, |m, p| m.max(p.value))
}
