// File: crates/wallet-chart-core/src/format.rs
// Summary: Value formatting for axis ticks and tooltips.

/// Two-decimal fixed formatting with an optional currency suffix:
/// `format_value(12.3, Some("CW"))` is `"12.30 CW"`, plain otherwise.
pub fn format_value(value: f64, currency: Option<&str>) -> String {
    match currency {
        Some(symbol) => format!("{value:.2} {symbol}"),
        None => format!("{value:.2}"),
    }
}
