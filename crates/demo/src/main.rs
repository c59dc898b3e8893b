// File: crates/demo/src/main.rs
// Summary: Demo loads (or synthesizes) a transaction log, reconstructs each
// balance series, renders PNGs at two pixel densities, and shows a hover lookup.

use anyhow::{Context, Result};
use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use wallet_chart_core::{
    locate, reconstruct, tooltip_at, RenderOptions, TimeWindow, TransactionRecord, TxAction,
    TxStatus,
};

fn main() -> Result<()> {
    // Args: look-back window (default 24h), optional JSON transaction log.
    let window: TimeWindow = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "24h".to_string())
        .parse()?;
    let log_path = std::env::args().nth(2);

    let now = Utc::now();
    let (transactions, current_balance) = match log_path {
        Some(raw) => load_log(Path::new(&raw))?,
        None => sample_history(now),
    };
    println!(
        "Loaded {} transactions, current balance {:.2} CW",
        transactions.len(),
        current_balance
    );

    let grid = window.grid(now);
    let series = reconstruct(&transactions, current_balance, &grid);
    let low = series.iter().fold(f64::INFINITY, |m, p| m.min(p.value));
    let high = series.iter().fold(0.0_f64, |m, p| m.max(p.value));
    println!(
        "Window {}: {} buckets, balance range [{:.2}, {:.2}]",
        window.name(),
        series.len(),
        low,
        high
    );

    let mut opts = RenderOptions::default();
    opts.grid_lines = window.grid_lines();
    opts.currency = Some("CW".to_string());

    for dpr in [1.0_f32, 2.0] {
        let out = out_name(window.name(), dpr);
        let layout = wallet_chart_skia::render_to_png(&series, dpr, &opts, &out)?;
        println!("Wrote {} ({} plotted points)", out.display(), layout.points.len());

        // Hover walkthrough at the first density: aim just off the middle point.
        if dpr == 1.0 && !layout.is_empty() {
            let target = layout.points[layout.points.len() / 2];
            match locate(target.x + 4.0, target.y - 3.0, &layout) {
                Some(idx) => {
                    let tip = tooltip_at(&series, idx, opts.currency.as_deref())
                        .expect("located index is in range");
                    println!(
                        "Hover near ({:.0}, {:.0}) -> point {} [{} | {}]",
                        target.x + 4.0,
                        target.y - 3.0,
                        idx,
                        tip.bucket_label,
                        tip.formatted_value
                    );
                }
                None => println!("Hover missed (no point within 15px)"),
            }
        }
    }

    Ok(())
}

/// On-disk demo log shape: `{ "current_balance": 57.5, "transactions": [...] }`.
#[derive(Deserialize)]
struct DemoLog {
    current_balance: f64,
    transactions: Vec<TransactionRecord>,
}

fn load_log(path: &Path) -> Result<(Vec<TransactionRecord>, f64)> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading transaction log '{}'", path.display()))?;
    let log: DemoLog = serde_json::from_str(&raw)
        .with_context(|| format!("parsing transaction log '{}'", path.display()))?;
    Ok((log.transactions, log.current_balance))
}

/// Deterministic sample history: one transaction every 6 hours over 60 days,
/// sine-shaped amounts, no randomness. The starting balance is chosen so the
/// reconstructed series opens near 50 CW.
fn sample_history(now: DateTime<Utc>) -> (Vec<TransactionRecord>, f64) {
    let mut transactions = Vec::with_capacity(240);
    for i in 0..240_i64 {
        let action = match i % 3 {
            0 => TxAction::Received,
            1 => TxAction::Sent,
            _ => TxAction::Mined,
        };
        let amount = 2.0 + ((i as f64) / 5.0).sin().abs() * 3.0;
        transactions.push(TransactionRecord {
            id: format!("demo-{i}"),
            timestamp: Some(now - Duration::hours(i * 6)),
            amount: (amount * 100.0).round() / 100.0,
            action,
            counterparty: match action {
                TxAction::Sent => Some("wallet-2fd81c".to_string()),
                TxAction::Received => Some("wallet-9a44e0".to_string()),
                TxAction::Mined => None,
            },
            status: if i == 0 { TxStatus::Pending } else { TxStatus::Success },
        });
    }
    let current_balance = 50.0 + transactions.iter().map(TransactionRecord::effect).sum::<f64>();
    (transactions, current_balance)
}

fn out_name(window: &str, dpr: f32) -> PathBuf {
    let mut out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    out.push(format!("balance_{}_{}x.png", window, dpr as i32));
    out
}
