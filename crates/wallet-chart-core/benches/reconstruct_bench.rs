use chrono::{DateTime, Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use wallet_chart_core::{build_grid, reconstruct, TransactionRecord, TxAction, TxStatus};

fn build_log(n: usize, now: DateTime<Utc>) -> Vec<TransactionRecord> {
    (0..n)
        .map(|i| TransactionRecord {
            id: format!("tx{i}"),
            timestamp: Some(now - Duration::minutes((i as i64 * 37) % (365 * 24 * 60))),
            amount: 1.0 + (i as f64 * 0.003).sin().abs(),
            action: if i % 2 == 0 { TxAction::Received } else { TxAction::Sent },
            counterparty: None,
            status: TxStatus::Success,
        })
        .collect()
}

fn bench_reconstruct(c: &mut Criterion) {
    let now = Utc.with_ymd_and_hms(2024, 3, 15, 14, 0, 0).unwrap();
    let grid = build_grid(now, 365, Duration::days(1));

    let mut group = c.benchmark_group("reconstruct");
    for &n in &[1_000usize, 10_000usize] {
        let log = build_log(n, now);
        group.bench_function(format!("year_grid_{n}_txs"), |b| {
            b.iter(|| {
                let series = reconstruct(&log, 500.0, &grid);
                black_box(series);
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_reconstruct);
criterion_main!(benches);
