//! Benchmarks for the AUM accumulation pass.
//!
//! Run with: cargo bench -p fundlens-analytics

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use fundlens_analytics::{accumulate, HoldingPriceRow, Portfolio};
use fundlens_core::Date;

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

/// One portfolio holding `stocks` stocks priced weekly over `weeks` weeks.
fn create_rows(stocks: i64, weeks: i64) -> Vec<HoldingPriceRow> {
    let start = Date::from_ymd(2020, 1, 3).unwrap();
    let mut rows = Vec::with_capacity((stocks * weeks) as usize);

    for week in 0..weeks {
        let date = start.add_days(week * 7);
        for stock_id in 0..stocks {
            rows.push(HoldingPriceRow {
                portfolio_id: 1,
                stock_id,
                shares_purchased: Decimal::from(100 + stock_id),
                purchase_date: start,
                price: Decimal::new(5_000 + (stock_id * 17 + week * 3) % 5_000, 2),
                price_date: date,
            });
        }
    }

    rows
}

fn bench_accumulate(c: &mut Criterion) {
    let portfolio = Portfolio::new(1, "Bench", 2020, dec!(100_000_000), "Active");

    let mut group = c.benchmark_group("accumulate");
    for &(stocks, weeks) in &[(10i64, 52i64), (50, 260), (200, 520)] {
        let rows = create_rows(stocks, weeks);
        group.throughput(Throughput::Elements(rows.len() as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{stocks}x{weeks}")),
            &rows,
            |b, rows| b.iter(|| accumulate(black_box(&portfolio), black_box(rows)).unwrap()),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_accumulate);
criterion_main!(benches);
