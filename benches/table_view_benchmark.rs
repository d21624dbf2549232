//! Benchmarks for the table view pipeline and a full frame render.
//!
//! Run with: cargo bench

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use poolwatch::adapters::ScriptedGateway;
use poolwatch::app::{App, AppMessage};
use poolwatch::config::Config;
use poolwatch::models::{PoolField, PoolRecord, PoolStatus};
use poolwatch::ui;
use poolwatch::view_state::{derive_rows, SortDirection, SortState, StatusFilter};
use ratatui::{backend::TestBackend, Terminal};

/// Generate `count` pools with mixed statuses and scattered numeric fields
fn generate_pools(count: usize) -> Vec<PoolRecord> {
    (0..count)
        .map(|i| PoolRecord {
            id: ((i * 7919) % (count * 3 + 1)).to_string(),
            name: format!("Pool {:05}", (i * 31) % count.max(1)),
            hashrate_ths: ((i * 37) % 1000) as f64 + 0.5,
            active_workers: ((i * 13) % 5000) as u64,
            reject_rate: ((i * 3) % 100) as f64 / 1000.0,
            status: PoolStatus::ALL[i % 3],
            last_24h_revenue_btc: (i % 50) as f64 / 100.0,
            uptime_percent: 90.0 + (i % 10) as f64,
            location: "Frankfurt".to_string(),
            fee_percent: 1.5,
        })
        .collect()
}

/// Benchmark filter + sort for different list sizes
fn bench_derive_rows(c: &mut Criterion) {
    let mut group = c.benchmark_group("derive_rows");

    for size in [10, 100, 1_000, 10_000].iter() {
        let pools = generate_pools(*size);
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("id_desc", size), &pools, |b, pools| {
            let sort = SortState::new(PoolField::Id, SortDirection::Desc);
            b.iter(|| black_box(derive_rows(black_box(pools), StatusFilter::All, sort)).len());
        });

        group.bench_with_input(BenchmarkId::new("online_by_name", size), &pools, |b, pools| {
            let filter = StatusFilter::Only(PoolStatus::Online);
            b.iter(|| black_box(derive_rows(black_box(pools), filter, SortState::default())).len());
        });
    }

    group.finish();
}

/// Benchmark one full frame into a test backend
fn bench_render_frame(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_frame");

    for size in [10, 1_000].iter() {
        let mut app = App::new(Config::default(), Arc::new(ScriptedGateway::new()));
        app.update_terminal_dimensions(160, 50);
        let ticket = app.store.begin_fetch_pools();
        app.handle_message(AppMessage::PoolsFetched {
            ticket,
            result: Ok(generate_pools(*size)),
        });
        let mut terminal = Terminal::new(TestBackend::new(160, 50)).unwrap();

        group.bench_function(BenchmarkId::from_parameter(size), |b| {
            b.iter(|| {
                terminal.draw(|f| ui::render(f, &mut app)).unwrap();
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_derive_rows, bench_render_frame);
criterion_main!(benches);
