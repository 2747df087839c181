//! Estimator, projection and rendering benchmarks.
//!
//! Run with: `cargo bench --package capest-bench`

use capest_bench::{SCENARIOS, start_month};
use capest_lib::prelude::*;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn estimate_benchmark(c: &mut Criterion) {
    let adx = AdxEstimator::default();
    let storage = StorageEstimator::default();
    let messaging = MessagingEstimator::default();

    let mut group = c.benchmark_group("estimate");
    for scenario in &SCENARIOS {
        let inputs = scenario.adx_inputs();
        group.bench_with_input(BenchmarkId::new("adx", scenario.name), &inputs, |b, inputs| {
            b.iter(|| adx.estimate(black_box(inputs)));
        });

        let inputs = scenario.storage_inputs();
        group.bench_with_input(BenchmarkId::new("storage", scenario.name), &inputs, |b, inputs| {
            b.iter(|| storage.estimate(black_box(inputs)));
        });

        let request = scenario.messaging_request(&messaging);
        group.bench_with_input(
            BenchmarkId::new("messaging", scenario.name),
            &request,
            |b, request| {
                b.iter(|| {
                    messaging
                        .estimate_partitions(black_box(&request.inputs))
                        .and_then(|partitions| messaging.check_capacity(&partitions, &request.config))
                });
            },
        );
    }
    group.finish();
}

fn report_benchmark(c: &mut Criterion) {
    let adx = AdxEstimator::default();
    let storage = StorageEstimator::default();
    let messaging = MessagingEstimator::default();
    let start = start_month();

    let mut group = c.benchmark_group("report");
    for scenario in &SCENARIOS {
        let inputs = scenario.adx_inputs();
        group.bench_with_input(BenchmarkId::new("adx", scenario.name), &inputs, |b, inputs| {
            b.iter(|| adx.report(black_box(inputs), start));
        });

        let inputs = scenario.storage_inputs();
        group.bench_with_input(BenchmarkId::new("storage", scenario.name), &inputs, |b, inputs| {
            b.iter(|| storage.report(black_box(inputs), start));
        });

        let request = scenario.messaging_request(&messaging);
        group.bench_with_input(
            BenchmarkId::new("messaging", scenario.name),
            &request,
            |b, request| {
                b.iter(|| messaging.report(black_box(request), start));
            },
        );
    }
    group.finish();
}

fn session_benchmark(c: &mut Criterion) {
    let start = start_month();

    c.bench_function("session/walkthrough", |b| {
        b.iter(|| {
            let mut session = MessagingSession::default();
            session.estimate_partitions(black_box("20"), IngressUnit::GibPerSec, black_box("2"))?;
            session.set_tier(Tier::Custom);
            session.set_cluster_count(2)?;
            session.check_capacity()?;
            session.projection(start)
        });
    });
}

fn format_benchmark(c: &mut Criterion) {
    let start = start_month();
    let scenario = SCENARIOS[1];
    let report: Report = AdxEstimator::default()
        .report(&scenario.adx_inputs(), start)
        .into();

    let mut group = c.benchmark_group("format");
    for format in OutputFormat::all() {
        let formatter = format.formatter();
        group.bench_function(format.as_str(), |b| {
            let mut out = Vec::with_capacity(4096);
            b.iter(|| {
                out.clear();
                formatter.write_report(black_box(&report), &mut out)
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    estimate_benchmark,
    report_benchmark,
    session_benchmark,
    format_benchmark
);
criterion_main!(benches);
