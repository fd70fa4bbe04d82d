//! Benchmarks for Revivo data generation and view building
//!
//! Run with: cargo bench

use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use revivo::report::{render, ReportFormat};
use revivo::vitals::{Category, DayCount, MockDataGenerator};
use revivo::{build_view, DashboardSession};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");

    for days in [14usize, 365, 3650] {
        group.throughput(Throughput::Elements(days as u64));

        group.bench_function(format!("generate_{}", days), |b| {
            let mut generator = MockDataGenerator::seeded(42);
            b.iter(|| generator.generate(black_box(DayCount::new(days).unwrap()), today()))
        });
    }

    group.finish();
}

fn bench_view(c: &mut Criterion) {
    let mut group = c.benchmark_group("view");
    let dataset = MockDataGenerator::seeded(42).generate(DayCount::new(365).unwrap(), today());

    for category in Category::all() {
        group.bench_function(format!("build_view_{}", category), |b| {
            b.iter(|| build_view(black_box(&dataset), *category))
        });
    }

    group.finish();
}

fn bench_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("report");
    let session = DashboardSession::new(
        MockDataGenerator::seeded(42).generate(DayCount::default(), today()),
    );

    for (name, format) in [
        ("table", ReportFormat::Table),
        ("json", ReportFormat::Json),
        ("csv", ReportFormat::Csv),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut buf = Vec::with_capacity(8 * 1024);
                render(black_box(&session), format, &mut buf).unwrap();
                buf
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_generate, bench_view, bench_report);
criterion_main!(benches);
