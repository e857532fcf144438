//! Performance benchmarks for input parsing and list projection.
//!
//! These benchmarks measure:
//! - Multi-value `VALUE (LABEL)` parsing for growing value counts
//! - Date-time normalization for the first and last accepted pattern
//! - Re-projecting the displayed list with flagged persons

use address_book::domain::Email;
use address_book::parsing::parse_date_time;
use address_book::{parse_command, Model};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::time::Duration;

fn labeled_emails(count: usize) -> String {
    (0..count)
        .map(|i| format!("user{}@example.com (label{})", i, i))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Benchmark multi-value parsing at different sizes.
fn bench_labeled_values(c: &mut Criterion) {
    let mut group = c.benchmark_group("labeled_values");

    for count in [1, 5, 20, 50] {
        let input = labeled_emails(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &input, |b, input| {
            b.iter(|| Email::new(black_box(input)).unwrap());
        });
    }
    group.finish();
}

/// Benchmark date-time parsing; later patterns are tried after earlier ones fail.
fn bench_date_time(c: &mut Criterion) {
    let mut group = c.benchmark_group("date_time");

    for (name, input) in [("first_pattern", "12-01-2025 1400"), ("last_pattern", "12-01-2025 14:00")] {
        group.bench_function(name, |b| {
            b.iter(|| parse_date_time(black_box(input)).unwrap());
        });
    }
    group.bench_function("rejected", |b| {
        b.iter(|| parse_date_time(black_box("next tuesday")).is_err());
    });
    group.finish();
}

/// Benchmark flag and unflag on books of different sizes (each re-projects the list).
fn bench_flag_projection(c: &mut Criterion) {
    let mut group = c.benchmark_group("flag_projection");

    for size in [10, 100, 1000] {
        let mut model = Model::default();
        for i in 0..size {
            let line = format!("add n=Person {} mn=9{:07} e=p{}@example.com a=Street {}", i, i, i, i);
            parse_command(&line)
                .and_then(|command| command.execute(&mut model))
                .unwrap();
        }

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                parse_command("flag 1")
                    .and_then(|command| command.execute(&mut model))
                    .unwrap();
                parse_command("unflag 1")
                    .and_then(|command| command.execute(&mut model))
                    .unwrap();
            });
        });
    }
    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .measurement_time(Duration::from_secs(5))
        .sample_size(50);
    targets = bench_labeled_values,
        bench_date_time,
        bench_flag_projection
}

criterion_main!(benches);
