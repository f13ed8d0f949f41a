//! Criterion benchmarks for periodic schedule generation.
//!
//! Measures unadjusted, adjusted and full schedule generation for monthly
//! and weekly schedules of increasing length.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sched_periodic::{Frequency, ScheduleDefinition, StubConvention};
use sched_time::{BusinessDayAdjustment, BusinessDayConvention, Date, WeekendsOnly};

fn definition(years: u16, frequency: Frequency) -> ScheduleDefinition {
    let start = Date::from_ymd(2014, 6, 4).unwrap();
    let end = Date::from_ymd(2014 + years, 9, 17).unwrap();
    ScheduleDefinition::of_eom(
        start,
        end,
        frequency,
        BusinessDayAdjustment::new(BusinessDayConvention::ModifiedFollowing, WeekendsOnly),
        StubConvention::ShortInitial,
        false,
    )
    .unwrap()
}

/// Benchmark monthly generation over 1, 10 and 50 years.
fn bench_monthly(c: &mut Criterion) {
    let mut group = c.benchmark_group("monthly");

    for years in [1u16, 10, 50] {
        let defn = definition(years, Frequency::P1M);

        group.bench_with_input(BenchmarkId::new("unadjusted", years), &defn, |b, defn| {
            b.iter(|| black_box(defn).create_unadjusted_dates().unwrap());
        });
        group.bench_with_input(BenchmarkId::new("adjusted", years), &defn, |b, defn| {
            b.iter(|| black_box(defn).create_adjusted_dates().unwrap());
        });
        group.bench_with_input(BenchmarkId::new("schedule", years), &defn, |b, defn| {
            b.iter(|| black_box(defn).create_schedule().unwrap());
        });
    }

    group.finish();
}

/// Benchmark weekly generation, where roll normalization dominates.
fn bench_weekly(c: &mut Criterion) {
    let mut group = c.benchmark_group("weekly");

    for years in [1u16, 10] {
        let defn = definition(years, Frequency::P1W);
        group.bench_with_input(BenchmarkId::new("schedule", years), &defn, |b, defn| {
            b.iter(|| black_box(defn).create_schedule().unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_monthly, bench_weekly);
criterion_main!(benches);
