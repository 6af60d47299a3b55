use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use luach_rs::{HolidayConfig, daf_yomi_bavli, holiday, jewish_date};

fn convenience_bench(c: &mut Criterion) {
    let date = NaiveDate::from_ymd_opt(2025, 4, 13).expect("valid date");
    let mut group = c.benchmark_group("convenience");
    group.bench_function("jewish_date", |b| b.iter(|| jewish_date(black_box(date))));
    group.bench_function("holiday", |b| {
        b.iter(|| holiday(black_box(date), black_box(HolidayConfig::default())))
    });
    group.bench_function("daf_yomi_bavli", |b| b.iter(|| daf_yomi_bavli(black_box(date))));
    group.finish();
}

criterion_group!(benches, convenience_bench);
criterion_main!(benches);
