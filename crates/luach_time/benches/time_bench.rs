use criterion::{Criterion, black_box, criterion_group, criterion_main};
use luach_time::{DayOfWeek, absolute_to_gregorian, gregorian_to_absolute};

fn gregorian_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("gregorian");
    group.bench_function("gregorian_to_absolute", |b| {
        b.iter(|| gregorian_to_absolute(black_box(2024), black_box(10), black_box(3)))
    });
    group.bench_function("absolute_to_gregorian", |b| {
        b.iter(|| absolute_to_gregorian(black_box(739_162)))
    });
    group.bench_function("day_of_week", |b| {
        b.iter(|| DayOfWeek::from_absolute(black_box(739_162)))
    });
    group.finish();
}

criterion_group!(benches, gregorian_bench);
criterion_main!(benches);
