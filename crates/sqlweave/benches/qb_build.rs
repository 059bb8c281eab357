use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sqlweave::qb::{self, Expression, SelectQb, SqlQb, and, eq, or, value};

/// SELECT col0, col1, ... FROM t WHERE col0 = ?1 AND col1 = ?2 ...
fn build_select(n: usize) -> SelectQb {
    let columns: Vec<String> = (0..n).map(|i| format!("col{i}")).collect();
    let mut qb = qb::select(&columns).from("t");
    for (i, column) in columns.iter().enumerate() {
        qb = qb.where_(eq(column, value(i as i64)));
    }
    qb
}

/// A balanced AND/OR tree of the given depth.
fn nested_condition(depth: usize, leaf: &mut i64) -> Expression {
    if depth == 0 {
        *leaf += 1;
        return eq("c", value(*leaf));
    }
    let left = nested_condition(depth - 1, leaf);
    let right = nested_condition(depth - 1, leaf);
    if depth % 2 == 0 {
        and([left, right])
    } else {
        or([left, right])
    }
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("qb/build");

    for n in [1, 5, 10, 50, 100] {
        let qb = build_select(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &qb, |b, qb| {
            b.iter(|| black_box(qb.build()));
        });
    }

    group.finish();
}

fn bench_compose_and_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("qb/compose_and_build");

    for n in [1, 5, 10, 50, 100] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| black_box(build_select(n).build()));
        });
    }

    group.finish();
}

fn bench_nested_conditions(c: &mut Criterion) {
    let mut group = c.benchmark_group("qb/nested_conditions");

    for depth in [2, 4, 6, 8] {
        let mut leaf = 0;
        let qb = qb::select(["id"])
            .from("t")
            .where_(nested_condition(depth, &mut leaf));
        group.bench_with_input(BenchmarkId::from_parameter(depth), &qb, |b, qb| {
            b.iter(|| black_box(qb.build()));
        });
    }

    group.finish();
}

fn bench_repeated_values(c: &mut Criterion) {
    let mut group = c.benchmark_group("qb/repeated_values");

    for n in [10, 100, 500] {
        let rows: Vec<i64> = (0..n).map(|i| i % 7).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &rows, |b, rows| {
            b.iter(|| {
                let mut qb = qb::insert("t", ["v"]);
                for v in rows {
                    qb = qb.values([value(*v)]);
                }
                black_box(qb.build());
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_build,
    bench_compose_and_build,
    bench_nested_conditions,
    bench_repeated_values
);
criterion_main!(benches);
