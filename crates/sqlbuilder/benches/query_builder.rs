use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sqlbuilder::{Dialect, InsertValues, Query};

fn columns(n: usize) -> Vec<String> {
    (0..n).map(|i| format!("col{i}")).collect()
}

fn bench_bulk_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_builder/bulk_insert");
    let cols = columns(5);

    for rows in [1, 10, 100, 1000] {
        for dialect in [Dialect::Positional, Dialect::Unnumbered] {
            let id = BenchmarkId::new(dialect.to_string(), rows);
            group.bench_with_input(id, &rows, |b, &rows| {
                let mut q: Query<i64> = Query::new(["t"], dialect);
                b.iter(|| {
                    let values = InsertValues::rows((0..rows as i64).map(|r| [r; 5]));
                    let stmt = q.insert(&cols, values).unwrap();
                    black_box(stmt.as_str().len());
                });
            });
        }
    }

    group.finish();
}

fn bench_raw_rewrite(c: &mut Criterion) {
    let mut group = c.benchmark_group("query_builder/raw_rewrite");

    for n in [1, 10, 100] {
        let template = vec!["c=?"; n].join(" AND ");
        group.bench_with_input(BenchmarkId::from_parameter(n), &template, |b, template| {
            let mut q: Query<i64> = Query::new(["t"], Dialect::Positional);
            b.iter(|| {
                q.reset();
                q.raw(template, 0..n as i64).unwrap();
                black_box(q.as_str().len());
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_bulk_insert, bench_raw_rewrite);
criterion_main!(benches);
