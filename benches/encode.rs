use bin32::{build_weight_table, encode_binary, MAX_VALUE, WORD_BITS};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_weight_table(c: &mut Criterion) {
    c.bench_function("build_weight_table_32", |bencher| {
        bencher.iter(|| build_weight_table(black_box(WORD_BITS)).unwrap())
    });
}

fn bench_encode(c: &mut Criterion) {
    let table = build_weight_table(WORD_BITS).unwrap();
    let mut group = c.benchmark_group("encode_binary");

    for value in [0u32, 5, 255, 1_234_567, MAX_VALUE] {
        group.bench_with_input(BenchmarkId::from_parameter(value), &value, |bencher, &v| {
            bencher.iter(|| encode_binary(black_box(v), black_box(&table)).unwrap())
        });
    }

    // Table built fresh per call, the worst-case usage pattern.
    group.bench_function("with_fresh_table", |bencher| {
        bencher.iter(|| {
            let table = build_weight_table(black_box(WORD_BITS)).unwrap();
            encode_binary(black_box(MAX_VALUE), &table).unwrap()
        })
    });

    group.finish();
}

criterion_group!(benches, bench_weight_table, bench_encode);
criterion_main!(benches);
