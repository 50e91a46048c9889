use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use fibseq::{iterative, recursive};
use std::hint::black_box;

fn criterion_benchmark(c: &mut Criterion) {
    {
        let mut group = c.benchmark_group("fibonacci-sequence");
        for n in [10u32, 20, 25] {
            group.bench_with_input(BenchmarkId::new("loop", n), &n, |b, &n| {
                b.iter(|| iterative::sequence(black_box(n)).expect("sequence"))
            });
            group.bench_with_input(BenchmarkId::new("recursion", n), &n, |b, &n| {
                b.iter(|| recursive::sequence(black_box(n)).expect("sequence"))
            });
        }
    }

    {
        let mut group = c.benchmark_group("fibonacci-term");
        group.measurement_time(std::time::Duration::from_secs(5));
        group.bench_function("loop", |b| b.iter(|| iterative::term(black_box(26)).expect("term")));
        group.bench_function("recursion", |b| b.iter(|| recursive::fib(black_box(26))));
    }
}

criterion_group!(
    name = benches;
    config = Criterion::default().significance_level(0.1);
    targets = criterion_benchmark
);

criterion_main!(benches);
