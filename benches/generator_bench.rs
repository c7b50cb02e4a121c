// Benchmarks for key generation.
//
// - next: sequential keys from empty, small and large steps
// - prev: walking down from the last key
// - next_before: repeated insertion into one gap, and into random gaps

use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput,
};
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

use ordkey::charset;
use ordkey::Generator;

const RUN: u64 = 10_000;

fn bench_next(c: &mut Criterion) {
    let mut group = c.benchmark_group("next");
    group.throughput(Throughput::Elements(RUN));

    for step_size in [1usize, 100] {
        let generator = Generator::new_or_panic(charset::ALL_NO_ESCAPE, 4, step_size);
        group.bench_with_input(BenchmarkId::new("bs=4", step_size), &generator, |b, generator| {
            b.iter(|| {
                let mut key = String::new();
                for _ in 0..RUN {
                    key = generator.next(black_box(&key));
                }
                key
            })
        });
    }
    group.finish();
}

fn bench_prev(c: &mut Criterion) {
    let mut group = c.benchmark_group("prev");
    group.throughput(Throughput::Elements(RUN));

    let generator = Generator::new_or_panic(charset::ALL_NO_ESCAPE, 4, 100);
    group.bench_function("bs=4/100", |b| {
        b.iter(|| {
            let mut key = generator.last();
            for _ in 0..RUN {
                key = match generator.prev(black_box(&key)) {
                    Ok(prev) => prev,
                    Err(_) => break,
                };
            }
            key
        })
    });
    group.finish();
}

fn bench_next_before(c: &mut Criterion) {
    let mut group = c.benchmark_group("next_before");
    let generator = Generator::new_or_panic(charset::ALL_NO_ESCAPE, 4, 100);

    group.throughput(Throughput::Elements(1_000));
    group.bench_function("same_gap", |b| {
        b.iter(|| {
            let low = generator.first();
            let high = generator.next(&low);
            generator.fill_between(black_box(&low), black_box(&high), 1_000)
        })
    });

    let keys: Vec<String> = generator.ascending("").take(1_000).collect();
    group.bench_function("random_gap", |b| {
        let mut rng = StdRng::seed_from_u64(42);
        b.iter(|| {
            let pos = rng.gen_range(1..keys.len());
            generator.next_before(black_box(&keys[pos - 1]), black_box(&keys[pos]))
        })
    });
    group.finish();
}

criterion_group!(benches, bench_next, bench_prev, bench_next_before);
criterion_main!(benches);
