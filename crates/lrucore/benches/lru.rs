use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use lrucore::Lru;

fn bench_cached_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("cached_get");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("get_1kb_cached", |b| {
        let cache = Lru::new(1000);
        let data = vec![b'x'; 1024];

        // Pre-populate
        for id in 0..100u64 {
            cache.set(id, data.clone()).unwrap();
        }

        let mut counter = 0u64;
        b.iter(|| {
            black_box(cache.get(&(counter % 100)).unwrap());
            counter += 1;
        });
    });

    group.bench_function("read_1kb_cached", |b| {
        let cache = Lru::new(1000);
        let data = vec![b'x'; 1024];

        for id in 0..100u64 {
            cache.set(id, data.clone()).unwrap();
        }

        let mut counter = 0u64;
        b.iter(|| {
            black_box(cache.read(&(counter % 100)));
            counter += 1;
        });
    });

    group.finish();
}

fn bench_mixed_50_50(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("50_get_50_set", |b| {
        let cache = Lru::new(1000);
        let data = vec![b'x'; 1024];

        for id in 0..100u64 {
            cache.set(id, data.clone()).unwrap();
        }

        let mut counter = 0u64;
        b.iter(|| {
            if counter % 2 == 0 {
                black_box(cache.get(&(counter % 100)).ok());
            } else {
                black_box(cache.set(counter % 500, data.clone()).ok());
            }
            counter += 1;
        });
    });

    group.finish();
}

fn bench_eviction_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("eviction");
    group.sample_size(50);
    group.throughput(Throughput::Elements(1));

    group.bench_function("set_distinct_keys", |b| {
        let cache = Lru::new(10); // Small cache
        let mut counter = 0u64;

        // Every set past the first few evicts the tail
        b.iter(|| {
            black_box(cache.set(counter, counter).unwrap());
            counter += 1;
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_cached_get,
    bench_mixed_50_50,
    bench_eviction_churn
);
criterion_main!(benches);
