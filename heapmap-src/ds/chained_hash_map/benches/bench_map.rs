use chained_hash_map::ChainedHashMap;
use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion,
};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;
use randgen::{seeded_rng, Gen, Shuffled, StrictAsc};
use scan_map::ScanMap;

fn bench_map(c: &mut Criterion) {
    let mut group = c.benchmark_group("map");

    let mut rng = seeded_rng();
    for len in [100, 1_000] {
        let keys = Shuffled(StrictAsc { bound: 0..1_000_000, len })
            .generate(&mut rng);

        for cap in [10, 100] {
            let id = BenchmarkId::new(format!("chained/{cap}"), len);
            group.bench_with_input(id, &keys, |b, keys| {
                b.iter(|| {
                    let mut rng = ChaCha20Rng::seed_from_u64(cap as u64);
                    let mut map = ChainedHashMap::with_rng(cap, &mut rng);
                    for &k in keys {
                        map.put(k, k);
                    }
                    for k in keys {
                        black_box(map.get(k));
                    }
                })
            });
        }
        let id = BenchmarkId::new("scan", len);
        group.bench_with_input(id, &keys, |b, keys| {
            b.iter(|| {
                let mut map = ScanMap::new();
                for &k in keys {
                    map.put(k, k);
                }
                for k in keys {
                    black_box(map.get(k));
                }
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_map);
criterion_main!(benches);
