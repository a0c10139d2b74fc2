use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use kcrypt_algorithms::hash::{HashFunction, Sha256};

// Test data sizes
const SIZES: &[usize] = &[
    64,    // 1 block
    256,   // 4 blocks
    1024,  // 1 KB
    16384, // 16 KB
];

fn bench_sha256(c: &mut Criterion) {
    let mut group = c.benchmark_group("SHA-256");

    for &size in SIZES {
        let data = vec![0u8; size];

        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| {
                let digest = Sha256::digest(black_box(data));
                black_box(digest);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_sha256);
criterion_main!(benches);
