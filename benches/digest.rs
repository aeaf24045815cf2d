use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput,
};
use sha1::{Digest, Sha1};

use compact_sha1::sha1_hash;

fn hash_reference(bytes: &[u8]) -> [u8; 20] {
    let mut hash = Sha1::new();
    hash.update(bytes);
    hash.finalize().into()
}

fn criterion_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("Digest");

    for size in [0usize, 55, 64, 1024, 64 * 1024] {
        let input: Vec<u8> = (0..size).map(|i| (i % 256) as u8).collect();
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(
            BenchmarkId::new("Compact", size),
            input.as_slice(),
            |b, i| b.iter(|| black_box(sha1_hash(black_box(i)))),
        );

        group.bench_with_input(
            BenchmarkId::new("RustCrypto", size),
            input.as_slice(),
            |b, i| b.iter(|| black_box(hash_reference(black_box(i)))),
        );
    }

    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
