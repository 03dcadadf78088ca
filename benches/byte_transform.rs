//! Benchmarks for the byte transforms and the repair chain.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use garble::domain::entities::CorruptionMethod;
use garble::domain::services::{SignatureCatalog, byte_transform, find_repair};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn sample(len: usize) -> Vec<u8> {
    (0u8..=255).cycle().take(len).collect()
}

fn bench_methods(c: &mut Criterion) {
    let mut group = c.benchmark_group("byte_transform/apply");
    let data = sample(1 << 20);
    group.throughput(Throughput::Bytes(data.len() as u64));

    for method in CorruptionMethod::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(method), &data, |b, data| {
            let mut rng = StdRng::seed_from_u64(42);
            b.iter(|| byte_transform::apply(method, black_box(data), 256, &mut rng))
        });
    }

    group.finish();
}

fn bench_repair_chain(c: &mut Criterion) {
    let mut group = c.benchmark_group("repair/find_repair");
    let catalog = SignatureCatalog::default();

    let zeroed = vec![0u8; 64 * 1024];
    let mut pdf = b"%PDF-1.7\n".to_vec();
    pdf.extend(sample(64 * 1024));
    let flipped = byte_transform::apply(
        CorruptionMethod::HeaderFlip,
        &pdf,
        256,
        &mut StdRng::seed_from_u64(0),
    );

    group.bench_function("png_magic", |b| {
        b.iter(|| find_repair(black_box(&zeroed), "png", 256, &catalog))
    });
    group.bench_function("unflip_pdf", |b| {
        b.iter(|| find_repair(black_box(&flipped), "pdf", 256, &catalog))
    });
    group.bench_function("no_match", |b| {
        b.iter(|| find_repair(black_box(&flipped), "xyz", 256, &catalog))
    });

    group.finish();
}

criterion_group!(benches, bench_methods, bench_repair_chain);
criterion_main!(benches);
