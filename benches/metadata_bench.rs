use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use exposure_wire::AssociatedMetadata;

#[allow(clippy::unwrap_used)]
fn bench_metadata_encode_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("metadata_encode_decode");

    group.bench_function("encode", |b| {
        b.iter(|| {
            let am =
                AssociatedMetadata::new(black_box(1), black_box(0), black_box(-40)).unwrap();
            black_box(am.to_bytes())
        })
    });

    group.bench_function("decode", |b| {
        let raw = [0x40u8, 0xD8];
        b.iter(|| {
            let am = AssociatedMetadata::from_bytes(black_box(&raw)).unwrap();
            black_box(am.transmit_power_level())
        })
    });

    group.finish();
}

criterion_group!(benches, bench_metadata_encode_decode);
criterion_main!(benches);
