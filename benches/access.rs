use criterion::{black_box, criterion_group, criterion_main, Criterion};

use coremem::{Address, AddressSpace, Architecture, MemStore, Segment};

fn space_with_store(cacheable: bool) -> AddressSpace {
    let bytes: Vec<u8> = (0..64 * 1024).map(|i| (i % 251) as u8).collect();
    let mut space = AddressSpace::new(Architecture::AMD64);
    let store = space.add_store(Box::new(MemStore::from_bytes(bytes)));
    let mut seg = Segment::new(
        "data",
        Address::new(0x1000),
        Address::new(0x1000 + 64 * 1024),
        0,
        Some(store),
    );
    if cacheable {
        seg = seg.cacheable();
    }
    space.add_segment(seg).unwrap();
    space
}

fn benchmark_typed_reads(c: &mut Criterion) {
    let mut cached = space_with_store(true);
    c.bench_function("get8_cached", |b| {
        b.iter(|| {
            let mut total = 0u64;
            for off in (0..4096).step_by(8) {
                total ^= cached.get8(black_box(Address::new(0x1000 + off))).unwrap();
            }
            total
        });
    });

    let mut direct = space_with_store(false);
    c.bench_function("get8_direct", |b| {
        b.iter(|| {
            let mut total = 0u64;
            for off in (0..4096).step_by(8) {
                total ^= direct.get8(black_box(Address::new(0x1000 + off))).unwrap();
            }
            total
        });
    });
}

criterion_group!(benches, benchmark_typed_reads);
criterion_main!(benches);
