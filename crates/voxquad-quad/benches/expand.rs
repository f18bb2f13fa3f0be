use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use voxquad_codec::{AoRecord, ChunkOrigin, Direction, FaceRecord, decode_ao, decode_face};
use voxquad_quad::{QuadEncoding, build_face};

/// Every face of a 16^3 block of voxels, with AO cycling through all records.
fn sample_records() -> Vec<(u32, u8)> {
    let mut out = Vec::with_capacity(16 * 16 * 16 * 6);
    let mut ao = 0u8;
    for x in 0..16u8 {
        for y in 0..16u8 {
            for z in 0..16u8 {
                for d in Direction::ALL {
                    let face = FaceRecord::pack_unchecked([x, y, z], x ^ z, d);
                    out.push((face.bits(), AoRecord(ao).bits()));
                    ao = ao.wrapping_add(37);
                }
            }
        }
    }
    out
}

fn bench_expand(c: &mut Criterion) {
    let records = sample_records();
    let origin = ChunkOrigin::new(3, -1, 7);
    let mut group = c.benchmark_group("expand_24k_faces");
    for (name, encoding) in [("table", QuadEncoding::Table), ("swizzle", QuadEncoding::Swizzle)] {
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut sum = 0.0f32;
                for &(face, ao) in &records {
                    let verts = build_face(encoding, &decode_face(face), origin, decode_ao(ao));
                    sum += verts[3].position.x + verts[0].ao;
                }
                black_box(sum);
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_expand);
criterion_main!(benches);
