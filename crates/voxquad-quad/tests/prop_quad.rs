use proptest::prelude::*;
use voxquad_codec::ao::{ao_tangents, corner_steps};
use voxquad_codec::{ChunkOrigin, DecodedFace, Direction, FaceRecord, decode_face};
use voxquad_quad::{
    AO_FLIP_PERMUTATION, QuadEncoding, QuadVertex, UNIT_QUAD, VertexTable, build_face,
    build_quad, build_quad_from_table, should_flip, swizzle_vertex,
};
use voxquad_geom::{Vec2, Vec3};

fn direction() -> impl Strategy<Value = Direction> {
    (0u8..6).prop_map(|raw| Direction::try_from(raw).unwrap())
}

fn corners() -> impl Strategy<Value = [u8; 4]> {
    (0u8..4, 0u8..4, 0u8..4, 0u8..4).prop_map(|(a, b, c, d)| [a, b, c, d])
}

fn face() -> impl Strategy<Value = DecodedFace> {
    ((0u8..32, 0u8..32, 0u8..32), any::<u8>(), direction()).prop_map(|((x, y, z), tex, dir)| {
        decode_face(FaceRecord::pack([x, y, z], tex, dir).unwrap().bits())
    })
}

fn encoding() -> impl Strategy<Value = QuadEncoding> {
    prop_oneof![Just(QuadEncoding::Table), Just(QuadEncoding::Swizzle)]
}

fn origin() -> impl Strategy<Value = ChunkOrigin> {
    (-4096i32..4096, -64i32..64, -4096i32..4096).prop_map(|(x, y, z)| ChunkOrigin::new(x, y, z))
}

fn bits(v: &voxquad_quad::Vertex) -> ([u32; 3], [u32; 2], u32, u32, u32) {
    (
        v.position.to_array().map(f32::to_bits),
        v.tex_coordinates.to_array().map(f32::to_bits),
        v.texture_index,
        v.direction,
        v.ao.to_bits(),
    )
}

proptest! {
    // Table lookup and on-the-fly swizzling emit bit-identical vertices.
    #[test]
    fn encodings_agree(f in face(), o in origin(), ao in corners(), vi in 0usize..4) {
        let table = VertexTable::shared();
        let a = build_quad(&f, o, ao, vi);
        let b = build_quad_from_table(table, &f, o, ao, vi);
        prop_assert_eq!(bits(&a), bits(&b));
    }

    // Pure function: repeated evaluation gives the same vertex.
    #[test]
    fn build_is_idempotent(f in face(), o in origin(), ao in corners(), vi in 0usize..4) {
        prop_assert_eq!(bits(&build_quad(&f, o, ao, vi)), bits(&build_quad(&f, o, ao, vi)));
    }

    #[test]
    fn ties_never_flip(a in 0u8..4, b in 0u8..4, c in 0u8..4) {
        prop_assume!(b + c >= a && b + c - a <= 3);
        let d = b + c - a;
        let ao = [a, b, c, d];
        prop_assert!(!should_flip(ao));
        let f = decode_face(FaceRecord::pack([0, 0, 0], 0, Direction::PosY).unwrap().bits());
        let verts = build_face(QuadEncoding::Swizzle, &f, ChunkOrigin::default(), ao);
        for (i, v) in verts.iter().enumerate() {
            prop_assert_eq!(v.ao, f32::from(ao[i]));
        }
    }

    #[test]
    fn flipped_quads_permute_ao(f in face(), ao in corners()) {
        prop_assume!(ao[0] + ao[3] < ao[1] + ao[2]);
        let verts = build_face(QuadEncoding::Table, &f, ChunkOrigin::default(), ao);
        for (i, v) in verts.iter().enumerate() {
            prop_assert_eq!(v.ao, f32::from(ao[AO_FLIP_PERMUTATION[i]]));
        }
    }

    // Swapping the corner pairs reverses the decision whenever the sums differ.
    #[test]
    fn swapping_diagonals_reverses_decision(ao in corners()) {
        let swapped = [ao[1], ao[0], ao[3], ao[2]];
        let (d0, d1) = (ao[0] + ao[3], ao[1] + ao[2]);
        if d0 == d1 {
            prop_assert!(!should_flip(ao) && !should_flip(swapped));
        } else {
            prop_assert_ne!(should_flip(ao), should_flip(swapped));
        }
    }

    // Whatever the split, every vertex lands on a corner of the voxel's face
    // and carries the AO weight sampled for that corner.
    #[test]
    fn ao_follows_corner_position(f in face(), ao in corners()) {
        let dir = Direction::try_from(f.direction).unwrap();
        let verts = build_face(QuadEncoding::Table, &f, ChunkOrigin::default(), ao);
        let (t0, t1) = ao_tangents(dir);
        for v in verts {
            let p = v.position.to_array();
            let local = [
                p[0] - f32::from(f.local_offset[0]),
                p[1] - f32::from(f.local_offset[1]),
                p[2] - f32::from(f.local_offset[2]),
            ];
            let high0 = local[t0.axis()] > 0.5;
            let high1 = local[t1.axis()] > 0.5;
            let corner = (0..4)
                .find(|&c| {
                    let (s0, s1) = corner_steps(c);
                    (s0 > 0) == high0 && (s1 > 0) == high1
                })
                .unwrap();
            prop_assert_eq!(v.ao, f32::from(ao[corner]));
        }
    }

    // A flipped quad turns its texcoords with it: vertex i carries
    // (v, 1 - u) of canonical vertex i, placed at canonical corner FLIP[i].
    #[test]
    fn flipped_texcoords_turn_with_the_quad(f in face(), enc in encoding()) {
        let dir = Direction::try_from(f.direction).unwrap();
        let flipped = build_face(enc, &f, ChunkOrigin::default(), [0, 1, 0, 0]);
        for (i, v) in flipped.iter().enumerate() {
            let uv = UNIT_QUAD[i].tex_coordinates;
            let expected = swizzle_vertex(
                dir,
                QuadVertex {
                    position: UNIT_QUAD[AO_FLIP_PERMUTATION[i]].position,
                    tex_coordinates: Vec2::new(uv.y, 1.0 - uv.x),
                },
            );
            prop_assert_eq!(v.tex_coordinates, expected.tex_coordinates);
            prop_assert_eq!(
                v.position - Vec3::from_ivec(f.local_offset.map(i32::from)),
                expected.position
            );
        }
    }
}

#[test]
fn each_direction_has_its_own_axis_assignment() {
    let mut planes = Vec::new();
    for d in Direction::ALL {
        let corners: Vec<[f32; 3]> = UNIT_QUAD
            .iter()
            .map(|v| swizzle_vertex(d, *v).position.to_array())
            .collect();
        let plane = if d.is_positive() { 1.0 } else { 0.0 };
        assert!(corners.iter().all(|c| c[d.axis()] == plane));
        // The four corners span the two remaining axes.
        for axis in (0..3).filter(|&a| a != d.axis()) {
            assert!(corners.iter().any(|c| c[axis] == 0.0));
            assert!(corners.iter().any(|c| c[axis] == 1.0));
        }
        planes.push((d.axis(), plane.to_bits()));
    }
    planes.sort();
    planes.dedup();
    assert_eq!(planes.len(), 6);
}

#[test]
fn world_position_law() {
    let f = decode_face(FaceRecord::pack([5, 10, 3], 0, Direction::NegZ).unwrap().bits());
    assert_eq!(f.direction, 4);
    for (i, canon) in UNIT_QUAD.iter().enumerate() {
        let v = build_quad(&f, ChunkOrigin::new(0, 0, 0), [0; 4], i);
        let p = canon.position.to_array();
        assert_eq!(v.position.to_array(), [p[0] + 5.0, p[1] + 10.0, p[2] + 3.0]);
    }
}

#[test]
fn flipped_neg_z_face_texcoords() {
    let f = decode_face(FaceRecord::pack([0, 0, 0], 0, Direction::NegZ).unwrap().bits());
    let verts = build_face(QuadEncoding::Table, &f, ChunkOrigin::default(), [0, 1, 0, 0]);
    let uvs: Vec<[f32; 2]> = verts.iter().map(|v| v.tex_coordinates.to_array()).collect();
    assert_eq!(uvs, vec![[1.0, 1.0], [0.0, 1.0], [1.0, 0.0], [0.0, 0.0]]);
    let positions: Vec<[f32; 3]> = verts.iter().map(|v| v.position.to_array()).collect();
    assert_eq!(
        positions,
        vec![[0.0, 1.0, 0.0], [1.0, 1.0, 0.0], [0.0, 0.0, 0.0], [1.0, 0.0, 0.0]]
    );
}
