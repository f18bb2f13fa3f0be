use voxquad_geom::{Vec2, Vec3};

#[test]
fn grid_coordinates_lift_exactly() {
    // Chunk-scale values stay exact in f32.
    let v = Vec3::from_ivec([-64, 0, 1 << 20]);
    assert_eq!(v, Vec3::new(-64.0, 0.0, 1048576.0));
}

#[test]
fn offsetting_a_corner() {
    let voxel = Vec3::from_ivec([32, -32, 5]);
    let corner = Vec3::new(1.0, 0.0, 1.0);
    let p = voxel + corner;
    assert_eq!(p.to_array(), [33.0, -32.0, 6.0]);
    assert_eq!(p - voxel, corner);
}

#[test]
fn edge_is_perpendicular_to_normal() {
    let edge = Vec3::new(0.0, 1.0, 0.0) - Vec3::new(0.0, 0.0, 0.0);
    assert_eq!(edge.dot(Vec3::new(0.0, 0.0, -1.0)), 0.0);
    assert_eq!(edge.dot(edge), 1.0);
}

#[test]
fn texcoord_swap() {
    let uv = Vec2::new(0.0, 1.0);
    assert_eq!(uv.yx(), Vec2::new(1.0, 0.0));
    assert_eq!(Vec2::from([1.0, 0.0]).to_array(), [1.0, 0.0]);
    assert_eq!(Vec3::from([0.5, 0.25, 1.0]).to_array(), [0.5, 0.25, 1.0]);
}
