use voxquad_codec::Direction;
use voxquad_geom::{Vec2, Vec3};

/// One corner of a face in model space (unit cube, before chunk placement).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct QuadVertex {
    pub position: Vec3,
    pub tex_coordinates: Vec2,
}

impl QuadVertex {
    const fn new(x: f32, y: f32, u: f32, v: f32) -> Self {
        Self {
            position: Vec3::new(x, y, 0.0),
            tex_coordinates: Vec2::new(u, v),
        }
    }
}

/// Canonical quad facing -Z, in triangle-strip order.
pub const UNIT_QUAD: [QuadVertex; 4] = [
    QuadVertex::new(0.0, 0.0, 0.0, 1.0),
    QuadVertex::new(0.0, 1.0, 0.0, 0.0),
    QuadVertex::new(1.0, 0.0, 1.0, 1.0),
    QuadVertex::new(1.0, 1.0, 1.0, 0.0),
];

/// Places a canonical-quad vertex onto the unit-cube face for `direction`.
#[inline]
pub fn swizzle_vertex(direction: Direction, vertex: QuadVertex) -> QuadVertex {
    let mut v = vertex;
    let p = vertex.position;
    match direction {
        Direction::NegX => {
            v.position = Vec3::new(0.0, p.x, p.y);
            v.tex_coordinates = v.tex_coordinates.yx();
        }
        Direction::PosX => {
            v.position = Vec3::new(1.0, p.y, p.x);
        }
        Direction::NegY => {
            v.position = Vec3::new(p.y, 0.0, p.x);
        }
        Direction::PosY => {
            v.position = Vec3::new(p.x, 1.0, p.y);
        }
        // Canonical orientation.
        Direction::NegZ => {}
        Direction::PosZ => {
            v.position = Vec3::new(p.y, p.x, 1.0);
            v.tex_coordinates = v.tex_coordinates.yx();
        }
    }
    v
}

/// Rotates a canonical-quad vertex a quarter turn, `(x, y) -> (y, 1 - x)`, so
/// the strip's shared edge moves to the other diagonal. The texture
/// coordinate gets the same turn, `(u, v) -> (v, 1 - u)`, which leaves the
/// texture on the face rotated by 180 degrees.
#[inline]
pub fn flip_vertex(vertex: QuadVertex) -> QuadVertex {
    let p = vertex.position;
    let t = vertex.tex_coordinates;
    QuadVertex {
        position: Vec3::new(p.y, 1.0 - p.x, p.z),
        tex_coordinates: Vec2::new(t.y, 1.0 - t.x),
    }
}
