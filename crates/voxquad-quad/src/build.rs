use serde::{Deserialize, Serialize};
use voxquad_codec::{ChunkOrigin, DecodedFace, Direction};
use voxquad_geom::{Vec2, Vec3};

use crate::quad::{QuadVertex, UNIT_QUAD, flip_vertex, swizzle_vertex};
use crate::table::VertexTable;
use crate::triangulate::{ao_corner_index, should_flip};

/// One emitted vertex of a face instance.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Vertex {
    pub position: Vec3,
    pub tex_coordinates: Vec2,
    /// Constant across the face.
    pub texture_index: u32,
    /// Constant across the face.
    pub direction: u32,
    /// Raw corner weight in `0..=3`, not yet a light factor.
    pub ao: f32,
}

/// How the quad builder derives model-space corners.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuadEncoding {
    /// Precomputed [`VertexTable`] lookup.
    #[default]
    Table,
    /// Swizzle the canonical quad on every call.
    Swizzle,
}

#[inline]
fn face_direction(face: &DecodedFace) -> Direction {
    debug_assert!(face.direction < 6, "face direction {} out of range", face.direction);
    Direction::from_raw_lossy(face.direction)
}

#[inline]
fn emit(face: &DecodedFace, origin: ChunkOrigin, model: QuadVertex, ao: u8) -> Vertex {
    let voxel = Vec3::from_ivec(origin.voxel_world(face.local_offset));
    Vertex {
        position: voxel + model.position,
        tex_coordinates: model.tex_coordinates,
        texture_index: u32::from(face.texture_index),
        direction: u32::from(face.direction),
        ao: f32::from(ao),
    }
}

/// Builds strip vertex `vertex_index` (0..4) of a face by swizzling the
/// canonical quad.
pub fn build_quad(
    face: &DecodedFace,
    origin: ChunkOrigin,
    ao_corners: [u8; 4],
    vertex_index: usize,
) -> Vertex {
    let direction = face_direction(face);
    let flipped = should_flip(ao_corners);
    let canonical = UNIT_QUAD[vertex_index];
    let model = if flipped { flip_vertex(canonical) } else { canonical };
    let ao = ao_corners[ao_corner_index(flipped, vertex_index)];
    emit(face, origin, swizzle_vertex(direction, model), ao)
}

/// Same result as [`build_quad`], read from a precomputed table.
pub fn build_quad_from_table(
    table: &VertexTable,
    face: &DecodedFace,
    origin: ChunkOrigin,
    ao_corners: [u8; 4],
    vertex_index: usize,
) -> Vertex {
    let direction = face_direction(face);
    let flipped = should_flip(ao_corners);
    let model = table.vertex(direction, flipped, vertex_index);
    let ao = ao_corners[ao_corner_index(flipped, vertex_index)];
    emit(face, origin, model, ao)
}

/// All four strip vertices of one face instance.
pub fn build_face(
    encoding: QuadEncoding,
    face: &DecodedFace,
    origin: ChunkOrigin,
    ao_corners: [u8; 4],
) -> [Vertex; 4] {
    match encoding {
        QuadEncoding::Table => {
            let table = VertexTable::shared();
            std::array::from_fn(|i| build_quad_from_table(table, face, origin, ao_corners, i))
        }
        QuadEncoding::Swizzle => std::array::from_fn(|i| build_quad(face, origin, ao_corners, i)),
    }
}
