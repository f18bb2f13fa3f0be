//! AO-aware quad builder: turns decoded face records into world-space quad
//! vertices, picking the triangulation diagonal from the corner AO weights.
#![forbid(unsafe_code)]

pub mod build;
pub mod quad;
pub mod shading;
pub mod table;
pub mod triangulate;

pub use build::{QuadEncoding, Vertex, build_face, build_quad, build_quad_from_table};
pub use quad::{QuadVertex, UNIT_QUAD, flip_vertex, swizzle_vertex};
pub use shading::{ShadingMode, ao_light_factor, direction_brightness, shade};
pub use table::{AlignedVertex, VertexTable};
pub use triangulate::{
    AO_FLIP_PERMUTATION, QUAD_TRIANGLE_LIST, ao_corner_index, diagonal, quad_indices, should_flip,
};

/// Vertices emitted per face instance (one triangle strip).
pub const QUAD_VERTEX_COUNT: u32 = 4;
