use std::sync::LazyLock;

use bytemuck::{Pod, Zeroable};
use voxquad_codec::Direction;

use crate::quad::{QuadVertex, UNIT_QUAD, flip_vertex, swizzle_vertex};

/// Quad variants per direction: default split, then flipped.
const VARIANTS: usize = 2;
const ENTRIES: usize = Direction::ALL.len() * VARIANTS * UNIT_QUAD.len();

static SHARED: LazyLock<VertexTable> = LazyLock::new(VertexTable::build);

/// Flattened per-direction quad vertices, 4 per variant, addressed by
/// `quad_index = 2 * direction + flipped`.
#[derive(Clone, Debug, PartialEq)]
pub struct VertexTable {
    entries: [QuadVertex; ENTRIES],
}

impl VertexTable {
    pub fn build() -> Self {
        let mut entries = [UNIT_QUAD[0]; ENTRIES];
        for direction in Direction::ALL {
            for flipped in [false, true] {
                let base = Self::quad_index(direction, flipped) * UNIT_QUAD.len();
                for (i, v) in UNIT_QUAD.iter().enumerate() {
                    let model = if flipped { flip_vertex(*v) } else { *v };
                    entries[base + i] = swizzle_vertex(direction, model);
                }
            }
        }
        Self { entries }
    }

    /// Process-wide table, built on first use.
    pub fn shared() -> &'static VertexTable {
        &SHARED
    }

    #[inline]
    pub fn quad_index(direction: Direction, flipped: bool) -> usize {
        direction.index() * VARIANTS + flipped as usize
    }

    #[inline]
    pub fn vertex(&self, direction: Direction, flipped: bool, vertex_index: usize) -> QuadVertex {
        self.entries[Self::quad_index(direction, flipped) * UNIT_QUAD.len() + vertex_index]
    }

    pub fn entries(&self) -> &[QuadVertex] {
        &self.entries
    }

    /// Rows padded to 16 bytes per field, ready for a uniform array.
    pub fn aligned(&self) -> Vec<AlignedVertex> {
        self.entries.iter().copied().map(AlignedVertex::from).collect()
    }
}

impl Default for VertexTable {
    fn default() -> Self {
        Self::build()
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct AlignedVertex {
    pub position: [f32; 4],
    pub tex_coordinates: [f32; 4],
}

impl From<QuadVertex> for AlignedVertex {
    fn from(v: QuadVertex) -> Self {
        let [x, y, z] = v.position.to_array();
        let [u, w] = v.tex_coordinates.to_array();
        Self {
            position: [x, y, z, 0.0],
            tex_coordinates: [u, w, 0.0, 0.0],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_48_entries() {
        let table = VertexTable::build();
        assert_eq!(table.entries().len(), 48);
        assert_eq!(table.aligned().len(), 48);
        assert_eq!(std::mem::size_of::<AlignedVertex>(), 32);
    }

    #[test]
    fn flipped_variant_follows_default() {
        assert_eq!(VertexTable::quad_index(Direction::NegY, false), 4);
        assert_eq!(VertexTable::quad_index(Direction::NegY, true), 5);
    }

    #[test]
    fn shared_matches_fresh_build() {
        assert_eq!(VertexTable::shared(), &VertexTable::build());
    }
}
