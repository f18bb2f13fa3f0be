use serde::{Deserialize, Serialize};

use crate::CHUNK_DIMENSIONS;

/// Chunk position in chunk-grid units.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "[i32; 3]", into = "[i32; 3]")]
pub struct ChunkOrigin {
    pub cx: i32,
    pub cy: i32,
    pub cz: i32,
}

impl ChunkOrigin {
    #[inline]
    pub const fn new(cx: i32, cy: i32, cz: i32) -> Self {
        Self { cx, cy, cz }
    }

    /// World-space position of the chunk's `(0,0,0)` voxel.
    #[inline]
    pub const fn world_base(self) -> [i32; 3] {
        [
            self.cx * CHUNK_DIMENSIONS,
            self.cy * CHUNK_DIMENSIONS,
            self.cz * CHUNK_DIMENSIONS,
        ]
    }

    /// World-space position of a voxel inside this chunk.
    #[inline]
    pub fn voxel_world(self, local_offset: [u8; 3]) -> [i32; 3] {
        let base = self.world_base();
        [
            base[0] + i32::from(local_offset[0]),
            base[1] + i32::from(local_offset[1]),
            base[2] + i32::from(local_offset[2]),
        ]
    }

    /// Chunk containing the given world voxel.
    #[inline]
    pub fn containing(world: [i32; 3]) -> Self {
        Self::new(
            world[0].div_euclid(CHUNK_DIMENSIONS),
            world[1].div_euclid(CHUNK_DIMENSIONS),
            world[2].div_euclid(CHUNK_DIMENSIONS),
        )
    }
}

impl From<[i32; 3]> for ChunkOrigin {
    fn from(value: [i32; 3]) -> Self {
        Self::new(value[0], value[1], value[2])
    }
}

impl From<ChunkOrigin> for [i32; 3] {
    fn from(value: ChunkOrigin) -> Self {
        [value.cx, value.cy, value.cz]
    }
}
