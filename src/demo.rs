//! A small hand-built scene: a ground slab with a pillar and a few steps,
//! meshed naively into face records with sampled AO.

use hashbrown::{HashMap, HashSet};
use voxquad_codec::{ChunkOrigin, Direction, FaceRecord, sample_face_ao};
use voxquad_quad::should_flip;

use crate::dump::{ChunkDump, DumpChunk};

pub fn scene_voxels() -> HashSet<[i32; 3]> {
    let mut solid = HashSet::new();
    for x in -4..4 {
        for z in -4..4 {
            solid.insert([x, 0, z]);
        }
    }
    for y in 1..4 {
        solid.insert([0, y, 0]);
    }
    solid.insert([-3, 1, -3]);
    solid.insert([-3, 1, -2]);
    solid.insert([-2, 1, -3]);
    solid
}

/// One face record per exposed voxel face, grouped by chunk.
pub fn mesh_scene(solid: &HashSet<[i32; 3]>) -> ChunkDump {
    let mut by_chunk: HashMap<ChunkOrigin, (Vec<u32>, Vec<u8>)> = HashMap::new();
    let is_solid = |p: [i32; 3]| solid.contains(&p);
    for &voxel in solid {
        let origin = ChunkOrigin::containing(voxel);
        let base = origin.world_base();
        let local = [
            (voxel[0] - base[0]) as u8,
            (voxel[1] - base[1]) as u8,
            (voxel[2] - base[2]) as u8,
        ];
        let texture = voxel[1].clamp(0, 255) as u8;
        for dir in Direction::ALL {
            if is_solid(dir.step(voxel, 1)) {
                continue;
            }
            let face = FaceRecord::pack_unchecked(local, texture, dir);
            let ao = sample_face_ao(voxel, dir, is_solid);
            let entry = by_chunk.entry(origin).or_default();
            entry.0.push(face.bits());
            entry.1.push(ao.bits());
        }
    }
    let mut chunks: Vec<DumpChunk> = by_chunk
        .into_iter()
        .map(|(origin, (faces, ao))| DumpChunk {
            origin,
            faces,
            ao: Some(ao),
            transparent: false,
        })
        .collect();
    chunks.sort_by_key(|c| <[i32; 3]>::from(c.origin));
    ChunkDump { chunks }
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct SplitStats {
    pub faces: usize,
    pub flipped: usize,
    pub occluded: usize,
}

pub fn split_stats(dump: &ChunkDump) -> SplitStats {
    let mut stats = SplitStats::default();
    for draw in dump.draws() {
        for i in 0..draw.len() {
            let corners = voxquad_codec::decode_ao(draw.ao_at(i));
            stats.faces += 1;
            stats.flipped += usize::from(should_flip(corners));
            stats.occluded += usize::from(corners.iter().any(|&c| c > 0));
        }
    }
    stats
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxquad_runtime::validate;

    #[test]
    fn scene_spans_four_chunks() {
        let dump = mesh_scene(&scene_voxels());
        let origins: Vec<[i32; 3]> = dump.chunks.iter().map(|c| c.origin.into()).collect();
        assert_eq!(origins, vec![[-1, 0, -1], [-1, 0, 0], [0, 0, -1], [0, 0, 0]]);
        for draw in dump.draws() {
            assert!(validate(&draw).is_ok());
        }
    }

    #[test]
    fn pillar_shadow_uses_both_diagonals() {
        let stats = split_stats(&mesh_scene(&scene_voxels()));
        assert!(stats.faces > 0);
        assert!(stats.flipped > 0);
        assert!(stats.flipped < stats.occluded);
    }

    #[test]
    fn top_face_beside_pillar_flips() {
        let solid = scene_voxels();
        let ao = sample_face_ao([1, 0, -1], Direction::PosY, |p| solid.contains(&p));
        assert_eq!(ao.corners(), [0, 1, 0, 0]);
        assert!(should_flip(ao.corners()));
    }
}
