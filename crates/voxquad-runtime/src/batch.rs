//! Multi-draw batching: many chunks share one instance buffer, each drawn
//! with its own indirect arguments and origin-table slot.

use bytemuck::{Pod, Zeroable};
use hashbrown::HashMap;
use voxquad_codec::{ChunkOrigin, QuadInstance};
use voxquad_quad::{QUAD_VERTEX_COUNT, QuadEncoding, Vertex};

use crate::binding::{OriginBinding, expand_faces};
use crate::draw::ChunkDraw;
use crate::error::RuntimeError;
use crate::validate::validate;

/// Layout of one non-indexed indirect draw command.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct DrawIndirectArgs {
    pub vertex_count: u32,
    pub instance_count: u32,
    pub first_vertex: u32,
    pub first_instance: u32,
}

#[derive(Clone, Debug, Default)]
pub struct DrawBatcher {
    instances: Vec<QuadInstance>,
    draws: Vec<DrawIndirectArgs>,
    origins: Vec<ChunkOrigin>,
    by_origin: HashMap<ChunkOrigin, u32>,
}

impl DrawBatcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one chunk's instances and returns its draw index.
    pub fn push(&mut self, origin: ChunkOrigin, instances: &[QuadInstance]) -> u32 {
        let draw_index = self.draws.len() as u32;
        let first_instance = self.instances.len() as u32;
        self.draws.push(DrawIndirectArgs {
            vertex_count: QUAD_VERTEX_COUNT,
            instance_count: instances.len() as u32,
            first_vertex: 0,
            first_instance,
        });
        self.origins.push(origin);
        self.instances.extend_from_slice(instances);
        if self.by_origin.insert(origin, draw_index).is_some() {
            log::debug!(
                "origin {:?} batched twice; lookup now returns draw {}",
                origin,
                draw_index
            );
        }
        draw_index
    }

    /// Validates and appends a chunk draw.
    pub fn push_draw(&mut self, draw: &ChunkDraw) -> Result<u32, RuntimeError> {
        validate(draw)?;
        Ok(self.push(draw.origin, &draw.instances()))
    }

    pub fn draws(&self) -> &[DrawIndirectArgs] {
        &self.draws
    }

    pub fn origins(&self) -> &[ChunkOrigin] {
        &self.origins
    }

    pub fn instances(&self) -> &[QuadInstance] {
        &self.instances
    }

    pub fn draw_for(&self, origin: ChunkOrigin) -> Option<u32> {
        self.by_origin.get(&origin).copied()
    }

    pub fn instance_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.instances)
    }

    pub fn indirect_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.draws)
    }

    pub fn clear(&mut self) {
        self.instances.clear();
        self.draws.clear();
        self.origins.clear();
        self.by_origin.clear();
    }

    /// Expands every recorded draw, reading origins through the draw table.
    pub fn expand(&self, encoding: QuadEncoding) -> Result<Vec<Vertex>, RuntimeError> {
        let mut out = Vec::with_capacity(self.instances.len() * QUAD_VERTEX_COUNT as usize);
        for (draw_index, args) in self.draws.iter().enumerate() {
            let start = args.first_instance as usize;
            let range = &self.instances[start..start + args.instance_count as usize];
            let faces: Vec<u32> = range.iter().map(|i| i.attributes).collect();
            let ao: Vec<u8> = range.iter().map(|i| i.ao().bits()).collect();
            let binding = OriginBinding::DrawTable {
                origins: &self.origins,
                draw_index: draw_index as u32,
            };
            out.extend(expand_faces(encoding, binding, &faces, Some(&ao))?);
        }
        Ok(out)
    }
}
