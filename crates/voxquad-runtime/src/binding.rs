use voxquad_codec::{ChunkOrigin, decode_ao, decode_face};
use voxquad_quad::{QuadEncoding, Vertex, build_face};

use crate::draw::ChunkDraw;
use crate::error::RuntimeError;
use crate::validate::validate;

/// Where a draw reads its chunk origin from.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum OriginBinding<'a> {
    /// One origin set per draw call.
    Uniform(ChunkOrigin),
    /// Origin looked up by the implicit draw index of a multi-draw.
    DrawTable {
        origins: &'a [ChunkOrigin],
        draw_index: u32,
    },
}

impl OriginBinding<'_> {
    pub fn resolve(&self) -> Result<ChunkOrigin, RuntimeError> {
        match *self {
            OriginBinding::Uniform(origin) => Ok(origin),
            OriginBinding::DrawTable { origins, draw_index } => origins
                .get(draw_index as usize)
                .copied()
                .ok_or(RuntimeError::DrawIndexOutOfRange {
                    index: draw_index,
                    draws: origins.len(),
                }),
        }
    }
}

/// Expands packed records into a vertex stream, four strip vertices per
/// record. Records are not validated.
pub fn expand_faces(
    encoding: QuadEncoding,
    binding: OriginBinding<'_>,
    faces: &[u32],
    ao: Option<&[u8]>,
) -> Result<Vec<Vertex>, RuntimeError> {
    let origin = binding.resolve()?;
    let mut out = Vec::with_capacity(faces.len() * voxquad_quad::QUAD_VERTEX_COUNT as usize);
    for (i, &packed) in faces.iter().enumerate() {
        let corners = decode_ao(ao.and_then(|a| a.get(i)).copied().unwrap_or(0));
        out.extend(build_face(encoding, &decode_face(packed), origin, corners));
    }
    Ok(out)
}

/// Validates `draw` and expands it with its own origin bound as a uniform.
pub fn expand_chunk(encoding: QuadEncoding, draw: &ChunkDraw) -> Result<Vec<Vertex>, RuntimeError> {
    validate(draw)?;
    expand_faces(
        encoding,
        OriginBinding::Uniform(draw.origin),
        &draw.faces,
        draw.ao.as_deref(),
    )
}
