use voxquad_codec::{Direction, decode_face};

use crate::draw::ChunkDraw;
use crate::error::RuntimeError;

/// Checks a draw before it reaches the unchecked hot path. Reports the first
/// problem found.
pub fn validate(draw: &ChunkDraw) -> Result<(), RuntimeError> {
    match draw.ao.as_deref() {
        Some(ao) if ao.len() != draw.faces.len() => {
            return Err(RuntimeError::AoLengthMismatch {
                faces: draw.faces.len(),
                ao: ao.len(),
            });
        }
        _ => {}
    }
    for (instance, &packed) in draw.faces.iter().enumerate() {
        let raw = decode_face(packed).direction;
        if Direction::try_from(raw).is_err() {
            return Err(RuntimeError::InvalidDirection { instance, raw });
        }
    }
    Ok(())
}
