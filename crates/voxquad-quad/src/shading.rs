//! Scalar light factors applied to a sampled color.

use serde::{Deserialize, Serialize};
use voxquad_codec::Direction;

use crate::build::Vertex;

pub const X_FACE_BRIGHTNESS: f32 = 0.70;
pub const Y_FACE_BRIGHTNESS: f32 = 1.10;
pub const Z_FACE_BRIGHTNESS: f32 = 0.85;
/// Darkening per AO level; level 3 leaves 10% of the color.
pub const AO_DARKENING_PER_LEVEL: f32 = 0.3;

/// Fixed per-face brightness used when AO is not available.
#[inline]
pub fn direction_brightness(direction: Direction) -> f32 {
    match direction {
        Direction::NegX | Direction::PosX => X_FACE_BRIGHTNESS,
        Direction::NegY | Direction::PosY => Y_FACE_BRIGHTNESS,
        Direction::NegZ | Direction::PosZ => Z_FACE_BRIGHTNESS,
    }
}

#[inline]
pub fn ao_light_factor(ao_intensity: f32) -> f32 {
    1.0 - ao_intensity * AO_DARKENING_PER_LEVEL
}

#[inline]
pub fn shade(color: [f32; 3], factor: f32) -> [f32; 3] {
    color.map(|c| c * factor)
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShadingMode {
    /// Per-direction brightness, ignores AO.
    #[serde(rename = "directional")]
    Directional,
    #[default]
    #[serde(rename = "ao")]
    AmbientOcclusion,
}

impl ShadingMode {
    /// Light factor for an emitted vertex under this mode.
    pub fn light_factor(self, vertex: &Vertex) -> f32 {
        match self {
            ShadingMode::Directional => {
                let raw = u8::try_from(vertex.direction).unwrap_or(u8::MAX);
                direction_brightness(Direction::from_raw_lossy(raw))
            }
            ShadingMode::AmbientOcclusion => ao_light_factor(vertex.ao),
        }
    }
}
