//! Instance-buffer layouts as uploaded for instanced quad draws.

use bytemuck::{Pod, PodCastError, Zeroable};

use crate::record::{AoRecord, FaceRecord};

/// Opaque face instance: face record plus AO record in the low byte of
/// `ao_attributes`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct QuadInstance {
    pub attributes: u32,
    pub ao_attributes: u32,
}

impl QuadInstance {
    pub const STRIDE: usize = std::mem::size_of::<Self>();

    #[inline]
    pub fn new(face: FaceRecord, ao: AoRecord) -> Self {
        Self {
            attributes: face.bits(),
            ao_attributes: u32::from(ao.bits()),
        }
    }

    #[inline]
    pub fn face(self) -> FaceRecord {
        FaceRecord(self.attributes)
    }

    #[inline]
    pub fn ao(self) -> AoRecord {
        AoRecord((self.ao_attributes & 0xFF) as u8)
    }

    /// Views a raw byte buffer as instances without copying.
    pub fn cast_bytes(bytes: &[u8]) -> Result<&[QuadInstance], PodCastError> {
        bytemuck::try_cast_slice(bytes)
    }
}

/// Face drawn without ambient occlusion (e.g. transparent blocks).
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct TransparentQuadInstance {
    pub attributes: u32,
}

impl TransparentQuadInstance {
    pub const STRIDE: usize = std::mem::size_of::<Self>();

    #[inline]
    pub fn new(face: FaceRecord) -> Self {
        Self {
            attributes: face.bits(),
        }
    }

    #[inline]
    pub fn face(self) -> FaceRecord {
        FaceRecord(self.attributes)
    }

    pub fn cast_bytes(bytes: &[u8]) -> Result<&[TransparentQuadInstance], PodCastError> {
        bytemuck::try_cast_slice(bytes)
    }
}
