//! Bit layouts of the per-instance face and AO records.
//!
//! Face record, bits starting from the LSB:
//! * `0-5`: x offset inside the chunk
//! * `5-10`: y offset inside the chunk
//! * `10-15`: z offset inside the chunk
//! * `15-23`: texture index
//! * `23-26`: direction (see [`Direction`])
//!
//! AO record: four 2-bit corner weights at bits `0-2`, `2-4`, `4-6`, `6-8`.

use crate::direction::Direction;
use crate::error::CodecError;
use crate::CHUNK_WIDTH_BITS;

const OFFSET_MASK: u32 = (1 << CHUNK_WIDTH_BITS) - 1;
const TEXTURE_SHIFT: u32 = CHUNK_WIDTH_BITS * 3;
const TEXTURE_MASK: u32 = 0xFF;
const DIRECTION_SHIFT: u32 = TEXTURE_SHIFT + 8;
const DIRECTION_MASK: u32 = 0b111;
const AO_CORNER_BITS: u32 = 2;
const AO_CORNER_MASK: u8 = 0b11;

/// Fields sliced out of a packed face record. `direction` is the raw 3-bit
/// value and is not validated.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct DecodedFace {
    pub local_offset: [u8; 3],
    pub texture_index: u8,
    pub direction: u8,
}

#[inline]
pub fn decode_face(packed: u32) -> DecodedFace {
    DecodedFace {
        local_offset: [
            (packed & OFFSET_MASK) as u8,
            ((packed >> CHUNK_WIDTH_BITS) & OFFSET_MASK) as u8,
            ((packed >> (CHUNK_WIDTH_BITS * 2)) & OFFSET_MASK) as u8,
        ],
        texture_index: ((packed >> TEXTURE_SHIFT) & TEXTURE_MASK) as u8,
        direction: ((packed >> DIRECTION_SHIFT) & DIRECTION_MASK) as u8,
    }
}

/// Corner weights `(c0, c1, c2, c3)` of a packed AO record.
#[inline]
pub fn decode_ao(packed: u8) -> [u8; 4] {
    [
        packed & AO_CORNER_MASK,
        (packed >> AO_CORNER_BITS) & AO_CORNER_MASK,
        (packed >> (AO_CORNER_BITS * 2)) & AO_CORNER_MASK,
        (packed >> (AO_CORNER_BITS * 3)) & AO_CORNER_MASK,
    ]
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct FaceRecord(pub u32);

impl FaceRecord {
    pub fn pack(
        local_offset: [u8; 3],
        texture_index: u8,
        direction: Direction,
    ) -> Result<FaceRecord, CodecError> {
        for (axis, &value) in local_offset.iter().enumerate() {
            if u32::from(value) > OFFSET_MASK {
                return Err(CodecError::OffsetOutOfRange { axis, value });
            }
        }
        Ok(Self::pack_unchecked(local_offset, texture_index, direction))
    }

    /// Packs without range checks; out-of-range offsets are masked to 5 bits.
    #[inline]
    pub fn pack_unchecked(
        local_offset: [u8; 3],
        texture_index: u8,
        direction: Direction,
    ) -> FaceRecord {
        let [x, y, z] = local_offset.map(|v| u32::from(v) & OFFSET_MASK);
        FaceRecord(
            x | (y << CHUNK_WIDTH_BITS)
                | (z << (CHUNK_WIDTH_BITS * 2))
                | (u32::from(texture_index) << TEXTURE_SHIFT)
                | (u32::from(u8::from(direction)) << DIRECTION_SHIFT),
        )
    }

    #[inline]
    pub fn bits(self) -> u32 {
        self.0
    }

    #[inline]
    pub fn decode(self) -> DecodedFace {
        decode_face(self.0)
    }

    #[inline]
    pub fn local_offset(self) -> [u8; 3] {
        self.decode().local_offset
    }

    #[inline]
    pub fn texture_index(self) -> u8 {
        self.decode().texture_index
    }

    pub fn direction(self) -> Result<Direction, CodecError> {
        Direction::try_from(self.decode().direction)
    }
}

impl From<u32> for FaceRecord {
    fn from(bits: u32) -> Self {
        FaceRecord(bits)
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct AoRecord(pub u8);

impl AoRecord {
    /// Fully lit face: every corner weight is zero.
    pub const OPEN: AoRecord = AoRecord(0);

    pub fn pack(corners: [u8; 4]) -> Result<AoRecord, CodecError> {
        let mut bits = 0u8;
        for (corner, &value) in corners.iter().enumerate() {
            if value > AO_CORNER_MASK {
                return Err(CodecError::AoCornerOutOfRange { corner, value });
            }
            bits |= value << (AO_CORNER_BITS * corner as u32);
        }
        Ok(AoRecord(bits))
    }

    #[inline]
    pub fn corners(self) -> [u8; 4] {
        decode_ao(self.0)
    }

    #[inline]
    pub fn bits(self) -> u8 {
        self.0
    }
}

impl From<u8> for AoRecord {
    fn from(bits: u8) -> Self {
        AoRecord(bits)
    }
}
