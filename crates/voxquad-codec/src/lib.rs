//! Face-instance codec: packed face and AO records, directions, chunk origins.
#![forbid(unsafe_code)]

pub mod ao;
pub mod direction;
pub mod error;
pub mod instance;
pub mod origin;
pub mod record;

pub use ao::{ao_tangents, corner_occlusion, sample_face_ao};
pub use direction::Direction;
pub use error::CodecError;
pub use instance::{QuadInstance, TransparentQuadInstance};
pub use origin::ChunkOrigin;
pub use record::{AoRecord, DecodedFace, FaceRecord, decode_ao, decode_face};

/// Bits per local-offset component.
pub const CHUNK_WIDTH_BITS: u32 = 5;
/// Chunk edge length in voxels.
pub const CHUNK_DIMENSIONS: i32 = 1 << CHUNK_WIDTH_BITS;
