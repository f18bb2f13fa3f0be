use thiserror::Error;

/// Errors raised by the checked packing and decoding paths.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CodecError {
    #[error("local offset {value} on axis {axis} exceeds chunk width")]
    OffsetOutOfRange { axis: usize, value: u8 },

    #[error("invalid face direction {0} (expected 0..=5)")]
    InvalidDirection(u8),

    #[error("ao corner {corner} has weight {value} (expected 0..=3)")]
    AoCornerOutOfRange { corner: usize, value: u8 },
}
