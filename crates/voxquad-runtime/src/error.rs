use thiserror::Error;

#[derive(Error, Debug)]
pub enum RuntimeError {
    #[error("ao stream has {ao} entries for {faces} face records")]
    AoLengthMismatch { faces: usize, ao: usize },

    #[error("instance {instance} has invalid direction {raw}")]
    InvalidDirection { instance: usize, raw: u8 },

    #[error("draw index {index} out of range for {draws} origin table entries")]
    DrawIndexOutOfRange { index: u32, draws: usize },

    #[error("failed to build expansion pool: {0}")]
    Pool(#[from] rayon::ThreadPoolBuildError),
}
