//! Draw-side plumbing around the quad builder: origin bindings, validation,
//! indirect-draw batching and parallel chunk expansion.
#![forbid(unsafe_code)]

mod batch;
mod binding;
mod draw;
mod error;
mod pool;
mod validate;

pub use batch::{DrawBatcher, DrawIndirectArgs};
pub use binding::{OriginBinding, expand_chunk, expand_faces};
pub use draw::ChunkDraw;
pub use error::RuntimeError;
pub use pool::ExpandPool;
pub use validate::validate;
