use std::time::Instant;

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};
use voxquad_quad::{QuadEncoding, Vertex};

use crate::binding::expand_chunk;
use crate::draw::ChunkDraw;
use crate::error::RuntimeError;

/// Worker pool expanding independent chunks in parallel.
pub struct ExpandPool {
    pool: ThreadPool,
    encoding: QuadEncoding,
}

impl ExpandPool {
    /// `threads == 0` lets rayon pick the worker count.
    pub fn new(threads: usize, encoding: QuadEncoding) -> Result<Self, RuntimeError> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("voxquad-expand-{i}"))
            .build()?;
        log::info!(
            "expand pool ready: {} threads, {:?} encoding",
            pool.current_num_threads(),
            encoding
        );
        Ok(Self { pool, encoding })
    }

    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    pub fn encoding(&self) -> QuadEncoding {
        self.encoding
    }

    /// Validates and expands each draw. Results come back in input order.
    pub fn expand_all(&self, draws: &[ChunkDraw]) -> Vec<Result<Vec<Vertex>, RuntimeError>> {
        let t0 = Instant::now();
        let encoding = self.encoding;
        let out: Vec<_> = self
            .pool
            .install(|| draws.par_iter().map(|d| expand_chunk(encoding, d)).collect());
        log::debug!(
            "expanded {} chunks in {} ms",
            draws.len(),
            t0.elapsed().as_millis()
        );
        out
    }
}
