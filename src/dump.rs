//! Chunk dump files: face records and AO bytes per chunk, as TOML.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::Path;

use voxquad_codec::ChunkOrigin;
use voxquad_runtime::ChunkDraw;

#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq)]
pub struct ChunkDump {
    #[serde(default)]
    pub chunks: Vec<DumpChunk>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct DumpChunk {
    pub origin: ChunkOrigin,
    #[serde(default)]
    pub faces: Vec<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ao: Option<Vec<u8>>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub transparent: bool,
}

fn is_false(b: &bool) -> bool {
    !*b
}

impl DumpChunk {
    /// Transparent chunks drop their AO stream.
    pub fn to_draw(&self) -> ChunkDraw {
        let ao = if self.transparent { None } else { self.ao.clone() };
        ChunkDraw::new(self.origin, self.faces.clone(), ao)
    }
}

impl ChunkDump {
    pub fn draws(&self) -> Vec<ChunkDraw> {
        self.chunks.iter().map(DumpChunk::to_draw).collect()
    }

    pub fn face_count(&self) -> usize {
        self.chunks.iter().map(|c| c.faces.len()).sum()
    }
}

pub fn load_dump_from_path(path: &Path) -> Result<ChunkDump, Box<dyn Error>> {
    let s = fs::read_to_string(path)?;
    let dump: ChunkDump = toml::from_str(&s)?;
    log::info!(
        "loaded {} chunks ({} faces) from {}",
        dump.chunks.len(),
        dump.face_count(),
        path.display()
    );
    Ok(dump)
}

pub fn write_dump_to_path(dump: &ChunkDump, path: &Path) -> Result<(), Box<dyn Error>> {
    let s = toml::to_string(dump)?;
    fs::write(path, s)?;
    Ok(())
}
