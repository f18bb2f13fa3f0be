use voxquad_codec::{ChunkOrigin, QuadInstance, TransparentQuadInstance};

/// One chunk's face records as handed over by the mesher. `ao` is parallel to
/// `faces`; `None` draws every corner unoccluded.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChunkDraw {
    pub origin: ChunkOrigin,
    pub faces: Vec<u32>,
    pub ao: Option<Vec<u8>>,
}

impl ChunkDraw {
    pub fn new(origin: ChunkOrigin, faces: Vec<u32>, ao: Option<Vec<u8>>) -> Self {
        Self { origin, faces, ao }
    }

    pub fn from_instances(origin: ChunkOrigin, instances: &[QuadInstance]) -> Self {
        Self {
            origin,
            faces: instances.iter().map(|i| i.attributes).collect(),
            ao: Some(instances.iter().map(|i| i.ao().bits()).collect()),
        }
    }

    pub fn from_transparent(origin: ChunkOrigin, instances: &[TransparentQuadInstance]) -> Self {
        Self {
            origin,
            faces: instances.iter().map(|i| i.attributes).collect(),
            ao: None,
        }
    }

    pub fn len(&self) -> usize {
        self.faces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// AO byte for instance `i`; missing entries read as open.
    #[inline]
    pub fn ao_at(&self, i: usize) -> u8 {
        self.ao
            .as_deref()
            .and_then(|ao| ao.get(i))
            .copied()
            .unwrap_or(0)
    }

    /// Instance-buffer form of this draw.
    pub fn instances(&self) -> Vec<QuadInstance> {
        self.faces
            .iter()
            .enumerate()
            .map(|(i, &attributes)| QuadInstance {
                attributes,
                ao_attributes: u32::from(self.ao_at(i)),
            })
            .collect()
    }
}
