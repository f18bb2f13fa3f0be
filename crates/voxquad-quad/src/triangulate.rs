//! Diagonal selection for AO-consistent quad interpolation.
//!
//! A quad drawn as a 4-vertex strip splits along the edge between strip
//! vertices 1 and 2. When the corner weights on that diagonal outweigh the
//! other pair, interpolation across the two triangles shows a seam, so the
//! quad is rotated a quarter turn and the opposite diagonal is used instead.

/// Canonical corner that feeds strip vertex `i` of a flipped quad.
pub const AO_FLIP_PERMUTATION: [usize; 4] = [1, 3, 0, 2];

/// The strip expressed as a triangle list with consistent winding.
pub const QUAD_TRIANGLE_LIST: [[usize; 3]; 2] = [[0, 1, 2], [2, 1, 3]];

/// True when `ao0 + ao3 < ao1 + ao2`. Ties keep the default split.
#[inline]
pub fn should_flip(ao_corners: [u8; 4]) -> bool {
    let [a0, a1, a2, a3] = ao_corners.map(u16::from);
    a0 + a3 < a1 + a2
}

/// Index into `ao_corners` for the given strip vertex.
#[inline]
pub fn ao_corner_index(flipped: bool, vertex_index: usize) -> usize {
    if flipped {
        AO_FLIP_PERMUTATION[vertex_index]
    } else {
        vertex_index
    }
}

/// Canonical corners joined by the shared edge of the two triangles.
#[inline]
pub fn diagonal(flipped: bool) -> (usize, usize) {
    (ao_corner_index(flipped, 1), ao_corner_index(flipped, 2))
}

/// Index-buffer entries for the quad whose first vertex is `base`.
#[inline]
pub fn quad_indices(base: u32) -> [u32; 6] {
    let [[a, b, c], [d, e, f]] = QUAD_TRIANGLE_LIST.map(|tri| tri.map(|i| i as u32));
    [base + a, base + b, base + c, base + d, base + e, base + f]
}
