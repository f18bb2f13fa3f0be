//! Producer-side AO corner sampling.
//!
//! Corner `i` of a face sits at step `(s0, s1)` along the face's two tangent
//! directions, with `s0 = -,-,+,+` and `s1 = -,+,-,+`. The tangents are chosen
//! so that this order matches the canonical quad vertex order after the
//! direction swizzle, so corner `i` shades quad vertex `i`.

use crate::direction::Direction;
use crate::record::AoRecord;

/// Occlusion weight for one face corner. Two solid sides fully occlude the
/// corner regardless of the diagonal cell.
#[inline]
pub fn corner_occlusion(side_a: bool, side_b: bool, corner: bool) -> u8 {
    if side_a && side_b {
        3
    } else {
        side_a as u8 + side_b as u8 + corner as u8
    }
}

/// Tangent directions spanning a face, in quad model `(x, y)` order.
#[inline]
pub fn ao_tangents(direction: Direction) -> (Direction, Direction) {
    match direction {
        Direction::NegX => (Direction::PosY, Direction::PosZ),
        Direction::PosX => (Direction::PosZ, Direction::PosY),
        Direction::NegY => (Direction::PosZ, Direction::PosX),
        Direction::PosY => (Direction::PosX, Direction::PosZ),
        Direction::NegZ => (Direction::PosX, Direction::PosY),
        Direction::PosZ => (Direction::PosY, Direction::PosX),
    }
}

/// Tangent steps of corner `i`.
#[inline]
pub fn corner_steps(corner: usize) -> (i32, i32) {
    let s0 = if corner < 2 { -1 } else { 1 };
    let s1 = if corner & 1 == 1 { 1 } else { -1 };
    (s0, s1)
}

/// Samples the four corner weights of the face of `block` facing `direction`.
/// `is_solid` is queried with world cell coordinates.
pub fn sample_face_ao(
    block: [i32; 3],
    direction: Direction,
    is_solid: impl Fn([i32; 3]) -> bool,
) -> AoRecord {
    let (t0, t1) = ao_tangents(direction);
    let air = direction.step(block, 1);
    let mut bits = 0u8;
    for i in 0..4 {
        let (s0, s1) = corner_steps(i);
        let side_a = t0.step(air, s0);
        let side_b = t1.step(air, s1);
        let diagonal = t1.step(side_a, s1);
        let value = corner_occlusion(is_solid(side_a), is_solid(side_b), is_solid(diagonal));
        bits |= value << (2 * i);
    }
    AoRecord(bits)
}
