use voxquad_geom::Vec3;

use crate::error::CodecError;

/// Outward orientation of a cube face. The discriminant is the 3-bit value
/// stored in a face record.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum Direction {
    NegX = 0,
    PosX = 1,
    NegY = 2,
    PosY = 3,
    NegZ = 4,
    PosZ = 5,
}

impl Direction {
    pub const ALL: [Direction; 6] = [
        Direction::NegX,
        Direction::PosX,
        Direction::NegY,
        Direction::PosY,
        Direction::NegZ,
        Direction::PosZ,
    ];

    /// Returns the `[0..6)` index of this direction.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Maps a raw record value to a direction, treating 6 and 7 like `NegZ`.
    /// Only for hot paths where the producer already guarantees `raw < 6`.
    #[inline]
    pub fn from_raw_lossy(raw: u8) -> Direction {
        Direction::try_from(raw).unwrap_or(Direction::NegZ)
    }

    /// World axis the face is perpendicular to: 0 = X, 1 = Y, 2 = Z.
    #[inline]
    pub fn axis(self) -> usize {
        self.index() / 2
    }

    #[inline]
    pub fn is_positive(self) -> bool {
        self.index() & 1 == 1
    }

    #[inline]
    pub fn opposite(self) -> Direction {
        Direction::ALL[self.index() ^ 1]
    }

    /// Returns the integer grid delta when stepping out of this face.
    #[inline]
    pub fn delta(self) -> [i32; 3] {
        let mut d = [0; 3];
        d[self.axis()] = if self.is_positive() { 1 } else { -1 };
        d
    }

    /// Returns the unit-normal vector for this face.
    #[inline]
    pub fn normal(self) -> Vec3 {
        Vec3::from_ivec(self.delta())
    }

    /// Steps `distance` cells from `pos` along this direction.
    #[inline]
    pub fn step(self, pos: [i32; 3], distance: i32) -> [i32; 3] {
        let d = self.delta();
        [
            pos[0] + d[0] * distance,
            pos[1] + d[1] * distance,
            pos[2] + d[2] * distance,
        ]
    }
}

impl TryFrom<u8> for Direction {
    type Error = CodecError;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        Direction::ALL
            .get(raw as usize)
            .copied()
            .ok_or(CodecError::InvalidDirection(raw))
    }
}

impl From<Direction> for u8 {
    #[inline]
    fn from(d: Direction) -> u8 {
        d as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_values_round_trip() {
        for d in Direction::ALL {
            assert_eq!(Direction::try_from(u8::from(d)).unwrap(), d);
        }
        assert_eq!(Direction::try_from(6), Err(CodecError::InvalidDirection(6)));
        assert_eq!(Direction::try_from(7), Err(CodecError::InvalidDirection(7)));
    }

    #[test]
    fn opposite_flips_sign_on_same_axis() {
        for d in Direction::ALL {
            let o = d.opposite();
            assert_ne!(o, d);
            assert_eq!(o.axis(), d.axis());
            assert_eq!(o.opposite(), d);
            let (a, b) = (d.delta(), o.delta());
            assert_eq!([a[0] + b[0], a[1] + b[1], a[2] + b[2]], [0, 0, 0]);
        }
    }

    #[test]
    fn lossy_defaults_to_neg_z() {
        assert_eq!(Direction::from_raw_lossy(3), Direction::PosY);
        assert_eq!(Direction::from_raw_lossy(6), Direction::NegZ);
        assert_eq!(Direction::from_raw_lossy(7), Direction::NegZ);
    }

    #[test]
    fn step_moves_along_axis() {
        assert_eq!(Direction::NegX.step([4, 5, 6], 2), [2, 5, 6]);
        assert_eq!(Direction::PosZ.step([4, 5, 6], -1), [4, 5, 5]);
    }
}
