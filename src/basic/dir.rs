use std::ops::{Add, Neg};

use crate::basic::{Point, AXES};
use Dir::*;

/// The six sample directions of the honeycomb, named after where the
/// translated sample is taken from in image space (y grows downward)
///
/// The discriminant doubles as the index into neighbor-sized arrays. The
/// first three belong to the positive side of axes 0, 1 and 2, the last
/// three to the negative side, in the same axis order.
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Dir {
    Top = 0,
    BottomLeft = 1,
    BottomRight = 2,
    Bottom = 3,
    TopRight = 4,
    TopLeft = 5,
}

/// One of the three lattice axes `d0`, `d1`, `d2`
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Axis {
    A0 = 0, // |
    A1 = 1, // \
    A2 = 2, // /
}

impl From<u8> for Dir {
    fn from(num: u8) -> Self {
        match num % 6 {
            0 => Top,
            1 => BottomLeft,
            2 => BottomRight,
            3 => Bottom,
            4 => TopRight,
            _ => TopLeft,
        }
    }
}

impl Neg for Dir {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self + 3
    }
}

impl Add<u8> for Dir {
    type Output = Self;

    fn add(self, rhs: u8) -> Self::Output {
        Self::from(self as u8 + rhs % 6)
    }
}

#[test]
fn test_dir_opposites() {
    for &(dir, opposite) in &[
        (Top, Bottom),
        (BottomLeft, TopRight),
        (BottomRight, TopLeft),
        (Bottom, Top),
    ] {
        assert_eq!(-dir, opposite);
        assert_eq!(dir.axis(), opposite.axis());
        assert_eq!(dir.sign(), -opposite.sign());
    }
}

impl Axis {
    pub fn iter() -> impl Iterator<Item = Self> {
        [Axis::A0, Axis::A1, Axis::A2].iter().copied()
    }

    /// Unit vector of the axis
    pub fn unit(self) -> Point {
        AXES[self as usize]
    }
}

impl Dir {
    pub const COUNT: usize = 6;

    // index order
    pub fn iter() -> impl Iterator<Item = Self> {
        [Top, BottomLeft, BottomRight, Bottom, TopRight, TopLeft]
            .iter()
            .copied()
    }

    pub fn axis(self) -> Axis {
        match self {
            Top | Bottom => Axis::A0,
            BottomLeft | TopRight => Axis::A1,
            BottomRight | TopLeft => Axis::A2,
        }
    }

    /// Which side of the axis activates this direction, `1.` or `-1.`
    pub fn sign(self) -> f32 {
        match self {
            Top | BottomLeft | BottomRight => 1.,
            Bottom | TopRight | TopLeft => -1.,
        }
    }

    /// Unit vector pointing from a hexagon's center toward the neighbor
    /// across the edge this direction blends with
    pub fn toward_neighbor(self) -> Point {
        self.sign() * self.axis().unit()
    }

    /// Unit offset of this direction's translated sample
    pub fn sample_offset(self) -> Point {
        -self.toward_neighbor()
    }
}

#[test]
fn test_sample_offsets_match_names() {
    // y grows downward
    for dir in Dir::iter() {
        let Point { x, y } = dir.sample_offset();
        match dir {
            Top => assert!(x.abs() < 1e-6 && y < 0.),
            Bottom => assert!(x.abs() < 1e-6 && y > 0.),
            TopLeft => assert!(x < 0. && y < 0.),
            TopRight => assert!(x > 0. && y < 0.),
            BottomLeft => assert!(x < 0. && y > 0.),
            BottomRight => assert!(x > 0. && y > 0.),
        }
    }
}

#[test]
fn test_index_order() {
    for (i, dir) in Dir::iter().enumerate() {
        assert_eq!(dir as usize, i);
        assert_eq!(Dir::from(i as u8), dir);
    }
}
