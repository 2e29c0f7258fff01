use std::ops::Index;

use crate::basic::{Axis, Point, AXES};

/// Signed projections of a point, relative to a hexagon center, onto the
/// three lattice axes
///
/// INVARIANT: the three components sum to zero (up to rounding)
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct LatticeCoords(pub [f32; 3]);

impl LatticeCoords {
    pub const ZERO: Self = Self([0.; 3]);

    /// Project `pos` relative to `center`, regardless of any hexagon bounds
    pub fn project(pos: Point, center: Point) -> Self {
        let p = pos - center;
        Self([p.dot(AXES[0]), p.dot(AXES[1]), p.dot(AXES[2])])
    }

    pub fn sum(self) -> f32 {
        self.0.iter().sum()
    }

    /// Largest absolute component, the hexagonal "radius" of the point
    pub fn max_abs(self) -> f32 {
        self.0.iter().fold(0., |acc: f32, p| acc.max(p.abs()))
    }
}

impl Index<Axis> for LatticeCoords {
    type Output = f32;

    fn index(&self, axis: Axis) -> &Self::Output {
        &self.0[axis as usize]
    }
}

#[test]
fn test_zero_sum() {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(0x4e58);
    for _ in 0..1000 {
        let pos = Point { x: rng.gen_range(-2000.0..2000.), y: rng.gen_range(-2000.0..2000.) };
        let center = Point { x: rng.gen_range(-500.0..500.), y: rng.gen_range(-500.0..500.) };
        let coords = LatticeCoords::project(pos, center);
        let scale = coords.max_abs().max(1.);
        assert!(
            coords.sum().abs() / scale < 1e-5,
            "{:?} relative to {:?} gives {:?}",
            pos,
            center,
            coords
        );
    }
}

#[test]
fn test_hexagonal_radius_of_axis_points() {
    for axis in Axis::iter() {
        let coords = LatticeCoords::project(axis.unit() * 10., Point::ORIGIN);
        assert!((coords[axis] - 10.).abs() < 1e-5);
        assert!((coords.max_abs() - 10.).abs() < 1e-5);
    }
}
