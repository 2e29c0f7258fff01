//! Blend weights that fade each hexagon into its neighbors' translated
//! texture as a pixel approaches the shared edge

use itertools::izip;
use static_assertions::const_assert_eq;

use crate::basic::{Dir, LatticeCoords};
use crate::color::Color;

/// The weights always add up to this
pub const WEIGHT_SUM: f32 = 3.;

// one ramp per side of each of the three axes
const_assert_eq!(Dir::COUNT, 2 * 3);

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BlendWeights {
    pub center: f32,
    /// Indexed by [`Dir`]
    pub neighbors: [f32; Dir::COUNT],
}

/// Rises linearly from 0 at the mid-line to 1 at the edge, 0 on the far side
#[inline(always)]
fn ramp(t: f32) -> f32 {
    ((t - 0.5) * 2.).max(0.)
}

impl BlendWeights {
    /// Only the hexagon's own sample
    pub const CENTER_ONLY: Self = Self {
        center: WEIGHT_SUM,
        neighbors: [0.; Dir::COUNT],
    };

    pub fn new(coords: LatticeCoords, diameter: f32) -> Self {
        let mut neighbors = [0.; Dir::COUNT];
        for dir in Dir::iter() {
            // 0 at the far edge, 0.5 at the center, 1 at the near edge
            let t = dir.sign() * coords[dir.axis()] / diameter + 0.5;
            neighbors[dir as usize] = ramp(t);
        }
        Self {
            center: WEIGHT_SUM - neighbors.iter().sum::<f32>(),
            neighbors,
        }
    }

    pub fn get(&self, dir: Dir) -> f32 {
        self.neighbors[dir as usize]
    }

    pub fn sum(&self) -> f32 {
        self.center + self.neighbors.iter().sum::<f32>()
    }

    pub fn min(&self) -> f32 {
        self.neighbors.iter().fold(self.center, |acc, w| acc.min(*w))
    }

    /// Convex combination of the center sample and one sample per [`Dir`]
    #[inline]
    pub fn blend(&self, center: Color, neighbors: [Color; Dir::COUNT]) -> Color {
        let mut acc = center * self.center;
        for (weight, sample) in izip!(self.neighbors, neighbors) {
            acc += sample * weight;
        }
        acc / WEIGHT_SUM
    }
}

#[cfg(test)]
fn random_inside_points(count: usize, diameter: f32) -> Vec<LatticeCoords> {
    use crate::basic::{Hexagon, Point};
    use rand::{rngs::StdRng, Rng, SeedableRng};

    let hexagon = Hexagon::new(Point::ORIGIN, diameter);
    let half = hexagon.bounding_size() / 2.;
    let mut rng = StdRng::seed_from_u64(0x3e16);
    std::iter::repeat_with(|| Point {
        x: rng.gen_range(-half.x..=half.x),
        y: rng.gen_range(-half.y..=half.y),
    })
    .filter_map(|pos| hexagon.classify(pos))
    .take(count)
    .collect()
}

#[test]
fn test_center_gets_everything() {
    assert_eq!(BlendWeights::new(LatticeCoords::ZERO, 256.), BlendWeights::CENTER_ONLY);
}

#[test]
fn test_weights_partition() {
    for diameter in [1., 37., 256., 1000.] {
        for coords in random_inside_points(2000, diameter) {
            let weights = BlendWeights::new(coords, diameter);
            assert!(weights.min() >= -1e-5, "{:?} -> {:?}", coords, weights);
            assert!((weights.sum() - WEIGHT_SUM).abs() < 1e-4, "{:?} -> {:?}", coords, weights);
            // the center keeps at least a third inside the hexagon
            assert!(weights.center >= 1. - 1e-4, "{:?} -> {:?}", coords, weights);
        }
    }
}

#[test]
fn test_opposite_ramps_exclude_each_other() {
    for coords in random_inside_points(500, 100.) {
        let weights = BlendWeights::new(coords, 100.);
        for dir in [Dir::Top, Dir::BottomLeft, Dir::BottomRight] {
            assert!(weights.get(dir) == 0. || weights.get(-dir) == 0., "{:?}", weights);
        }
    }
}

#[test]
fn test_edge_midpoint_weights() {
    // midpoint of the edge whose neighbor is sampled through `Top`
    let coords = LatticeCoords([50., -25., -25.]);
    let weights = BlendWeights::new(coords, 100.);
    assert_eq!(weights.get(Dir::Top), 1.);
    assert_eq!(weights.get(Dir::TopRight), 0.5);
    assert_eq!(weights.get(Dir::TopLeft), 0.5);
    assert_eq!(weights.center, 1.);
}

#[test]
fn test_blend_of_constant_is_constant() {
    let color = Color { r: 10., g: 20., b: 30. };
    for coords in random_inside_points(200, 64.) {
        let blended = BlendWeights::new(coords, 64.).blend(color, [color; Dir::COUNT]);
        assert!(blended.distance(color) < 1e-3, "{:?}", blended);
    }
}
