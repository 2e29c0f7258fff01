//! From destination pixels to source texture positions

use crate::basic::{Dir, Hexagon, Point};

/// Rescale `dst_pos` from the destination hexagon's frame into the source
/// hexagon's frame
///
/// Both hexagons share their orientation, so this is an isotropic scale by
/// the ratio of the diameters plus a translation.
#[inline]
pub fn to_source_space(dst_pos: Point, dst: Hexagon, src: Hexagon) -> Point {
    (dst_pos - dst.center) / dst.diameter * src.diameter + src.center
}

/// A source position together with its six translates by one full period
/// of the source tile along the lattice axes
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct NeighborSet {
    pub center: Point,
    /// Indexed by [`Dir`]
    pub neighbors: [Point; Dir::COUNT],
}

impl NeighborSet {
    pub fn around(center: Point, src_diameter: f32) -> Self {
        let mut neighbors = [center; Dir::COUNT];
        for dir in Dir::iter() {
            neighbors[dir as usize] = center + dir.sample_offset() * src_diameter;
        }
        Self { center, neighbors }
    }

    pub fn get(&self, dir: Dir) -> Point {
        self.neighbors[dir as usize]
    }
}

#[test]
fn test_mapping_scales_around_the_centers() {
    let dst = Hexagon::new(Point { x: 100., y: 50. }, 100.);
    let src = Hexagon::new(Point { x: 20., y: 20. }, 40.);

    assert_eq!(to_source_space(dst.center, dst, src), src.center);
    let mapped = to_source_space(Point { x: 150., y: 0. }, dst, src);
    assert!((mapped - Point { x: 40., y: 0. }).magnitude() < 1e-5, "{:?}", mapped);
}

#[test]
fn test_neighbor_offsets() {
    use Dir::*;

    let h = 3f32.sqrt() / 2.;
    let d = 256.;
    let s = Point { x: 300., y: 200. };
    let set = NeighborSet::around(s, d);

    let expected = [
        (Top, Point { x: 0., y: -d }),
        (BottomLeft, Point { x: -d * h, y: d / 2. }),
        (BottomRight, Point { x: d * h, y: d / 2. }),
        (Bottom, Point { x: 0., y: d }),
        (TopRight, Point { x: d * h, y: -d / 2. }),
        (TopLeft, Point { x: -d * h, y: -d / 2. }),
    ];
    for (dir, offset) in expected {
        let error = (set.get(dir) - (s + offset)).magnitude();
        assert!(error < 1e-3, "{:?}: {:?}", dir, set.get(dir));
    }
    assert_eq!(set.center, s);
    assert_eq!(set.neighbors[Dir::Bottom as usize], set.get(Dir::Bottom));
}
