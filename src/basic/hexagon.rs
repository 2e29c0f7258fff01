use crate::basic::{Dir, LatticeCoords, Point};

/// A regular hexagon with its flat sides on the top and bottom
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Hexagon {
    pub center: Point,
    /// Short diameter, the distance between two opposite flat sides
    pub diameter: f32,
}

impl Hexagon {
    pub fn new(center: Point, diameter: f32) -> Self {
        Self { center, diameter }
    }

    /// Apothem, center to the middle of a side
    pub fn radius(self) -> f32 {
        self.diameter / 2.
    }

    pub fn side_len(self) -> f32 {
        self.diameter / 3f32.sqrt()
    }

    /// Width and height of the bounding box
    pub fn bounding_size(self) -> Point {
        Point {
            x: 2. * self.side_len(),
            y: self.diameter,
        }
    }

    /// `Some` with the lattice coordinates of `pos` if it lies inside the
    /// hexagon (boundary included), `None` otherwise
    ///
    /// Because the coordinates sum to zero, the six edge tests collapse into
    /// one bound per axis.
    pub fn classify(self, pos: Point) -> Option<LatticeCoords> {
        let coords = LatticeCoords::project(pos, self.center);
        (coords.max_abs() <= self.radius()).then_some(coords)
    }

    pub fn contains(self, pos: Point) -> bool {
        self.classify(pos).is_some()
    }

    /// The adjacent hexagon of the honeycomb whose shared edge `dir` blends
    /// toward
    #[must_use]
    pub fn neighbor(self, dir: Dir) -> Self {
        Self {
            center: self.center + dir.toward_neighbor() * self.diameter,
            ..self
        }
    }

    /// Corners in clockwise order (y down) starting from the right
    pub fn vertices(self) -> [Point; 6] {
        let side = self.side_len();
        let r = self.radius();
        [
            Point { x: side, y: 0. },
            Point { x: side / 2., y: r },
            Point { x: -side / 2., y: r },
            Point { x: -side, y: 0. },
            Point { x: -side / 2., y: -r },
            Point { x: side / 2., y: -r },
        ]
        .map(|corner| self.center + corner)
    }
}

#[test]
fn test_center_is_inside() {
    let hexagon = Hexagon::new(Point { x: 128., y: 128. }, 256.);
    assert_eq!(
        hexagon.classify(Point { x: 128., y: 128. }),
        Some(LatticeCoords::ZERO)
    );
}

#[test]
fn test_classify_against_bounds() {
    let hexagon = Hexagon::new(Point { x: 50., y: 40. }, 40.);
    let inside = [(50., 21.), (50., 59.), (60., 40.), (40., 40.), (61., 30.)];
    let outside = [(50., 19.), (50., 61.), (74., 40.), (26., 40.), (72., 22.)];

    for (x, y) in inside {
        assert!(hexagon.contains(Point { x, y }), "({}, {}) should be inside", x, y);
    }
    for (x, y) in outside {
        assert!(!hexagon.contains(Point { x, y }), "({}, {}) should be outside", x, y);
    }
}

#[test]
fn test_vertices_lie_on_the_boundary() {
    let hexagon = Hexagon::new(Point { x: -3., y: 7. }, 90.);
    for vertex in hexagon.vertices() {
        let coords = LatticeCoords::project(vertex, hexagon.center);
        assert!((coords.max_abs() - hexagon.radius()).abs() < 1e-3, "{:?}", coords);
        assert!(((vertex - hexagon.center).magnitude() - hexagon.side_len()).abs() < 1e-3);
    }
}

#[test]
fn test_neighbors_share_an_edge() {
    let hexagon = Hexagon::new(Point { x: 0., y: 0. }, 100.);
    for dir in Dir::iter() {
        let neighbor = hexagon.neighbor(dir);
        assert!(((neighbor.center - hexagon.center).magnitude() - 100.).abs() < 1e-3);

        // the midpoint between the centers is on both boundaries
        let midpoint = (hexagon.center + neighbor.center) / 2.;
        let here = LatticeCoords::project(midpoint, hexagon.center);
        let there = LatticeCoords::project(midpoint, neighbor.center);
        assert!((here[dir.axis()] - dir.sign() * 50.).abs() < 1e-3);
        assert!((there[dir.axis()] + dir.sign() * 50.).abs() < 1e-3);

        // exactly two vertices are shared
        let shared = hexagon
            .vertices()
            .iter()
            .filter(|v| neighbor.vertices().iter().any(|w| (**v - *w).magnitude() < 1e-3))
            .count();
        assert_eq!(shared, 2);
    }
}
