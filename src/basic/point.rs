use std::ops::{Div, Mul, Neg};

/// A position or offset in pixel space, x to the right and y downward
#[derive(Copy, Clone, Debug, Default, PartialEq, Add, Sub)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl From<(usize, usize)> for Point {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x: x as f32, y: y as f32 }
    }
}

impl Mul<f32> for Point {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self::Output {
        Self { x: self.x * rhs, y: self.y * rhs }
    }
}

impl Mul<Point> for f32 {
    type Output = Point;

    fn mul(self, rhs: Point) -> Self::Output {
        rhs * self
    }
}

impl Div<f32> for Point {
    type Output = Self;

    fn div(self, rhs: f32) -> Self::Output {
        Self { x: self.x / rhs, y: self.y / rhs }
    }
}

impl Neg for Point {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self { x: -self.x, y: -self.y }
    }
}

impl Point {
    pub const ORIGIN: Self = Self { x: 0., y: 0. };

    #[must_use]
    pub fn dot(self, other: Self) -> f32 {
        self.x * other.x + self.y * other.y
    }

    #[must_use]
    pub fn magnitude(self) -> f32 {
        (self.x.powi(2) + self.y.powi(2)).sqrt()
    }

    #[must_use]
    pub fn normalized(self) -> Self {
        self / self.magnitude()
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

#[test]
fn test_dot_of_perpendicular_vectors() {
    let a = Point { x: 3., y: 0. };
    let b = Point { x: 0., y: -2. };
    assert_eq!(a.dot(b), 0.);
    assert_eq!(a.dot(a), 9.);
    assert_eq!((a + b).magnitude(), 13f32.sqrt());
}
