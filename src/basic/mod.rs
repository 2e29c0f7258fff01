use lazy_static::lazy_static;

pub use dir::{Axis, Dir};
pub use hexagon::Hexagon;
pub use lattice::LatticeCoords;
pub use point::Point;

mod dir;
mod hexagon;
mod lattice;
mod point;

lazy_static! {
    /// The lattice axes `d0`, `d1` and `d2`, 120° apart
    pub static ref AXES: [Point; 3] = {
        let half_sqrt_3 = 3f32.sqrt() / 2.;
        [
            Point { x: 0., y: 1. },
            Point { x: half_sqrt_3, y: -0.5 },
            Point { x: -half_sqrt_3, y: -0.5 },
        ]
    };
}

#[test]
fn test_axes_sum_to_zero() {
    let sum = AXES[0] + AXES[1] + AXES[2];
    assert!(sum.magnitude() < 1e-6, "{:?}", sum);
    for axis in AXES.iter() {
        assert!((axis.magnitude() - 1.).abs() < 1e-6);
    }
}
