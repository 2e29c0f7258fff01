//! Bilinear sampling of the source texture
//!
//! Positions are clamped into the image and the floor corner is pinned to
//! the last full interpolation cell, so the four-pixel footprint never leaves
//! the buffer. Nothing wraps here; periodicity is the job of
//! [`crate::mapping::NeighborSet`].

use crate::basic::Point;
use crate::color::Color;
use crate::image::RgbImage;

/// Interpolated color at `pos`
///
/// The image must be at least 2x2 (see [`RgbImage::check_samplable`]).
#[inline]
pub(crate) fn sample(image: &RgbImage, pos: Point) -> Color {
    let max_x = (image.width() - 1) as f32;
    let max_y = (image.height() - 1) as f32;
    let x = pos.x.clamp(0., max_x);
    let y = pos.y.clamp(0., max_y);

    let i = (x.floor() as usize).min(image.width() - 2);
    let j = (y.floor() as usize).min(image.height() - 2);
    let fx = x - i as f32;
    let fy = y - j as f32;

    let p00 = Color::from_rgb(image.get(i, j));
    let p01 = Color::from_rgb(image.get(i, j + 1));
    let p10 = Color::from_rgb(image.get(i + 1, j));
    let p11 = Color::from_rgb(image.get(i + 1, j + 1));

    (1. - fx) * (1. - fy) * p00 + (1. - fx) * fy * p01 + fx * (1. - fy) * p10 + fx * fy * p11
}

#[cfg(test)]
fn gradient(width: usize, height: usize) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| [(x * 10) as u8, (y * 10) as u8, 100])
}

#[test]
fn test_grid_points_are_exact() {
    let image = gradient(6, 5);
    for (x, y) in itertools::iproduct!(0..6usize, 0..5usize) {
        let color = sample(&image, Point::from((x, y)));
        assert_eq!(color.to_rgb(), image.get(x, y), "at ({}, {})", x, y);
    }
}

#[test]
fn test_interpolates_between_neighbors() {
    let image = gradient(6, 5);
    let color = sample(&image, Point { x: 2.25, y: 3.5 });
    assert!((color.r - 22.5).abs() < 1e-4, "{:?}", color);
    assert!((color.g - 35.).abs() < 1e-4, "{:?}", color);
    assert!((color.b - 100.).abs() < 1e-4, "{:?}", color);
}

#[test]
fn test_far_corner_and_beyond_are_clamped() {
    let image = gradient(6, 5);
    let corner = sample(&image, Point { x: 5., y: 4. });
    assert_eq!(corner.to_rgb(), image.get(5, 4));

    for (x, y) in [(5.5, 4.), (5., 9.), (100., 100.), (f32::MAX, 4.5)] {
        assert_eq!(sample(&image, Point { x, y }), corner, "at ({}, {})", x, y);
    }
    for (x, y) in [(-1., -1.), (-1e9, 0.), (0., -0.25)] {
        assert_eq!(sample(&image, Point { x, y }).to_rgb(), image.get(0, 0), "at ({}, {})", x, y);
    }
}

#[test]
fn test_constant_field() {
    let image = RgbImage::filled(4, 4, [10, 20, 30]);
    for (x, y) in [(0., 0.), (1.3, 2.7), (2.999, 0.001), (-50., 80.)] {
        assert_eq!(sample(&image, Point { x, y }).to_rgb(), [10, 20, 30]);
    }
}
