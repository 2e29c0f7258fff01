use std::ops::{Div, Mul};

/// Real-valued RGB with channels on the 0..=255 scale
///
/// Blending happens in this form; quantization back to bytes only happens
/// when a pixel is written out.
#[derive(Copy, Clone, Debug, Default, PartialEq, Add, AddAssign, Sub)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    /// Fully transparent RGBA, the value of every pixel outside the hexagon
    pub const TRANSPARENT: [u8; 4] = [0, 0, 0, 0];

    #[inline(always)]
    pub fn from_rgb([r, g, b]: [u8; 3]) -> Self {
        Self {
            r: r as f32,
            g: g as f32,
            b: b as f32,
        }
    }

    /// Round to the nearest byte, clamped into range
    #[inline(always)]
    pub fn to_rgb(self) -> [u8; 3] {
        fn quantize(channel: f32) -> u8 {
            channel.round().clamp(0., 255.) as u8
        }
        [quantize(self.r), quantize(self.g), quantize(self.b)]
    }

    #[inline(always)]
    pub fn to_rgba(self, alpha: u8) -> [u8; 4] {
        let [r, g, b] = self.to_rgb();
        [r, g, b, alpha]
    }

    /// Largest per-channel absolute difference
    pub fn distance(self, other: Self) -> f32 {
        let Self { r, g, b } = self - other;
        r.abs().max(g.abs()).max(b.abs())
    }
}

impl Mul<f32> for Color {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self::Output {
        Self {
            r: self.r * rhs,
            g: self.g * rhs,
            b: self.b * rhs,
        }
    }
}

impl Mul<Color> for f32 {
    type Output = Color;

    fn mul(self, rhs: Color) -> Self::Output {
        rhs * self
    }
}

impl Div<f32> for Color {
    type Output = Self;

    fn div(self, rhs: f32) -> Self::Output {
        Self {
            r: self.r / rhs,
            g: self.g / rhs,
            b: self.b / rhs,
        }
    }
}

#[test]
fn test_quantization_rounds_and_clamps() {
    let color = Color { r: 29.999998, g: -3., b: 300. };
    assert_eq!(color.to_rgb(), [30, 0, 255]);
    assert_eq!(Color { r: 10.4, g: 10.5, b: 10.6 }.to_rgba(255), [10, 11, 11, 255]);
}
