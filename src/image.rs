use itertools::iproduct;
use rayon::prelude::*;
use std::slice::ChunksMut;

#[derive(Debug, Display, Error, PartialEq, Eq)]
pub enum ImageError {
    #[display(fmt = "image has no pixels")]
    Empty,
    #[display(
        fmt = "{}x{} image is too small for bilinear sampling (at least 2x2 needed)",
        width,
        height
    )]
    TooSmall { width: usize, height: usize },
    #[display(
        fmt = "buffer of {} bytes does not hold a {}x{} image with {} channels",
        len,
        width,
        height,
        channels
    )]
    BufferSize {
        len: usize,
        width: usize,
        height: usize,
        channels: usize,
    },
}

/// Row-major pixel grid addressed as `(x, y)`, origin at the top left
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Image<P> {
    width: usize,
    height: usize,
    pixels: Vec<P>,
}

pub type RgbImage = Image<[u8; 3]>;
pub type RgbaImage = Image<[u8; 4]>;

impl<P: Copy> Image<P> {
    pub fn filled(width: usize, height: usize, pixel: P) -> Self {
        Self {
            width,
            height,
            pixels: vec![pixel; width * height],
        }
    }

    pub fn from_fn<F: FnMut(usize, usize) -> P>(width: usize, height: usize, mut f: F) -> Self {
        let pixels = iproduct!(0..height, 0..width)
            .map(|(y, x)| f(x, y))
            .collect();
        Self { width, height, pixels }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    #[inline(always)]
    pub fn get(&self, x: usize, y: usize) -> P {
        debug_assert!(x < self.width && y < self.height, "({}, {}) out of bounds", x, y);
        self.pixels[y * self.width + x]
    }

    /// One slice per row, top to bottom
    pub fn rows_mut(&mut self) -> ChunksMut<'_, P> {
        self.pixels.chunks_mut(self.width.max(1))
    }

    /// Images that can be fed to the bilinear sampler
    pub fn check_samplable(&self) -> Result<(), ImageError> {
        if self.is_empty() {
            Err(ImageError::Empty)
        } else if self.width < 2 || self.height < 2 {
            Err(ImageError::TooSmall {
                width: self.width,
                height: self.height,
            })
        } else {
            Ok(())
        }
    }
}

impl<P: Copy + Send> Image<P> {
    /// Like [`Image::rows_mut`] but for a rayon pool
    pub fn par_rows_mut(&mut self) -> rayon::slice::ChunksMut<'_, P> {
        self.pixels.par_chunks_mut(self.width.max(1))
    }
}

impl<const N: usize> Image<[u8; N]> {
    /// Wrap an interleaved buffer as produced by an image decoder
    pub fn from_raw(width: usize, height: usize, raw: &[u8]) -> Result<Self, ImageError> {
        if width == 0 || height == 0 {
            return Err(ImageError::Empty);
        }
        let expected = width.checked_mul(height).and_then(|area| area.checked_mul(N));
        if expected != Some(raw.len()) {
            return Err(ImageError::BufferSize {
                len: raw.len(),
                width,
                height,
                channels: N,
            });
        }

        let pixels = raw
            .chunks_exact(N)
            .map(|chunk| {
                let mut pixel = [0; N];
                pixel.copy_from_slice(chunk);
                pixel
            })
            .collect();
        Ok(Self { width, height, pixels })
    }

    /// Interleaved buffer for an image encoder
    pub fn into_raw(self) -> Vec<u8> {
        self.pixels.into_iter().flatten().collect()
    }
}

#[test]
fn test_raw_layout_is_row_major() {
    let raw: Vec<u8> = (0..2 * 3 * 3).collect();
    let image = RgbImage::from_raw(2, 3, &raw).unwrap();
    assert_eq!(image.get(0, 0), [0, 1, 2]);
    assert_eq!(image.get(1, 0), [3, 4, 5]);
    assert_eq!(image.get(0, 1), [6, 7, 8]);
    assert_eq!(image.get(1, 2), [15, 16, 17]);
    assert_eq!(image.into_raw(), raw);
}

#[test]
fn test_from_fn_matches_get() {
    let image = Image::from_fn(5, 4, |x, y| (x * 10 + y) as u8);
    for (x, y) in iproduct!(0..5, 0..4) {
        assert_eq!(image.get(x, y), (x * 10 + y) as u8);
    }
}

#[test]
fn test_rejects_bad_buffers() {
    assert_eq!(RgbImage::from_raw(0, 3, &[]), Err(ImageError::Empty));
    assert_eq!(
        RgbaImage::from_raw(2, 2, &[0; 15]),
        Err(ImageError::BufferSize { len: 15, width: 2, height: 2, channels: 4 })
    );
    assert_eq!(
        RgbImage::from_raw(usize::MAX / 3 + 1, 3, &[0; 6]),
        Err(ImageError::BufferSize { len: 6, width: usize::MAX / 3 + 1, height: 3, channels: 3 })
    );
    assert!(matches!(
        RgbaImage::from_raw(usize::MAX, usize::MAX, &[0; 4]),
        Err(ImageError::BufferSize { len: 4, .. })
    ));
    assert_eq!(
        RgbImage::filled(1, 8, [0; 3]).check_samplable(),
        Err(ImageError::TooSmall { width: 1, height: 8 })
    );
    assert!(RgbImage::filled(2, 2, [0; 3]).check_samplable().is_ok());
}
