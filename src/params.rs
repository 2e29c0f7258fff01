use crate::basic::{Hexagon, Point};
use crate::image::RgbImage;
use std::mem::size_of;

#[derive(Debug, Display, Error, PartialEq)]
pub enum ParamsError {
    #[display(fmt = "{} must be positive and finite, got {}", name, value)]
    Diameter { name: &'static str, value: f32 },
    #[display(fmt = "{} must be finite, got ({}, {})", name, x, y)]
    Center { name: &'static str, x: f32, y: f32 },
    #[display(fmt = "canvas of {}x{} has no pixels", width, height)]
    EmptyCanvas { width: usize, height: usize },
    #[display(fmt = "canvas of {}x{} does not fit in memory", width, height)]
    CanvasTooLarge { width: usize, height: usize },
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub enum Blending {
    /// Fade into the neighbors' translated texture near the edges
    #[default]
    Seamless,
    /// Only the hexagon's own sample, useful to see the raw mapping
    CenterOnly,
}

/// Everything a render needs besides the source image
#[derive(Clone, Debug, PartialEq)]
pub struct TileParams {
    pub canvas_width: usize,
    pub canvas_height: usize,

    pub dst_center: Point,
    pub dst_diameter: f32,

    pub src_diameter: f32,
    /// `None` means the middle of the source image
    pub src_center: Option<Point>,

    pub parallel: bool,
    pub blending: Blending,
}

impl Default for TileParams {
    fn default() -> Self {
        Self::for_diameter(256.)
    }
}

impl TileParams {
    /// A canvas that tightly fits a hexagon of the given short diameter,
    /// sampling a source tile of the same diameter
    pub fn for_diameter(diameter: f32) -> Self {
        let hexagon = Hexagon::new(Point::ORIGIN, diameter);
        let size = hexagon.bounding_size();
        Self {
            canvas_width: size.x.ceil() as usize,
            canvas_height: size.y.ceil() as usize,

            dst_center: size / 2.,
            dst_diameter: diameter,

            src_diameter: diameter,
            src_center: None,

            parallel: true,
            blending: Blending::Seamless,
        }
    }
}

// builder
impl TileParams {
    #[must_use]
    pub fn canvas(mut self, width: usize, height: usize) -> Self {
        self.canvas_width = width;
        self.canvas_height = height;
        self
    }

    #[must_use]
    pub fn dst_center(mut self, center: Point) -> Self {
        self.dst_center = center;
        self
    }

    #[must_use]
    pub fn dst_diameter(mut self, diameter: f32) -> Self {
        self.dst_diameter = diameter;
        self
    }

    #[must_use]
    pub fn src_diameter(mut self, diameter: f32) -> Self {
        self.src_diameter = diameter;
        self
    }

    #[must_use]
    pub fn src_center(mut self, center: Point) -> Self {
        self.src_center = Some(center);
        self
    }

    #[must_use]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    #[must_use]
    pub fn blending(mut self, blending: Blending) -> Self {
        self.blending = blending;
        self
    }
}

impl TileParams {
    pub fn validate(&self) -> Result<(), ParamsError> {
        if self.canvas_width == 0 || self.canvas_height == 0 {
            return Err(ParamsError::EmptyCanvas {
                width: self.canvas_width,
                height: self.canvas_height,
            });
        }
        // a Vec can hold at most isize::MAX bytes
        let bytes = self
            .canvas_width
            .checked_mul(self.canvas_height)
            .and_then(|area| area.checked_mul(size_of::<[u8; 4]>()));
        if !matches!(bytes, Some(bytes) if bytes <= isize::MAX as usize) {
            return Err(ParamsError::CanvasTooLarge {
                width: self.canvas_width,
                height: self.canvas_height,
            });
        }

        for (name, value) in [
            ("destination diameter", self.dst_diameter),
            ("source diameter", self.src_diameter),
        ] {
            if !(value.is_finite() && value > 0.) {
                return Err(ParamsError::Diameter { name, value });
            }
        }

        for (name, center) in [
            ("destination center", Some(self.dst_center)),
            ("source center", self.src_center),
        ] {
            if let Some(Point { x, y }) = center.filter(|c| !c.is_finite()) {
                return Err(ParamsError::Center { name, x, y });
            }
        }

        Ok(())
    }

    pub fn dst_hexagon(&self) -> Hexagon {
        Hexagon::new(self.dst_center, self.dst_diameter)
    }

    pub fn src_hexagon(&self, source: &RgbImage) -> Hexagon {
        let center = self.src_center.unwrap_or(Point {
            x: source.width() as f32 / 2.,
            y: source.height() as f32 / 2.,
        });
        Hexagon::new(center, self.src_diameter)
    }
}

#[test]
fn test_default_fits_a_256_hexagon() {
    let params = TileParams::default();
    assert_eq!((params.canvas_width, params.canvas_height), (296, 256));
    assert!((params.dst_center.x - 256. / 3f32.sqrt()).abs() < 1e-3);
    assert_eq!(params.dst_center.y, 128.);
    assert_eq!(params.src_diameter, 256.);
    assert!(params.validate().is_ok());
}

#[test]
fn test_hexagon_fits_the_canvas() {
    for diameter in [3., 64., 100., 333.] {
        let params = TileParams::for_diameter(diameter);
        for vertex in params.dst_hexagon().vertices() {
            assert!(vertex.x >= -1e-3 && vertex.x <= params.canvas_width as f32 + 1e-3);
            assert!(vertex.y >= -1e-3 && vertex.y <= params.canvas_height as f32 + 1e-3);
        }
    }
}

#[test]
fn test_rejects_degenerate_params() {
    let base = TileParams::for_diameter(10.);
    assert_eq!(
        base.clone().dst_diameter(0.).validate(),
        Err(ParamsError::Diameter { name: "destination diameter", value: 0. })
    );
    assert!(matches!(
        base.clone().src_diameter(f32::NAN).validate(),
        Err(ParamsError::Diameter { name: "source diameter", .. })
    ));
    assert_eq!(
        base.clone().src_diameter(-4.).validate(),
        Err(ParamsError::Diameter { name: "source diameter", value: -4. })
    );
    assert_eq!(
        base.clone().canvas(0, 10).validate(),
        Err(ParamsError::EmptyCanvas { width: 0, height: 10 })
    );
    assert_eq!(
        base.clone().canvas(usize::MAX, 2).validate(),
        Err(ParamsError::CanvasTooLarge { width: usize::MAX, height: 2 })
    );
    // area fits in usize, bytes don't fit in a Vec
    assert_eq!(
        base.clone().canvas(usize::MAX / 8, 2).validate(),
        Err(ParamsError::CanvasTooLarge { width: usize::MAX / 8, height: 2 })
    );
    assert!(matches!(
        base.src_center(Point { x: f32::INFINITY, y: 0. }).validate(),
        Err(ParamsError::Center { name: "source center", .. })
    ));
}

#[test]
fn test_source_center_defaults_to_image_middle() {
    let source = RgbImage::filled(300, 200, [0; 3]);
    let params = TileParams::default();
    assert_eq!(params.src_hexagon(&source).center, Point { x: 150., y: 100. });
    let params = params.src_center(Point { x: 1., y: 2. });
    assert_eq!(params.src_hexagon(&source).center, Point { x: 1., y: 2. });
}
