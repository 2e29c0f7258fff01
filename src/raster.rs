use log::{debug, info, warn};
use rayon::prelude::*;
use static_assertions::assert_impl_all;

use crate::basic::{Dir, Hexagon, Point};
use crate::color::Color;
use crate::error::{Error, ErrorConversion, Result};
use crate::image::{RgbImage, RgbaImage};
use crate::mapping::{to_source_space, NeighborSet};
use crate::params::{Blending, TileParams};
use crate::sampler::sample;
use crate::weights::BlendWeights;

const OPAQUE: u8 = 255;

/// A destination hexagon bound to the source texture it is painted with
///
/// INVARIANT: the parameters are valid and the source can be sampled
#[derive(Copy, Clone, Debug)]
pub struct Tile<'a> {
    source: &'a RgbImage,
    dst: Hexagon,
    src: Hexagon,
    blending: Blending,
}

// needed for concurrency (par_chunks_mut, etc.)
assert_impl_all!(Tile<'static>: Send, Sync);

impl<'a> Tile<'a> {
    pub fn new(source: &'a RgbImage, params: &TileParams) -> Result<Self> {
        params
            .validate()
            .map_err(Error::from)
            .with_trace_step("validate tile parameters")?;
        source
            .check_samplable()
            .map_err(Error::from)
            .with_trace_step("validate source image")?;

        Ok(Self {
            source,
            dst: params.dst_hexagon(),
            src: params.src_hexagon(source),
            blending: params.blending,
        })
    }

    pub fn dst(&self) -> Hexagon {
        self.dst
    }

    pub fn src(&self) -> Hexagon {
        self.src
    }

    /// The same tile laid on the adjacent hexagon of the honeycomb
    #[must_use]
    pub fn neighbor(self, dir: Dir) -> Self {
        Self {
            dst: self.dst.neighbor(dir),
            ..self
        }
    }

    /// Blended color at `pos`, `None` outside the hexagon
    #[inline]
    pub fn shade(&self, pos: Point) -> Option<Color> {
        let coords = self.dst.classify(pos)?;
        let src_pos = to_source_space(pos, self.dst, self.src);
        let center = sample(self.source, src_pos);

        let color = match self.blending {
            Blending::CenterOnly => center,
            Blending::Seamless => {
                let neighbors = NeighborSet::around(src_pos, self.src.diameter)
                    .neighbors
                    .map(|neighbor| sample(self.source, neighbor));
                BlendWeights::new(coords, self.dst.diameter).blend(center, neighbors)
            }
        };
        Some(color)
    }

    /// Shade one canvas row, returns how many pixels were inside
    fn shade_row(&self, y: usize, row: &mut [[u8; 4]]) -> usize {
        let mut covered = 0;
        for (x, pixel) in row.iter_mut().enumerate() {
            if let Some(color) = self.shade(Point::from((x, y))) {
                *pixel = color.to_rgba(OPAQUE);
                covered += 1;
            }
        }
        covered
    }
}

/// Paint the hexagon tile described by `params` with `source`
///
/// Pixels outside the hexagon stay fully transparent.
pub fn render(source: &RgbImage, params: &TileParams) -> Result<RgbaImage> {
    let tile = Tile::new(source, params).with_trace_step("render")?;
    let (width, height) = (params.canvas_width, params.canvas_height);

    info!(
        "rendering {}x{} hexagon tile from {}x{} source",
        width,
        height,
        source.width(),
        source.height()
    );
    debug!(
        "destination {:?}, source {:?}, {:?}, parallel: {}",
        tile.dst, tile.src, tile.blending, params.parallel
    );
    let footprint = tile.src.diameter;
    if (source.width() as f32) < footprint || (source.height() as f32) < footprint {
        warn!(
            "{}x{} source is smaller than the source diameter {}, translated samples will be clamped",
            source.width(),
            source.height(),
            footprint
        );
    }

    let mut canvas = RgbaImage::filled(width, height, Color::TRANSPARENT);
    let covered: usize = if params.parallel {
        canvas
            .par_rows_mut()
            .enumerate()
            .map(|(y, row)| tile.shade_row(y, row))
            .sum()
    } else {
        canvas
            .rows_mut()
            .enumerate()
            .map(|(y, row)| tile.shade_row(y, row))
            .sum()
    };

    info!("covered {} of {} pixels", covered, width * height);
    Ok(canvas)
}

#[cfg(test)]
fn smooth_texture(width: usize, height: usize) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        let (x, y) = (x as f32, y as f32);
        [
            (127. + 120. * (x / 13.).sin() * (y / 17.).cos()) as u8,
            (127. + 120. * ((x + y) / 23.).sin()) as u8,
            (x / 4. + y / 8.) as u8,
        ]
    })
}

#[cfg(test)]
fn noise_texture(width: usize, height: usize) -> RgbImage {
    use rand::{rngs::StdRng, Rng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(0x7e57);
    RgbImage::from_fn(width, height, |_, _| rng.gen())
}

#[cfg(test)]
#[test_log::test]
fn test_solid_source_gives_solid_tile() {
    let source = RgbImage::filled(4, 4, [10, 20, 30]);
    let params = TileParams::default();
    let tile = render(&source, &params).unwrap();
    let hexagon = params.dst_hexagon();

    assert_eq!((tile.width(), tile.height()), (296, 256));
    for (x, y) in itertools::iproduct!(0..tile.width(), 0..tile.height()) {
        let expected = if hexagon.contains(Point::from((x, y))) {
            [10, 20, 30, 255]
        } else {
            Color::TRANSPARENT
        };
        assert_eq!(tile.get(x, y), expected, "at ({}, {})", x, y);
    }
}

#[test]
fn test_exact_center_is_unblended() {
    let source = noise_texture(512, 512);
    let params = TileParams::default()
        .canvas(256, 256)
        .dst_center(Point { x: 128., y: 128. });
    let center = Point { x: 128., y: 128. };

    let coords = params.dst_hexagon().classify(center).unwrap();
    assert_eq!(BlendWeights::new(coords, 256.), BlendWeights::CENTER_ONLY);

    let tile = render(&source, &params).unwrap();
    let [r, g, b] = source.get(256, 256);
    assert_eq!(tile.get(128, 128), [r, g, b, 255]);
}

#[test]
fn test_render_is_deterministic() {
    let source = noise_texture(200, 180);
    let params = TileParams::for_diameter(150.).src_diameter(160.);

    let parallel = render(&source, &params).unwrap();
    let again = render(&source, &params).unwrap();
    let sequential = render(&source, &params.clone().parallel(false)).unwrap();
    assert_eq!(parallel, again);
    assert_eq!(parallel, sequential);
}

#[test]
fn test_center_only_writes_the_plain_sample() {
    let source = smooth_texture(128, 128);
    let params = TileParams::for_diameter(100.).src_diameter(100.);
    let seamless = render(&source, &params).unwrap();
    let center_only = render(&source, &params.clone().blending(Blending::CenterOnly)).unwrap();
    assert_ne!(seamless, center_only);

    let (dst, src) = (params.dst_hexagon(), params.src_hexagon(&source));
    for (x, y) in itertools::iproduct!(0..center_only.width(), 0..center_only.height()) {
        let pos = Point::from((x, y));
        let expected = if dst.contains(pos) {
            sample(&source, to_source_space(pos, dst, src)).to_rgba(255)
        } else {
            Color::TRANSPARENT
        };
        assert_eq!(center_only.get(x, y), expected, "at ({}, {})", x, y);
    }
}

#[test]
fn test_rejects_bad_input() {
    use crate::error::ErrorType;
    use crate::image::ImageError;
    use crate::params::ParamsError;

    let params = TileParams::for_diameter(16.);

    let err = render(&RgbImage::filled(0, 0, [0; 3]), &params).unwrap_err();
    assert!(matches!(err.error_type(), ErrorType::ImageError(ImageError::Empty)));

    let err = render(&RgbImage::filled(1, 30, [0; 3]), &params).unwrap_err();
    assert!(matches!(
        err.error_type(),
        ErrorType::ImageError(ImageError::TooSmall { width: 1, height: 30 })
    ));

    let err = render(&smooth_texture(8, 8), &params.dst_diameter(-1.)).unwrap_err();
    assert!(matches!(err.error_type(), ErrorType::ParamsError(ParamsError::Diameter { .. })));
    assert!(err.to_string().contains("validate tile parameters"));
}

#[test]
fn test_tile_rejects_unsamplable_source() {
    use crate::error::ErrorType;
    use crate::image::ImageError;

    let params = TileParams::for_diameter(16.);
    for (width, height) in [(1, 5), (5, 1)] {
        let source = RgbImage::filled(width, height, [7; 3]);
        let err = Tile::new(&source, &params).unwrap_err();
        assert!(matches!(
            err.error_type(),
            ErrorType::ImageError(ImageError::TooSmall { .. })
        ));
    }

    let source = RgbImage::filled(2, 2, [7; 3]);
    let tile = Tile::new(&source, &params).unwrap();
    assert_eq!(tile.shade(tile.dst().center).unwrap().to_rgb(), [7; 3]);
}

#[test]
fn test_render_rejects_oversized_canvas() {
    use crate::error::ErrorType;
    use crate::params::ParamsError;

    let params = TileParams::for_diameter(16.).canvas(usize::MAX / 2, 3);
    let err = render(&smooth_texture(8, 8), &params).unwrap_err();
    assert!(matches!(
        err.error_type(),
        ErrorType::ParamsError(ParamsError::CanvasTooLarge { .. })
    ));
}

#[cfg(test)]
fn continuity_tiles(source: &RgbImage) -> (Tile, Vec<Tile>) {
    let params = TileParams::for_diameter(120.)
        .dst_center(Point { x: 300., y: 260. })
        .src_diameter(140.);
    let tile = Tile::new(source, &params).unwrap();
    let neighbors = Dir::iter().map(|dir| tile.neighbor(dir)).collect();
    (tile, neighbors)
}

#[test]
fn test_edges_are_seamless() {
    const NUDGE: f32 = 1e-3;
    let source = smooth_texture(300, 300);
    let (tile, neighbors) = continuity_tiles(&source);
    let half_side = tile.dst.side_len() / 2.;

    for dir in Dir::iter() {
        let neighbor = neighbors[dir as usize];
        let normal = dir.toward_neighbor();
        let along = Point { x: -normal.y, y: normal.x };
        let midpoint = (tile.dst.center + neighbor.dst.center) / 2.;

        for step in -9..=9 {
            let on_edge = midpoint + along * (half_side * step as f32 / 10.);
            let here = tile.shade(on_edge - normal * NUDGE).unwrap();
            let there = neighbor.shade(on_edge + normal * NUDGE).unwrap();
            assert!(
                here.distance(there) < 0.25,
                "{:?} edge at {:?}: {:?} vs {:?}",
                dir,
                on_edge,
                here,
                there
            );
        }
    }
}

#[test]
fn test_edges_do_not_match_without_blending() {
    let source = smooth_texture(300, 300);
    let (tile, neighbors) = continuity_tiles(&source);
    let (tile, neighbor) = (
        Tile { blending: Blending::CenterOnly, ..tile },
        Tile { blending: Blending::CenterOnly, ..neighbors[0] },
    );

    let normal = Dir::Top.toward_neighbor();
    let worst = (-9..=9)
        .map(|step| {
            let on_edge = (tile.dst.center + neighbor.dst.center) / 2.
                + Point { x: step as f32 * 3., y: 0. };
            let here = tile.shade(on_edge - normal * 1e-3).unwrap();
            let there = neighbor.shade(on_edge + normal * 1e-3).unwrap();
            here.distance(there)
        })
        .fold(0., f32::max);
    assert!(worst > 1., "{}", worst);
}

#[test]
fn test_vertices_are_seamless() {
    const NUDGE: f32 = 1e-3;
    let source = smooth_texture(300, 300);
    let (tile, neighbors) = continuity_tiles(&source);

    for vertex in tile.dst.vertices() {
        let reference = tile
            .shade(vertex + (tile.dst.center - vertex).normalized() * NUDGE)
            .unwrap();

        let sharing: Vec<_> = neighbors
            .iter()
            .filter(|n| ((n.dst.center - vertex).magnitude() - n.dst.side_len()).abs() < 1e-2)
            .collect();
        assert_eq!(sharing.len(), 2, "vertex {:?}", vertex);

        for neighbor in sharing {
            let color = neighbor
                .shade(vertex + (neighbor.dst.center - vertex).normalized() * NUDGE)
                .unwrap();
            assert!(
                color.distance(reference) < 0.25,
                "vertex {:?}: {:?} vs {:?}",
                vertex,
                color,
                reference
            );
        }
    }
}
