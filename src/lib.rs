//! Hexagonal texture tiles from square tileable textures
//!
//! Every pixel inside the destination hexagon is mapped into the source
//! texture and blended with six copies of the texture translated by one tile
//! period along the hex lattice. Near an edge the weight shifts toward the
//! copy belonging to the hexagon across that edge, so packed tiles meet
//! without seams.
//!
//! Decoding and encoding images is left to the caller: build an
//! [`RgbImage`] with [`Image::from_raw`] and get the bytes back out of the
//! [`RgbaImage`] with [`Image::into_raw`].

#[macro_use]
extern crate derive_more;

pub mod basic;
pub mod color;
pub mod error;
pub mod image;
pub mod mapping;
pub mod params;
pub mod raster;
pub mod sampler;
pub mod weights;

pub use crate::basic::{Dir, Hexagon, LatticeCoords, Point};
pub use crate::error::{Error, Result};
pub use crate::image::{Image, RgbImage, RgbaImage};
pub use crate::params::{Blending, TileParams};
pub use crate::raster::{render, Tile};
