#![allow(clippy::excessive_precision, clippy::needless_range_loop)]

//! bilevel-dither: black and white error diffusion dithering
//!
//! This library turns an RGBA raster into a bilevel (black/white) raster
//! whose local average brightness follows the original image. It works on
//! in-memory buffers only; decoding and encoding image files is left to the
//! caller.
//!
//! # Quick Start
//!
//! ```
//! use bilevel_dither::{dither_rgba, DitherAlgorithm};
//!
//! // 2x1 image: one mid-gray pixel, one white pixel
//! let rgba = [128, 128, 128, 255, 255, 255, 255, 255];
//! let out = dither_rgba(&rgba, 2, 1, DitherAlgorithm::Atkinson).unwrap();
//!
//! assert_eq!(out.len(), rgba.len());
//! assert!(out.chunks_exact(4).all(|p| p[0] == p[1] && p[1] == p[2] && p[3] == 255));
//! ```
//!
//! # Pipeline
//!
//! ```text
//! RGBA bytes            (decoded by the caller)
//!     |
//!     v
//! gamma expand          (sRGB -> linear, per channel)
//!     |
//!     v
//! Rec.709 luminance     (0.2126 R + 0.7152 G + 0.0722 B)
//!     |
//!     v
//! gamma compress        (linear -> sRGB-encoded gray)
//!     |
//!     v
//! error diffusion       (Atkinson or Floyd-Steinberg, threshold 0.5)
//!     |
//!     v
//! RGBA bytes            (R = G = B in {0, 255}, A = 255)
//! ```
//!
//! The luminance buffer is a plain `Vec<Sample>`; width and height travel
//! next to it as `usize` values.
//!
//! # Dithering Algorithms
//!
//! Two error diffusion kernels are available via [`DitherAlgorithm`]:
//!
//! - Atkinson (6/8 of the error propagated, sparser and higher contrast, default)
//! - Floyd-Steinberg (16/16 of the error propagated, conserves tone)
//!
//! Both scan strictly row-major, left to right and top to bottom, and only
//! ever push error into pixels that have not been quantized yet.

pub mod color;
pub mod dither;
pub mod quantize;
pub mod raster;


/// One luminance value.
///
/// Continuous before dithering (accumulated error may push it outside
/// `0.0..=1.0`), exactly [`quantize::BLACK`] or [`quantize::WHITE`] after.
pub type Sample = f64;

pub use color::{gamma_compress, gamma_expand, gamma_expand_u8, luminance, Pixel};
pub use dither::{Atkinson, Dither, DitherAlgorithm, FloydSteinberg, Kernel, ParseAlgorithmError};
pub use quantize::quantize;
pub use raster::{dither_rgba, samples_to_rgba, Raster, RasterError};
