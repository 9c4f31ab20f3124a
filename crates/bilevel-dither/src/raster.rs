//! RGBA raster access and conversion to and from luminance buffers.
//!
//! A raster is a flat, row-major byte slice with four bytes per pixel.
//! [`Raster`] validates the length once and hands out [`Pixel`] values by
//! computed offset.

use std::fmt;

use crate::color::{gamma_compress, Pixel};
use crate::dither::DitherAlgorithm;
use crate::Sample;

/// Bytes per RGBA pixel.
pub const CHANNELS: usize = 4;

/// Error for a raster whose byte length does not fit its dimensions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RasterError {
    /// The byte slice is not exactly `width * height * 4` long.
    LengthMismatch {
        width: usize,
        height: usize,
        expected: usize,
        actual: usize,
    },
    /// `width * height * 4` does not fit in `usize`.
    TooLarge { width: usize, height: usize },
}

impl fmt::Display for RasterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RasterError::LengthMismatch {
                width,
                height,
                expected,
                actual,
            } => write!(
                f,
                "raster is {actual} bytes but {width}x{height} RGBA needs {expected}"
            ),
            RasterError::TooLarge { width, height } => {
                write!(f, "raster dimensions {width}x{height} overflow")
            }
        }
    }
}

impl std::error::Error for RasterError {}

/// A borrowed, length-checked view of an RGBA raster.
#[derive(Debug, Clone, Copy)]
pub struct Raster<'a> {
    data: &'a [u8],
    width: usize,
    height: usize,
}

impl<'a> Raster<'a> {
    /// Wrap `data` as a `width` x `height` RGBA raster.
    ///
    /// # Errors
    ///
    /// Returns [`RasterError`] if `data.len()` is not `width * height * 4`.
    ///
    /// # Example
    /// ```
    /// use bilevel_dither::{Pixel, Raster};
    ///
    /// let data = [255, 0, 0, 255, 0, 0, 255, 255];
    /// let raster = Raster::new(&data, 2, 1).unwrap();
    /// assert_eq!(raster.pixel(1), Some(Pixel::new(0, 0, 255, 255)));
    ///
    /// assert!(Raster::new(&data, 3, 1).is_err());
    /// ```
    pub fn new(data: &'a [u8], width: usize, height: usize) -> Result<Self, RasterError> {
        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(CHANNELS))
            .ok_or(RasterError::TooLarge { width, height })?;

        if data.len() != expected {
            return Err(RasterError::LengthMismatch {
                width,
                height,
                expected,
                actual: data.len(),
            });
        }

        Ok(Self {
            data,
            width,
            height,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of pixels (`width * height`).
    pub fn len(&self) -> usize {
        self.width * self.height
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The pixel at row-major `index`, or `None` past the end.
    #[inline]
    pub fn pixel(&self, index: usize) -> Option<Pixel> {
        let start = index.checked_mul(CHANNELS)?;
        let end = start.checked_add(CHANNELS)?;
        let bytes = self.data.get(start..end)?;
        Some(Pixel::new(bytes[0], bytes[1], bytes[2], bytes[3]))
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> impl ExactSizeIterator<Item = Pixel> + 'a {
        self.data
            .chunks_exact(CHANNELS)
            .map(|c| Pixel::new(c[0], c[1], c[2], c[3]))
    }

    /// Gamma-encoded luminance of every pixel, ready for dithering.
    ///
    /// Each pixel is gamma-expanded, weighted to Rec.709 luminance in linear
    /// light, then compressed back to the sRGB encoding.
    pub fn to_luminance(&self) -> Vec<Sample> {
        self.pixels()
            .map(|pixel| gamma_compress(pixel.luminance()))
            .collect()
    }
}

/// Expand samples to opaque gray RGBA bytes via [`Pixel::from_sample`].
pub fn samples_to_rgba(samples: &[Sample]) -> Vec<u8> {
    samples
        .iter()
        .flat_map(|&sample| Pixel::from_sample(sample).to_bytes())
        .collect()
}

/// Dither an RGBA raster to black and white.
///
/// Runs the whole chain: luminance, gamma compression, error diffusion and
/// expansion back to RGBA. The output has the input's dimensions, with
/// R = G = B in {0, 255} and A = 255. An empty raster yields an empty
/// output.
///
/// # Errors
///
/// Returns [`RasterError`] if `data.len()` is not `width * height * 4`.
pub fn dither_rgba(
    data: &[u8],
    width: usize,
    height: usize,
    algorithm: DitherAlgorithm,
) -> Result<Vec<u8>, RasterError> {
    let raster = Raster::new(data, width, height)?;
    let luminance = raster.to_luminance();
    let dithered = algorithm.dither(&luminance, width, height);
    Ok(samples_to_rgba(&dithered))
}
