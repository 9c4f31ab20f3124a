//! Floyd-Steinberg error diffusion dithering algorithm.
//!
//! Floyd-Steinberg is the most widely known error diffusion algorithm.
//! It distributes 100% of the quantization error to 4 neighbors, so the
//! average tone of an area is preserved.

use crate::Sample;

use super::{dither_with_kernel, Dither, FLOYD_STEINBERG};

/// Floyd-Steinberg error diffusion dithering.
///
/// # Algorithm
///
/// The Floyd-Steinberg kernel distributes error to 4 neighbors:
///
/// ```text
///        X   7
///    3   5   1
/// ```
///
/// Weights: 7/16 right, 3/16 bottom-left, 5/16 bottom, 1/16 bottom-right.
/// Total: 16/16 = 100% error propagation for interior pixels. On the edges
/// the shares aimed outside the image are lost; the bottom-left share of a
/// first-column pixel never wraps into the end of its own row.
///
/// # Example
///
/// ```
/// use bilevel_dither::{Dither, FloydSteinberg};
///
/// let result = FloydSteinberg.dither(&[0.6, 0.6, 0.6, 0.6], 2, 2);
/// assert_eq!(result, vec![1.0, 0.0, 1.0, 1.0]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct FloydSteinberg;

impl Dither for FloydSteinberg {
    fn dither(&self, image: &[Sample], width: usize, height: usize) -> Vec<Sample> {
        dither_with_kernel(image, width, height, &FLOYD_STEINBERG)
    }
}
