//! Atkinson error diffusion dithering algorithm.
//!
//! Atkinson dithering distributes only 75% of the quantization error (6/8).
//! The dropped quarter gives lighter, sparser texture in the shadows and
//! more contrast than Floyd-Steinberg. Originally developed by Bill Atkinson
//! for the Apple Macintosh.

use crate::Sample;

use super::{dither_with_kernel, Dither, ATKINSON};

/// Atkinson error diffusion dithering.
///
/// # Algorithm
///
/// The Atkinson kernel distributes error to 6 neighbors:
///
/// ```text
///        X   1   1
///    1   1   1
///        1
/// ```
///
/// Each neighbor receives 1/8 of the error, for a total of 6/8 = 75%.
/// Neighbors outside the image are skipped and their share is lost.
///
/// # Example
///
/// ```
/// use bilevel_dither::{Atkinson, Dither};
///
/// let result = Atkinson.dither(&[0.6, 0.6, 0.6, 0.6], 2, 2);
/// assert_eq!(result, vec![1.0, 1.0, 0.0, 1.0]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Atkinson;

impl Dither for Atkinson {
    fn dither(&self, image: &[Sample], width: usize, height: usize) -> Vec<Sample> {
        dither_with_kernel(image, width, height, &ATKINSON)
    }
}
