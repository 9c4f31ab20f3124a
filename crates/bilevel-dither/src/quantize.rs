//! Two-level quantizer.

use crate::Sample;

/// Black output level.
pub const BLACK: Sample = 0.0;
/// White output level.
pub const WHITE: Sample = 1.0;
/// Samples below this become black; everything else becomes white.
pub const THRESHOLD: Sample = 0.5;

/// Collapse a sample to [`BLACK`] or [`WHITE`].
///
/// The comparison is strict, so the midpoint itself is white. Any real input
/// is accepted, including values pushed outside `0.0..=1.0` by accumulated
/// error. NaN is not below the threshold and maps to white.
///
/// # Example
/// ```
/// use bilevel_dither::quantize;
///
/// assert_eq!(quantize(0.5), 1.0);
/// assert_eq!(quantize(0.49999), 0.0);
/// ```
#[inline]
pub fn quantize(sample: Sample) -> Sample {
    if sample < THRESHOLD {
        BLACK
    } else {
        WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midpoint_is_white() {
        assert_eq!(quantize(0.5), WHITE);
        assert_eq!(quantize(0.49999), BLACK);
    }

    #[test]
    fn test_out_of_range() {
        assert_eq!(quantize(-1.0), BLACK);
        assert_eq!(quantize(1.5), WHITE);
        assert_eq!(quantize(Sample::NEG_INFINITY), BLACK);
        assert_eq!(quantize(Sample::INFINITY), WHITE);
        assert_eq!(quantize(Sample::NAN), WHITE);
    }
}
