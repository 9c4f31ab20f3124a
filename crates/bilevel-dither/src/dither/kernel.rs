//! Error diffusion kernel definitions.
//!
//! Each kernel specifies how quantization error is distributed to
//! neighboring pixels that have not been processed yet.

use crate::Sample;

/// An error diffusion kernel.
///
/// Each entry is `(dx, dy, weight)`: a neighbor offset relative to the
/// current pixel and the numerator of its share. A neighbor receives
/// `error * weight / divisor`.
///
/// Offsets must point forward in scan order: `dy >= 0`, and `dx > 0`
/// whenever `dy == 0`.
///
/// # Error Propagation
///
/// The total propagated is `sum(weights) / divisor`. Floyd-Steinberg
/// propagates all of it; Atkinson deliberately drops a quarter.
#[derive(Debug, Clone, Copy)]
pub struct Kernel {
    /// (dx, dy, weight) entries for error diffusion.
    pub entries: &'static [(i32, i32, u8)],

    /// Each neighbor receives `error * weight / divisor`.
    pub divisor: u8,
}

impl Kernel {
    /// Fraction of the error carried to the neighbor with this weight.
    #[inline]
    pub fn share(&self, weight: u8) -> Sample {
        Sample::from(weight) / Sample::from(self.divisor)
    }

    /// Fraction of the quantization error an interior pixel passes on.
    ///
    /// ```
    /// use bilevel_dither::dither::{ATKINSON, FLOYD_STEINBERG};
    ///
    /// assert_eq!(ATKINSON.propagated_fraction(), 0.75);
    /// assert_eq!(FLOYD_STEINBERG.propagated_fraction(), 1.0);
    /// ```
    pub fn propagated_fraction(&self) -> Sample {
        self.entries.iter().map(|&(_, _, weight)| self.share(weight)).sum()
    }
}

/// Atkinson dithering kernel.
///
/// Distributes error to 6 neighbors, 1/8 each, for 6/8 total propagation.
///
/// ```text
///        X   1   1
///    1   1   1
///        1
/// ```
///
/// Originally developed by Bill Atkinson for the Apple Macintosh.
pub const ATKINSON: Kernel = Kernel {
    entries: &[
        (1, 0, 1),  // right
        (2, 0, 1),  // two right
        (0, 1, 1),  // bottom
        (-1, 1, 1), // bottom-left
        (1, 1, 1),  // bottom-right
        (0, 2, 1),  // two below
    ],
    divisor: 8,
};

/// Floyd-Steinberg dithering kernel.
///
/// Distributes error to 4 neighbors with 100% total propagation (16/16).
///
/// ```text
///        X   7
///    3   5   1
/// ```
pub const FLOYD_STEINBERG: Kernel = Kernel {
    entries: &[
        (1, 0, 7),  // right
        (-1, 1, 3), // bottom-left
        (0, 1, 5),  // bottom
        (1, 1, 1),  // bottom-right
    ],
    divisor: 16,
};
