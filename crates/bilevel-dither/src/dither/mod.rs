//! Error diffusion dithering algorithms.
//!
//! # Algorithms
//!
//! - **Atkinson**: 75% error propagation, sparse high-contrast texture (default)
//! - **Floyd-Steinberg**: classic algorithm, 100% propagation
//!
//! # Architecture
//!
//! Both algorithms implement the [`Dither`] trait and share one diffusion
//! loop parameterized by a [`Kernel`]. [`DitherAlgorithm`] selects between
//! them at runtime.
//!
//! # Example
//!
//! ```
//! use bilevel_dither::{Atkinson, Dither};
//!
//! let samples = vec![0.3; 16];
//! let dithered = Atkinson.dither(&samples, 4, 4);
//!
//! assert!(dithered.iter().all(|&v| v == 0.0 || v == 1.0));
//! ```

mod atkinson;
mod floyd_steinberg;
mod kernel;

pub use atkinson::Atkinson;
pub use floyd_steinberg::FloydSteinberg;
pub use kernel::{Kernel, ATKINSON, FLOYD_STEINBERG};

use std::fmt;
use std::str::FromStr;

use crate::quantize::quantize;
use crate::Sample;

/// Dither algorithm selection.
///
/// # Example
///
/// ```
/// use bilevel_dither::DitherAlgorithm;
///
/// let algorithm: DitherAlgorithm = "floyd-steinberg".parse().unwrap();
/// assert_eq!(algorithm, DitherAlgorithm::FloydSteinberg);
/// assert_eq!(algorithm.to_string(), "floyd-steinberg");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DitherAlgorithm {
    /// Atkinson error diffusion (75% propagation).
    #[default]
    Atkinson,

    /// Floyd-Steinberg error diffusion (100% propagation).
    FloydSteinberg,
}

impl DitherAlgorithm {
    /// All selectable algorithms, in display order.
    pub const ALL: [DitherAlgorithm; 2] = [DitherAlgorithm::Atkinson, DitherAlgorithm::FloydSteinberg];

    /// Dither a luminance buffer with the selected algorithm.
    pub fn dither(self, image: &[Sample], width: usize, height: usize) -> Vec<Sample> {
        match self {
            DitherAlgorithm::Atkinson => Atkinson.dither(image, width, height),
            DitherAlgorithm::FloydSteinberg => FloydSteinberg.dither(image, width, height),
        }
    }

    /// The diffusion kernel behind this algorithm.
    pub fn kernel(self) -> &'static Kernel {
        match self {
            DitherAlgorithm::Atkinson => &ATKINSON,
            DitherAlgorithm::FloydSteinberg => &FLOYD_STEINBERG,
        }
    }

    /// Canonical lowercase name, as accepted by [`FromStr`].
    pub fn name(self) -> &'static str {
        match self {
            DitherAlgorithm::Atkinson => "atkinson",
            DitherAlgorithm::FloydSteinberg => "floyd-steinberg",
        }
    }
}

impl fmt::Display for DitherAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when an algorithm name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseAlgorithmError(String);

impl fmt::Display for ParseAlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown dither algorithm '{}' (expected 'atkinson' or 'floyd-steinberg')",
            self.0
        )
    }
}

impl std::error::Error for ParseAlgorithmError {}

impl FromStr for DitherAlgorithm {
    type Err = ParseAlgorithmError;

    /// Parse an algorithm name. Case-insensitive; surrounding whitespace is
    /// trimmed. Accepts `atkinson`, `floyd-steinberg`, `floyd_steinberg`,
    /// `floydsteinberg` and `fs`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "atkinson" => Ok(DitherAlgorithm::Atkinson),
            "floyd-steinberg" | "floyd_steinberg" | "floydsteinberg" | "fs" => {
                Ok(DitherAlgorithm::FloydSteinberg)
            }
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}

/// Trait for error diffusion dithering algorithms.
///
/// Error diffusion works by:
/// 1. For each sample in scan order, quantize it to black or white
/// 2. Compute the quantization error (sample - level)
/// 3. Distribute that error to neighboring unprocessed samples
/// 4. Repeat, with accumulated error influencing future decisions
pub trait Dither {
    /// Dither a luminance buffer to black and white.
    ///
    /// # Arguments
    ///
    /// * `image` - Gamma-encoded luminance samples, row-major
    /// * `width` - Image width in pixels
    /// * `height` - Image height in pixels
    ///
    /// # Returns
    ///
    /// A new buffer of the same length where every value is exactly
    /// `0.0` or `1.0`. The input is left untouched.
    ///
    /// # Panics
    ///
    /// Panics if `image.len() != width * height`.
    fn dither(&self, image: &[Sample], width: usize, height: usize) -> Vec<Sample>;
}

/// Index of the neighbor at `(col + dx, row + dy)`, or `None` if it falls
/// outside the `width` x `height` grid.
#[inline]
fn neighbor_index(
    row: usize,
    col: usize,
    dx: i32,
    dy: i32,
    width: usize,
    height: usize,
) -> Option<usize> {
    let x = col.checked_add_signed(dx as isize)?;
    let y = row.checked_add_signed(dy as isize)?;
    if x < width && y < height {
        Some(y * width + x)
    } else {
        None
    }
}

/// Neighbors of `idx` that receive a share of its error, with the fraction
/// each one gets. Kernel entries that fall outside the grid are skipped.
pub(crate) fn diffusion_targets(
    kernel: &Kernel,
    idx: usize,
    width: usize,
    height: usize,
) -> impl Iterator<Item = (usize, Sample)> + '_ {
    let (row, col) = (idx / width, idx % width);
    kernel.entries.iter().filter_map(move |&(dx, dy, weight)| {
        neighbor_index(row, col, dx, dy, width, height).map(|target| (target, kernel.share(weight)))
    })
}

/// Core error diffusion loop parameterized by kernel.
///
/// Works on a single owned copy of `image`, visiting indices `0..width *
/// height` once each in row-major order. When index `i` is read it already
/// holds every share of error it will ever receive; writes only ever go to
/// indices greater than `i`. Shares aimed outside the grid are dropped, not
/// redistributed.
pub(crate) fn dither_with_kernel(
    image: &[Sample],
    width: usize,
    height: usize,
    kernel: &Kernel,
) -> Vec<Sample> {
    assert_eq!(
        image.len(),
        width * height,
        "image length ({}) must match width * height ({}x{})",
        image.len(),
        width,
        height,
    );

    let mut output = image.to_vec();

    for idx in 0..output.len() {
        let old = output[idx];
        let new = quantize(old);
        output[idx] = new;

        let error = old - new;
        for (target, share) in diffusion_targets(kernel, idx, width, height) {
            debug_assert!(target > idx);
            output[target] += error * share;
        }
    }

    output
}
