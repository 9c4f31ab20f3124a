//! Monodither - black and white error diffusion dithering for PNG images.
//!
//! The dithering itself lives in the `bilevel-dither` crate; this crate
//! adds PNG I/O and the file pipeline. Modules are public for integration
//! testing.

pub mod codec;
pub mod error;
pub mod pipeline;

pub use bilevel_dither::DitherAlgorithm;
