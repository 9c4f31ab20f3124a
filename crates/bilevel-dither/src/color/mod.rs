//! Color types and conversion utilities
//!
//! - [`Pixel`]: one 8-bit RGBA pixel as stored in a raster.
//! - [`gamma_expand`] / [`gamma_compress`]: the sRGB transfer function.
//! - [`luminance`]: Rec.709 relative luminance in linear light.
//!
//! # Example
//!
//! ```
//! use bilevel_dither::{gamma_compress, Pixel};
//!
//! let orange = Pixel::new(255, 128, 0, 255);
//!
//! // Linear-light luminance, then back to the sRGB encoding
//! let gray = gamma_compress(orange.luminance());
//! assert!(gray > 0.0 && gray < 1.0);
//! ```

mod pixel;
mod srgb;

pub use pixel::Pixel;
pub use srgb::{
    gamma_compress, gamma_expand, gamma_expand_u8, luminance, BLUE_WEIGHT, GREEN_WEIGHT,
    RED_WEIGHT,
};
