//! RGBA pixel type

use super::srgb::luminance;
use crate::Sample;

/// One 8-bit sRGB pixel with straight alpha.
///
/// This is the byte layout of a decoded raster: four consecutive bytes in
/// R, G, B, A order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pixel {
    /// Red channel (gamma-encoded)
    pub r: u8,
    /// Green channel (gamma-encoded)
    pub g: u8,
    /// Blue channel (gamma-encoded)
    pub b: u8,
    /// Alpha channel (255 = opaque)
    pub a: u8,
}

impl Pixel {
    /// Opaque black.
    pub const BLACK: Pixel = Pixel::gray(0);
    /// Opaque white.
    pub const WHITE: Pixel = Pixel::gray(255);

    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// An opaque gray pixel with all color channels set to `value`.
    #[inline]
    pub const fn gray(value: u8) -> Self {
        Self::new(value, value, value, 255)
    }

    /// Create a pixel from a byte array [R, G, B, A].
    #[inline]
    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        Self::new(bytes[0], bytes[1], bytes[2], bytes[3])
    }

    /// Convert to a byte array [R, G, B, A].
    #[inline]
    pub fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Build an opaque gray pixel from an sRGB-encoded sample.
    ///
    /// The sample is scaled to `0..=255` and rounded half up. Values
    /// outside `0.0..=1.0` saturate at black or white.
    ///
    /// # Example
    /// ```
    /// use bilevel_dither::Pixel;
    ///
    /// assert_eq!(Pixel::from_sample(1.0), Pixel::WHITE);
    /// assert_eq!(Pixel::from_sample(0.0), Pixel::BLACK);
    /// assert_eq!(Pixel::from_sample(0.5), Pixel::gray(128));
    /// ```
    #[inline]
    pub fn from_sample(encoded: Sample) -> Self {
        // `as` truncates toward zero and saturates, so +0.5 rounds half up
        Self::gray((255.0 * encoded + 0.5) as u8)
    }

    /// Rec.709 relative luminance in linear light. Alpha is ignored.
    #[inline]
    pub fn luminance(self) -> Sample {
        luminance(self.r, self.g, self.b)
    }
}
