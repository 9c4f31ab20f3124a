//! sRGB transfer function and relative luminance
//!
//! sRGB stores channel values on a gamma curve so that equal byte steps look
//! like equal brightness steps. Light only adds up correctly in linear space,
//! so luminance is computed on gamma-expanded channels and the result is
//! compressed again before it is thresholded.
//!
//! All functions use the exact IEC 61966-2-1 formulas in `f64` and accept any
//! real input. Values outside `0.0..=1.0` follow the same formulas; negative
//! values land on the linear segment.

use crate::Sample;

/// Rec.709 weight of the red channel.
pub const RED_WEIGHT: Sample = 0.2126;
/// Rec.709 weight of the green channel.
pub const GREEN_WEIGHT: Sample = 0.7152;
/// Rec.709 weight of the blue channel.
pub const BLUE_WEIGHT: Sample = 0.0722;

/// Encoded values at or below this lie on the linear segment.
const EXPAND_THRESHOLD: Sample = 0.04045;
/// Linear values at or below this lie on the linear segment.
const COMPRESS_THRESHOLD: Sample = 0.0031308;
const LINEAR_SLOPE: Sample = 12.92;
const GAMMA: Sample = 2.4;
const OFFSET: Sample = 0.055;
const SCALE: Sample = 1.055;

/// Convert an sRGB-encoded value (`0.0..=1.0`) to linear light.
///
/// # Example
/// ```
/// use bilevel_dither::gamma_expand;
///
/// // Exact: ((0.5 + 0.055) / 1.055)^2.4 = 0.214041...
/// assert!((gamma_expand(0.5) - 0.214041).abs() < 1e-6);
/// ```
#[inline]
pub fn gamma_expand(encoded: Sample) -> Sample {
    if encoded <= EXPAND_THRESHOLD {
        encoded / LINEAR_SLOPE
    } else {
        ((encoded + OFFSET) / SCALE).powf(GAMMA)
    }
}

/// Convert an 8-bit sRGB channel to linear light.
#[inline]
pub fn gamma_expand_u8(channel: u8) -> Sample {
    gamma_expand(Sample::from(channel) / 255.0)
}

/// Convert linear light back to the sRGB encoding.
///
/// Inverse of [`gamma_expand`].
///
/// # Example
/// ```
/// use bilevel_dither::gamma_compress;
///
/// // Exact: 1.055 * 0.5^(1/2.4) - 0.055 = 0.735356...
/// assert!((gamma_compress(0.5) - 0.735356).abs() < 1e-6);
/// ```
#[inline]
pub fn gamma_compress(linear: Sample) -> Sample {
    if linear <= COMPRESS_THRESHOLD {
        linear * LINEAR_SLOPE
    } else {
        SCALE * linear.powf(1.0 / GAMMA) - OFFSET
    }
}

/// Rec.709 relative luminance of an 8-bit sRGB color, in linear light.
///
/// Each channel is gamma-expanded before weighting.
#[inline]
pub fn luminance(r: u8, g: u8, b: u8) -> Sample {
    RED_WEIGHT * gamma_expand_u8(r)
        + GREEN_WEIGHT * gamma_expand_u8(g)
        + BLUE_WEIGHT * gamma_expand_u8(b)
}
