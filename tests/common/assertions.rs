//! Assertion helpers for tests.

use monodither::codec::RgbaImage;
use pretty_assertions::assert_eq;

/// Assert every pixel is opaque pure black or pure white.
pub fn assert_bilevel(image: &RgbaImage) {
    assert_eq!(
        image.pixels.len(),
        image.width as usize * image.height as usize * 4,
        "pixel buffer does not match {}x{}",
        image.width,
        image.height
    );
    for (i, pixel) in image.pixels.chunks_exact(4).enumerate() {
        assert!(
            matches!(pixel, [0, 0, 0, 255] | [255, 255, 255, 255]),
            "pixel {i} is {pixel:?}, expected opaque black or white"
        );
    }
}

/// Fraction of white pixels in a bilevel image.
pub fn white_ratio(image: &RgbaImage) -> f64 {
    let total = image.pixels.len() / 4;
    if total == 0 {
        return 0.0;
    }
    let whites = image.pixels.chunks_exact(4).filter(|p| p[0] == 255).count();
    whites as f64 / total as f64
}
