//! File-level dithering pipeline: read, decode, dither, encode, write.

use std::path::PathBuf;
use std::time::Instant;

use bilevel_dither::DitherAlgorithm;

use crate::codec::{self, RgbaImage};
use crate::error::ImageError;

/// Output path used when none is given.
pub const DEFAULT_OUTPUT: &str = "out.png";

/// Settings for one pipeline run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub algorithm: DitherAlgorithm,
}

impl PipelineConfig {
    /// Config writing to [`DEFAULT_OUTPUT`] with the default algorithm.
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            algorithm: DitherAlgorithm::default(),
        }
    }

    pub fn output(mut self, output: impl Into<PathBuf>) -> Self {
        self.output = output.into();
        self
    }

    pub fn algorithm(mut self, algorithm: DitherAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }
}

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub width: u32,
    pub height: u32,
    pub algorithm: DitherAlgorithm,
    pub bytes_written: usize,
}

/// Dither a decoded image to black and white.
///
/// The result has the same dimensions; every pixel is opaque black or white.
pub fn dither_image(
    image: &RgbaImage,
    algorithm: DitherAlgorithm,
) -> Result<RgbaImage, ImageError> {
    let pixels = bilevel_dither::dither_rgba(
        &image.pixels,
        image.width as usize,
        image.height as usize,
        algorithm,
    )?;
    Ok(RgbaImage::new(image.width, image.height, pixels))
}

/// Run the whole pipeline for one image.
pub fn run(config: &PipelineConfig) -> Result<RunSummary, ImageError> {
    let start = Instant::now();

    let image = codec::read_png(&config.input)?;
    tracing::info!(
        input = %config.input.display(),
        width = image.width,
        height = image.height,
        "Loaded image"
    );

    let dithered = dither_image(&image, config.algorithm)?;
    tracing::debug!(
        algorithm = %config.algorithm,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Dithered image"
    );

    let bytes_written = codec::write_png(&config.output, &dithered)?;
    tracing::info!(
        output = %config.output.display(),
        bytes = bytes_written,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "Wrote dithered image"
    );

    Ok(RunSummary {
        width: dithered.width,
        height: dithered.height,
        algorithm: config.algorithm,
        bytes_written,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = PipelineConfig::new("in.png");
        assert_eq!(config.input, PathBuf::from("in.png"));
        assert_eq!(config.output, PathBuf::from("out.png"));
        assert_eq!(config.algorithm, DitherAlgorithm::Atkinson);
    }

    #[test]
    fn test_config_builder() {
        let config = PipelineConfig::new("in.png")
            .output("dithered.png")
            .algorithm(DitherAlgorithm::FloydSteinberg);
        assert_eq!(config.output, PathBuf::from("dithered.png"));
        assert_eq!(config.algorithm, DitherAlgorithm::FloydSteinberg);
    }

    #[test]
    fn test_dither_image_keeps_dimensions() {
        let image = RgbaImage::new(3, 2, vec![100; 24]);
        let out = dither_image(&image, DitherAlgorithm::Atkinson).unwrap();
        assert_eq!(out.width, 3);
        assert_eq!(out.height, 2);
        assert_eq!(out.pixels.len(), 24);
        assert!(out
            .pixels
            .chunks_exact(4)
            .all(|p| (p[0] == 0 || p[0] == 255) && p[0] == p[1] && p[1] == p[2] && p[3] == 255));
    }

    #[test]
    fn test_dither_image_empty() {
        let image = RgbaImage::new(0, 0, Vec::new());
        let out = dither_image(&image, DitherAlgorithm::FloydSteinberg).unwrap();
        assert_eq!(out, image);
    }

    #[test]
    fn test_dither_image_rejects_bad_buffer() {
        // Built without `new` so the debug assertion does not fire
        let image = RgbaImage {
            width: 2,
            height: 2,
            pixels: vec![0; 3],
        };
        let result = dither_image(&image, DitherAlgorithm::Atkinson);
        assert!(matches!(result, Err(ImageError::Raster(_))));
    }
}
