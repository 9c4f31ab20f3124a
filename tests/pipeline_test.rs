//! End-to-end tests for the file pipeline.

mod common;

use monodither::codec;
use monodither::error::ImageError;
use monodither::pipeline::{self, PipelineConfig};
use monodither::DitherAlgorithm;
use pretty_assertions::assert_eq;

use common::fixtures::{self, Scratch};

#[test]
fn test_run_writes_bilevel_png() {
    let scratch = Scratch::new();
    let input = scratch.write_png("gradient.png", &fixtures::color_gradient(40, 30));
    let output = scratch.path("dithered.png");

    for algorithm in [DitherAlgorithm::Atkinson, DitherAlgorithm::FloydSteinberg] {
        let config = PipelineConfig::new(&input)
            .output(&output)
            .algorithm(algorithm);
        let summary = pipeline::run(&config).unwrap();

        assert_eq!(summary.width, 40);
        assert_eq!(summary.height, 30);
        assert_eq!(summary.algorithm, algorithm);
        assert!(summary.bytes_written > 0);

        let result = codec::read_png(&output).unwrap();
        assert_eq!((result.width, result.height), (40, 30));
        common::assert_bilevel(&result);
    }
}

#[test]
fn test_algorithms_produce_different_patterns() {
    let scratch = Scratch::new();
    let image = fixtures::color_gradient(32, 32);

    let atkinson = pipeline::dither_image(&image, DitherAlgorithm::Atkinson).unwrap();
    let floyd = pipeline::dither_image(&image, DitherAlgorithm::FloydSteinberg).unwrap();
    assert_ne!(atkinson.pixels, floyd.pixels);

    // Same algorithm, same input: identical bytes on disk
    let input = scratch.write_png("in.png", &image);
    let first = scratch.path("first.png");
    let second = scratch.path("second.png");
    pipeline::run(&PipelineConfig::new(&input).output(&first)).unwrap();
    pipeline::run(&PipelineConfig::new(&input).output(&second)).unwrap();
    assert_eq!(std::fs::read(&first).unwrap(), std::fs::read(&second).unwrap());
}

#[test]
fn test_flat_gray_tone_is_preserved() {
    // sRGB 128 encodes to ~0.502, so Floyd-Steinberg lands near half white
    let image = fixtures::flat_gray(64, 64, 128);
    let result = pipeline::dither_image(&image, DitherAlgorithm::FloydSteinberg).unwrap();

    common::assert_bilevel(&result);
    let ratio = common::white_ratio(&result);
    assert!((ratio - 0.5).abs() < 0.05, "white ratio {ratio}, expected ~0.5");
}

#[test]
fn test_extremes_stay_solid() {
    let black = pipeline::dither_image(&fixtures::flat_gray(8, 8, 0), DitherAlgorithm::Atkinson).unwrap();
    let white = pipeline::dither_image(&fixtures::flat_gray(8, 8, 255), DitherAlgorithm::Atkinson).unwrap();
    assert_eq!(common::white_ratio(&black), 0.0);
    assert_eq!(common::white_ratio(&white), 1.0);
}

#[test]
fn test_alpha_is_discarded() {
    // Fully transparent white still dithers as white, and comes out opaque
    let image = codec::RgbaImage::new(2, 2, [255, 255, 255, 0].repeat(4));
    let result = pipeline::dither_image(&image, DitherAlgorithm::Atkinson).unwrap();
    assert_eq!(result.pixels, [255, 255, 255, 255].repeat(4));
}

#[test]
fn test_missing_input_is_io_error() {
    let scratch = Scratch::new();
    let config = PipelineConfig::new(scratch.path("nope.png")).output(scratch.path("out.png"));

    let err = pipeline::run(&config).unwrap_err();
    assert!(matches!(err, ImageError::Read { .. }), "got {err:?}");
    assert_eq!(err.kind(), "IOError");
    assert!(!scratch.path("out.png").exists());
}

#[test]
fn test_malformed_input_is_decode_error() {
    let scratch = Scratch::new();
    let input = scratch.write_bytes("broken.png", b"\x89PNG\r\n\x1a\nnot really");
    let config = PipelineConfig::new(input).output(scratch.path("out.png"));

    let err = pipeline::run(&config).unwrap_err();
    assert!(matches!(err, ImageError::Decode(_)), "got {err:?}");
    assert_eq!(err.kind(), "DecodeError");
}

#[test]
fn test_unwritable_output_is_io_error() {
    let scratch = Scratch::new();
    let input = scratch.write_png("in.png", &fixtures::flat_gray(4, 4, 200));
    // A directory cannot be overwritten by a file
    let config = PipelineConfig::new(input).output(scratch.root());

    let err = pipeline::run(&config).unwrap_err();
    assert!(matches!(err, ImageError::Write { .. }), "got {err:?}");
}
