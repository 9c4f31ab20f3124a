//! PNG decoding and encoding.
//!
//! Every PNG flavor is normalized to 8-bit RGBA on the way in, which is the
//! raster layout the dithering core expects. Output is always 8-bit RGBA.

use std::io::Cursor;
use std::path::Path;

use crate::error::ImageError;

/// A decoded image: 8-bit RGBA, row-major, `width * height * 4` bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaImage {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl RgbaImage {
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width as usize * height as usize * 4,
            "pixel buffer length must match {}x{} RGBA",
            width,
            height,
        );
        Self {
            width,
            height,
            pixels,
        }
    }
}

/// Decode PNG bytes to 8-bit RGBA.
///
/// Palette, grayscale, sub-byte and 16-bit images are expanded; a missing
/// alpha channel becomes fully opaque.
pub fn decode_png(bytes: &[u8]) -> Result<RgbaImage, ImageError> {
    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::normalize_to_color8());

    let mut reader = decoder
        .read_info()
        .map_err(|e| ImageError::Decode(e.to_string()))?;
    let mut buf = vec![0u8; reader.output_buffer_size()];
    let frame = reader
        .next_frame(&mut buf)
        .map_err(|e| ImageError::Decode(e.to_string()))?;
    buf.truncate(frame.buffer_size());

    let (color_type, bit_depth) = reader.output_color_type();
    if bit_depth != png::BitDepth::Eight {
        return Err(ImageError::Decode(format!(
            "unexpected bit depth after normalization: {bit_depth:?}"
        )));
    }

    let pixels = match color_type {
        png::ColorType::Rgba => buf,
        png::ColorType::Rgb => buf
            .chunks_exact(3)
            .flat_map(|c| [c[0], c[1], c[2], 255])
            .collect(),
        png::ColorType::GrayscaleAlpha => buf
            .chunks_exact(2)
            .flat_map(|c| [c[0], c[0], c[0], c[1]])
            .collect(),
        png::ColorType::Grayscale => buf.iter().flat_map(|&g| [g, g, g, 255]).collect(),
        png::ColorType::Indexed => {
            return Err(ImageError::Decode(
                "indexed color was not expanded".to_string(),
            ))
        }
    };

    tracing::debug!(
        width = frame.width,
        height = frame.height,
        ?color_type,
        "Decoded PNG"
    );

    Ok(RgbaImage::new(frame.width, frame.height, pixels))
}

/// Encode an RGBA image as an 8-bit RGBA PNG.
pub fn encode_png(image: &RgbaImage) -> Result<Vec<u8>, ImageError> {
    if image.width == 0 || image.height == 0 {
        return Err(ImageError::UnsupportedDimensions {
            width: image.width as usize,
            height: image.height as usize,
        });
    }

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, image.width, image.height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Default);
        let mut writer = encoder
            .write_header()
            .map_err(|e| ImageError::Encode(e.to_string()))?;
        writer
            .write_image_data(&image.pixels)
            .map_err(|e| ImageError::Encode(e.to_string()))?;
        writer
            .finish()
            .map_err(|e| ImageError::Encode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

/// Read and decode a PNG file.
pub fn read_png(path: &Path) -> Result<RgbaImage, ImageError> {
    let bytes = std::fs::read(path).map_err(|source| ImageError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    decode_png(&bytes)
}

/// Encode and write a PNG file, returning the number of bytes written.
pub fn write_png(path: &Path, image: &RgbaImage) -> Result<usize, ImageError> {
    let bytes = encode_png(image)?;
    std::fs::write(path, &bytes).map_err(|source| ImageError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(bytes.len())
}
