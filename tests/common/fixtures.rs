//! Test images and scratch directories.

use std::path::{Path, PathBuf};

use monodither::codec::{self, RgbaImage};
use tempfile::TempDir;

/// A scratch directory that is removed when dropped.
pub struct Scratch {
    dir: TempDir,
}

impl Scratch {
    pub fn new() -> Self {
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Write `image` as a PNG named `name` and return its path.
    pub fn write_png(&self, name: &str, image: &RgbaImage) -> PathBuf {
        let path = self.path(name);
        codec::write_png(&path, image).expect("Failed to write fixture PNG");
        path
    }

    /// Write raw bytes to `name` and return its path.
    pub fn write_bytes(&self, name: &str, bytes: &[u8]) -> PathBuf {
        let path = self.path(name);
        std::fs::write(&path, bytes).expect("Failed to write fixture file");
        path
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }
}

/// Horizontal color gradient: red rises left to right, green top to bottom.
pub fn color_gradient(width: u32, height: u32) -> RgbaImage {
    let mut pixels = Vec::with_capacity((width * height * 4) as usize);
    for y in 0..height {
        for x in 0..width {
            let r = (x * 255 / (width - 1).max(1)) as u8;
            let g = (y * 255 / (height - 1).max(1)) as u8;
            pixels.extend_from_slice(&[r, g, 96, 255]);
        }
    }
    RgbaImage::new(width, height, pixels)
}

/// Flat opaque gray image.
pub fn flat_gray(width: u32, height: u32, value: u8) -> RgbaImage {
    let pixels = [value, value, value, 255].repeat((width * height) as usize);
    RgbaImage::new(width, height, pixels)
}
