//! In-memory sample grid.
//!
//! A [`Raster`] owns a row-major buffer of 8-bit samples with shape
//! `(height, width, channels)`. Row 0 is the top of the image.

use crate::error::{Result, ShiftError};

/// Colour channels without alpha.
pub const RGB: usize = 3;

/// Colour channels with alpha.
pub const RGBA: usize = 4;

/// A height x width x channels grid of `u8` samples.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    height: usize,
    width: usize,
    channels: usize,
    data: Vec<u8>,
}

impl Raster {
    /// Wrap a sample buffer.
    ///
    /// Fails if `channels` is not 3 or 4, or if `data` does not hold exactly
    /// `height * width * channels` samples.
    pub fn new(height: usize, width: usize, channels: usize, data: Vec<u8>) -> Result<Self> {
        if channels != RGB && channels != RGBA {
            return Err(ShiftError::MalformedRaster {
                message: format!("Unsupported channel count {}", channels),
                help: Some("Rasters must have 3 (RGB) or 4 (RGBA) channels".to_string()),
            });
        }

        let expected = height * width * channels;
        if data.len() != expected {
            return Err(ShiftError::MalformedRaster {
                message: format!(
                    "Buffer holds {} samples, expected {} for {}x{}x{}",
                    data.len(),
                    expected,
                    height,
                    width,
                    channels
                ),
                help: None,
            });
        }

        Ok(Self {
            height,
            width,
            channels,
            data,
        })
    }

    /// Create a raster with every pixel set to `pixel`.
    ///
    /// The channel count is taken from the length of `pixel`.
    pub fn filled(height: usize, width: usize, pixel: &[u8]) -> Result<Self> {
        let data = pixel.repeat(height * width);
        Self::new(height, width, pixel.len(), data)
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    /// `(height, width)` of the grid.
    pub fn dimensions(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// Raw row-major samples.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    /// Number of samples in one row.
    pub fn row_stride(&self) -> usize {
        self.width * self.channels
    }

    /// Samples of row `y`.
    pub fn row(&self, y: usize) -> &[u8] {
        let stride = self.row_stride();
        &self.data[y * stride..(y + 1) * stride]
    }

    /// Samples of rows `start..end` as one contiguous slice.
    pub fn rows(&self, start: usize, end: usize) -> &[u8] {
        let stride = self.row_stride();
        &self.data[start * stride..end * stride]
    }

    /// Samples of the pixel at `(y, x)`.
    pub fn pixel(&self, y: usize, x: usize) -> &[u8] {
        let offset = (y * self.width + x) * self.channels;
        &self.data[offset..offset + self.channels]
    }

    /// Iterate over every pixel in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = &[u8]> {
        self.data.chunks_exact(self.channels)
    }
}
