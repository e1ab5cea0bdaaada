//! Fluent sprite sheet converter.
//!
//! [`SpriteConverter`] owns a single raster and applies the transform
//! stages to it in place:
//!
//! ```ignore
//! use sheetshift::SpriteConverter;
//!
//! SpriteConverter::open("hero.png")?
//!     .scale(2)?
//!     .reposition_rows()?
//!     .remove_background(0)?
//!     .save("hero_converted.png")?;
//! ```
//!
//! Each stage builds a complete new raster before replacing the old one, so
//! an error leaves the converter holding the last successful result.

use std::path::{Path, PathBuf};

use crate::codec;
use crate::error::{Result, ShiftError};
use crate::raster::Raster;
use crate::transform;

/// Options for a full sheet conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Integer upscale factor (1 = no scaling).
    pub scale: i64,
    /// Per-channel tolerance for background keying.
    pub tolerance: i64,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            scale: 1,
            tolerance: 0,
        }
    }
}

/// Stateful converter wrapping one sprite sheet raster.
#[derive(Debug, Clone)]
pub struct SpriteConverter {
    raster: Raster,
    source: Option<PathBuf>,
}

impl SpriteConverter {
    /// Load a sheet from an image file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        Ok(Self {
            raster: codec::decode(path)?,
            source: Some(path.to_path_buf()),
        })
    }

    /// Wrap an in-memory raster. There is no source file to reload from.
    pub fn from_raster(raster: Raster) -> Self {
        Self {
            raster,
            source: None,
        }
    }

    /// Replace the current raster with the image at `path`.
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<&mut Self> {
        let path = path.as_ref();
        self.raster = codec::decode(path)?;
        self.source = Some(path.to_path_buf());
        Ok(self)
    }

    /// Discard all changes by loading the source file again.
    pub fn reload(&mut self) -> Result<&mut Self> {
        let source = self.source.clone().ok_or(ShiftError::NoSource)?;
        self.load(source)
    }

    /// The file this sheet was last loaded from, if any.
    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    /// `(height, width)` of the current raster.
    pub fn dimensions(&self) -> (usize, usize) {
        self.raster.dimensions()
    }

    pub fn raster(&self) -> &Raster {
        &self.raster
    }

    pub fn into_raster(self) -> Raster {
        self.raster
    }

    /// Nearest-neighbour upscale by an integer factor.
    pub fn scale(&mut self, factor: i64) -> Result<&mut Self> {
        self.raster = transform::scale(&self.raster, factor)?;
        Ok(self)
    }

    /// Reorder the 8 sprite rows into the target engine layout.
    pub fn reposition_rows(&mut self) -> Result<&mut Self> {
        self.raster = transform::reposition_rows(&self.raster)?;
        Ok(self)
    }

    /// Key out the top-left pixel colour as transparent.
    pub fn remove_background(&mut self, tolerance: i64) -> Result<&mut Self> {
        self.raster = transform::remove_background(&self.raster, tolerance)?;
        Ok(self)
    }

    /// Write the current raster to `path`. The format follows the extension.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        codec::encode(&self.raster, path.as_ref())
    }
}

/// Run the full conversion pipeline on one file.
///
/// Scaling only happens when `options.scale` is greater than 1; smaller
/// values still go through validation so invalid factors are reported.
pub fn convert_sheet(input: &Path, output: &Path, options: &ConvertOptions) -> Result<()> {
    let mut converter = SpriteConverter::open(input)?;

    if options.scale != 1 {
        converter.scale(options.scale)?;
    }

    converter
        .reposition_rows()?
        .remove_background(options.tolerance)?
        .save(output)
}
