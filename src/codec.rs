//! Raster decode/encode.
//!
//! Thin layer over the `image` crate. Formats are inferred from the file
//! contents when decoding and from the path extension when encoding.

use std::path::Path;

use image::{ColorType, ImageReader};

use crate::error::{Result, ShiftError};
use crate::raster::{Raster, RGB, RGBA};

/// Decode an image file into a raster.
///
/// Images with an alpha channel become 4-channel rasters, everything else
/// becomes 3-channel. Grayscale and 16-bit sources are converted to 8-bit
/// colour.
pub fn decode(path: &Path) -> Result<Raster> {
    let decode_error = |message: String| ShiftError::Decode {
        path: path.to_path_buf(),
        message,
    };

    let img = ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| decode_error(e.to_string()))?
        .decode()
        .map_err(|e| decode_error(e.to_string()))?;

    let width = img.width() as usize;
    let height = img.height() as usize;

    if img.color().has_alpha() {
        Raster::new(height, width, RGBA, img.to_rgba8().into_raw())
    } else {
        Raster::new(height, width, RGB, img.to_rgb8().into_raw())
    }
}

/// Encode a raster to `path`, overwriting any existing file.
pub fn encode(raster: &Raster, path: &Path) -> Result<()> {
    let encode_error = |message: String| ShiftError::Encode {
        path: path.to_path_buf(),
        message,
    };

    let width = u32::try_from(raster.width())
        .map_err(|_| encode_error(format!("Width {} is too large", raster.width())))?;
    let height = u32::try_from(raster.height())
        .map_err(|_| encode_error(format!("Height {} is too large", raster.height())))?;

    let color = if raster.channels() == RGBA {
        ColorType::Rgba8
    } else {
        ColorType::Rgb8
    };

    image::save_buffer(path, raster.as_bytes(), width, height, color)
        .map_err(|e| encode_error(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_encode_decode_rgb() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("rgb.png");

        let raster = Raster::new(1, 2, RGB, vec![255, 0, 0, 0, 255, 0]).unwrap();
        encode(&raster, &path).unwrap();

        let decoded = decode(&path).unwrap();
        assert_eq!(decoded, raster);
    }

    #[test]
    fn test_decode_keeps_alpha() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("alpha.png");

        let img = image::RgbaImage::from_pixel(3, 2, image::Rgba([10, 20, 30, 128]));
        img.save(&path).unwrap();

        let decoded = decode(&path).unwrap();
        assert_eq!(decoded.dimensions(), (2, 3));
        assert_eq!(decoded.channels(), RGBA);
        assert_eq!(decoded.pixel(1, 2), &[10, 20, 30, 128]);
    }

    #[test]
    fn test_decode_grayscale_as_rgb() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("gray.png");

        let img = image::GrayImage::from_pixel(2, 2, image::Luma([77]));
        img.save(&path).unwrap();

        let decoded = decode(&path).unwrap();
        assert_eq!(decoded.channels(), RGB);
        assert_eq!(decoded.pixel(0, 0), &[77, 77, 77]);
    }

    #[test]
    fn test_decode_ignores_extension() {
        let dir = tempdir().unwrap();
        let png = dir.path().join("sheet.png");
        let renamed = dir.path().join("sheet.sprite");

        let raster = Raster::filled(2, 2, &[5, 6, 7]).unwrap();
        encode(&raster, &png).unwrap();
        std::fs::rename(&png, &renamed).unwrap();

        assert_eq!(decode(&renamed).unwrap(), raster);
    }

    #[test]
    fn test_decode_missing_file() {
        let err = decode(Path::new("/nonexistent/sheet.png")).unwrap_err();
        assert!(matches!(err, ShiftError::Decode { .. }));
    }

    #[test]
    fn test_decode_not_an_image() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("notes.png");
        std::fs::write(&path, "not a png").unwrap();

        let err = decode(&path).unwrap_err();
        assert!(matches!(err, ShiftError::Decode { .. }));
    }

    #[test]
    fn test_encode_unsupported_extension() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sheet.unknownext");

        let raster = Raster::filled(1, 1, &[0, 0, 0]).unwrap();
        let err = encode(&raster, &path).unwrap_err();
        assert!(matches!(err, ShiftError::Encode { .. }));
    }

    #[test]
    fn test_encode_unwritable_path() {
        let raster = Raster::filled(1, 1, &[0, 0, 0]).unwrap();
        let err = encode(&raster, Path::new("/nonexistent/dir/out.png")).unwrap_err();
        assert!(matches!(err, ShiftError::Encode { .. }));
    }
}
