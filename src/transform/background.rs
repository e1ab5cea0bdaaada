//! Chroma-key background removal.

use crate::error::{Result, ShiftError};
use crate::raster::{Raster, RGB, RGBA};

/// Make the sheet's background colour transparent.
///
/// The colour of the top-left pixel is the background reference. A pixel is
/// background when each of its red, green and blue samples is within
/// `tolerance` of the reference. Background pixels get alpha 0, everything
/// else alpha 255. The output always has 4 channels; any alpha already in
/// the input is discarded.
pub fn remove_background(raster: &Raster, tolerance: i64) -> Result<Raster> {
    if tolerance < 0 {
        return Err(ShiftError::InvalidArgument {
            message: format!("Tolerance must not be negative, got {}", tolerance),
            help: Some("Use 0 to key out the exact background colour".to_string()),
        });
    }

    let (height, width) = raster.dimensions();
    if height == 0 || width == 0 {
        return Err(ShiftError::MalformedRaster {
            message: format!(
                "Cannot sample a background colour from a {}x{} image",
                width, height
            ),
            help: None,
        });
    }

    let key = raster.pixel(0, 0);
    let reference = [key[0], key[1], key[2]];

    let mut data = Vec::with_capacity(height * width * RGBA);
    for pixel in raster.pixels() {
        let colour = &pixel[..RGB];
        let is_background = colour
            .iter()
            .zip(reference)
            .all(|(&sample, key)| i64::from(sample.abs_diff(key)) <= tolerance);

        data.extend_from_slice(colour);
        data.push(if is_background { 0 } else { 255 });
    }

    Raster::new(height, width, RGBA, data)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [u8; 3] = [255, 255, 255];

    fn alpha_mask(raster: &Raster) -> Vec<u8> {
        raster.pixels().map(|p| p[3]).collect()
    }

    fn row_of(colours: &[[u8; 3]]) -> Raster {
        let data = colours.iter().flatten().copied().collect();
        Raster::new(1, colours.len(), RGB, data).unwrap()
    }

    #[test]
    fn test_exact_match_is_transparent() {
        let raster = row_of(&[WHITE, [0, 0, 0], WHITE, [255, 255, 254]]);
        let output = remove_background(&raster, 0).unwrap();

        assert_eq!(output.channels(), RGBA);
        assert_eq!(alpha_mask(&output), vec![0, 255, 0, 255]);
    }

    #[test]
    fn test_colour_channels_preserved() {
        let raster = row_of(&[WHITE, [12, 34, 56]]);
        let output = remove_background(&raster, 0).unwrap();

        assert_eq!(output.pixel(0, 0), &[255, 255, 255, 0]);
        assert_eq!(output.pixel(0, 1), &[12, 34, 56, 255]);
    }

    #[test]
    fn test_existing_alpha_is_replaced() {
        let data = vec![255, 255, 255, 17, 1, 2, 3, 0];
        let raster = Raster::new(1, 2, RGBA, data).unwrap();
        let output = remove_background(&raster, 0).unwrap();

        assert_eq!(output.channels(), RGBA);
        assert_eq!(output.as_bytes(), &[255, 255, 255, 0, 1, 2, 3, 255]);
    }

    #[test]
    fn test_tolerance_inclusive_both_directions() {
        let raster = row_of(&[[100, 100, 100], [105, 95, 100], [106, 100, 100], [100, 94, 100]]);
        let output = remove_background(&raster, 5).unwrap();

        assert_eq!(alpha_mask(&output), vec![0, 0, 255, 255]);
    }

    #[test]
    fn test_tolerance_requires_every_channel() {
        let raster = row_of(&[[50, 50, 50], [52, 52, 60]]);
        let output = remove_background(&raster, 3).unwrap();

        assert_eq!(alpha_mask(&output), vec![0, 255]);
    }

    #[test]
    fn test_tolerance_monotonic() {
        let colours: Vec<[u8; 3]> = (0..=255u8).step_by(5).map(|v| [v, 255 - v, v / 2]).collect();
        let raster = row_of(&colours);

        let mut previous = alpha_mask(&remove_background(&raster, 0).unwrap());
        for tolerance in [1, 4, 16, 64, 128, 255] {
            let current = alpha_mask(&remove_background(&raster, tolerance).unwrap());
            for (before, after) in previous.iter().zip(&current) {
                // Background at a lower tolerance stays background
                if *before == 0 {
                    assert_eq!(*after, 0);
                }
            }
            previous = current;
        }
    }

    #[test]
    fn test_large_tolerance_keys_everything() {
        let raster = row_of(&[[0, 0, 0], WHITE, [255, 0, 128]]);
        let output = remove_background(&raster, 300).unwrap();

        assert!(alpha_mask(&output).iter().all(|&a| a == 0));
    }

    #[test]
    fn test_negative_tolerance_rejected() {
        let raster = row_of(&[WHITE]);
        let err = remove_background(&raster, -1).unwrap_err();
        assert!(matches!(err, ShiftError::InvalidArgument { .. }));
    }

    #[test]
    fn test_empty_raster_rejected() {
        let raster = Raster::new(0, 0, RGB, vec![]).unwrap();
        let err = remove_background(&raster, 0).unwrap_err();
        assert!(matches!(err, ShiftError::MalformedRaster { .. }));
    }
}
