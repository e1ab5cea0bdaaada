//! Sprite-row partitioning and layout remapping.
//!
//! A character walk sheet holds 8 rows of sprites stacked vertically. The
//! source layout and the target engine layout store the same 8 rows in a
//! different order; converting is a permutation of whole row bands.

use std::ops::Range;

use crate::error::{Result, ShiftError};
use crate::raster::Raster;

/// Number of sprite rows in a sheet.
pub const BAND_COUNT: usize = 8;

/// Source band drawn at each destination position, top to bottom.
///
/// Destination 0 takes source band 4, destination 1 takes band 5, and so on.
pub const TARGET_ORDER: [usize; BAND_COUNT] = [4, 5, 0, 1, 7, 6, 2, 3];

/// Half-open range of raster rows belonging to one sprite row.
pub type BandRange = Range<usize>;

/// Split `height` rows into the 8 sprite-row bands.
///
/// Every band is `height / 8` rows tall except the last, which also takes
/// the `height % 8` leftover rows.
pub fn partition(height: usize) -> Result<[BandRange; BAND_COUNT]> {
    if height < BAND_COUNT {
        return Err(ShiftError::MalformedRaster {
            message: format!(
                "Height {} is too small to split into {} sprite rows",
                height, BAND_COUNT
            ),
            help: Some(format!(
                "Character sheets need at least {} rows of pixels",
                BAND_COUNT
            )),
        });
    }

    let step = height / BAND_COUNT;
    Ok(std::array::from_fn(|i| {
        let start = i * step;
        let end = if i == BAND_COUNT - 1 {
            height
        } else {
            start + step
        };
        start..end
    }))
}

/// Reorder the sprite rows of a sheet into the target engine layout.
///
/// The output has the same dimensions and channels as the input.
pub fn reposition_rows(raster: &Raster) -> Result<Raster> {
    reorder_bands(raster, &TARGET_ORDER)
}

/// Concatenate the bands of `raster` in `order`, where `order[dest]` is the
/// source band placed at destination `dest`.
fn reorder_bands(raster: &Raster, order: &[usize; BAND_COUNT]) -> Result<Raster> {
    let bands = partition(raster.height())?;

    let mut data = Vec::with_capacity(raster.as_bytes().len());
    for &source in order {
        let band = &bands[source];
        data.extend_from_slice(raster.rows(band.start, band.end));
    }

    Raster::new(raster.height(), raster.width(), raster.channels(), data)
}
