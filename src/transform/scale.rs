//! Integer nearest-neighbour upscaling.

use crate::error::{Result, ShiftError};
use crate::raster::Raster;

/// Scale a raster by an integer factor.
///
/// Each source pixel becomes a `factor` x `factor` block, so output pixel
/// `(y, x)` is source pixel `(y / factor, x / factor)`. No interpolation
/// happens and the channel count is unchanged. A factor of 1 returns an
/// identical copy.
pub fn scale(raster: &Raster, factor: i64) -> Result<Raster> {
    if factor < 1 {
        return Err(ShiftError::InvalidArgument {
            message: format!("Scale factor must be at least 1, got {}", factor),
            help: Some("Use a positive integer such as 2 or 4".to_string()),
        });
    }

    let factor = usize::try_from(factor).map_err(|_| ShiftError::InvalidArgument {
        message: format!("Scale factor {} is too large", factor),
        help: None,
    })?;

    if factor == 1 {
        return Ok(raster.clone());
    }

    let (height, width) = raster.dimensions();
    let channels = raster.channels();

    let new_height = checked_mul(height, factor)?;
    let new_width = checked_mul(width, factor)?;
    let new_stride = checked_mul(new_width, channels)?;
    let total = checked_mul(new_stride, new_height)?;

    let mut data = Vec::new();
    reserve(&mut data, total)?;
    let mut scaled_row = Vec::new();
    reserve(&mut scaled_row, new_stride)?;
    for y in 0..height {
        scaled_row.clear();
        for pixel in raster.row(y).chunks_exact(channels) {
            for _ in 0..factor {
                scaled_row.extend_from_slice(pixel);
            }
        }

        // Replicate the widened row vertically
        for _ in 0..factor {
            data.extend_from_slice(&scaled_row);
        }
    }

    Raster::new(new_height, new_width, channels, data)
}

fn reserve(buffer: &mut Vec<u8>, len: usize) -> Result<()> {
    buffer
        .try_reserve_exact(len)
        .map_err(|_| ShiftError::InvalidArgument {
            message: format!("Scaled image needs {} bytes, which cannot be allocated", len),
            help: Some("Use a smaller scale factor".to_string()),
        })
}

fn checked_mul(a: usize, b: usize) -> Result<usize> {
    a.checked_mul(b).ok_or_else(|| ShiftError::InvalidArgument {
        message: format!("Scaled size {} x {} overflows", a, b),
        help: Some("Use a smaller scale factor".to_string()),
    })
}
