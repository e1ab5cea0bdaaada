//! Raster transforms.
//!
//! Each stage is a pure function from a borrowed raster to a new raster,
//! so stages can be tested in isolation and a failed stage never leaves a
//! half-written result behind.

mod background;
mod layout;
mod scale;

pub use background::remove_background;
pub use layout::{partition, reposition_rows, BandRange, BAND_COUNT, TARGET_ORDER};
pub use scale::scale;
