//! sheetshift - Character walk sheet layout converter
//!
//! A library for converting 8-row character walk sheets into the row
//! layout used by newer engines, with optional nearest-neighbour upscaling
//! and background colour keying.

pub mod cli;
pub mod codec;
pub mod config;
pub mod converter;
pub mod discovery;
pub mod error;
pub mod output;
pub mod raster;
pub mod transform;

pub use config::{Config, CONFIG_FILENAME};
pub use converter::{convert_sheet, ConvertOptions, SpriteConverter};
pub use discovery::{plan_jobs, scan_inputs, Job};
pub use error::{Result, ShiftError};
pub use raster::Raster;
pub use transform::{partition, remove_background, reposition_rows, scale, BAND_COUNT, TARGET_ORDER};
