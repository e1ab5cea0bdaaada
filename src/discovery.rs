//! Input discovery for batch conversion.
//!
//! Lists the source sheets in an input directory and pairs each one with
//! the path its converted sheet should be written to.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Result, ShiftError};

/// File extensions recognized as source sheets.
pub const RASTER_EXTENSIONS: &[&str] = &["png"];

/// Extension used for every converted sheet.
pub const OUTPUT_EXTENSION: &str = "png";

/// One source sheet and where its conversion goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub input: PathBuf,
    pub output: PathBuf,
}

/// Check whether a path has a recognized raster extension.
pub fn is_raster_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|ext| {
            RASTER_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}

/// Derive the output path for `input`: `<output_dir>/<stem><suffix>.png`.
pub fn output_path(input: &Path, output_dir: &Path, suffix: &str) -> Option<PathBuf> {
    let stem = input.file_stem()?.to_str()?;
    Some(output_dir.join(format!("{}{}.{}", stem, suffix, OUTPUT_EXTENSION)))
}

/// List source sheets directly inside `input_dir`.
///
/// Subdirectories are not searched. Paths are sorted so batches run in a
/// stable order.
pub fn scan_inputs(input_dir: &Path) -> Result<Vec<PathBuf>> {
    if !input_dir.is_dir() {
        return Err(ShiftError::Io {
            path: input_dir.to_path_buf(),
            message: "Input directory not found".to_string(),
        });
    }

    let mut inputs = Vec::new();
    for entry in WalkDir::new(input_dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|e| ShiftError::Io {
            path: input_dir.to_path_buf(),
            message: format!("Failed to list directory: {}", e),
        })?;

        let path = entry.path();
        if path.is_file() && is_raster_file(path) {
            inputs.push(path.to_path_buf());
        }
    }

    inputs.sort();
    Ok(inputs)
}

/// Discover every conversion job for an input/output directory pair.
pub fn plan_jobs(input_dir: &Path, output_dir: &Path, suffix: &str) -> Result<Vec<Job>> {
    scan_inputs(input_dir)?
        .into_iter()
        .map(|input| -> Result<Job> {
            let output = output_path(&input, output_dir, suffix).ok_or_else(|| ShiftError::Io {
                path: input.clone(),
                message: "File name is not valid UTF-8".to_string(),
            })?;
            Ok(Job { input, output })
        })
        .collect()
}
