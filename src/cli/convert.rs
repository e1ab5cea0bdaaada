//! Convert command implementation.
//!
//! Finds every source sheet in the input directory and runs the
//! conversion pipeline on each one, writing results to the output
//! directory.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::config::Config;
use crate::converter::{convert_sheet, ConvertOptions};
use crate::discovery::{plan_jobs, RASTER_EXTENSIONS};
use crate::error::{Result, ShiftError};
use crate::output::{display_path, plural, Printer};

/// Convert every sheet in the input directory
#[derive(Args, Debug, Default)]
pub struct ConvertArgs {
    /// Directory containing source sheets (default: input_files)
    pub input: Option<PathBuf>,

    /// Output directory (default: output_files)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Integer scale factor for nearest-neighbour upscaling
    #[arg(long, short, allow_negative_numbers = true)]
    pub scale: Option<i64>,

    /// Per-channel tolerance when keying out the background colour
    #[arg(long, short, allow_negative_numbers = true)]
    pub tolerance: Option<i64>,

    /// Suffix appended to each output file name (default: _converted)
    #[arg(long)]
    pub suffix: Option<String>,

    /// Config file to use instead of ./sheetshift.yaml
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Skip files that fail to convert instead of stopping
    #[arg(long)]
    pub keep_going: bool,
}

/// Effective batch settings after merging flags over config.
#[derive(Debug, Clone, PartialEq)]
struct Settings {
    input: PathBuf,
    output: PathBuf,
    suffix: String,
    options: ConvertOptions,
}

impl Settings {
    fn resolve(args: &ConvertArgs, config: Config) -> Self {
        let defaults = config.convert_options();
        Self {
            input: args.input.clone().unwrap_or(config.input),
            output: args.output.clone().unwrap_or(config.output),
            suffix: args.suffix.clone().unwrap_or(config.suffix),
            options: ConvertOptions {
                scale: args.scale.unwrap_or(defaults.scale),
                tolerance: args.tolerance.unwrap_or(defaults.tolerance),
            },
        }
    }
}

/// Run the batch conversion. Returns the number of sheets written.
pub fn run(args: ConvertArgs, printer: &Printer) -> Result<usize> {
    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::discover(Path::new("."))?,
    };
    let settings = Settings::resolve(&args, config);

    let jobs = plan_jobs(&settings.input, &settings.output, &settings.suffix)?;
    if jobs.is_empty() {
        printer.warning(
            "Warning",
            &format!(
                "No .{} files found in {}",
                RASTER_EXTENSIONS.join("/."),
                display_path(&settings.input)
            ),
        );
        return Ok(0);
    }

    if !settings.output.exists() {
        fs::create_dir_all(&settings.output).map_err(|e| ShiftError::Io {
            path: settings.output.clone(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    printer.info(
        "Running",
        &format!("conversions for {}", plural(jobs.len(), "file", "files")),
    );

    let mut converted = 0;
    let mut failed = Vec::new();

    for job in &jobs {
        printer.status(
            "Converting",
            &format!(
                "{} -> {}",
                display_path(&job.input),
                display_path(&job.output)
            ),
        );

        match convert_sheet(&job.input, &job.output, &settings.options) {
            Ok(()) => converted += 1,
            Err(e) if args.keep_going => {
                printer.error("Failed", &format!("{}: {}", display_path(&job.input), e));
                failed.push(job.input.clone());
            }
            Err(e) => return Err(e),
        }
    }

    if !failed.is_empty() {
        return Err(ShiftError::Batch {
            message: format!(
                "{} of {} failed to convert",
                failed.len(),
                plural(jobs.len(), "file", "files")
            ),
            help: Some("See the errors above for each failed file".to_string()),
        });
    }

    printer.status(
        "Finished",
        &format!(
            "{} to {}",
            plural(converted, "sheet", "sheets"),
            display_path(&settings.output)
        ),
    );

    Ok(converted)
}
