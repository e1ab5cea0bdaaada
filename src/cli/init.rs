//! Init command implementation.
//!
//! Writes a default `sheetshift.yaml` and creates the input and output
//! directories it names.

use std::fs;
use std::path::PathBuf;

use clap::Args;

use crate::config::{Config, CONFIG_FILENAME};
use crate::error::{Result, ShiftError};
use crate::output::{display_path, Printer};

/// Initialize a project by generating a sheetshift.yaml config
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Project directory (default: current directory)
    #[arg(default_value = ".")]
    pub path: PathBuf,

    /// Default scale factor to record in the config
    #[arg(long, short, allow_negative_numbers = true)]
    pub scale: Option<i64>,

    /// Overwrite existing sheetshift.yaml
    #[arg(long)]
    pub force: bool,
}

pub fn run(args: InitArgs, printer: &Printer) -> Result<()> {
    let config_path = args.path.join(CONFIG_FILENAME);

    if config_path.exists() && !args.force {
        return Err(ShiftError::Config {
            message: format!("{} already exists", CONFIG_FILENAME),
            help: Some("Use --force to overwrite".to_string()),
        });
    }

    if let Some(scale) = args.scale.filter(|&s| s < 1) {
        return Err(ShiftError::InvalidArgument {
            message: format!("Scale factor must be at least 1, got {}", scale),
            help: Some("Use a positive integer such as 2 or 4".to_string()),
        });
    }

    let config = Config {
        scale: args.scale,
        ..Default::default()
    };

    for dir in [&config.input, &config.output] {
        let dir = args.path.join(dir);
        if !dir.exists() {
            fs::create_dir_all(&dir).map_err(|e| ShiftError::Io {
                path: dir.clone(),
                message: format!("Failed to create directory: {}", e),
            })?;
            printer.status("Created", &format!("{}/", display_path(&dir)));
        }
    }

    fs::write(&config_path, config.to_yaml()?).map_err(|e| ShiftError::Io {
        path: config_path.clone(),
        message: format!("Failed to write config: {}", e),
    })?;

    printer.status("Created", &display_path(&config_path));

    Ok(())
}
