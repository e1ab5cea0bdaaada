use miette::Diagnostic;
use thiserror::Error;

/// Main error type for sheetshift operations
#[derive(Error, Diagnostic, Debug)]
pub enum ShiftError {
    #[error("Failed to decode {path}: {message}")]
    #[diagnostic(code(sheetshift::decode))]
    Decode {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Failed to encode {path}: {message}")]
    #[diagnostic(code(sheetshift::encode))]
    Encode {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Invalid argument: {message}")]
    #[diagnostic(code(sheetshift::argument))]
    InvalidArgument {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Malformed raster: {message}")]
    #[diagnostic(code(sheetshift::raster))]
    MalformedRaster {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("No source image has been loaded")]
    #[diagnostic(
        code(sheetshift::no_source),
        help("Load an image from a file before calling reload")
    )]
    NoSource,

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(sheetshift::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Config error: {message}")]
    #[diagnostic(code(sheetshift::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Batch error: {message}")]
    #[diagnostic(code(sheetshift::batch))]
    Batch {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, ShiftError>;
