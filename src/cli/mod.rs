pub mod completions;
pub mod convert;
pub mod init;

use clap::{Parser, Subcommand};

/// sheetshift - Character sheet layout converter
#[derive(Parser, Debug)]
#[command(name = "sheetshift")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Only print errors
    #[arg(long, short, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Convert every sheet in the input directory
    Convert(convert::ConvertArgs),

    /// Initialize a project (generates sheetshift.yaml)
    Init(init::InitArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
