use clap::Parser;
use miette::Result;
use sheetshift::cli::{Cli, Commands};
use sheetshift::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new().quiet(cli.quiet);

    match cli.command {
        Commands::Convert(args) => {
            sheetshift::cli::convert::run(args, &printer)?;
        }
        Commands::Init(args) => sheetshift::cli::init::run(args, &printer)?,
        Commands::Completions(args) => sheetshift::cli::completions::run(args)?,
    }

    Ok(())
}
