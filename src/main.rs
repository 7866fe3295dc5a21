use clap::Parser;
use miette::Result;

use favemoji::cli::Cli;
use favemoji::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new();

    if cli.list {
        favemoji::cli::list::run(&printer)?;
        return Ok(());
    }

    favemoji::cli::generate::run(cli.generate, &printer)?;

    Ok(())
}
