use clap::Parser;
use stabkit::cli::{self, Cli};
use stabkit::init_logging;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.verbose)?;

    cli::run(&cli)
}
