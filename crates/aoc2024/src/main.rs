//! Command-line runner for Advent of Code 2024 solutions.

mod cli;

fn main() -> eyre::Result<()> {
    use clap::Parser;

    color_eyre::install().expect("error initializing panic handler");

    // Initialize logging.
    env_logger::builder().init();

    let args = cli::Args::parse();
    cli::exec(args.subcommand)
}
