// framefix-cli/src/main.rs
//
// Entry point for the `framefix` binary: parses arguments, sets up logging
// and dispatches to the command implementations. Any error that reaches this
// point is printed with its context chain and turns into exit status 1.

use clap::Parser;
use framefix_cli::{Cli, Commands, logging, run_classify, run_fix, run_probe};
use std::process;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match cli.command {
        Commands::Fix(args) => run_fix(args),
        Commands::Probe(args) => run_probe(args),
        Commands::Classify(args) => run_classify(args),
    };

    if let Err(e) = result {
        log::error!("{:#}", e);
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}
