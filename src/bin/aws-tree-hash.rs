//! aws-tree-hash binary
//!
//! Prints the tree hash of a file. Exit status: 0 on success, 2 on usage
//! errors, 1 on any other failure.

use clap::Parser;
use std::process;
use treehash::logging::init_logging;
use treehash::tooling::{Cli, CliContext};

fn main() {
    // clap exits with status 2 on usage errors
    let cli = Cli::parse();

    let context = match CliContext::new(cli.config.clone()) {
        Ok(ctx) => ctx,
        Err(e) => {
            eprintln!("Error loading configuration: {}", e);
            process::exit(1);
        }
    };

    let logging = cli.logging_config(&context.config().logging);
    if let Err(e) = init_logging(Some(&logging)) {
        eprintln!("Error initializing logging: {}", e);
        process::exit(1);
    }

    match context.execute(&cli.request()) {
        Ok(output) => {
            println!("{}", output);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
