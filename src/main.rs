use clap::Parser;
use flightsched::cli::{args::Args, commands};
use std::process;

fn main() {
    let args = Args::parse();

    match commands::run(args) {
        Ok(_stats) => {
            // Success - the summary has already been reported by the command
            process::exit(0);
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}
