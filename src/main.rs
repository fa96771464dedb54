// src/main.rs
#![allow(clippy::multiple_crate_versions)]

use std::process::ExitCode;

use clap::Parser;
use country_table::{app, cli::Args, logging};

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    match app::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
