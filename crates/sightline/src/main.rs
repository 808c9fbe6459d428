//! `sightline`: print and draw the closest obstacle to a robot in each of
//! the four cardinal directions.

use clap::Parser;
use sightline::cli::{error_message, run, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(report) => {
            print!("{report}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{}", error_message(&err, &cli.map_file));
            ExitCode::FAILURE
        }
    }
}
