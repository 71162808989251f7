//! A command line interface to the differential evolution engine.
//!
//! ## Usage
//!
//! - minimize a built-in function using the run configuration from the file
//!
//!     `diffevo solve config.json --max-generations=500 --out-result result.json`
//!
//! - make the run repeatable and write the progress to the log
//!
//!     `diffevo solve config.json --seed 42 --log`
//!
//! For more details, simply run
//!
//!     diffevo --help

mod commands;

mod cli {
    use super::commands::solve::{get_solve_app, run_solve};
    use super::commands::*;
    use clap::{ArgMatches, Command};
    use std::process;

    pub fn get_app() -> Command {
        Command::new("Differential Evolution")
            .version(env!("CARGO_PKG_VERSION"))
            .about("A command line interface to the parallel differential evolution engine")
            .subcommand(get_solve_app())
    }

    pub fn run_subcommand(arg_matches: ArgMatches) {
        if let Err(err) = match arg_matches.subcommand() {
            Some(("solve", solve_matches)) => run_solve(solve_matches, create_write_buffer),
            _ => Err("no subcommand was used. Use -h to print help information".to_string()),
        } {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}

fn main() {
    cli::run_subcommand(cli::get_app().get_matches());
}
