#[cfg(test)]
#[path = "../../tests/unit/commands/solve_test.rs"]
mod solve_test;

use super::*;

use clap::{Arg, ArgAction, Command};
use diffevo_cli::extensions::solve::config::{TelemetryConfig, create_builder_from_config, create_environment, read_config};
use diffevo_cli::{SolveResult, write_result};
use std::io::BufReader;
use std::sync::Arc;

const CONFIG_ARG_NAME: &str = "CONFIG";
const GENERATIONS_ARG_NAME: &str = "max-generations";
const WORKERS_ARG_NAME: &str = "workers";
const RANDOM_SEED_ARG_NAME: &str = "seed";
const OUT_RESULT_ARG_NAME: &str = "out-result";
const LOG_ARG_NAME: &str = "log";

pub fn get_solve_app() -> Command {
    Command::new("solve")
        .about("Minimizes or maximizes a built-in objective function using differential evolution")
        .arg(Arg::new(CONFIG_ARG_NAME).help("Sets the run configuration file to use").required(true).index(1))
        .arg(
            Arg::new(GENERATIONS_ARG_NAME)
                .help("Specifies maximum number of generations")
                .short('n')
                .long(GENERATIONS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(WORKERS_ARG_NAME)
                .help("Specifies amount of evaluation workers")
                .short('w')
                .long(WORKERS_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(RANDOM_SEED_ARG_NAME)
                .help("Specifies random seed to make the run repeatable")
                .short('s')
                .long(RANDOM_SEED_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether the progress is written to the log")
                .short('l')
                .long(LOG_ARG_NAME)
                .action(ArgAction::SetTrue)
                .required(false),
        )
}

pub fn run_solve(
    matches: &ArgMatches,
    out_writer_func: fn(Option<File>) -> BufWriter<Box<dyn Write>>,
) -> Result<(), String> {
    let config_path = matches.get_one::<String>(CONFIG_ARG_NAME).ok_or("config path is not specified")?;
    let max_generations = parse_int_value::<usize>(matches, GENERATIONS_ARG_NAME, "max generations")?;
    let workers = parse_int_value::<usize>(matches, WORKERS_ARG_NAME, "workers")?;
    let seed = parse_int_value::<u64>(matches, RANDOM_SEED_ARG_NAME, "seed")?;
    let is_logging = matches.get_flag(LOG_ARG_NAME);
    let out_result = matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result")).transpose()?;

    let mut config = read_config(BufReader::new(open_file(config_path, "config")?))?;

    if seed.is_some() {
        config.seed = seed;
    }

    if workers.is_some() {
        config.workers = workers;
    }

    if let Some(max_generations) = max_generations {
        let termination = config.termination.get_or_insert_with(Default::default);
        termination.max_generations = Some(max_generations);
    }

    if is_logging && config.telemetry.is_none() {
        config.telemetry = Some(TelemetryConfig { enabled: Some(true), log_best: None });
    }

    let environment = create_environment(&config, Arc::new(|msg: &str| println!("{msg}")));
    let mut engine = create_builder_from_config(&config, environment)?.build().map_err(|err| err.to_string())?;
    let best = engine.run().map_err(|err| err.to_string())?;
    let result = SolveResult::new(&best, engine.generation())?;

    write_result(&result, &mut out_writer_func(out_result))
}
