use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use lcovgate::cli::Cli;
use lcovgate::commands::{gate_coverage, GateOptions};
use lcovgate::config::{load_config_file, merge_config};
use lcovgate::errors::Error;
use std::io::IsTerminal;
use std::process::ExitCode;

const EXIT_THRESHOLD_FAILURE: u8 = 1;
const EXIT_FATAL: u8 = 2;

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbosity);
    colored::control::set_override(std::io::stderr().is_terminal());

    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{} {:#}", "Error:".red().bold(), e);
            if is_collection_failure(&e) {
                eprintln!("Could not obtain coverage data. Run the tests with coverage enabled first.");
            }
            ExitCode::from(EXIT_FATAL)
        }
    }
}

fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    // RUST_LOG, when set, takes precedence over -v
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn is_collection_failure(error: &anyhow::Error) -> bool {
    error
        .chain()
        .filter_map(|cause| cause.downcast_ref::<Error>())
        .any(Error::is_collection_failure)
}

fn run(cli: Cli) -> Result<ExitCode> {
    let file_source = load_config_file(&cli.config_file);
    let config = merge_config(&cli.config_source(), &file_source);
    log::debug!("Resolved configuration: {:?}", config);

    let options = GateOptions {
        config,
        lcov_file: cli.lcov_file,
        format: cli.format,
    };
    let outcome = gate_coverage(&options)?;

    println!("{}", outcome.rendered);

    if outcome.report.passed {
        return Ok(ExitCode::SUCCESS);
    }

    for failure in &outcome.report.failures {
        eprintln!("{}", failure.red());
    }
    Ok(ExitCode::from(EXIT_THRESHOLD_FAILURE))
}
