use std::str::FromStr;

use clap::{App, Arg, ArgMatches};
use log::LevelFilter;

use crate::config::{GeneratorConfig, ProgramRequest};

// Exit Codes for different types of errors
pub const ERR_CONFIG_ERROR: i32 = 1;
pub const ERR_NO_PROGRAM: i32 = 2;
pub const ERR_INVALID_ARGUMENT: i32 = 3;
pub const ERR_GENERATION_ERROR: i32 = 4;
pub const ERR_OUTPUT_ERROR: i32 = 5;

pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Warn;

pub fn print_errs(errs: &[String]) {
    for e in errs {
        eprintln!("{}", e);
    }
}

pub fn configure_cli() -> clap::App<'static, 'static> {
    App::new("ARM Assembly Generator")
        .version("0.1.0")
        .author("Erich Ess")
        .about("Generates freestanding 32-bit ARM assembly programs for the GNU assembler")
        .arg(
            Arg::with_name("text")
                .short("t")
                .long("text")
                .takes_value(true)
                .conflicts_with("digit")
                .help("Generate a program that prints this text followed by a newline"),
        )
        .arg(
            Arg::with_name("digit")
                .short("d")
                .long("digit")
                .takes_value(true)
                .allow_hyphen_values(true)
                .help("Generate a program that prints this single decimal digit (0 to 9)"),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .takes_value(true)
                .help("Name the output file that the assembly will be written to. Defaults to stdout"),
        )
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .takes_value(true)
                .help("YAML file with the program, output, log level, and operation vocabulary"),
        )
        .arg(
            Arg::with_name("log-level")
                .long("log-level")
                .possible_values(&["off", "error", "warn", "info", "debug", "trace"])
                .takes_value(true)
                .help("How much the generator logs to the terminal"),
        )
}

/// The log level from the command line, falling back to the config.
pub fn get_log_level(args: &ArgMatches, config: &GeneratorConfig) -> Result<LevelFilter, String> {
    match args.value_of("log-level").or_else(|| config.log_level.as_deref()) {
        None => Ok(DEFAULT_LOG_LEVEL),
        Some(level) => {
            LevelFilter::from_str(level).map_err(|_| format!("Invalid log level: {}", level))
        }
    }
}

/// The program to generate.  `--text` and `--digit` override the config.
pub fn get_program(
    args: &ArgMatches,
    config: &GeneratorConfig,
) -> Result<Option<ProgramRequest>, String> {
    if let Some(text) = args.value_of("text") {
        return Ok(Some(ProgramRequest::Text(text.into())));
    }

    if let Some(digit) = args.value_of("digit") {
        let value = digit
            .parse::<i32>()
            .map_err(|e| format!("Invalid digit {}: {}", digit, e))?;
        return check_digit(value).map(|v| Some(ProgramRequest::Digit(v)));
    }

    match &config.program {
        Some(ProgramRequest::Digit(value)) => {
            check_digit(*value).map(|v| Some(ProgramRequest::Digit(v)))
        }
        other => Ok(other.clone()),
    }
}

fn check_digit(value: i32) -> Result<i32, String> {
    if (0..=9).contains(&value) {
        Ok(value)
    } else {
        Err(format!("Digit must be between 0 and 9, got {}", value))
    }
}
