extern crate log;
extern crate simplelog;

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::process::exit;

use log::{debug, info, LevelFilter};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use armgen::config::{ConfigError, GeneratorConfig};
use armgen::programs;
use armgen::*;

fn main() {
    let args = configure_cli().get_matches();

    let config = match args.value_of("config") {
        None => GeneratorConfig::default(),
        Some(path) => match File::open(path)
            .map_err(ConfigError::from)
            .and_then(|f| GeneratorConfig::read(f))
        {
            Ok(config) => config,
            Err(e) => {
                print_errs(&[format!("{}: {}", path, e)]);
                exit(ERR_CONFIG_ERROR)
            }
        },
    };

    let level = match get_log_level(&args, &config) {
        Ok(level) => level,
        Err(msg) => {
            print_errs(&[msg]);
            exit(ERR_INVALID_ARGUMENT)
        }
    };
    configure_logging(level).expect("Failed to configure logger.");

    let request = match get_program(&args, &config) {
        Ok(Some(request)) => request,
        Ok(None) => {
            print_errs(&[
                "Nothing to generate: pass --text, --digit, or a config with a program".to_string(),
            ]);
            exit(ERR_NO_PROGRAM)
        }
        Err(msg) => {
            print_errs(&[msg]);
            exit(ERR_INVALID_ARGUMENT)
        }
    };
    debug!("request: {:?}", request);

    let asm = match programs::generate(&request, config.vocabulary()) {
        Ok(asm) => asm,
        Err(e) => {
            print_errs(&[format!("Generation failed: {}", e)]);
            exit(ERR_GENERATION_ERROR)
        }
    };

    let output = args
        .value_of("output")
        .map(Path::new)
        .or_else(|| config.output.as_deref());
    let result = match output {
        Some(path) => {
            info!("writing {} lines to {}", asm.len(), path.display());
            File::create(path).and_then(|mut f| f.write_all(asm.text().as_bytes()))
        }
        None => std::io::stdout().write_all(asm.text().as_bytes()),
    };

    if let Err(e) = result {
        print_errs(&[format!("Failed to write assembly: {}", e)]);
        exit(ERR_OUTPUT_ERROR)
    }
}

fn configure_logging(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    TermLogger::init(level, Config::default(), TerminalMode::Stderr, ColorChoice::Auto)
}
