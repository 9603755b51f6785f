//! Command-line interface for ankilab
//! This binary recovers flashcards from raw model output and converts decks between formats.
//!
//! Usage:
//!   ankilab parse `<path|->` [--to `<format>`] [--output `<file>`]            - Recover cards from model output
//!   ankilab convert `<path>` [--from `<format>`] --to `<format>` [--output `<file>`] - Convert a deck file
//!   ankilab review `<path|->` [--section `<section>`] [--to `<format>`]        - Extract a section of a review response
//!   ankilab formats                                                         - List available formats
//!
//! Global options: `--config <file>` layers a TOML file over the defaults, `-v` raises the log level.

mod commands;

use ankilab_config::{AnkilabConfig, Loader};
use clap::{Arg, ArgAction, ArgMatches, Command};
use commands::{Input, Output, ReviewSection};
use tracing_subscriber::EnvFilter;

const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

fn build_cli() -> Command {
    let input = || {
        Arg::new("path")
            .help("Path to the input file, or '-' for stdin")
            .required(true)
            .index(1)
    };
    let to = || {
        Arg::new("to")
            .long("to")
            .short('t')
            .help("Output format (see `ankilab formats`)")
    };
    let output = || {
        Arg::new("output")
            .long("output")
            .short('o')
            .help("Write to this file instead of stdout")
    };

    Command::new("ankilab")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Recover flashcards from model output and export them for Anki")
        .arg_required_else_help(true)
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .global(true)
                .help("TOML file layered over the built-in defaults"),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .global(true)
                .action(ArgAction::Count)
                .help("Raise the log level (repeatable)"),
        )
        .subcommand(
            Command::new("parse")
                .about("Recover Q:/A: cards from raw model output")
                .arg(input())
                .arg(to())
                .arg(output()),
        )
        .subcommand(
            Command::new("convert")
                .about("Convert a deck between formats")
                .arg(input())
                .arg(
                    Arg::new("from")
                        .long("from")
                        .short('f')
                        .help("Input format (default: detected from the file extension)"),
                )
                .arg(to().required(true))
                .arg(output()),
        )
        .subcommand(
            Command::new("review")
                .about("Extract cards or the change report from a review response")
                .arg(input())
                .arg(
                    Arg::new("section")
                        .long("section")
                        .short('s')
                        .value_parser(["suggested", "final", "report"])
                        .default_value("final")
                        .help("Which part of the response to extract"),
                )
                .arg(to())
                .arg(output()),
        )
        .subcommand(Command::new("formats").about("List available formats"))
}

fn main() {
    let matches = build_cli().get_matches();

    let config = load_config(matches.get_one::<String>("config")).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });
    init_logging(&config.logging.level, matches.get_count("verbose"));

    let registry = config.format_registry();
    let result = match matches.subcommand() {
        Some(("parse", sub)) => commands::parse(
            &registry,
            &input_of(sub),
            &output_of(sub, &config),
        ),
        Some(("convert", sub)) => commands::convert(
            &registry,
            &input_of(sub),
            sub.get_one::<String>("from").map(String::as_str),
            &output_of(sub, &config),
        ),
        Some(("review", sub)) => {
            let section = match sub.get_one::<String>("section").map(String::as_str) {
                Some("suggested") => ReviewSection::Suggested,
                Some("report") => ReviewSection::Report,
                _ => ReviewSection::Final,
            };
            commands::review(&registry, &input_of(sub), section, &output_of(sub, &config))
        }
        Some(("formats", _)) => {
            commands::list_formats(&registry);
            Ok(())
        }
        _ => Ok(()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn load_config(path: Option<&String>) -> Result<AnkilabConfig, ankilab_config::ConfigError> {
    let loader = match path {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new(),
    };
    loader.build()
}

/// Install the stderr subscriber. `RUST_LOG` wins over the configured level.
fn init_logging(level: &str, verbose: u8) {
    let level = raise_level(level, verbose);
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level)))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn raise_level(level: &str, verbose: u8) -> String {
    match LOG_LEVELS.iter().position(|l| l.eq_ignore_ascii_case(level)) {
        Some(idx) => {
            let raised = (idx + verbose as usize).min(LOG_LEVELS.len() - 1);
            LOG_LEVELS[raised].to_string()
        }
        None => level.to_string(),
    }
}

fn input_of(matches: &ArgMatches) -> Input {
    match matches.get_one::<String>("path").map(String::as_str) {
        Some("-") | None => Input::Stdin,
        Some(path) => Input::File(path.into()),
    }
}

fn output_of(matches: &ArgMatches, config: &AnkilabConfig) -> Output {
    Output {
        format: matches.get_one::<String>("to").cloned(),
        path: matches.get_one::<String>("output").map(Into::into),
        default_format: config.export.default_format.clone(),
    }
}
