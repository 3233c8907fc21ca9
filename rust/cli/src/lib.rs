//! # hanabi CLI Library
//!
//! Command-line front end for the `hanabi-engine` turn engine. It turns text
//! command logs into engine commands and prints one result line per game.
//!
//! ## Main Entry Point
//!
//! The primary entry point is the [`run`] function, which parses command-line arguments
//! and executes the appropriate subcommand.
//!
//! ## Available Subcommands
//!
//! - `replay`: Replay a command log from a file or stdin
//! - `deal`: Print a start command for a shuffled standard deck
//! - `cfg`: Display current configuration settings

use clap::Parser;
use std::io::Write;

#[macro_use]
mod macros;

pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod parser;
pub mod ui;

use cli::{Commands, HanabiCli};
use commands::{handle_cfg_command, handle_deal_command, handle_replay_command};

pub use commands::{ReplayOptions, ReplayReport, replay_text};
pub use error::CliError;

/// Main entry point for the CLI application.
///
/// # Arguments
///
/// * `args` - Iterator over command-line arguments (typically `std::env::args()`)
/// * `out` - Output stream for results (typically `stdout`)
/// * `err` - Output stream for errors and warnings (typically `stderr`)
///
/// # Returns
///
/// Exit code: `0` for success, `2` for errors
///
/// # Example
///
/// ```
/// let mut out = Vec::new();
/// let mut err = Vec::new();
/// let code = hanabi_cli::run(["hanabi", "deal", "--seed", "42"], &mut out, &mut err);
/// assert_eq!(code, 0);
/// assert!(String::from_utf8(out).unwrap().starts_with("Start new game with deck "));
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["replay", "deal", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let parsed = HanabiCli::try_parse_from(&argv);
    match parsed {
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version should print to stdout and exit 0
            match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    write_or_exit!(err, "{}", e);
                    write_or_exit!(err, "Hanabi replay CLI");
                    write_or_exit!(err, "Usage: hanabi <command> [options]\n");
                    write_or_exit!(err, "Commands:");
                    for c in COMMANDS {
                        write_or_exit!(err, "  {}", c);
                    }
                    write_or_exit!(err, "\nFor full help, run: hanabi --help");
                    exit_code::ERROR
                }
            }
        }
        Ok(cli) => match cli.cmd {
            Commands::Cfg => match handle_cfg_command(out, err) {
                Ok(()) => exit_code::SUCCESS,
                Err(_) => exit_code::ERROR,
            },
            Commands::Deal { seed } => {
                let config = match config::load() {
                    Ok(cfg) => cfg,
                    Err(e) => {
                        write_or_exit!(err, "Error: Invalid configuration: {}", e);
                        return exit_code::ERROR;
                    }
                };
                match handle_deal_command(seed.or(config.seed), out) {
                    Ok(()) => exit_code::SUCCESS,
                    Err(e) => {
                        write_or_exit!(err, "Error: {}", e);
                        exit_code::ERROR
                    }
                }
            }
            Commands::Replay {
                input,
                format,
                summary,
            } => {
                let config = match config::load() {
                    Ok(cfg) => cfg,
                    Err(e) => {
                        write_or_exit!(err, "Error: Invalid configuration: {}", e);
                        return exit_code::ERROR;
                    }
                };
                let options = ReplayOptions {
                    rules: config.rules(),
                    format: format.unwrap_or(config.format),
                    summary,
                };
                match handle_replay_command(input.as_deref(), &options, out, err) {
                    Ok(report) if report.errors > 0 => exit_code::ERROR,
                    Ok(_) => exit_code::SUCCESS,
                    Err(e) => {
                        write_or_exit!(err, "Error: {}", e);
                        exit_code::ERROR
                    }
                }
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_subcommand_prints_usage() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(["hanabi", "shuffle"], &mut out, &mut err);
        assert_eq!(code, exit_code::ERROR);
        let stderr = String::from_utf8(err).unwrap();
        assert!(stderr.contains("Usage: hanabi <command> [options]"));
        for c in ["replay", "deal", "cfg"] {
            assert!(stderr.contains(&format!("  {}", c)));
        }
    }

    #[test]
    fn test_help_goes_to_stdout() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(["hanabi", "--help"], &mut out, &mut err);
        assert_eq!(code, exit_code::SUCCESS);
        assert!(String::from_utf8(out).unwrap().contains("replay"));
        assert!(err.is_empty());
    }

    #[test]
    fn test_missing_input_file_is_an_error() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(
            ["hanabi", "replay", "--input", "no/such/game.log"],
            &mut out,
            &mut err,
        );
        assert_eq!(code, exit_code::ERROR);
        assert!(String::from_utf8(err).unwrap().contains("Failed to read no/such/game.log"));
    }
}
