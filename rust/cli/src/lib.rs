//! # Liar's Dice CLI Library
//!
//! Command-line front end for the Liar's Dice engine and its computer
//! players.
//!
//! The primary entry point is [`run`], which parses command-line arguments
//! and executes the matching subcommand against the given output streams.
//!
//! ## Available Subcommands
//!
//! - `play`: play against computer opponents from the terminal
//! - `sim`: computer-only games with per-profile win counts
//! - `odds`: Monte-Carlo estimate for one bid given your dice
//! - `cfg`: display the resolved configuration

use clap::Parser;
use std::io::Write;
pub mod cli;
pub mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{Commands, LiarsDiceCli};
use commands::{
    OddsArgs, PlayArgs, SimArgs, handle_cfg_command, handle_odds_command, handle_play_command,
    handle_sim_command,
};

pub use error::CliError;

const COMMANDS: &[&str] = &["play", "sim", "odds", "cfg"];

/// Main entry point for the CLI application.
///
/// Returns the process exit code: `0` on success, `2` for usage and runtime
/// errors.
///
/// ```
/// use std::io;
/// let args = vec!["liarsdice", "odds", "--hand", "3,3", "--total", "6", "--count", "2", "--face", "3"];
/// let code = liarsdice_cli::run(args, &mut io::stdout(), &mut io::stderr());
/// assert_eq!(code, 0);
/// ```
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match LiarsDiceCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => return usage_error(e, out, err),
    };
    logging::init_logging(cli.verbose);

    let result = match cli.cmd {
        Commands::Cfg => handle_cfg_command(out),
        Commands::Play {
            players,
            dice,
            wild,
            seed,
            name,
        } => {
            // Use stdin for real input (supports both TTY and piped stdin)
            let stdin = std::io::stdin();
            let mut stdin_lock = stdin.lock();
            let args = PlayArgs {
                players,
                dice,
                wild,
                seed,
                name,
            };
            handle_play_command(args, out, err, &mut stdin_lock)
        }
        Commands::Sim {
            games,
            players,
            dice,
            wild,
            seed,
            json,
        } => handle_sim_command(
            SimArgs {
                games,
                players,
                dice,
                wild,
                seed,
                json,
            },
            out,
        ),
        Commands::Odds {
            hand,
            total,
            count,
            face,
            wild,
            trials,
            seed,
        } => handle_odds_command(
            OddsArgs {
                hand,
                total,
                count,
                face,
                wild,
                trials,
                seed,
            },
            out,
        ),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

fn usage_error(e: clap::Error, out: &mut dyn Write, err: &mut dyn Write) -> i32 {
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
            if writeln!(err, "{}", e).is_err()
                || writeln!(err).is_err()
                || writeln!(err, "Liar's Dice CLI").is_err()
                || writeln!(err, "Usage: liarsdice <command> [options]\n").is_err()
                || writeln!(err, "Commands:").is_err()
            {
                return exit_code::ERROR;
            }
            for c in COMMANDS {
                if writeln!(err, "  {}", c).is_err() {
                    return exit_code::ERROR;
                }
            }
            let _ = writeln!(err, "\nFor full help, run: liarsdice --help");
            exit_code::ERROR
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_command_parses() {
        let commands = vec![
            vec!["liarsdice", "cfg"],
            vec!["liarsdice", "play", "--players", "3", "--wild"],
            vec!["liarsdice", "sim", "--games", "1", "--json"],
            vec![
                "liarsdice", "odds", "--hand", "1,2", "--total", "4", "--count", "1", "--face",
                "2",
            ],
        ];
        for cmd_args in commands {
            let result = LiarsDiceCli::try_parse_from(&cmd_args);
            assert!(result.is_ok(), "Failed to parse: {:?}", cmd_args);
        }
        assert_eq!(COMMANDS.len(), 4);
    }

    #[test]
    fn odds_requires_its_arguments() {
        let result = LiarsDiceCli::try_parse_from(["liarsdice", "odds", "--hand", "1"]);
        assert!(result.is_err());
    }

    #[test]
    fn verbose_is_global() {
        let cli = LiarsDiceCli::try_parse_from(["liarsdice", "sim", "-v"]).unwrap();
        assert!(cli.verbose);
        match cli.cmd {
            Commands::Sim { games, .. } => assert_eq!(games, 10),
            _ => panic!("Expected Commands::Sim variant"),
        }
    }

    #[test]
    fn unknown_command_lists_commands() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(["liarsdice", "deal"], &mut out, &mut err);
        assert_eq!(code, exit_code::ERROR);
        let stderr = String::from_utf8(err).unwrap();
        for c in COMMANDS {
            assert!(stderr.contains(&format!("  {}", c)));
        }
    }

    #[test]
    fn runtime_errors_exit_with_error_code() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let args = [
            "liarsdice", "odds", "--hand", "1,2", "--total", "4", "--count", "1", "--face", "7",
        ];
        let code = run(args, &mut out, &mut err);
        assert_eq!(code, exit_code::ERROR);
        let stderr = String::from_utf8(err).unwrap();
        assert!(stderr.starts_with("Error: Engine error: "), "{stderr}");
    }

    #[test]
    fn help_goes_to_stdout() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(["liarsdice", "--help"], &mut out, &mut err);
        assert_eq!(code, exit_code::SUCCESS);
        assert!(String::from_utf8(out).unwrap().contains("Usage"));
    }
}
