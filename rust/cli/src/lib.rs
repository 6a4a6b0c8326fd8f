//! # Tarot CLI Library
//!
//! Command-line front end for the tarot drawing engine: an interactive
//! drawing session, one-shot readings, a catalog listing and a draw order
//! preview.
//!
//! ## Main Entry Point
//!
//! [`run`] parses arguments and dispatches to a subcommand; [`run_with_input`]
//! does the same with an explicit stdin for the interactive `draw` command.
//!
//! ```
//! use std::io;
//! let args = vec!["tarot", "shuffle", "--seed", "42"];
//! let code = tarot_cli::run(args, &mut io::stdout(), &mut io::stderr());
//! assert_eq!(code, 0);
//! ```
//!
//! ## Available Subcommands
//!
//! - `draw`: interactive session reading commands from stdin
//! - `reading`: reveal the given draw positions and exit
//! - `deck`: list all 78 cards with both names
//! - `shuffle`: print the draw order for a seed
//! - `cfg`: display the resolved configuration

use clap::Parser;
use std::io::{BufRead, Write};

pub mod artwork;
pub mod cli;
mod commands;
pub mod config;
mod error;
pub mod exit_code;
pub mod formatters;
pub mod io_utils;
pub mod locale;
pub mod logging;
pub mod ui;
pub mod validation;

use cli::{Commands, TarotCli};
use commands::{
    handle_cfg_command, handle_deck_command, handle_draw_command, handle_reading_command,
    handle_shuffle_command,
};

pub use error::CliError;

/// Main entry point for the CLI application.
///
/// # Arguments
///
/// * `args` - Command-line arguments including the program name
/// * `out` - Normal output (typically `stdout`)
/// * `err` - Errors and warnings (typically `stderr`)
///
/// # Returns
///
/// Exit code: [`exit_code::SUCCESS`] or [`exit_code::ERROR`]
pub fn run<I, S>(args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let stdin = std::io::stdin();
    let mut stdin_lock = stdin.lock();
    run_with_input(args, &mut stdin_lock, out, err)
}

/// [`run`] with the interactive input supplied by the caller.
///
/// ```
/// use std::io::Cursor;
/// let mut input = Cursor::new("pick 1 5\nconfirm\nq\n");
/// let (mut out, mut err) = (Vec::new(), Vec::new());
/// let code = tarot_cli::run_with_input(
///     ["tarot", "draw", "--seed", "3", "--locale", "en"],
///     &mut input,
///     &mut out,
///     &mut err,
/// );
/// assert_eq!(code, 0);
/// assert!(String::from_utf8(out).unwrap().contains("Result:"));
/// ```
pub fn run_with_input<I, S>(
    args: I,
    stdin: &mut dyn BufRead,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> i32
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    const COMMANDS: &[&str] = &["draw", "reading", "deck", "shuffle", "cfg"];
    let argv: Vec<String> = args.into_iter().map(|s| s.as_ref().to_string()).collect();

    let cli = match TarotCli::try_parse_from(&argv) {
        Ok(cli) => cli,
        Err(e) => {
            use clap::error::ErrorKind;

            // Help and version go to stdout and succeed
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                    if write!(out, "{}", e).is_err() {
                        return exit_code::ERROR;
                    }
                    exit_code::SUCCESS
                }
                _ => {
                    let _ = write_usage(err, &e.to_string(), COMMANDS);
                    exit_code::ERROR
                }
            };
        }
    };

    let result = match cli.cmd {
        Commands::Draw {
            count,
            seed,
            locale,
        } => handle_draw_command(count, seed, locale, out, err, stdin),
        Commands::Reading {
            positions,
            seed,
            locale,
        } => handle_reading_command(&positions, seed, locale, out, err),
        Commands::Deck { locale } => handle_deck_command(locale, out),
        Commands::Shuffle { seed } => handle_shuffle_command(seed, out),
        Commands::Cfg => handle_cfg_command(out),
    };

    match result {
        Ok(()) => exit_code::SUCCESS,
        Err(e) => {
            let _ = ui::write_error(err, &e.to_string());
            exit_code::ERROR
        }
    }
}

fn write_usage(err: &mut dyn Write, clap_msg: &str, commands: &[&str]) -> std::io::Result<()> {
    writeln!(err, "{}", clap_msg)?;
    writeln!(err)?;
    writeln!(err, "Tarot Picker CLI")?;
    writeln!(err, "Usage: tarot <command> [options]\n")?;
    writeln!(err, "Commands:")?;
    for c in commands {
        writeln!(err, "  {}", c)?;
    }
    writeln!(err, "\nFor full help, run: tarot --help")
}
