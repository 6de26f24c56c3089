//! Truncated integer square root of a positive integer, by Heron's method.
//!
//! `babylon N` prints `floor(sqrt(N))`.  `-h`, `-v` and `-w` print the help,
//! version and license texts instead.

mod cli;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use crate::cli::args::{self, ArgError};
use crate::cli::text;
use babylon::Mode;

// ───────────────────────────────────────── CLI ───────────────

#[derive(Parser, Debug)]
#[command(
    name = env!("CARGO_PKG_NAME"),
    about = "Truncated integer square root by Heron's method",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// Print the help and exit.
    #[arg(short = 'h')]
    help: bool,

    /// Print the version number and exit.
    #[arg(short = 'v')]
    version: bool,

    /// Print the license and exit.
    #[arg(short = 'w')]
    license: bool,

    /// Convergence mode: `floor` (default) or `heron` (raw iteration).
    #[arg(long, value_parser = parse_mode, default_value = "floor")]
    mode: Mode,

    /// Positive integer to take the root of.
    #[arg(value_name = "N", allow_hyphen_values = true)]
    number: Option<String>,
}

impl Cli {
    /// Text for the first informational flag present, by priority.
    fn fixed_text(&self) -> Option<String> {
        if self.help {
            Some(text::help())
        } else if self.license {
            Some(text::license())
        } else if self.version {
            Some(text::version().to_owned())
        } else {
            None
        }
    }
}

fn parse_mode(s: &str) -> Result<Mode, String> {
    Mode::from_name(s).ok_or_else(|| {
        let names: Vec<&str> = Mode::ALL.iter().map(|m| m.name()).collect();
        format!("expected one of: {}", names.join(", "))
    })
}

// ───────────────────────────────────────── main ─────────────

fn main() -> ExitCode {
    // Silent unless RUST_LOG is set.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr) // never pollute stdout
        .init();

    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let bin = env!("CARGO_PKG_NAME");
            if err.downcast_ref::<ArgError>().is_some() {
                eprintln!("{bin}: {err}\n{}", text::USAGE);
            } else {
                eprintln!("{bin}: {err:#}");
            }
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let mut out = io::stdout().lock();

    // ── informational flags ───────────────────────────────────
    if let Some(text) = cli.fixed_text() {
        debug!("printing fixed text");
        writeln!(out, "{text}").context("writing to stdout")?;
        return Ok(());
    }

    // ── compute ───────────────────────────────────────────────
    let number = args::parse_number(cli.number.as_deref())?;
    let outcome = cli.mode.solve(number);
    debug!(
        number,
        mode = cli.mode.name(),
        root = outcome.root,
        iterations = outcome.iterations,
        corrected = outcome.corrected,
        "computed root"
    );
    writeln!(out, "{}", outcome.root).context("writing to stdout")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("babylon").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn command_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn positional_number_is_kept_verbatim() {
        assert_eq!(parse(&["42"]).number.as_deref(), Some("42"));
        assert_eq!(parse(&[]).number, None);
    }

    #[test]
    fn negative_numbers_reach_validation() {
        let cli = parse(&["-5"]);
        assert_eq!(cli.number.as_deref(), Some("-5"));
        assert!(cli.fixed_text().is_none());
    }

    #[test]
    fn help_wins_over_license_and_version() {
        assert_eq!(parse(&["-hvw"]).fixed_text(), Some(text::help()));
        assert_eq!(parse(&["-v", "-w"]).fixed_text(), Some(text::license()));
        assert_eq!(parse(&["-v"]).fixed_text().as_deref(), Some("0.1.0"));
    }

    #[test]
    fn informational_flags_do_not_need_a_number() {
        assert!(parse(&["-h"]).number.is_none());
    }

    #[test]
    fn mode_flag_is_parsed() {
        assert_eq!(parse(&["--mode", "heron", "8"]).mode, Mode::Heron);
        assert_eq!(parse(&["8"]).mode, Mode::Floor);
        assert!(Cli::try_parse_from(["babylon", "--mode", "newton", "8"]).is_err());
    }

    #[test]
    fn malformed_hyphen_values_reach_validation() {
        for raw in ["-1abc", "-x"] {
            let cli = parse(&[raw]);
            assert_eq!(cli.number.as_deref(), Some(raw));
            assert_eq!(
                args::parse_number(cli.number.as_deref()),
                Err(ArgError::NotPositive(raw.to_owned()))
            );
        }
    }

    #[test]
    fn known_short_flags_are_not_taken_as_n() {
        let cli = parse(&["-vw"]);
        assert!(cli.number.is_none());
        assert!(cli.version && cli.license);
    }

    #[test]
    fn extra_arguments_are_rejected() {
        assert!(Cli::try_parse_from(["babylon", "4", "9"]).is_err());
    }
}
