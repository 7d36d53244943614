//! CLI argument parsing using clap.
//!
//! Contains the Cli struct and the handling of the optional leading
//! `compute` token that wrapper scripts prepend.

use clap::{
    ArgAction, Parser,
    builder::styling::{AnsiColor, Effects, Styles},
};
use std::ffi::OsString;
use std::path::PathBuf;

use crate::config::Bounds;
use crate::constraint::ConstraintApplier;
use crate::error::ComputeResult;

/// Literal dropped when it is the first argument after the program name.
pub const COMMAND_TOKEN: &str = "compute";

fn clap_cargo_style() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .usage(AnsiColor::Cyan.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Green.on_default())
}

/// Threshold-and-limit numeric filter
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(
    name = "compute",
    version = env!("CARGO_PKG_VERSION"),
    about = "Apply a threshold and a cumulative limit to values read from stdin",
    long_about = "Reads one decimal value per line from stdin, keeps only the amount above \
                  THRESHOLD, caps the running total at LIMIT, and prints each result \
                  followed by the total.",
    next_line_help = true,
    styles = clap_cargo_style(),
    after_help = "Examples:\n  printf '10.0\\n20.0\\n5.0\\n' | compute 15.0 100.0\n  compute compute 0.0 400.0 < values.txt\n  compute -c settings.toml -vv 500.0 1000.0 < values.txt"
)]
pub struct Cli {
    /// Per-value floor; only the amount above it counts
    #[arg(value_name = "THRESHOLD", allow_negative_numbers = true)]
    pub threshold: f64,

    /// Ceiling on the cumulative sum of outputs
    #[arg(value_name = "LIMIT", allow_negative_numbers = true)]
    pub limit: f64,

    /// Path to custom settings.toml file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Parse `args` (program name first) after dropping a leading
    /// `compute` token.
    pub fn try_parse_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(strip_command_token(args))
    }

    /// Range-check both parameters against `bounds`.
    pub fn resolve(&self, bounds: &Bounds) -> ComputeResult<ConstraintApplier> {
        let threshold = bounds.check_argument("threshold", self.threshold)?;
        let limit = bounds.check_argument("limit", self.limit)?;
        Ok(ConstraintApplier::new(threshold, limit))
    }
}

/// Remove [`COMMAND_TOKEN`] when it is the first argument after the program
/// name. Only one occurrence is removed.
pub fn strip_command_token<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args: Vec<OsString> = args.into_iter().map(Into::into).collect();
    if args.get(1).and_then(|arg| arg.to_str()) == Some(COMMAND_TOKEN) {
        args.remove(1);
    }
    args
}
