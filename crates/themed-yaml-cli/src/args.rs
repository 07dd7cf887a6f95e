//! Command-line argument definitions for the themed YAML CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments select the input document, the configuration
//! file, what to print besides diagnostics, and logging verbosity.

use clap::Parser;

use themed_yaml::Position;

/// Command-line arguments for the themed YAML checker
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input themed YAML file
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,

    /// Print the resolved colors of every color item
    #[arg(long)]
    pub colors: bool,

    /// Print the hover text at LINE:COL (1-based)
    #[arg(long, value_name = "LINE:COL", value_parser = parse_location)]
    pub hover: Option<Location>,
}

/// A 1-based line and column as typed by a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub line: usize,
    pub column: usize,
}

impl Location {
    /// Returns the zero-based [`Position`].
    pub fn to_position(self) -> Position {
        Position::new(self.line - 1, self.column - 1)
    }
}

fn parse_location(value: &str) -> Result<Location, String> {
    let (line, column) = value
        .split_once(':')
        .ok_or_else(|| format!("expected LINE:COL, got `{value}`"))?;
    let line: usize = line
        .trim()
        .parse()
        .map_err(|err| format!("invalid line `{line}`: {err}"))?;
    let column: usize = column
        .trim()
        .parse()
        .map_err(|err| format!("invalid column `{column}`: {err}"))?;
    if line == 0 || column == 0 {
        return Err("lines and columns start at 1".to_string());
    }
    Ok(Location { line, column })
}
