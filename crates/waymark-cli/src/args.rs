//! Command-line argument definitions for the Waymark CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, input format,
//! configuration file selection, output formatting, and logging verbosity.

use clap::Parser;

use waymark::InputFormat;

/// Command-line arguments for the Waymark roadmap layout tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input roadmap (markdown or JSON)
    #[arg(help = "Path to the input file")]
    pub input: String,

    /// Path to the output layout JSON file
    #[arg(short, long, default_value = "out.json")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Input format (markdown, json); guessed from the file extension when omitted
    #[arg(short, long)]
    pub format: Option<InputFormat>,

    /// Write the layout on a single line instead of pretty-printing it
    #[arg(long)]
    pub compact: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// The explicit `--format`, or the one implied by the input path.
    pub fn input_format(&self) -> InputFormat {
        self.format
            .unwrap_or_else(|| InputFormat::from_path(&self.input))
    }
}
