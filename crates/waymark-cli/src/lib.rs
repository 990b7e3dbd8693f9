//! Waymark CLI library
//!
//! This module contains the core CLI logic for the Waymark roadmap layout tool.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::info;

use waymark::{RoadmapBuilder, WaymarkError, layout::LayoutResult};

/// Run the Waymark CLI application
///
/// Reads the input roadmap, lays it out with the loaded configuration and
/// writes the layout JSON to the output file. Nothing is written when any
/// step fails. The computed layout is returned for reporting.
///
/// # Errors
///
/// Returns `WaymarkError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Parsing errors
/// - Serialization errors
pub fn run(args: &Args) -> Result<LayoutResult, WaymarkError> {
    let format = args.input_format();
    info!(
        input_path = args.input,
        output_path = args.output,
        format:%;
        "Processing roadmap"
    );

    let app_config = config::load_config(args.config.as_ref())?;

    let source = fs::read_to_string(&args.input)?;

    let builder = RoadmapBuilder::new(app_config);
    let roadmap = builder.parse(&source, format)?;
    let layout = builder.layout(&roadmap)?;
    let json = builder.to_json(&layout, !args.compact)?;

    fs::write(&args.output, json)?;

    info!(output_file = args.output; "Layout exported successfully");

    Ok(layout)
}
