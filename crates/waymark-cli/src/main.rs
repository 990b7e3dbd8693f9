//! Waymark CLI entry point.

use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info, warn};

use waymark::WaymarkError;
use waymark_cli::{Args, error_adapter::to_reportables};

fn main() {
    miette::set_panic_hook();

    let args = Args::parse();
    init_logger(&args.log_level);

    info!(version = env!("CARGO_PKG_VERSION"); "Starting Waymark");
    debug!(args:?; "Parsed arguments");

    match waymark_cli::run(&args) {
        Ok(layout) => {
            // The layout is still written; steps without a phase only warn.
            for step in layout.dropped_steps() {
                warn!(step = step.as_str(); "Step has no phase and was left out");
            }
            info!(
                phases = layout.groups().len(),
                steps = layout.nodes().len(),
                output = args.output;
                "Completed successfully"
            );
        }
        Err(err) => {
            report(&err);
            process::exit(1);
        }
    }
}

/// `RUST_LOG` is honored, but `--log-level` takes precedence. An unknown
/// level falls back to `warn`.
fn init_logger(level: &str) {
    let filter = LevelFilter::from_str(level).unwrap_or_else(|_| {
        eprintln!("Invalid log level: {level}. Using 'warn' instead.");
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(filter)
        .init();
}

/// Renders every diagnostic of `err` as its own miette report.
fn report(err: &WaymarkError) {
    let reporter = miette::GraphicalReportHandler::new();

    for reportable in to_reportables(err) {
        let mut rendered = String::new();
        if reporter.render_report(&mut rendered, &reportable).is_err() {
            rendered = reportable.to_string();
        }
        error!("{rendered}");
    }
}
