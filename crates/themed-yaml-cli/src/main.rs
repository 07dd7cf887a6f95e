//! Themed YAML CLI entry point.

use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info, warn};

use themed_yaml_cli::{
    Args,
    error_adapter::{Reportable, diagnostics_to_reportables, to_reportables},
};

fn render(reportables: &[Reportable<'_>]) -> Vec<String> {
    let reporter = miette::GraphicalReportHandler::new();
    reportables
        .iter()
        .map(|reportable| {
            let mut writer = String::new();
            reporter
                .render_report(&mut writer, reportable.as_ref())
                .expect("Writing to String buffer is infallible");
            writer
        })
        .collect()
}

fn main() {
    // Install miette's pretty panic hook early for better panic reports
    miette::set_panic_hook();

    let args = Args::parse();

    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            args.log_level
        );
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    info!(log_level:?; "Starting themed-yaml");
    debug!(args:?; "Parsed arguments");

    match themed_yaml_cli::run(&args) {
        Ok(outcome) => {
            let warnings = diagnostics_to_reportables(outcome.analysis.diagnostics(), &outcome.source);
            for report in render(&warnings) {
                warn!("{report}");
            }
            print!("{}", outcome.output);
            info!("Completed successfully");
        }
        Err(err) => {
            // Render each diagnostic independently
            for report in render(&to_reportables(&err)) {
                error!("{report}");
            }
            process::exit(1);
        }
    }
}
