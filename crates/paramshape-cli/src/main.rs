//! Paramshape CLI - Command-line interface for reshaping parameter mappings
//!
//! This is the main entry point for the Paramshape CLI application, providing
//! commands for building, extracting from, and ejecting keys out of JSON or
//! YAML parameter files.

mod cli;
mod config;
mod error;
mod handlers;
mod logging;
mod output;

use cli::{Cli, Commands};
use colored::control;
use config::Config;
use error::Result;
use logging::{timing::Timer, LogSettings};
use output::OutputWriter;
use std::process;
use tracing::instrument;

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse_args();

    // Load configuration before logging so it can shape the subscriber
    let config = match Config::load_with_file(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", error::format_error(&e, !cli.no_color));
            process::exit(e.exit_code());
        }
    };

    // Set up colored output
    control::set_override(cli.use_color(&config));

    // Initialize logging; the guard flushes file output on exit
    let guard = match init_logging(&cli, &config) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            None
        }
    };

    let result = run(cli, &config);
    drop(guard);

    match result {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!(
                "{}",
                error::format_error(&e, control::SHOULD_COLORIZE.should_colorize())
            );

            if e.should_show_help() {
                eprintln!("\nFor more information, try '--help'");
            }

            process::exit(e.exit_code());
        }
    }
}

/// Main application logic
#[instrument(skip(cli, config), fields(command = ?cli.command))]
fn run(cli: Cli, config: &Config) -> Result<()> {
    let _timer = Timer::new("cli_execution");

    let mut output = OutputWriter::new(cli.output_format(config), cli.use_color(config), cli.quiet);

    tracing::info!(
        verbosity = cli.verbosity_level(),
        format = ?output.format(),
        "Executing command"
    );

    match cli.command {
        Commands::Build(args) => handlers::handle_build(args, &mut output),
        Commands::Extract(args) => handlers::handle_extract(args, &mut output),
        Commands::Eject(args) => handlers::handle_eject(args, &mut output),
        Commands::Config(args) => handlers::handle_config(args, config, &mut output),
        Commands::Completions(args) => handlers::handle_completions(args),
    }
}

/// Initialize the logging system
fn init_logging(
    cli: &Cli,
    config: &Config,
) -> Result<Option<tracing_appender::non_blocking::WorkerGuard>> {
    let mut settings = LogSettings::resolve(cli.verbosity_level(), &config.logging);

    // If quiet mode, only log errors
    if cli.quiet {
        settings.level = "error".to_string();
        settings.console = false;
    }

    logging::init_logging(settings)
}
