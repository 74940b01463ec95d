//! CLI Adapter.

mod render;
mod submit;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::adapters::init_logging;
use crate::domain::{AppError, LogLevel, LoggingOptions};

#[derive(Parser)]
#[command(name = "uwconf")]
#[command(version)]
#[command(
    about = "Resolve templated workflow configuration and submit batch job cards",
    long_about = None
)]
struct Cli {
    /// Logging level: DEBUG, INFO, WARNING, ERROR, CRITICAL
    #[arg(long, global = true, default_value = "INFO")]
    log_level: String,
    /// Colour console log output
    #[arg(long, global = true)]
    color: bool,
    /// Also write log output to this file
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve configuration files and print the result
    #[clap(visible_alias = "r")]
    Render(render::RenderArgs),
    /// Write a job card from configuration and submit it
    #[clap(visible_alias = "s")]
    Submit(submit::SubmitArgs),
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();

    let result: Result<i32, AppError> = setup_logging(&cli).and_then(|()| match cli.command {
        Commands::Render(args) => render::run_render(args).map(|_| 0),
        Commands::Submit(args) => submit::run_submit(args),
    });

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn setup_logging(cli: &Cli) -> Result<(), AppError> {
    let options = LoggingOptions {
        level: cli.log_level.parse::<LogLevel>()?,
        colored: cli.color,
        log_file: cli.log_file.clone(),
    };
    init_logging(&options)
}
