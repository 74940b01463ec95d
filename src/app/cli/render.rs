//! Render command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::app::api::{self, RenderOptions};
use crate::domain::{AppError, DEFAULT_MAX_PASSES};

#[derive(Args)]
pub struct RenderArgs {
    /// Configuration files, merged in order
    #[arg(required = true, value_name = "CONFIG")]
    configs: Vec<PathBuf>,
    /// Runtime value, e.g. cycle.current_cycle=2022101000 (repeatable)
    #[arg(long = "set", value_name = "NS.KEY=VALUE")]
    assignments: Vec<String>,
    /// Output format: yaml or json
    #[arg(short, long, default_value = "yaml")]
    format: String,
    /// Write to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,
    /// Maximum number of resolution passes
    #[arg(long, default_value_t = DEFAULT_MAX_PASSES)]
    max_passes: usize,
}

pub fn run_render(args: RenderArgs) -> Result<(), AppError> {
    let options = RenderOptions {
        configs: args.configs,
        assignments: args.assignments,
        format: args.format.parse()?,
        output: args.output,
        max_passes: args.max_passes,
    };

    let outcome = api::render(&options)?;
    match &outcome.output {
        Some(path) => println!("✅ Wrote resolved configuration to {}", path.display()),
        None => print!("{}", outcome.content),
    }
    Ok(())
}
