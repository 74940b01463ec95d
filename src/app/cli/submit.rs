//! Submit command implementation.

use std::path::PathBuf;

use clap::Args;

use crate::app::api::{self, SubmitOptions};
use crate::domain::AppError;

#[derive(Args)]
pub struct SubmitArgs {
    /// Configuration files, merged in order
    #[arg(required = true, value_name = "CONFIG")]
    configs: Vec<PathBuf>,
    /// Runtime value, e.g. cycle.current_cycle=2022101000 (repeatable)
    #[arg(long = "set", value_name = "NS.KEY=VALUE")]
    assignments: Vec<String>,
    /// Command appended to the job card (repeatable)
    #[arg(long = "command", value_name = "CMD")]
    commands: Vec<String>,
    /// Write the job card without submitting it
    #[arg(long)]
    dry_run: bool,
    /// Directory for the generated job card
    #[arg(long, value_name = "DIR", default_value = ".")]
    out_dir: PathBuf,
}

/// Returns the submission command's exit code.
pub fn run_submit(args: SubmitArgs) -> Result<i32, AppError> {
    let options = SubmitOptions {
        configs: args.configs,
        assignments: args.assignments,
        commands: args.commands,
        dry_run: args.dry_run,
        out_dir: args.out_dir,
    };

    let result = api::submit(&options)?;
    let exit_code = result.exit_code();
    if result.status.is_none() {
        println!(
            "✅ Wrote {} job card to {} (dry run, not submitted)",
            result.scheduler,
            result.script_path.display()
        );
    } else if exit_code == 0 {
        println!("✅ Submitted {} job card {}", result.scheduler, result.script_path.display());
    } else {
        println!("⚠️  Submission command exited with code {}", exit_code);
    }
    Ok(exit_code)
}
