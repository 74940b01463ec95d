//! Generate a job card from configuration and hand it to the scheduler.

use std::path::PathBuf;

use tracing::info;

use crate::app::AppContext;
use crate::app::config::{build_context, load_config, resolve_config};
use crate::domain::{
    AppError, DEFAULT_MAX_PASSES, JobCard, JobSpec, Resolver, SchedulerKind, TemplateRenderer,
};
use crate::ports::{EnvironmentPort, FilesystemPort, JobSubmitter, SubmissionStatus};

#[derive(Debug, Clone)]
pub struct SubmitOptions {
    pub configs: Vec<PathBuf>,
    /// Runtime assignments (`NS.KEY=VALUE`).
    pub assignments: Vec<String>,
    /// Commands appended after the configured ones.
    pub commands: Vec<String>,
    /// Write the job card without submitting it.
    pub dry_run: bool,
    /// Directory receiving `<jobname>.sh`.
    pub out_dir: PathBuf,
}

impl SubmitOptions {
    pub fn new(configs: Vec<PathBuf>) -> Self {
        Self {
            configs,
            assignments: Vec::new(),
            commands: Vec::new(),
            dry_run: false,
            out_dir: PathBuf::from("."),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SubmitResult {
    pub script_path: PathBuf,
    pub scheduler: SchedulerKind,
    /// `None` on a dry run.
    pub status: Option<SubmissionStatus>,
}

impl SubmitResult {
    /// Process exit code to report: the submission command's own code, 0 on a dry
    /// run, and 1 when the command was terminated by a signal.
    pub fn exit_code(&self) -> i32 {
        match self.status {
            None => 0,
            Some(status) => status.exit_code.unwrap_or(1),
        }
    }
}

pub fn execute<F, S, E, R>(
    ctx: &AppContext<F, S, E, R>,
    options: &SubmitOptions,
) -> Result<SubmitResult, AppError>
where
    F: FilesystemPort,
    S: JobSubmitter,
    E: EnvironmentPort,
    R: TemplateRenderer,
{
    let mapping = load_config(ctx.filesystem(), &options.configs)?;
    let context = build_context(ctx.environment().snapshot(), &options.assignments)?;
    let report = resolve_config(ctx.renderer(), &context, mapping, DEFAULT_MAX_PASSES);

    let spec = JobSpec::from_config(&report.mapping)?;

    let scope = context.scope(report.mapping.as_mapping());
    let resolver = Resolver::new(ctx.renderer(), &context);
    let extra_commands: Vec<String> = options
        .commands
        .iter()
        .enumerate()
        .map(|(index, command)| {
            resolver.resolve_str(command, &scope, &format!("--command.{}", index))
        })
        .collect();

    let card = JobCard::assemble(&spec, &extra_commands)?;

    let script_path = options.out_dir.join(spec.script_name());
    ctx.filesystem().write_executable(&script_path, &card.content())?;
    info!(
        path = %script_path.display(),
        scheduler = %spec.scheduler,
        lines = card.lines().len(),
        "Wrote job card"
    );

    if options.dry_run {
        return Ok(SubmitResult { script_path, scheduler: spec.scheduler, status: None });
    }

    let status = ctx.submitter().submit(&spec.submit_cmd, &script_path)?;
    info!(command = %spec.submit_cmd, exit_code = ?status.exit_code, "Submitted job card");

    Ok(SubmitResult { script_path, scheduler: spec.scheduler, status: Some(status) })
}
