//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::PathBuf;

use crate::adapters::{LocalFilesystem, MinijinjaRenderer, ProcessEnvironment, ShellSubmitter};
use crate::app::{
    AppContext,
    commands::{render, submit},
};
use crate::domain::{ConfigMapping, ResolutionContext, ResolutionReport, Resolver, TransferHandler};
use crate::ports::EnvironmentPort;

pub use crate::app::commands::render::{OutputFormat, RenderOptions, RenderOutcome};
pub use crate::app::commands::submit::{SubmitOptions, SubmitResult};
pub use crate::domain::AppError;

type LocalContext =
    AppContext<LocalFilesystem, ShellSubmitter, ProcessEnvironment, MinijinjaRenderer>;

fn create_context() -> LocalContext {
    AppContext::new(LocalFilesystem, ShellSubmitter, ProcessEnvironment, MinijinjaRenderer::new())
}

/// Load, merge and resolve configuration files.
pub fn render(options: &RenderOptions) -> Result<RenderOutcome, AppError> {
    render::execute(&create_context(), options)
}

/// Write a job card from configuration files and submit it unless `dry_run` is set.
pub fn submit(options: &SubmitOptions) -> Result<SubmitResult, AppError> {
    submit::execute(&create_context(), options)
}

/// Read and merge configuration files without resolving them.
pub fn load_config(paths: &[PathBuf]) -> Result<ConfigMapping, AppError> {
    crate::app::config::load_config(&LocalFilesystem, paths)
}

/// Context over the current process environment plus runtime assignments.
pub fn resolution_context<S: AsRef<str>>(
    assignments: &[S],
) -> Result<ResolutionContext, AppError> {
    crate::app::config::build_context(ProcessEnvironment.snapshot(), assignments)
}

/// Run one resolution pass with the Jinja renderer.
pub fn resolve(mapping: ConfigMapping, context: &ResolutionContext) -> ConfigMapping {
    let renderer = MinijinjaRenderer::new();
    Resolver::new(&renderer, context).resolve(mapping)
}

/// Resolve with the Jinja renderer until a pass changes nothing.
pub fn resolve_until_stable(
    mapping: ConfigMapping,
    context: &ResolutionContext,
    max_passes: usize,
) -> ResolutionReport {
    crate::app::config::resolve_config(&MinijinjaRenderer::new(), context, mapping, max_passes)
}

/// Look up a file handler, falling back to `file_file`.
pub fn transfer_handler(name: &str) -> TransferHandler {
    TransferHandler::lookup(name)
}
