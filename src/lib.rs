//! uwconf: templated workflow configuration and batch job cards.

pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;

#[cfg(test)]
pub(crate) mod testing;

pub use app::api::{
    OutputFormat, RenderOptions, RenderOutcome, SubmitOptions, SubmitResult, load_config, render,
    resolution_context, resolve, resolve_until_stable, submit, transfer_handler,
};
pub use domain::{
    AppError, ConfigMapping, DEFAULT_MAX_PASSES, EnvVars, JobCard, JobSpec, LogLevel,
    LoggingOptions, Lookup, ResolutionContext, ResolutionReport, SchedulerKind, TransferHandler,
};
