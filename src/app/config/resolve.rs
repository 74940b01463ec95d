//! Resolution glue shared by the commands.

use tracing::info;

use crate::domain::{
    AppError, ConfigMapping, EnvVars, ResolutionContext, ResolutionReport, Resolver,
    TemplateRenderer, parse_assignments,
};

/// Context with the environment, the configuration, and any runtime assignments.
///
/// Assignments such as `cycle.current_cycle=2022101000` are exposed by their
/// top-level name and outrank configuration keys of the same name.
pub fn build_context<S: AsRef<str>>(
    env: EnvVars,
    assignments: &[S],
) -> Result<ResolutionContext, AppError> {
    let overlay = parse_assignments(assignments)?;
    let context = ResolutionContext::new(env);
    if overlay.is_empty() { Ok(context) } else { Ok(context.with_overlay(overlay)) }
}

/// Resolve until stable, logging whatever is left for a later stage.
pub fn resolve_config<R: TemplateRenderer + ?Sized>(
    renderer: &R,
    context: &ResolutionContext,
    mapping: ConfigMapping,
    max_passes: usize,
) -> ResolutionReport {
    let report = Resolver::new(renderer, context).resolve_until_stable(mapping, max_passes);
    if !report.is_complete() {
        info!(keys = %report.unresolved.join(", "), "Placeholders left unresolved");
    }
    report
}
