//! Resolve configuration files and serialize the result.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use tracing::info;

use crate::app::AppContext;
use crate::app::config::{build_context, load_config, resolve_config};
use crate::domain::{AppError, DEFAULT_MAX_PASSES, TemplateRenderer};
use crate::ports::{EnvironmentPort, FilesystemPort, JobSubmitter};

/// Serialization format of the resolved configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Yaml => write!(f, "yaml"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            "json" => Ok(OutputFormat::Json),
            other => Err(AppError::config_error(format!(
                "Unsupported output format '{}'. Supported formats: yaml | json",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct RenderOptions {
    pub configs: Vec<PathBuf>,
    /// Runtime assignments (`NS.KEY=VALUE`).
    pub assignments: Vec<String>,
    pub format: OutputFormat,
    /// Write here instead of returning the text for stdout.
    pub output: Option<PathBuf>,
    pub max_passes: usize,
}

impl RenderOptions {
    pub fn new(configs: Vec<PathBuf>) -> Self {
        Self {
            configs,
            assignments: Vec::new(),
            format: OutputFormat::default(),
            output: None,
            max_passes: DEFAULT_MAX_PASSES,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderOutcome {
    /// Serialized configuration, ending with a newline.
    pub content: String,
    pub passes: usize,
    /// Dotted keys that still contain placeholders.
    pub unresolved: Vec<String>,
    /// File the content was written to, if any.
    pub output: Option<PathBuf>,
}

pub fn execute<F, S, E, R>(
    ctx: &AppContext<F, S, E, R>,
    options: &RenderOptions,
) -> Result<RenderOutcome, AppError>
where
    F: FilesystemPort,
    S: JobSubmitter,
    E: EnvironmentPort,
    R: TemplateRenderer,
{
    let mapping = load_config(ctx.filesystem(), &options.configs)?;
    let context = build_context(ctx.environment().snapshot(), &options.assignments)?;
    let report = resolve_config(ctx.renderer(), &context, mapping, options.max_passes);

    let mut content = match options.format {
        OutputFormat::Yaml => report.mapping.to_yaml_string()?,
        OutputFormat::Json => report.mapping.to_json_string()?,
    };
    if !content.ends_with('\n') {
        content.push('\n');
    }

    if let Some(path) = &options.output {
        ctx.filesystem().write_file(path, &content)?;
        info!(path = %path.display(), format = %options.format, "Wrote resolved configuration");
    }

    Ok(RenderOutcome {
        content,
        passes: report.passes,
        unresolved: report.unresolved,
        output: options.output.clone(),
    })
}
