//! Job card assembly.

use std::path::{Component, Path};

use serde_yaml::Value;
use tracing::warn;

use crate::domain::AppError;
use crate::domain::config::{ConfigMapping, scalar_text};
use crate::domain::scheduler::SchedulerKind;
use crate::domain::template::contains_template;

/// Job settings read from a resolved configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct JobSpec {
    pub scheduler: SchedulerKind,
    pub jobname: String,
    pub submit_cmd: String,
    /// Commands listed under `commands` in the configuration.
    pub commands: Vec<String>,
    /// Scheduler attributes listed under `resources`, if any.
    pub resources: Option<ConfigMapping>,
}

impl JobSpec {
    /// Read `scheduler`, `jobname`, `submit_cmd`, and the optional `commands` and
    /// `resources` entries.
    ///
    /// The scheduler is validated here so an unsupported one fails before any
    /// file is written.
    pub fn from_config(config: &ConfigMapping) -> Result<Self, AppError> {
        let scheduler = SchedulerKind::from_name(&required_text(config, "scheduler")?)?;
        let jobname = required_text(config, "jobname")?;
        validate_jobname(&jobname)?;
        let submit_cmd = required_text(config, "submit_cmd")?;

        let commands = match config.get("commands") {
            None | Some(Value::Null) => Vec::new(),
            Some(Value::Sequence(items)) => items.iter().map(scalar_text).collect(),
            Some(Value::String(command)) => vec![command.clone()],
            Some(_) => {
                return Err(AppError::config_error(
                    "'commands' must be a list of strings or a single string",
                ));
            }
        };

        let resources = match config.get("resources") {
            None | Some(Value::Null) => None,
            Some(Value::Mapping(map)) => Some(ConfigMapping::from(map.clone())),
            Some(_) => return Err(AppError::config_error("'resources' must be a mapping")),
        };

        Ok(Self { scheduler, jobname, submit_cmd, commands, resources })
    }

    /// File name of the generated job card.
    pub fn script_name(&self) -> String {
        format!("{}.sh", self.jobname)
    }
}

fn required_text(config: &ConfigMapping, key: &str) -> Result<String, AppError> {
    let text = match config.get(key) {
        None | Some(Value::Null) => return Err(AppError::MissingKey(key.to_string())),
        Some(value @ (Value::String(_) | Value::Number(_))) => scalar_text(value),
        Some(_) => {
            return Err(AppError::config_error(format!("'{}' must be a string", key)));
        }
    };

    if contains_template(&text) {
        return Err(AppError::config_error(format!(
            "'{}' still contains an unresolved placeholder: {}",
            key, text
        )));
    }
    Ok(text)
}

fn validate_jobname(jobname: &str) -> Result<(), AppError> {
    let components: Vec<Component<'_>> = Path::new(jobname).components().collect();
    let single_segment = matches!(components.as_slice(), [Component::Normal(_)]);
    if jobname.trim().is_empty() || !single_segment {
        return Err(AppError::config_error(format!(
            "Invalid jobname '{}': must be a plain file name",
            jobname
        )));
    }
    Ok(())
}

/// Lines of a batch job script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobCard {
    lines: Vec<String>,
}

impl JobCard {
    /// Assemble interpreter line, scheduler directives, and commands.
    ///
    /// Directives are only emitted when `resources` is present.
    /// `extra_commands` run after the configured ones.
    pub fn assemble(spec: &JobSpec, extra_commands: &[String]) -> Result<Self, AppError> {
        let mut lines = Vec::new();

        if let Some(interpreter) = spec.scheduler.interpreter_line() {
            lines.push(interpreter.to_string());
        }
        if let Some(resources) = &spec.resources {
            lines.extend(spec.scheduler.directives(resources)?);
        }

        let commands: Vec<String> =
            spec.commands.iter().chain(extra_commands.iter()).cloned().collect();
        if commands.is_empty() {
            warn!(jobname = %spec.jobname, "Job card has no commands");
        }
        for command in &commands {
            if contains_template(command) {
                warn!(command = %command, "Command still contains an unresolved placeholder");
            }
        }
        lines.extend(commands);

        Ok(Self { lines })
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Script body: lines joined with newlines, ending in a newline.
    pub fn content(&self) -> String {
        let mut content = self.lines.join("\n");
        content.push('\n');
        content
    }
}
