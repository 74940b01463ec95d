//! Scheduler directive generation from resource attributes.
//!
//! Attributes with an entry in the scheduler's table become directives in
//! configuration order. PBS and LSF fold node and task counts into composite
//! directives. Attributes without a table entry are passed through as
//! `prefix key<sep>value`, or as a bare `prefix key` flag when their value is
//! none-ish.

use serde_yaml::Value;

use super::SchedulerKind;
use crate::domain::AppError;
use crate::domain::config::{ConfigMapping, scalar_text};

/// Attributes every job card must define.
pub const REQUIRED_ATTRIBUTES: [&str; 5] =
    ["account", "queue", "walltime", "nodes", "tasks_per_node"];

const IGNORED_ATTRIBUTES: [&str; 1] = ["scheduler"];

#[derive(Debug, Clone, Copy)]
enum Directive {
    /// `flag<sep>value`
    Flag(&'static str),
    /// `flag=value` regardless of the scheduler separator.
    Assign(&'static str),
    /// `before` + value + `after`
    Wrap(&'static str, &'static str),
}

impl Directive {
    fn render(self, separator: &str, value: &str) -> String {
        match self {
            Directive::Flag(flag) => format!("{}{}{}", flag, separator, value),
            Directive::Assign(flag) => format!("{}={}", flag, value),
            Directive::Wrap(before, after) => format!("{}{}{}", before, value, after),
        }
    }
}

fn directive_for(kind: SchedulerKind, attribute: &str) -> Option<Directive> {
    use Directive::{Assign, Flag, Wrap};

    let directive = match (kind, attribute) {
        (SchedulerKind::Slurm, "account") => Flag("--account"),
        (SchedulerKind::Slurm, "queue") => Flag("--qos"),
        (SchedulerKind::Slurm, "walltime") => Flag("--time"),
        (SchedulerKind::Slurm, "nodes") => Flag("--nodes"),
        (SchedulerKind::Slurm, "tasks_per_node") => Flag("--ntasks-per-node"),
        (SchedulerKind::Slurm, "job_name") => Flag("--job-name"),
        (SchedulerKind::Slurm, "stdout") => Flag("--output"),
        (SchedulerKind::Slurm, "stderr") => Flag("--error"),
        (SchedulerKind::Slurm, "partition") => Flag("--partition"),
        (SchedulerKind::Slurm, "threads") => Flag("--cpus-per-task"),
        (SchedulerKind::Slurm, "memory") => Flag("--mem"),

        (SchedulerKind::Pbs, "account") => Flag("-A"),
        (SchedulerKind::Pbs, "queue") => Flag("-q"),
        (SchedulerKind::Pbs, "walltime") => Assign("-l walltime"),
        (SchedulerKind::Pbs, "shell") => Flag("-S"),
        (SchedulerKind::Pbs, "job_name") => Flag("-N"),
        (SchedulerKind::Pbs, "stdout") => Flag("-o"),
        (SchedulerKind::Pbs, "stderr") => Flag("-e"),
        (SchedulerKind::Pbs, "join") => Flag("-j"),
        (SchedulerKind::Pbs, "debug") => Assign("-l debug"),

        (SchedulerKind::Lsf, "account") => Flag("-P"),
        (SchedulerKind::Lsf, "queue") => Flag("-q"),
        (SchedulerKind::Lsf, "walltime") => Flag("-W"),
        (SchedulerKind::Lsf, "shell") => Flag("-L"),
        (SchedulerKind::Lsf, "job_name") => Flag("-J"),
        (SchedulerKind::Lsf, "stdout") => Flag("-o"),
        (SchedulerKind::Lsf, "stderr") => Flag("-e"),
        (SchedulerKind::Lsf, "cpus") => Wrap("-R affinity[core(", ")]"),

        _ => return None,
    };
    Some(directive)
}

/// Attributes consumed by composite directives.
fn folded_attributes(kind: SchedulerKind) -> &'static [&'static str] {
    match kind {
        SchedulerKind::Slurm => &[],
        SchedulerKind::Pbs => {
            &["nodes", "tasks_per_node", "threads", "memory", "placement", "exclusive"]
        }
        SchedulerKind::Lsf => &["nodes", "tasks_per_node"],
    }
}

/// Values treated as "no value": null, blank, `None`/`none`, and `false`.
pub fn is_noneish(value: &Value) -> bool {
    match value {
        Value::Null | Value::Bool(false) => true,
        Value::String(text) => matches!(text.as_str(), "" | " " | "None" | "none"),
        _ => false,
    }
}

pub(super) fn build(
    kind: SchedulerKind,
    resources: &ConfigMapping,
) -> Result<Vec<String>, AppError> {
    let missing: Vec<String> = REQUIRED_ATTRIBUTES
        .into_iter()
        .filter(|attribute| resources.get(attribute).is_none())
        .map(str::to_string)
        .collect();
    if !missing.is_empty() {
        return Err(AppError::MissingSchedulerAttributes(missing));
    }

    let prefix = kind.directive_prefix();
    let separator = kind.key_value_separator();
    let folded = folded_attributes(kind);

    let mut known = Vec::new();
    let mut unknown = Vec::new();
    let mut flags = Vec::new();

    for (key, value) in resources.as_mapping() {
        let Some(key) = key.as_str() else {
            continue;
        };
        if IGNORED_ATTRIBUTES.contains(&key) || folded.contains(&key) {
            continue;
        }

        match directive_for(kind, key) {
            Some(directive) => {
                if !is_noneish(value) {
                    let body = directive.render(separator, &scalar_text(value));
                    known.push(format!("{} {}", prefix, body));
                }
            }
            None if is_noneish(value) => flags.push(format!("{} {}", prefix, key)),
            None => unknown.push(format!("{} {}{}{}", prefix, key, separator, scalar_text(value))),
        }
    }

    let composite = match kind {
        SchedulerKind::Slurm => Vec::new(),
        SchedulerKind::Pbs => pbs_composite(resources)?,
        SchedulerKind::Lsf => lsf_composite(resources)?,
    };
    known.extend(composite.into_iter().map(|body| format!("{} {}", prefix, body)));
    known.extend(unknown);
    known.extend(flags);

    Ok(known)
}

fn pbs_composite(resources: &ConfigMapping) -> Result<Vec<String>, AppError> {
    let nodes = text(resources, "nodes");
    let tasks = text(resources, "tasks_per_node");
    let mut select = format!("-l select={}:mpiprocs={}", nodes, tasks);

    if let Some(threads) = present(resources, "threads") {
        let ncpus = product(resources, "tasks_per_node", "threads")?;
        select.push_str(&format!(":ompthreads={}:ncpus={}", scalar_text(threads), ncpus));
    }
    if let Some(memory) = present(resources, "memory") {
        select.push_str(&format!(":mem={}", scalar_text(memory)));
    }

    let mut lines = vec![select];

    let mut place = Vec::new();
    if let Some(placement) = present(resources, "placement") {
        place.push(scalar_text(placement));
    }
    if present(resources, "exclusive").is_some() {
        place.push("excl".to_string());
    }
    if !place.is_empty() {
        lines.push(format!("-l place={}", place.join(":")));
    }

    Ok(lines)
}

fn lsf_composite(resources: &ConfigMapping) -> Result<Vec<String>, AppError> {
    let total = product(resources, "nodes", "tasks_per_node")?;
    Ok(vec![
        format!("-n {}", total),
        format!("-R span[ptile={}]", text(resources, "tasks_per_node")),
    ])
}

fn present<'a>(resources: &'a ConfigMapping, key: &str) -> Option<&'a Value> {
    resources.get(key).filter(|value| !is_noneish(value))
}

fn text(resources: &ConfigMapping, key: &str) -> String {
    resources.get(key).map(scalar_text).unwrap_or_default()
}

fn product(resources: &ConfigMapping, left: &str, right: &str) -> Result<i64, AppError> {
    integer(resources, left)?.checked_mul(integer(resources, right)?).ok_or_else(|| {
        AppError::config_error(format!(
            "Scheduler attributes '{}' * '{}' exceed the supported range",
            left, right
        ))
    })
}

fn integer(resources: &ConfigMapping, key: &str) -> Result<i64, AppError> {
    let parsed = match resources.get(key) {
        Some(Value::Number(number)) => number.as_i64(),
        Some(Value::String(raw)) => raw.trim().parse().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| {
        AppError::config_error(format!("Scheduler attribute '{}' must be an integer", key))
    })
}
