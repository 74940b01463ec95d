//! Batch scheduler adapters.

mod directives;

use std::fmt;
use std::str::FromStr;

use crate::domain::AppError;
use crate::domain::config::ConfigMapping;

pub use directives::{REQUIRED_ATTRIBUTES, is_noneish};

/// Supported batch schedulers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SchedulerKind {
    Slurm,
    Pbs,
    Lsf,
}

impl SchedulerKind {
    /// All registered schedulers in lookup order.
    pub const ALL: [SchedulerKind; 3] =
        [SchedulerKind::Slurm, SchedulerKind::Pbs, SchedulerKind::Lsf];

    /// Configuration name for this scheduler.
    pub fn name(self) -> &'static str {
        match self {
            SchedulerKind::Slurm => "slurm",
            SchedulerKind::Pbs => "pbs",
            SchedulerKind::Lsf => "lsf",
        }
    }

    /// Look up a scheduler by its configuration name (case-insensitive).
    pub fn from_name(name: &str) -> Result<Self, AppError> {
        match name.trim().to_lowercase().as_str() {
            "slurm" => Ok(SchedulerKind::Slurm),
            "pbs" => Ok(SchedulerKind::Pbs),
            "lsf" => Ok(SchedulerKind::Lsf),
            _ => Err(AppError::UnsupportedScheduler {
                name: name.to_string(),
                available: Self::ALL.map(Self::name).join(" | "),
            }),
        }
    }

    /// Prefix of every directive line.
    pub fn directive_prefix(self) -> &'static str {
        match self {
            SchedulerKind::Slurm => "#SBATCH",
            SchedulerKind::Pbs => "#PBS",
            SchedulerKind::Lsf => "#BSUB",
        }
    }

    /// Separator between a directive flag and its value.
    pub fn key_value_separator(self) -> &'static str {
        match self {
            SchedulerKind::Slurm => "=",
            SchedulerKind::Pbs | SchedulerKind::Lsf => " ",
        }
    }

    /// Interpreter line placed at the top of the job card, if the scheduler needs one.
    ///
    /// PBS and LSF select the shell through their own directives.
    pub fn interpreter_line(self) -> Option<&'static str> {
        match self {
            SchedulerKind::Slurm => Some("#!/bin/bash"),
            SchedulerKind::Pbs | SchedulerKind::Lsf => None,
        }
    }

    /// Directive lines for the given resource attributes.
    pub fn directives(self, resources: &ConfigMapping) -> Result<Vec<String>, AppError> {
        directives::build(self, resources)
    }
}

impl fmt::Display for SchedulerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for SchedulerKind {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_roundtrip() {
        for kind in SchedulerKind::ALL {
            assert_eq!(SchedulerKind::from_name(kind.name()).unwrap(), kind);
        }
    }

    #[test]
    fn lookup_ignores_case() {
        assert_eq!(SchedulerKind::from_name("Slurm").unwrap(), SchedulerKind::Slurm);
        assert_eq!("PBS".parse::<SchedulerKind>().unwrap(), SchedulerKind::Pbs);
    }

    #[test]
    fn unknown_scheduler_lists_supported_ones() {
        let err = SchedulerKind::from_name("cobalt").unwrap_err();

        match err {
            AppError::UnsupportedScheduler { name, available } => {
                assert_eq!(name, "cobalt");
                assert_eq!(available, "slurm | pbs | lsf");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn only_slurm_gets_an_interpreter_line() {
        assert_eq!(SchedulerKind::Slurm.interpreter_line(), Some("#!/bin/bash"));
        assert_eq!(SchedulerKind::Pbs.interpreter_line(), None);
        assert_eq!(SchedulerKind::Lsf.interpreter_line(), None);
    }
}
