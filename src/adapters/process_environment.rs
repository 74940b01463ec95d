use std::env;

use crate::domain::EnvVars;
use crate::ports::EnvironmentPort;

/// Snapshot of the current process environment.
///
/// Variables whose name or value is not valid UTF-8 are skipped.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl EnvironmentPort for ProcessEnvironment {
    fn snapshot(&self) -> EnvVars {
        env::vars_os()
            .filter_map(|(name, value)| Some((name.into_string().ok()?, value.into_string().ok()?)))
            .collect()
    }
}
