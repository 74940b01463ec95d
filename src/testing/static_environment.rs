use crate::domain::EnvVars;
use crate::ports::EnvironmentPort;

/// Fixed environment snapshot.
#[derive(Debug, Clone, Default)]
pub struct StaticEnvironment(pub EnvVars);

impl EnvironmentPort for StaticEnvironment {
    fn snapshot(&self) -> EnvVars {
        self.0.clone()
    }
}
