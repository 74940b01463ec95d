use crate::domain::EnvVars;

/// Port for reading the process environment once at the edge.
pub trait EnvironmentPort {
    fn snapshot(&self) -> EnvVars;
}
