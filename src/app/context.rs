use crate::domain::TemplateRenderer;
use crate::ports::{EnvironmentPort, FilesystemPort, JobSubmitter};

/// Application context holding dependencies for command execution.
pub struct AppContext<F, S, E, R>
where
    F: FilesystemPort,
    S: JobSubmitter,
    E: EnvironmentPort,
    R: TemplateRenderer,
{
    filesystem: F,
    submitter: S,
    environment: E,
    renderer: R,
}

impl<F, S, E, R> AppContext<F, S, E, R>
where
    F: FilesystemPort,
    S: JobSubmitter,
    E: EnvironmentPort,
    R: TemplateRenderer,
{
    /// Create a new application context.
    pub fn new(filesystem: F, submitter: S, environment: E, renderer: R) -> Self {
        Self { filesystem, submitter, environment, renderer }
    }

    /// Get a reference to the filesystem.
    pub fn filesystem(&self) -> &F {
        &self.filesystem
    }

    /// Get a reference to the job submitter.
    pub fn submitter(&self) -> &S {
        &self.submitter
    }

    /// Get a reference to the environment source.
    pub fn environment(&self) -> &E {
        &self.environment
    }

    /// Get a reference to the template renderer.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}
