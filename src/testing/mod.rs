mod memory_filesystem;
mod path_renderer;
mod recording_submitter;
mod static_environment;

use crate::app::AppContext;
use crate::domain::EnvVars;

#[allow(unused_imports)]
pub use memory_filesystem::MemoryFilesystem;
#[allow(unused_imports)]
pub use path_renderer::PathRenderer;
#[allow(unused_imports)]
pub use recording_submitter::RecordingSubmitter;
#[allow(unused_imports)]
pub use static_environment::StaticEnvironment;

pub type TestContext =
    AppContext<MemoryFilesystem, RecordingSubmitter, StaticEnvironment, PathRenderer>;

/// Context over in-memory ports with the given files and environment.
#[allow(dead_code)]
pub fn test_context(
    filesystem: MemoryFilesystem,
    submitter: RecordingSubmitter,
    env: EnvVars,
) -> TestContext {
    AppContext::new(filesystem, submitter, StaticEnvironment(env), PathRenderer)
}
