mod filesystem;
mod logging;
mod minijinja_renderer;
mod process_environment;
mod shell_submitter;

pub use filesystem::LocalFilesystem;
pub use logging::init_logging;
pub use minijinja_renderer::MinijinjaRenderer;
pub use process_environment::ProcessEnvironment;
pub use shell_submitter::ShellSubmitter;
