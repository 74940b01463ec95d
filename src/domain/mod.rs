pub mod config;
pub mod error;
pub mod job_card;
pub mod logging;
pub mod scheduler;
pub mod template;
pub mod transfer;

pub use config::{ConfigMapping, Lookup, parse_assignments, scalar_text};
pub use error::AppError;
pub use job_card::{JobCard, JobSpec};
pub use logging::{LogLevel, LoggingOptions};
pub use scheduler::SchedulerKind;
pub use template::{
    DEFAULT_MAX_PASSES, EnvVars, RenderError, ResolutionContext, ResolutionReport, Resolver,
    TemplateRenderer,
};
pub use transfer::{Protocol, TransferHandler};
