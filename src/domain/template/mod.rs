//! Placeholder templating for configuration values.

mod context;
mod placeholder;
mod renderer;
mod resolver;

pub use context::{CONFIG_ALIAS, ENV_ALIAS, EnvVars, ResolutionContext};
pub use placeholder::{BLOCK_OPEN, Token, VALUE_OPEN, contains_template, tokenize};
pub use renderer::{RenderError, TemplateRenderer};
pub use resolver::{DEFAULT_MAX_PASSES, ResolutionReport, Resolver, unresolved_paths};
