//! `TemplateRenderer` backed by minijinja.

use minijinja::{Environment, ErrorKind, UndefinedBehavior};
use serde_yaml::Mapping;

use crate::domain::{RenderError, TemplateRenderer};

/// Renders placeholders with Jinja semantics.
///
/// Undefined lookups are strict, so a reference to a value no context provides
/// fails instead of rendering as empty text.
pub struct MinijinjaRenderer {
    env: Environment<'static>,
}

impl MinijinjaRenderer {
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_keep_trailing_newline(true);
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        Self { env }
    }
}

impl Default for MinijinjaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for MinijinjaRenderer {
    fn render(&self, template: &str, scope: &Mapping) -> Result<String, RenderError> {
        self.env.render_str(template, scope).map_err(|err| {
            let message = err.to_string();
            if err.kind() == ErrorKind::UndefinedError {
                RenderError::Undefined(message)
            } else {
                RenderError::Invalid(message)
            }
        })
    }
}
