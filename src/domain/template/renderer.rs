use serde_yaml::Mapping;
use thiserror::Error;

/// Why a placeholder could not be evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenderError {
    /// The expression references a value that no context provides yet.
    #[error("undefined value: {0}")]
    Undefined(String),

    /// The expression is malformed or failed for another reason.
    #[error("invalid template: {0}")]
    Invalid(String),
}

/// Trait for evaluating one placeholder unit.
///
/// This abstraction keeps the template engine (e.g. minijinja) out of the domain
/// layer. Implementations must report references to absent values as
/// `RenderError::Undefined` rather than rendering them as empty text.
pub trait TemplateRenderer {
    /// Render `template` against the merged lookup scope.
    fn render(&self, template: &str, scope: &Mapping) -> Result<String, RenderError>;
}
