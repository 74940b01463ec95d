//! Minimal `TemplateRenderer` that only understands `{{ dotted.path }}`.

use serde_yaml::{Mapping, Value};

use crate::domain::config::scalar_text;
use crate::domain::{RenderError, TemplateRenderer};

/// Looks up a single dotted path in the scope. Anything else is `Invalid`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PathRenderer;

impl TemplateRenderer for PathRenderer {
    fn render(&self, template: &str, scope: &Mapping) -> Result<String, RenderError> {
        let expression = template
            .strip_prefix("{{")
            .and_then(|rest| rest.strip_suffix("}}"))
            .map(str::trim)
            .ok_or_else(|| RenderError::Invalid(template.to_string()))?;

        let is_path = !expression.is_empty()
            && expression.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.');
        if !is_path {
            return Err(RenderError::Invalid(expression.to_string()));
        }

        let mut current: Option<&Value> = None;
        for segment in expression.split('.') {
            let next = match current {
                None => scope.get(segment),
                Some(Value::Mapping(map)) => map.get(segment),
                Some(_) => None,
            };
            current = Some(next.ok_or_else(|| RenderError::Undefined(expression.to_string()))?);
        }

        current.map(scalar_text).ok_or_else(|| RenderError::Undefined(expression.to_string()))
    }
}
