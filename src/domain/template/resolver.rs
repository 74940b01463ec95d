//! Placeholder resolution over a configuration mapping.
//!
//! A pass visits every string leaf, renders each placeholder it can, and keeps the
//! exact text of those it cannot. Unresolved placeholders are expected: values such
//! as the current cycle only exist at run time, so callers resolve again once a
//! richer context is available.

use serde_yaml::{Mapping, Value};
use tracing::{debug, warn};

use super::context::ResolutionContext;
use super::placeholder::{Token, contains_template, tokenize};
use super::renderer::{RenderError, TemplateRenderer};
use crate::domain::config::ConfigMapping;

/// Default bound for `Resolver::resolve_until_stable`.
pub const DEFAULT_MAX_PASSES: usize = 8;

/// Outcome of repeated resolution passes.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolutionReport {
    pub mapping: ConfigMapping,
    /// Number of passes run, including the final pass that changed nothing.
    pub passes: usize,
    /// Dotted paths of leaves that still contain placeholders.
    pub unresolved: Vec<String>,
}

impl ResolutionReport {
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }
}

/// Resolves placeholders in a mapping against a `ResolutionContext`.
pub struct Resolver<'a, R: TemplateRenderer + ?Sized> {
    renderer: &'a R,
    context: &'a ResolutionContext,
}

impl<'a, R: TemplateRenderer + ?Sized> Resolver<'a, R> {
    pub fn new(renderer: &'a R, context: &'a ResolutionContext) -> Self {
        Self { renderer, context }
    }

    /// Run exactly one pass.
    ///
    /// Top-level keys are visited in insertion order. The lookup scope is rebuilt
    /// after a key changes, so later keys see values resolved earlier in the pass.
    pub fn resolve(&self, mapping: ConfigMapping) -> ConfigMapping {
        let mut map = mapping.into_mapping();
        let keys: Vec<Value> = map.keys().cloned().collect();
        let mut scope = self.context.scope(&map);

        for key in keys {
            let path = key_label(&key);
            let changed = match map.get_mut(&key) {
                Some(value) => self.resolve_value(value, &scope, &path),
                None => false,
            };
            if changed {
                scope = self.context.scope(&map);
            }
        }

        ConfigMapping::from(map)
    }

    /// Repeat passes until one changes nothing or `max_passes` have run.
    ///
    /// Rendered text is not marked as final: a value that renders to text holding
    /// `{{` (a `{{ '{{' }}` escape, `{% raw %}`, an environment value with braces)
    /// is evaluated again by the next pass. Use `resolve` for such values.
    pub fn resolve_until_stable(
        &self,
        mapping: ConfigMapping,
        max_passes: usize,
    ) -> ResolutionReport {
        let mut current = mapping;
        let mut passes = 0;

        while passes < max_passes {
            let next = self.resolve(current.clone());
            passes += 1;
            let stable = next == current;
            current = next;
            if stable {
                break;
            }
        }

        let unresolved = unresolved_paths(&current);
        debug!(passes, unresolved = unresolved.len(), "Resolution finished");
        ResolutionReport { mapping: current, passes, unresolved }
    }

    /// Resolve the placeholders of a single string.
    pub fn resolve_str(&self, text: &str, scope: &Mapping, path: &str) -> String {
        if !contains_template(text) {
            return text.to_string();
        }

        tokenize(text)
            .into_iter()
            .map(|token| match token {
                Token::Literal(literal) => literal.to_string(),
                Token::Placeholder(placeholder) => self.render_or_keep(placeholder, scope, path),
            })
            .collect()
    }

    fn resolve_value(&self, value: &mut Value, scope: &Mapping, path: &str) -> bool {
        match value {
            Value::String(text) => {
                let resolved = self.resolve_str(text, scope, path);
                if resolved == *text {
                    return false;
                }
                *text = resolved;
                true
            }
            Value::Mapping(map) => {
                let mut changed = false;
                for (key, child) in map.iter_mut() {
                    let child_path = format!("{}.{}", path, key_label(key));
                    changed |= self.resolve_value(child, scope, &child_path);
                }
                changed
            }
            Value::Sequence(items) => {
                let mut changed = false;
                for (index, child) in items.iter_mut().enumerate() {
                    let child_path = format!("{}.{}", path, index);
                    changed |= self.resolve_value(child, scope, &child_path);
                }
                changed
            }
            Value::Tagged(tagged) => self.resolve_value(&mut tagged.value, scope, path),
            Value::Null | Value::Bool(_) | Value::Number(_) => false,
        }
    }

    fn render_or_keep(&self, placeholder: &str, scope: &Mapping, path: &str) -> String {
        match self.renderer.render(placeholder, scope) {
            Ok(rendered) => rendered,
            Err(RenderError::Undefined(reason)) => {
                debug!(key = path, placeholder, %reason, "Placeholder left for a later pass");
                placeholder.to_string()
            }
            Err(RenderError::Invalid(reason)) => {
                warn!(key = path, placeholder, %reason, "Placeholder could not be evaluated");
                placeholder.to_string()
            }
        }
    }
}

/// Dotted paths of string leaves that still contain template markers.
pub fn unresolved_paths(mapping: &ConfigMapping) -> Vec<String> {
    let mut paths = Vec::new();
    for (key, value) in mapping.as_mapping() {
        collect_unresolved(value, key_label(key), &mut paths);
    }
    paths
}

fn collect_unresolved(value: &Value, path: String, paths: &mut Vec<String>) {
    match value {
        Value::String(text) if contains_template(text) => paths.push(path),
        Value::Mapping(map) => {
            for (key, child) in map {
                collect_unresolved(child, format!("{}.{}", path, key_label(key)), paths);
            }
        }
        Value::Sequence(items) => {
            for (index, child) in items.iter().enumerate() {
                collect_unresolved(child, format!("{}.{}", path, index), paths);
            }
        }
        Value::Tagged(tagged) => collect_unresolved(&tagged.value, path, paths),
        _ => {}
    }
}

fn key_label(key: &Value) -> String {
    match key {
        Value::String(text) => text.clone(),
        other => crate::domain::config::scalar_text(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::template::EnvVars;
    use crate::testing::PathRenderer;

    fn mapping(yaml: &str) -> ConfigMapping {
        ConfigMapping::from_yaml_str(yaml, "test.yaml").unwrap()
    }

    fn resolve_once(yaml: &str, context: &ResolutionContext) -> ConfigMapping {
        Resolver::new(&PathRenderer, context).resolve(mapping(yaml))
    }

    #[test]
    fn cross_key_reference_resolves() {
        let context = ResolutionContext::new(EnvVars::new());
        let resolved =
            resolve_once("updatethis: testpassed\ntestupdate: '{{ updatethis }}'\n", &context);

        assert_eq!(resolved.get_str("testupdate"), Some("testpassed"));
    }

    #[test]
    fn unresolved_placeholder_text_is_kept_byte_for_byte() {
        let context = ResolutionContext::new(EnvVars::new());
        let resolved = resolve_once(
            "experiment_dir: /home/x\ndatapath: '{{ experiment_dir }}/{{   cycle.current_cycle}}'\n",
            &context,
        );

        assert_eq!(resolved.get_str("datapath"), Some("/home/x/{{   cycle.current_cycle}}"));
    }

    #[test]
    fn later_keys_see_earlier_results_in_the_same_pass() {
        let context = ResolutionContext::new(EnvVars::new());
        let resolved = resolve_once("a: base\nb: '{{ a }}/b'\nc: '{{ b }}/c'\n", &context);

        assert_eq!(resolved.get_str("c"), Some("base/b/c"));
    }

    #[test]
    fn forward_references_need_another_pass() {
        let context = ResolutionContext::new(EnvVars::new());
        let renderer = PathRenderer;
        let resolver = Resolver::new(&renderer, &context);
        let source = mapping("c: '{{ b }}/c'\nb: '{{ a }}/b'\na: base\n");

        let once = resolver.resolve(source.clone());
        assert_eq!(once.get_str("c"), Some("{{ a }}/b/c"));

        let report = resolver.resolve_until_stable(source, DEFAULT_MAX_PASSES);
        assert_eq!(report.mapping.get_str("c"), Some("base/b/c"));
        assert!(report.is_complete());
        assert!(report.passes >= 2);
    }

    #[test]
    fn nested_mappings_and_sequences_are_walked() {
        let context = ResolutionContext::new(EnvVars::new());
        let resolved = resolve_once(
            "model: gfs\nfiles:\n  core: '{{ model }}.nc'\n  extra:\n    - '{{ model }}_a'\n    - 7\n",
            &context,
        );

        assert_eq!(resolved.get_path("files.core").value(), Some(&Value::from("gfs.nc")));
        assert_eq!(resolved.get_path("files.extra.0").value(), Some(&Value::from("gfs_a")));
    }

    #[test]
    fn report_lists_unresolved_paths() {
        let context = ResolutionContext::new(EnvVars::new());
        let renderer = PathRenderer;
        let report = Resolver::new(&renderer, &context).resolve_until_stable(
            mapping("a: '{{ cycle.x }}'\nb:\n  - ok\n  - '{{ missing }}'\n"),
            DEFAULT_MAX_PASSES,
        );

        assert_eq!(report.unresolved, vec!["a".to_string(), "b.1".to_string()]);
        assert_eq!(report.passes, 1);
    }

    #[test]
    fn runtime_namespace_completes_partial_values() {
        let renderer = PathRenderer;
        let load_time = ResolutionContext::new(EnvVars::new());
        let partial = Resolver::new(&renderer, &load_time).resolve(mapping(
            "experiment_dir: /home/x\ndatapath: '{{ experiment_dir }}/{{ cycle.current_cycle }}'\n",
        ));

        let cycle = mapping("current_cycle: '10102022'\n");
        let run_time = ResolutionContext::new(EnvVars::new()).with_namespace("cycle", cycle);
        let resolved = Resolver::new(&renderer, &run_time).resolve(partial);

        assert_eq!(resolved.get_str("datapath"), Some("/home/x/10102022"));
    }

    #[test]
    fn invalid_expressions_keep_their_text_and_do_not_stop_the_pass() {
        let context = ResolutionContext::new(EnvVars::new());
        let resolved = resolve_once("a: x\nc: '{{ 1 + }}/{{ a }}'\nd: '{{ a }}'\n", &context);

        assert_eq!(resolved.get_str("c"), Some("{{ 1 + }}/x"));
        assert_eq!(resolved.get_str("d"), Some("x"));
    }

    #[test]
    fn zero_pass_limit_leaves_mapping_untouched() {
        let context = ResolutionContext::new(EnvVars::new());
        let renderer = PathRenderer;
        let source = mapping("a: x\nb: '{{ a }}'\n");

        let report = Resolver::new(&renderer, &context).resolve_until_stable(source.clone(), 0);

        assert_eq!(report.passes, 0);
        assert_eq!(report.mapping, source);
    }
}
