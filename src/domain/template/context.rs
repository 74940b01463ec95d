use std::collections::BTreeMap;

use serde_yaml::{Mapping, Value};

use crate::domain::config::ConfigMapping;

/// Alias under which environment variables are addressable.
pub const ENV_ALIAS: &str = "env";
/// Alias under which the configuration being resolved is addressable.
pub const CONFIG_ALIAS: &str = "cfg";

/// Immutable snapshot of environment variables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvVars(BTreeMap<String, String>);

impl EnvVars {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable to the snapshot.
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.0.insert(name.into(), value.into());
        self
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn to_mapping(&self) -> Mapping {
        self.0
            .iter()
            .map(|(name, value)| (Value::String(name.clone()), Value::String(value.clone())))
            .collect()
    }
}

impl FromIterator<(String, String)> for EnvVars {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone)]
enum SourceValues {
    /// The mapping currently being resolved; its view changes as keys resolve.
    Primary,
    Fixed(Mapping),
}

#[derive(Debug, Clone)]
struct ContextSource {
    alias: Option<String>,
    /// Expose top-level keys directly, without an alias prefix.
    flatten: bool,
    values: SourceValues,
}

/// Lookup sources for one resolution pass, highest priority first.
///
/// The environment (`env`) always outranks everything else and the mapping being
/// resolved (bare keys, or `cfg.<key>`) always comes last. Namespaces and overlays
/// added with the builder methods sit in between, most recently added first.
#[derive(Debug, Clone)]
pub struct ResolutionContext {
    sources: Vec<ContextSource>,
}

impl ResolutionContext {
    pub fn new(env: EnvVars) -> Self {
        Self {
            sources: vec![
                ContextSource {
                    alias: Some(ENV_ALIAS.to_string()),
                    flatten: false,
                    values: SourceValues::Fixed(env.to_mapping()),
                },
                ContextSource {
                    alias: Some(CONFIG_ALIAS.to_string()),
                    flatten: true,
                    values: SourceValues::Primary,
                },
            ],
        }
    }

    /// Expose a mapping under a namespace alias, e.g. `cycle`.
    pub fn with_namespace(mut self, alias: impl Into<String>, values: ConfigMapping) -> Self {
        self.push_source(ContextSource {
            alias: Some(alias.into()),
            flatten: false,
            values: SourceValues::Fixed(values.into_mapping()),
        });
        self
    }

    /// Expose every top-level key of a mapping directly.
    ///
    /// Used for runtime assignments and for a second configuration source whose
    /// keys should be visible next to the primary ones.
    pub fn with_overlay(mut self, values: ConfigMapping) -> Self {
        self.push_source(ContextSource {
            alias: None,
            flatten: true,
            values: SourceValues::Fixed(values.into_mapping()),
        });
        self
    }

    /// Names visible to placeholders, excluding bare keys of the primary mapping.
    pub fn aliases(&self) -> Vec<&str> {
        self.sources.iter().filter_map(|source| source.alias.as_deref()).collect()
    }

    /// Build the merged lookup scope for a given state of the primary mapping.
    pub fn scope(&self, primary: &Mapping) -> Mapping {
        let mut scope = Mapping::new();

        for source in self.sources.iter().rev() {
            let values = match &source.values {
                SourceValues::Primary => primary,
                SourceValues::Fixed(values) => values,
            };
            if source.flatten {
                for (key, value) in values {
                    scope.insert(key.clone(), value.clone());
                }
            }
            if let Some(alias) = &source.alias {
                scope.insert(Value::String(alias.clone()), Value::Mapping(values.clone()));
            }
        }

        scope
    }

    fn push_source(&mut self, source: ContextSource) {
        // Index 0 is the environment; new sources go right below it.
        self.sources.insert(1, source);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn primary() -> Mapping {
        ConfigMapping::from_yaml_str("model: gfs\nenv: shadowed\n", "primary")
            .unwrap()
            .into_mapping()
    }

    #[test]
    fn primary_keys_are_bare_and_aliased() {
        let scope = ResolutionContext::new(EnvVars::new()).scope(&primary());

        assert_eq!(scope.get("model"), Some(&Value::from("gfs")));
        let cfg = scope.get(CONFIG_ALIAS).and_then(Value::as_mapping).unwrap();
        assert_eq!(cfg.get("model"), Some(&Value::from("gfs")));
    }

    #[test]
    fn environment_outranks_config_keys() {
        let env = EnvVars::new().with_var("HOME", "/home/user");
        let scope = ResolutionContext::new(env).scope(&primary());

        let env_scope = scope.get(ENV_ALIAS).and_then(Value::as_mapping).unwrap();
        assert_eq!(env_scope.get("HOME"), Some(&Value::from("/home/user")));
    }

    #[test]
    fn overlay_outranks_primary() {
        let overlay = ConfigMapping::from_yaml_str("model: gefs\n", "overlay").unwrap();
        let scope = ResolutionContext::new(EnvVars::new()).with_overlay(overlay).scope(&primary());

        assert_eq!(scope.get("model"), Some(&Value::from("gefs")));
    }

    #[test]
    fn namespaces_are_listed_between_env_and_cfg() {
        let context = ResolutionContext::new(EnvVars::new())
            .with_namespace("cycle", ConfigMapping::new())
            .with_namespace("member", ConfigMapping::new());

        assert_eq!(context.aliases(), vec!["env", "member", "cycle", "cfg"]);
    }
}
