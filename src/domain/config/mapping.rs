use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

use crate::domain::AppError;

/// Ordered configuration mapping loaded from YAML.
///
/// Key order is the document order, so re-serializing a mapping reproduces the
/// layout of its source. Values may be strings, scalars, sequences, or nested
/// mappings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConfigMapping(Mapping);

/// Result of a dotted-path lookup.
///
/// `Missing` means no value exists at the path; a present `null` or empty string
/// is still `Found`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Lookup<'a> {
    Found(&'a Value),
    Missing,
}

impl<'a> Lookup<'a> {
    pub fn is_found(&self) -> bool {
        matches!(self, Lookup::Found(_))
    }

    pub fn value(self) -> Option<&'a Value> {
        match self {
            Lookup::Found(value) => Some(value),
            Lookup::Missing => None,
        }
    }
}

impl ConfigMapping {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a YAML document.
    ///
    /// `origin` names the document in error messages. An empty document yields an
    /// empty mapping; any other non-mapping root is rejected.
    pub fn from_yaml_str(content: &str, origin: &str) -> Result<Self, AppError> {
        if content.trim().is_empty() {
            return Ok(Self::new());
        }

        match serde_yaml::from_str::<Value>(content) {
            Ok(Value::Mapping(map)) => Ok(Self(map)),
            Ok(Value::Null) => Ok(Self::new()),
            Ok(_) => Err(AppError::ParseError {
                what: origin.to_string(),
                details: "YAML root is not a mapping".to_string(),
            }),
            Err(err) => {
                Err(AppError::ParseError { what: origin.to_string(), details: err.to_string() })
            }
        }
    }

    /// Serialize back to YAML, preserving key order.
    pub fn to_yaml_string(&self) -> Result<String, AppError> {
        serde_yaml::to_string(&self.0).map_err(|e| AppError::Serialization(e.to_string()))
    }

    /// Serialize to pretty-printed JSON, preserving key order.
    pub fn to_json_string(&self) -> Result<String, AppError> {
        serde_json::to_string_pretty(&self.0).map_err(|e| AppError::Serialization(e.to_string()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Top-level string keys in document order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().filter_map(Value::as_str)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    /// Look up a dotted path such as `fcst.length`.
    ///
    /// Numeric segments index into sequences.
    pub fn get_path(&self, path: &str) -> Lookup<'_> {
        let mut segments = path.split('.');
        let Some(first) = segments.next() else {
            return Lookup::Missing;
        };
        let Some(mut current) = self.0.get(first) else {
            return Lookup::Missing;
        };

        for segment in segments {
            let next = match current {
                Value::Mapping(map) => map.get(segment),
                Value::Sequence(items) => segment.parse::<usize>().ok().and_then(|i| items.get(i)),
                _ => None,
            };
            match next {
                Some(value) => current = value,
                None => return Lookup::Missing,
            }
        }

        Lookup::Found(current)
    }

    /// Insert or replace a top-level value. Existing keys keep their position.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(Value::String(key.into()), value.into())
    }

    /// Merge another mapping into this one.
    ///
    /// Shared keys take the other mapping's value in their original position; new
    /// keys are appended in the other mapping's order.
    pub fn merge(&mut self, other: ConfigMapping) {
        for (key, value) in other.0 {
            self.0.insert(key, value);
        }
    }

    pub fn as_mapping(&self) -> &Mapping {
        &self.0
    }

    pub fn into_mapping(self) -> Mapping {
        self.0
    }
}

impl From<Mapping> for ConfigMapping {
    fn from(map: Mapping) -> Self {
        Self(map)
    }
}

/// String form of a scalar YAML value, as it appears in generated scripts.
pub fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Null => String::new(),
        other => serde_yaml::to_string(other).map(|s| s.trim_end().to_string()).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXPERIMENT: &str = "\
experiment_dir: /home/myexpid
fcst:
  length: 72
  bndy_freq: 12
members:
  - gfs
  - gefs
empty: ''
nothing: null
";

    fn experiment() -> ConfigMapping {
        ConfigMapping::from_yaml_str(EXPERIMENT, "experiment.yaml").unwrap()
    }

    #[test]
    fn parse_preserves_document_order() {
        let mapping = experiment();
        let keys: Vec<&str> = mapping.keys().collect();

        assert_eq!(keys, vec!["experiment_dir", "fcst", "members", "empty", "nothing"]);
    }

    #[test]
    fn empty_document_is_empty_mapping() {
        let mapping = ConfigMapping::from_yaml_str("", "empty.yaml").unwrap();

        assert!(mapping.is_empty());
    }

    #[test]
    fn malformed_yaml_is_parse_error() {
        let result = ConfigMapping::from_yaml_str("key: [unclosed", "broken.yaml");

        match result {
            Err(AppError::ParseError { what, .. }) => assert_eq!(what, "broken.yaml"),
            other => panic!("expected ParseError, got {:?}", other),
        }
    }

    #[test]
    fn non_mapping_root_is_rejected() {
        let result = ConfigMapping::from_yaml_str("- a\n- b\n", "list.yaml");

        assert!(matches!(result, Err(AppError::ParseError { .. })));
    }

    #[test]
    fn dotted_lookup_walks_nested_mappings_and_sequences() {
        let mapping = experiment();

        assert_eq!(mapping.get_path("fcst.length").value().and_then(Value::as_i64), Some(72));
        assert_eq!(mapping.get_path("members.1").value(), Some(&Value::from("gefs")));
        assert_eq!(mapping.get_path("fcst.missing"), Lookup::Missing);
        assert_eq!(mapping.get_path("experiment_dir.deeper"), Lookup::Missing);
    }

    #[test]
    fn dotted_lookup_distinguishes_empty_from_missing() {
        let mapping = experiment();

        assert!(mapping.get_path("empty").is_found());
        assert_eq!(mapping.get_path("nothing"), Lookup::Found(&Value::Null));
        assert!(!mapping.get_path("absent").is_found());
    }

    #[test]
    fn merge_overrides_shared_keys_and_appends_new_ones() {
        let mut base = ConfigMapping::from_yaml_str("a: 1\nshared: base\nb: 2\n", "a").unwrap();
        let other = ConfigMapping::from_yaml_str("shared: other\nc: 3\nd: 4\n", "b").unwrap();

        base.merge(other);

        let keys: Vec<&str> = base.keys().collect();
        assert_eq!(keys, vec!["a", "shared", "b", "c", "d"]);
        assert_eq!(base.get_str("shared"), Some("other"));
    }

    #[test]
    fn yaml_output_keeps_key_order() {
        let yaml = experiment().to_yaml_string().unwrap();

        let dir = yaml.find("experiment_dir").unwrap();
        let fcst = yaml.find("fcst").unwrap();
        let members = yaml.find("members").unwrap();
        assert!(dir < fcst && fcst < members);
    }

    #[test]
    fn scalar_text_formats_script_values() {
        assert_eq!(scalar_text(&Value::from("acct")), "acct");
        assert_eq!(scalar_text(&Value::from(4u64)), "4");
        assert_eq!(scalar_text(&Value::Bool(true)), "true");
        assert_eq!(scalar_text(&Value::Null), "");
    }
}
