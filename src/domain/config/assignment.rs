//! Runtime assignments given as `NAME.KEY=VALUE`.
//!
//! Assignments build namespaces that only exist at run time (the current cycle,
//! for instance) and are layered over the configuration during resolution.

use serde_yaml::{Mapping, Value};

use super::ConfigMapping;
use crate::domain::AppError;

/// Parse assignments into a nested mapping.
///
/// `cycle.current_cycle=2022101000` yields `{cycle: {current_cycle: 2022101000}}`.
/// Values are read as YAML scalars, so numbers and booleans keep their type.
/// Later assignments to the same path replace earlier ones.
pub fn parse_assignments<S: AsRef<str>>(assignments: &[S]) -> Result<ConfigMapping, AppError> {
    let mut root = Mapping::new();

    for raw in assignments {
        let raw = raw.as_ref();
        let Some((path, value)) = raw.split_once('=') else {
            return Err(AppError::InvalidAssignment(raw.to_string()));
        };

        let segments: Vec<&str> = path.trim().split('.').collect();
        if segments.iter().any(|segment| segment.is_empty()) {
            return Err(AppError::InvalidAssignment(raw.to_string()));
        }

        set_path(&mut root, &segments, parse_scalar(value));
    }

    Ok(ConfigMapping::from(root))
}

fn parse_scalar(raw: &str) -> Value {
    match serde_yaml::from_str::<Value>(raw) {
        Ok(value @ (Value::Bool(_) | Value::Number(_) | Value::String(_))) => value,
        _ => Value::String(raw.to_string()),
    }
}

fn set_path(map: &mut Mapping, segments: &[&str], value: Value) {
    let (head, rest) = match segments.split_first() {
        Some(split) => split,
        None => return,
    };
    let key = Value::String((*head).to_string());

    if rest.is_empty() {
        map.insert(key, value);
        return;
    }

    if !matches!(map.get(&key), Some(Value::Mapping(_))) {
        map.insert(key.clone(), Value::Mapping(Mapping::new()));
    }
    if let Some(Value::Mapping(child)) = map.get_mut(&key) {
        set_path(child, rest, value);
    }
}
